use std::net::SocketAddr;
use std::path::PathBuf;

use desap_core::config::settings::BackendConfig;
use desap_core::{Config, SourceKind};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default)]
    pub upload: UploadConfig,
    /// `[backend]`, `[search]` and `[source]` tables shared with the core.
    #[serde(flatten)]
    pub core: Config,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_upload_size_mb")]
    pub max_upload_size_mb: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_size_mb: default_max_upload_size_mb(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            upload: UploadConfig::default(),
            core: Config::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9090))
}

fn default_max_upload_size_mb() -> usize {
    10
}

impl ServerConfig {
    pub fn max_upload_bytes(&self) -> usize {
        self.upload.max_upload_size_mb.saturating_mul(1024 * 1024)
    }

    /// Reads `DESAP_WEB_CONFIG` (if set) and applies `DESAP_*` overrides.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    fn load_with(env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = match env("DESAP_WEB_CONFIG").map(PathBuf::from) {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)?;
                toml::from_str(&contents)?
            }
            None => ServerConfig::default(),
        };

        if let Some(addr) = env("DESAP_BIND_ADDR") {
            config.bind_addr = addr.parse()?;
        }

        if let Some(url) = env("DESAP_BACKEND_URL") {
            config.core.backend.base_url = url;
        }
        if let Some(val) = env("DESAP_BACKEND_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.core.backend.timeout_secs = secs,
                _ => tracing::warn!("Ignoring invalid DESAP_BACKEND_TIMEOUT_SECS={val}"),
            }
        }

        if let Some(val) = env("DESAP_PAGE_SIZE") {
            match val.parse::<usize>() {
                Ok(size) if size > 0 => config.core.search.page_size = size,
                _ => tracing::warn!("Ignoring invalid DESAP_PAGE_SIZE={val}"),
            }
        }

        if let Some(kind) = env("DESAP_SOURCE") {
            config.core.source.kind = match kind.to_lowercase().as_str() {
                "remote" => SourceKind::Remote,
                "local" => SourceKind::Local,
                other => anyhow::bail!("DESAP_SOURCE must be \"remote\" or \"local\", got {other:?}"),
            };
        }
        if let Some(path) = env("DESAP_DATASET") {
            config.core.source.dataset_path = Some(PathBuf::from(path));
        }

        if let Some(val) = env("DESAP_MAX_UPLOAD_SIZE_MB") {
            match val.parse::<usize>() {
                Ok(mb) if mb > 0 => config.upload.max_upload_size_mb = mb,
                _ => tracing::warn!("Ignoring invalid DESAP_MAX_UPLOAD_SIZE_MB={val}"),
            }
        }

        if config.core.search.page_size == 0 {
            tracing::warn!("search.page_size = 0 is invalid, using 10");
            config.core.search.page_size = desap_core::DEFAULT_PAGE_SIZE;
        }
        if config.core.backend.timeout_secs == 0 {
            let fallback = BackendConfig::default().timeout_secs;
            tracing::warn!("backend.timeout_secs = 0 is invalid, using {fallback}");
            config.core.backend.timeout_secs = fallback;
        }
        if config.upload.max_upload_size_mb == 0 {
            tracing::warn!("upload.max_upload_size_mb = 0 is invalid, using 10");
            config.upload.max_upload_size_mb = default_max_upload_size_mb();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let config = ServerConfig::load_with(env_of(&[])).unwrap();
        assert_eq!(config.bind_addr, default_bind_addr());
        assert_eq!(config.upload.max_upload_size_mb, 10);
        assert_eq!(config.core.search.page_size, 10);
        assert_eq!(config.core.source.kind, SourceKind::Remote);
    }

    #[test]
    fn reads_flattened_core_tables_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("desap-web.toml");
        fs::write(
            &path,
            r#"
bind_addr = "0.0.0.0:8000"

[upload]
max_upload_size_mb = 4

[backend]
base_url = "https://api.example.org/v1"

[source]
kind = "local"
dataset_path = "pessoas.json"
"#,
        )
        .unwrap();

        let path_str = path.to_string_lossy().to_string();
        let config =
            ServerConfig::load_with(env_of(&[("DESAP_WEB_CONFIG", path_str.as_str())])).unwrap();

        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.max_upload_bytes(), 4 * 1024 * 1024);
        assert_eq!(config.core.backend.base_url, "https://api.example.org/v1");
        assert_eq!(config.core.source.kind, SourceKind::Local);
        assert_eq!(config.core.search.page_size, 10);
    }

    #[test]
    fn env_overrides_win() {
        let config = ServerConfig::load_with(env_of(&[
            ("DESAP_BIND_ADDR", "127.0.0.1:7000"),
            ("DESAP_BACKEND_URL", "http://backend:8080"),
            ("DESAP_PAGE_SIZE", "25"),
            ("DESAP_SOURCE", "LOCAL"),
            ("DESAP_DATASET", "/srv/pessoas.json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 7000);
        assert_eq!(config.core.backend.base_url, "http://backend:8080");
        assert_eq!(config.core.search.page_size, 25);
        assert_eq!(config.core.source.kind, SourceKind::Local);
        assert_eq!(
            config.core.source.dataset_path,
            Some(PathBuf::from("/srv/pessoas.json"))
        );
    }

    #[test]
    fn invalid_numeric_overrides_are_ignored() {
        let config = ServerConfig::load_with(env_of(&[
            ("DESAP_PAGE_SIZE", "0"),
            ("DESAP_BACKEND_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap();
        assert_eq!(config.core.search.page_size, 10);
        assert_eq!(config.core.backend.timeout_secs, 15);
    }

    #[test]
    fn zero_limits_fall_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("desap-web.toml");
        fs::write(
            &path,
            r#"
[upload]
max_upload_size_mb = 0

[backend]
timeout_secs = 0

[search]
page_size = 0
"#,
        )
        .unwrap();

        let path_str = path.to_string_lossy().to_string();
        let config =
            ServerConfig::load_with(env_of(&[("DESAP_WEB_CONFIG", path_str.as_str())])).unwrap();

        assert_eq!(config.core.backend.timeout_secs, 15);
        assert_eq!(config.upload.max_upload_size_mb, 10);
        assert_eq!(config.core.search.page_size, 10);
    }

    #[test]
    fn invalid_upload_override_keeps_file_value() {
        for bad in ["lots", "0"] {
            let config = ServerConfig::load_with(env_of(&[
                ("DESAP_MAX_UPLOAD_SIZE_MB", bad),
                ("DESAP_BACKEND_TIMEOUT_SECS", "0"),
            ]))
            .unwrap();
            assert_eq!(config.upload.max_upload_size_mb, 10);
            assert_eq!(config.core.backend.timeout_secs, 15);
        }
    }

    #[test]
    fn unknown_source_kind_is_an_error() {
        let result = ServerConfig::load_with(env_of(&[("DESAP_SOURCE", "ftp")]));
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result =
            ServerConfig::load_with(env_of(&[("DESAP_WEB_CONFIG", "/nonexistent/desap.toml")]));
        assert!(result.is_err());
    }
}
