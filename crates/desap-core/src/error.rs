//! Error types for `desap-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message via [`CoreError::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}")]
    Status {
        status: u16,
        /// The `message` field of the backend's error body, if any.
        message: Option<String>,
    },

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input rejected at the boundary (e.g. an empty info submission).
    #[error("invalid input: {0}")]
    Validation(String),

    /// A dataset or backend payload could not be decoded.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// The HTTP status this error corresponds to, if it came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Status { status, .. } => Some(*status),
            CoreError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Message suitable for a toast or error page.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Status { status, message } => match status {
                400 => "Dados inválidos. Verifique as informações.".to_string(),
                401 => "Não autorizado. Faça login novamente.".to_string(),
                403 => "Acesso negado.".to_string(),
                404 => "Recurso não encontrado.".to_string(),
                500 => "Erro interno do servidor. Tente novamente.".to_string(),
                _ => message
                    .clone()
                    .unwrap_or_else(|| "Erro ao se comunicar com o servidor".to_string()),
            },
            CoreError::NotFound(_) => "Recurso não encontrado.".to_string(),
            CoreError::Transport(_) => "Erro ao se comunicar com o servidor".to_string(),
            CoreError::Validation(msg) => msg.clone(),
            CoreError::Dataset(_) | CoreError::ConfigParse(_) | CoreError::Io(_) => {
                "Erro desconhecido".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return CoreError::Status {
                status: status.as_u16(),
                message: None,
            };
        }
        if e.is_decode() {
            return CoreError::Dataset(e.to_string());
        }
        CoreError::Transport(e.to_string())
    }
}

/// Convenience alias used throughout `desap-core`.
pub type CoreResult<T> = Result<T, CoreError>;
