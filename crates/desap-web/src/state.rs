use std::sync::Arc;

use desap_core::DataSource;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Remote backend or local dataset, chosen at startup.
    pub source: Arc<dyn DataSource>,
}

impl AppState {
    pub fn page_size(&self) -> usize {
        self.config.core.search.page_size
    }
}
