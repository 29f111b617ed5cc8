use torrentstream_core::{Config, ConfigSummary, StreamService};

/// Shared application state
pub struct AppState {
    config: Config,
    service: StreamService,
}

impl AppState {
    pub fn new(config: Config, service: StreamService) -> Self {
        Self { config, service }
    }

    pub fn config_summary(&self) -> ConfigSummary {
        ConfigSummary::from(&self.config)
    }

    pub fn service(&self) -> &StreamService {
        &self.service
    }
}
