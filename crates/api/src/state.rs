use std::sync::Arc;

use crate::config::ServerConfig;
use crate::controller::ApplicationController;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Response formatting shared by every route.
    pub controller: ApplicationController,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let controller = ApplicationController::new(&config.service_name)
            .with_default_page_size(config.default_page_size);
        Self {
            config: Arc::new(config),
            controller,
        }
    }
}
