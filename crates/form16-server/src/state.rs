//! Shared application state.

use std::sync::Arc;

use form16_core::Form16Config;

/// Read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Form16Config>,
}

impl AppState {
    pub fn new(config: Form16Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Form16Config::default())
    }
}
