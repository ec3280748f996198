//! Application State

use std::sync::Arc;

use agrisight_core::AdvisoryProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Advisory data source behind the mock endpoints
    pub advisor: Arc<dyn AdvisoryProvider>,
}
