use std::sync::Arc;

use crate::config::Config;
use crate::roles::RoleGenerator;
use crate::screening::workflow::ScreeningWorkflow;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; each screening run builds its own `ApplicationState`.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<ScreeningWorkflow>,
    /// Supplies a role when an upload does not name one.
    pub role_generator: Arc<dyn RoleGenerator>,
    pub config: Config,
}
