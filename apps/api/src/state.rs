use std::sync::Arc;

use com360_application::{EmployeeDirectoryRepository, ScopeResolutionService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub scope_resolution_service: ScopeResolutionService,
    pub employee_directory: Arc<dyn EmployeeDirectoryRepository>,
    pub postgres_pool: Option<PgPool>,
    pub session_cookie_name: Arc<str>,
}
