mod cors;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use com360_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route(
            "/api/access/scope",
            get(handlers::access::resolve_scope_handler),
        )
        .route(
            "/api/access/employees",
            get(handlers::access::list_visible_employees_handler),
        )
        .layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_actor,
        ));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
