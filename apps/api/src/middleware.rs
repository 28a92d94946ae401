use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use crate::error::ApiResult;
use crate::state::AppState;

/// Authenticates the session cookie and stores the actor in request extensions.
pub async fn require_actor(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = jar
        .get(&state.session_cookie_name)
        .map(|cookie| cookie.value());
    let actor = state.scope_resolution_service.authenticate(token)?;

    request.extensions_mut().insert(actor);
    Ok(next.run(request).await)
}
