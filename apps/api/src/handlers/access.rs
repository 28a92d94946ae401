use std::str::FromStr;

use axum::Json;
use axum::extract::{Extension, Query, State};
use com360_application::ScopeResolution;
use com360_core::{Actor, AppError};
use com360_domain::{MenuId, MenuKey, SelfPolicy, SubmenuId};

use crate::dto::{EmployeeResponse, ScopeQuery, ScopeResponse, VisibleEmployeesResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn resolve_scope_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<ScopeResponse>> {
    let resolution = resolve_for_query(&state, &actor, &query).await?;
    Ok(Json(ScopeResponse::from(&resolution)))
}

pub async fn list_visible_employees_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<ScopeQuery>,
) -> ApiResult<Json<VisibleEmployeesResponse>> {
    let resolution = resolve_for_query(&state, &actor, &query).await?;
    if resolution.filter.is_deny() {
        return Ok(Json(VisibleEmployeesResponse::new(
            resolution.level,
            Vec::new(),
        )));
    }

    let employees = state
        .employee_directory
        .list_employees(actor.org_id())
        .await?
        .into_iter()
        .filter(|employee| resolution.filter.permits(&employee.emp_id))
        .map(EmployeeResponse::from)
        .collect();

    Ok(Json(VisibleEmployeesResponse::new(
        resolution.level,
        employees,
    )))
}

async fn resolve_for_query(
    state: &AppState,
    actor: &Actor,
    query: &ScopeQuery,
) -> Result<ScopeResolution, AppError> {
    let key = MenuKey::from_parts(
        MenuId::new(query.menu_id),
        query.submenu_id.map(SubmenuId::new),
    );
    let policy = SelfPolicy::from_str(query.self_policy.trim())?;

    state
        .scope_resolution_service
        .resolve_scope_for_actor(actor, key, policy)
        .await
}
