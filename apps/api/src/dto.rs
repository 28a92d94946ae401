use com360_application::ScopeResolution;
use com360_domain::{EmployeeNode, ScopeLevel};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    pub message: String,
}

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub postgres: HealthDependencyStatus,
}

/// One runtime dependency health status.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-dependency-status.ts"
)]
pub struct HealthDependencyStatus {
    pub status: &'static str,
    pub detail: Option<String>,
}

/// Query parameters naming the menu feature and self-visibility policy.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/scope-query.ts"
)]
pub struct ScopeQuery {
    pub menu_id: i64,
    pub submenu_id: Option<i64>,
    pub self_policy: String,
}

/// Resolved scope for the authenticated caller.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/scope-response.ts"
)]
pub struct ScopeResponse {
    pub org_id: i64,
    pub emp_id: String,
    pub level: &'static str,
    pub filter_kind: &'static str,
    pub allowed_emp_ids: Option<Vec<String>>,
    pub excluded_emp_id: Option<String>,
}

impl From<&ScopeResolution> for ScopeResponse {
    fn from(value: &ScopeResolution) -> Self {
        Self {
            org_id: value.actor.org_id().as_i64(),
            emp_id: value.actor.emp_id().as_str().to_owned(),
            level: value.level.as_str(),
            filter_kind: value.filter.kind(),
            allowed_emp_ids: value.allowed_emp_ids().map(|owners| {
                owners
                    .iter()
                    .map(|emp_id| emp_id.as_str().to_owned())
                    .collect()
            }),
            excluded_emp_id: value
                .filter
                .excluded_emp_id()
                .map(|emp_id| emp_id.as_str().to_owned()),
        }
    }
}

/// Employee directory entry visible to the caller.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-response.ts"
)]
pub struct EmployeeResponse {
    pub emp_id: String,
    pub superior_emp_id: Option<String>,
    pub status: &'static str,
}

impl From<EmployeeNode> for EmployeeResponse {
    fn from(value: EmployeeNode) -> Self {
        Self {
            status: value.status.as_str(),
            emp_id: value.emp_id.into(),
            superior_emp_id: value.superior_emp_id.map(String::from),
        }
    }
}

/// Employee directory filtered through the caller's resolved scope.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/visible-employees-response.ts"
)]
pub struct VisibleEmployeesResponse {
    pub level: &'static str,
    pub employees: Vec<EmployeeResponse>,
}

impl VisibleEmployeesResponse {
    pub fn new(level: ScopeLevel, employees: Vec<EmployeeResponse>) -> Self {
        Self {
            level: level.as_str(),
            employees,
        }
    }
}
