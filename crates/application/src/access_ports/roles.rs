use async_trait::async_trait;

use com360_core::{AppResult, EmpId, OrgId};
use com360_domain::RoleGrant;

/// Repository port for role assignments and role admin metadata.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists the roles assigned to an employee within an organization.
    async fn list_role_grants(&self, org_id: OrgId, emp_id: &EmpId) -> AppResult<Vec<RoleGrant>>;
}
