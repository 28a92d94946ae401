use async_trait::async_trait;

use com360_core::{AppResult, EmpId, OrgId};
use com360_domain::EmployeeNode;

/// Repository port for the tenant employee directory.
#[async_trait]
pub trait EmployeeDirectoryRepository: Send + Sync {
    /// Finds one employee in an organization, whatever their status.
    async fn find_employee(&self, org_id: OrgId, emp_id: &EmpId)
    -> AppResult<Option<EmployeeNode>>;

    /// Lists every employee whose direct superior is one of `superior_ids`.
    ///
    /// Implementations answer the whole batch in a single round trip.
    async fn list_direct_reports(
        &self,
        org_id: OrgId,
        superior_ids: &[EmpId],
    ) -> AppResult<Vec<EmployeeNode>>;

    /// Lists the organization's directory ordered by employee id.
    async fn list_employees(&self, org_id: OrgId) -> AppResult<Vec<EmployeeNode>>;
}
