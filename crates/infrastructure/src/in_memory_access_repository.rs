use async_trait::async_trait;
use tokio::sync::RwLock;

use com360_application::{
    EmployeeDirectoryRepository, MenuPermissionRepository, RoleRepository,
};
use com360_core::{AppError, AppResult, EmpId, OrgId};
use com360_domain::{EmployeeNode, MenuKey, MenuPermission, RoleGrant, RoleId};

/// In-memory store for role assignments, menu permissions and the directory.
#[derive(Debug, Default)]
pub struct InMemoryAccessRepository {
    role_grants: RwLock<Vec<(OrgId, EmpId, RoleGrant)>>,
    menu_permissions: RwLock<Vec<(OrgId, MenuPermission)>>,
    employees: RwLock<Vec<EmployeeNode>>,
}

impl InMemoryAccessRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a role to an employee, replacing an earlier grant of the same role.
    pub async fn assign_role(&self, org_id: OrgId, emp_id: EmpId, grant: RoleGrant) {
        let mut role_grants = self.role_grants.write().await;
        role_grants.retain(|(stored_org_id, stored_emp_id, stored)| {
            !(stored_org_id == &org_id
                && stored_emp_id == &emp_id
                && stored.role_id == grant.role_id)
        });
        role_grants.push((org_id, emp_id, grant));
    }

    /// Stores a menu permission row, replacing the row with the same key.
    pub async fn save_menu_permission(&self, org_id: OrgId, permission: MenuPermission) {
        let mut menu_permissions = self.menu_permissions.write().await;
        menu_permissions.retain(|(stored_org_id, stored)| {
            !(stored_org_id == &org_id
                && stored.role_id == permission.role_id
                && stored.menu_id == permission.menu_id
                && stored.submenu_id == permission.submenu_id)
        });
        menu_permissions.push((org_id, permission));
    }

    /// Inserts an employee. Ids are unique per organization.
    pub async fn save_employee(&self, employee: EmployeeNode) -> AppResult<()> {
        let mut employees = self.employees.write().await;
        if employees
            .iter()
            .any(|stored| stored.org_id == employee.org_id && stored.emp_id == employee.emp_id)
        {
            return Err(AppError::Conflict(format!(
                "employee '{}' already exists in organization '{}'",
                employee.emp_id, employee.org_id
            )));
        }

        employees.push(employee);
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for InMemoryAccessRepository {
    async fn list_role_grants(&self, org_id: OrgId, emp_id: &EmpId) -> AppResult<Vec<RoleGrant>> {
        let role_grants = self.role_grants.read().await;

        let mut grants: Vec<RoleGrant> = role_grants
            .iter()
            .filter(|(stored_org_id, stored_emp_id, _)| {
                stored_org_id == &org_id && stored_emp_id == emp_id
            })
            .map(|(_, _, grant)| *grant)
            .collect();
        grants.sort_by_key(|grant| grant.role_id);

        Ok(grants)
    }
}

#[async_trait]
impl MenuPermissionRepository for InMemoryAccessRepository {
    async fn list_menu_permissions(
        &self,
        org_id: OrgId,
        role_ids: &[RoleId],
        key: MenuKey,
    ) -> AppResult<Vec<MenuPermission>> {
        let menu_permissions = self.menu_permissions.read().await;

        Ok(menu_permissions
            .iter()
            .filter_map(|(stored_org_id, permission)| {
                (stored_org_id == &org_id
                    && role_ids.contains(&permission.role_id)
                    && permission.menu_id == key.menu_id()
                    && (permission.submenu_id.is_none()
                        || permission.submenu_id == key.submenu_id()))
                .then_some(*permission)
            })
            .collect())
    }
}

#[async_trait]
impl EmployeeDirectoryRepository for InMemoryAccessRepository {
    async fn find_employee(
        &self,
        org_id: OrgId,
        emp_id: &EmpId,
    ) -> AppResult<Option<EmployeeNode>> {
        Ok(self
            .employees
            .read()
            .await
            .iter()
            .find(|employee| employee.org_id == org_id && &employee.emp_id == emp_id)
            .cloned())
    }

    async fn list_direct_reports(
        &self,
        org_id: OrgId,
        superior_ids: &[EmpId],
    ) -> AppResult<Vec<EmployeeNode>> {
        let employees = self.employees.read().await;

        let mut reports: Vec<EmployeeNode> = employees
            .iter()
            .filter(|employee| {
                employee.org_id == org_id
                    && employee
                        .superior_emp_id
                        .as_ref()
                        .is_some_and(|superior| superior_ids.contains(superior))
            })
            .cloned()
            .collect();
        reports.sort_by(|left, right| left.emp_id.cmp(&right.emp_id));

        Ok(reports)
    }

    async fn list_employees(&self, org_id: OrgId) -> AppResult<Vec<EmployeeNode>> {
        let employees = self.employees.read().await;

        let mut values: Vec<EmployeeNode> = employees
            .iter()
            .filter(|employee| employee.org_id == org_id)
            .cloned()
            .collect();
        values.sort_by(|left, right| left.emp_id.cmp(&right.emp_id));

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use com360_application::{EmployeeDirectoryRepository, MenuPermissionRepository};
    use com360_core::{AppError, AppResult, EmpId, OrgId};
    use com360_domain::{
        EmployeeNode, EmployeeStatus, MenuId, MenuKey, MenuPermission, RoleId, ScopeLevel,
        SubmenuId,
    };

    use super::InMemoryAccessRepository;

    fn employee(org_id: i64, emp_id: &str, superior: Option<&str>) -> AppResult<EmployeeNode> {
        Ok(EmployeeNode {
            emp_id: EmpId::new(emp_id)?,
            org_id: OrgId::new(org_id),
            superior_emp_id: superior.map(EmpId::new).transpose()?,
            status: EmployeeStatus::Active,
        })
    }

    #[tokio::test]
    async fn duplicate_employee_is_a_conflict() -> AppResult<()> {
        let repository = InMemoryAccessRepository::new();
        repository.save_employee(employee(100, "E1", None)?).await?;

        let duplicate = repository.save_employee(employee(100, "E1", None)?).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        repository.save_employee(employee(200, "E1", None)?).await?;
        Ok(())
    }

    #[tokio::test]
    async fn direct_reports_stay_within_tenant() -> AppResult<()> {
        let repository = InMemoryAccessRepository::new();
        repository.save_employee(employee(100, "E1", None)?).await?;
        repository.save_employee(employee(100, "E2", Some("E1"))?).await?;
        repository.save_employee(employee(200, "E3", Some("E1"))?).await?;

        let reports = repository
            .list_direct_reports(OrgId::new(100), &[EmpId::new("E1")?])
            .await?;

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].emp_id.as_str(), "E2");
        Ok(())
    }

    #[tokio::test]
    async fn saving_same_permission_key_replaces_row() -> AppResult<()> {
        let repository = InMemoryAccessRepository::new();
        let org_id = OrgId::new(100);
        for level in [ScopeLevel::Individual, ScopeLevel::Team] {
            repository
                .save_menu_permission(
                    org_id,
                    MenuPermission {
                        role_id: RoleId::new(1),
                        menu_id: MenuId::new(11),
                        submenu_id: Some(SubmenuId::new(2)),
                        level,
                    },
                )
                .await;
        }

        let rows = repository
            .list_menu_permissions(
                org_id,
                &[RoleId::new(1)],
                MenuKey::submenu(MenuId::new(11), SubmenuId::new(2)),
            )
            .await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].level, ScopeLevel::Team);
        Ok(())
    }
}
