use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;

use com360_core::{Actor, AppError, AppResult, EmpId, OrgId};
use com360_domain::{
    EmployeeNode, EmployeeStatus, MenuId, MenuKey, MenuPermission, RoleGrant, RoleId, ScopeLevel,
    SubmenuId,
};

use crate::{
    EmployeeDirectoryRepository, MenuPermissionRepository, RoleRepository, SessionTokenVerifier,
};

fn test_emp_id(value: &str) -> EmpId {
    match EmpId::new(value) {
        Ok(emp_id) => emp_id,
        Err(error) => panic!("invalid test employee id '{value}': {error}"),
    }
}

pub(crate) fn emp(value: &str) -> AppResult<EmpId> {
    EmpId::new(value)
}

pub(crate) fn emp_set(values: &[&str]) -> AppResult<BTreeSet<EmpId>> {
    values.iter().map(|value| EmpId::new(*value)).collect()
}

pub(crate) fn actor(org_id: i64, emp_id: &str) -> Actor {
    Actor::new(OrgId::new(org_id), test_emp_id(emp_id))
}

pub(crate) fn grant(role_id: i64) -> RoleGrant {
    RoleGrant {
        role_id: RoleId::new(role_id),
        is_admin: false,
    }
}

#[derive(Default)]
pub(crate) struct FakeTokenVerifier {
    tokens: HashMap<String, Actor>,
}

impl FakeTokenVerifier {
    pub(crate) fn with_token(mut self, token: &str, actor: Actor) -> Self {
        self.tokens.insert(token.to_owned(), actor);
        self
    }
}

impl SessionTokenVerifier for FakeTokenVerifier {
    fn verify(&self, token: &str) -> AppResult<Actor> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("invalid session token".to_owned()))
    }
}

#[derive(Default)]
pub(crate) struct FakeRoleRepository {
    grants: HashMap<(OrgId, EmpId), Vec<RoleGrant>>,
}

impl FakeRoleRepository {
    pub(crate) fn with_role(
        mut self,
        org_id: OrgId,
        emp_id: &str,
        role_id: i64,
        is_admin: bool,
    ) -> Self {
        self.grants
            .entry((org_id, test_emp_id(emp_id)))
            .or_default()
            .push(RoleGrant {
                role_id: RoleId::new(role_id),
                is_admin,
            });
        self
    }
}

#[async_trait]
impl RoleRepository for FakeRoleRepository {
    async fn list_role_grants(&self, org_id: OrgId, emp_id: &EmpId) -> AppResult<Vec<RoleGrant>> {
        Ok(self
            .grants
            .get(&(org_id, emp_id.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub(crate) struct FakeMenuPermissionRepository {
    rows: Vec<(OrgId, MenuPermission)>,
    calls: Mutex<usize>,
}

impl FakeMenuPermissionRepository {
    pub(crate) fn with_row(
        mut self,
        org_id: OrgId,
        role_id: i64,
        menu_id: i64,
        submenu_id: Option<i64>,
        level: ScopeLevel,
    ) -> Self {
        self.rows.push((
            org_id,
            MenuPermission {
                role_id: RoleId::new(role_id),
                menu_id: MenuId::new(menu_id),
                submenu_id: submenu_id.map(SubmenuId::new),
                level,
            },
        ));
        self
    }

    pub(crate) async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl MenuPermissionRepository for FakeMenuPermissionRepository {
    async fn list_menu_permissions(
        &self,
        org_id: OrgId,
        role_ids: &[RoleId],
        key: MenuKey,
    ) -> AppResult<Vec<MenuPermission>> {
        *self.calls.lock().await += 1;

        Ok(self
            .rows
            .iter()
            .filter(|(row_org_id, row)| {
                *row_org_id == org_id
                    && role_ids.contains(&row.role_id)
                    && row.menu_id == key.menu_id()
                    && (row.submenu_id.is_none() || row.submenu_id == key.submenu_id())
            })
            .map(|(_, row)| *row)
            .collect())
    }
}

#[derive(Default)]
pub(crate) struct FakeEmployeeDirectory {
    employees: Vec<EmployeeNode>,
    report_queries: Mutex<usize>,
}

impl FakeEmployeeDirectory {
    pub(crate) fn with_employee(
        mut self,
        org_id: OrgId,
        emp_id: &str,
        superior_emp_id: Option<&str>,
        status: EmployeeStatus,
    ) -> Self {
        self.employees.push(EmployeeNode {
            emp_id: test_emp_id(emp_id),
            org_id,
            superior_emp_id: superior_emp_id.map(test_emp_id),
            status,
        });
        self
    }

    pub(crate) async fn report_query_count(&self) -> usize {
        *self.report_queries.lock().await
    }
}

#[async_trait]
impl EmployeeDirectoryRepository for FakeEmployeeDirectory {
    async fn find_employee(
        &self,
        org_id: OrgId,
        emp_id: &EmpId,
    ) -> AppResult<Option<EmployeeNode>> {
        Ok(self
            .employees
            .iter()
            .find(|employee| employee.org_id == org_id && &employee.emp_id == emp_id)
            .cloned())
    }

    async fn list_direct_reports(
        &self,
        org_id: OrgId,
        superior_ids: &[EmpId],
    ) -> AppResult<Vec<EmployeeNode>> {
        *self.report_queries.lock().await += 1;

        Ok(self
            .employees
            .iter()
            .filter(|employee| {
                employee.org_id == org_id
                    && employee
                        .superior_emp_id
                        .as_ref()
                        .is_some_and(|superior| superior_ids.contains(superior))
            })
            .cloned()
            .collect())
    }

    async fn list_employees(&self, org_id: OrgId) -> AppResult<Vec<EmployeeNode>> {
        let mut employees: Vec<EmployeeNode> = self
            .employees
            .iter()
            .filter(|employee| employee.org_id == org_id)
            .cloned()
            .collect();
        employees.sort_by(|left, right| left.emp_id.cmp(&right.emp_id));
        Ok(employees)
    }
}
