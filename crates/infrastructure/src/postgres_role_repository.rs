use async_trait::async_trait;

use com360_application::RoleRepository;
use com360_core::{AppResult, EmpId, OrgId};
use com360_domain::{RoleGrant, RoleId};

use sqlx::{FromRow, PgPool};

use crate::transient_retry::retry_transient;

/// PostgreSQL-backed repository for employee role assignments.
#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleGrantRow {
    role_id: i64,
    is_admin: bool,
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn list_role_grants(&self, org_id: OrgId, emp_id: &EmpId) -> AppResult<Vec<RoleGrant>> {
        let pool = &self.pool;
        let rows = retry_transient("load role grants", move || {
            sqlx::query_as::<_, RoleGrantRow>(
                r#"
                SELECT assignments.role_id, roles.is_admin
                FROM employee_role_assignments AS assignments
                INNER JOIN organization_roles AS roles
                    ON roles.org_id = assignments.org_id
                    AND roles.role_id = assignments.role_id
                WHERE assignments.org_id = $1
                    AND assignments.emp_id = $2
                ORDER BY assignments.role_id
                "#,
            )
            .bind(org_id.as_i64())
            .bind(emp_id.as_str())
            .fetch_all(pool)
        })
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RoleGrant {
                role_id: RoleId::new(row.role_id),
                is_admin: row.is_admin,
            })
            .collect())
    }
}
