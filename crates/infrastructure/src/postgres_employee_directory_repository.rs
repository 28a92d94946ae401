use async_trait::async_trait;

use com360_application::EmployeeDirectoryRepository;
use com360_core::{AppError, AppResult, EmpId, OrgId};
use com360_domain::{EmployeeNode, EmployeeStatus};

use sqlx::{FromRow, PgPool};

use crate::transient_retry::retry_transient;

/// PostgreSQL-backed employee directory with superior links.
#[derive(Clone)]
pub struct PostgresEmployeeDirectoryRepository {
    pool: PgPool,
}

impl PostgresEmployeeDirectoryRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    org_id: i64,
    emp_id: String,
    superior_emp_id: Option<String>,
    status: String,
}

impl TryFrom<EmployeeRow> for EmployeeNode {
    type Error = AppError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let emp_id = EmpId::new(row.emp_id).map_err(|_| {
            AppError::DataIntegrity(format!(
                "organization '{}' has an employee with a blank id",
                row.org_id
            ))
        })?;
        let superior_emp_id = row
            .superior_emp_id
            .filter(|value| !value.trim().is_empty())
            .map(EmpId::new)
            .transpose()?;

        Ok(Self {
            emp_id,
            org_id: OrgId::new(row.org_id),
            superior_emp_id,
            status: EmployeeStatus::from_storage(row.status.as_str()),
        })
    }
}

fn into_nodes(rows: Vec<EmployeeRow>) -> AppResult<Vec<EmployeeNode>> {
    rows.into_iter().map(EmployeeNode::try_from).collect()
}

#[async_trait]
impl EmployeeDirectoryRepository for PostgresEmployeeDirectoryRepository {
    async fn find_employee(
        &self,
        org_id: OrgId,
        emp_id: &EmpId,
    ) -> AppResult<Option<EmployeeNode>> {
        let pool = &self.pool;
        let row = retry_transient("load employee", move || {
            sqlx::query_as::<_, EmployeeRow>(
                r#"
                SELECT org_id, emp_id, superior_emp_id, status
                FROM employees
                WHERE org_id = $1
                    AND emp_id = $2
                "#,
            )
            .bind(org_id.as_i64())
            .bind(emp_id.as_str())
            .fetch_optional(pool)
        })
        .await?;

        row.map(EmployeeNode::try_from).transpose()
    }

    async fn list_direct_reports(
        &self,
        org_id: OrgId,
        superior_ids: &[EmpId],
    ) -> AppResult<Vec<EmployeeNode>> {
        if superior_ids.is_empty() {
            return Ok(Vec::new());
        }

        let pool = &self.pool;
        let superior_ids: Vec<String> = superior_ids
            .iter()
            .map(|value| value.as_str().to_owned())
            .collect();
        let superior_ids = superior_ids.as_slice();

        let rows = retry_transient("load direct reports", move || {
            sqlx::query_as::<_, EmployeeRow>(
                r#"
                SELECT org_id, emp_id, superior_emp_id, status
                FROM employees
                WHERE org_id = $1
                    AND superior_emp_id = ANY($2)
                ORDER BY emp_id
                "#,
            )
            .bind(org_id.as_i64())
            .bind(superior_ids)
            .fetch_all(pool)
        })
        .await?;

        into_nodes(rows)
    }

    async fn list_employees(&self, org_id: OrgId) -> AppResult<Vec<EmployeeNode>> {
        let pool = &self.pool;
        let rows = retry_transient("list employees", move || {
            sqlx::query_as::<_, EmployeeRow>(
                r#"
                SELECT org_id, emp_id, superior_emp_id, status
                FROM employees
                WHERE org_id = $1
                ORDER BY emp_id
                "#,
            )
            .bind(org_id.as_i64())
            .fetch_all(pool)
        })
        .await?;

        into_nodes(rows)
    }
}
