use async_trait::async_trait;

use com360_application::MenuPermissionRepository;
use com360_core::{AppResult, OrgId};
use com360_domain::{MenuId, MenuKey, MenuPermission, RoleId, ScopeLevel, SubmenuId};

use sqlx::{FromRow, PgPool};

use crate::transient_retry::retry_transient;

/// PostgreSQL-backed repository for role menu permission rows.
#[derive(Clone)]
pub struct PostgresMenuPermissionRepository {
    pool: PgPool,
}

impl PostgresMenuPermissionRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuPermissionRow {
    role_id: i64,
    menu_id: i64,
    submenu_id: Option<i64>,
    all_data: bool,
    team_data: bool,
    individual_data: bool,
}

impl From<MenuPermissionRow> for MenuPermission {
    fn from(row: MenuPermissionRow) -> Self {
        Self {
            role_id: RoleId::new(row.role_id),
            menu_id: MenuId::new(row.menu_id),
            submenu_id: row.submenu_id.map(SubmenuId::new),
            level: ScopeLevel::from_flags(row.all_data, row.team_data, row.individual_data),
        }
    }
}

#[async_trait]
impl MenuPermissionRepository for PostgresMenuPermissionRepository {
    async fn list_menu_permissions(
        &self,
        org_id: OrgId,
        role_ids: &[RoleId],
        key: MenuKey,
    ) -> AppResult<Vec<MenuPermission>> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let pool = &self.pool;
        let role_ids: Vec<i64> = role_ids.iter().map(RoleId::as_i64).collect();
        let role_ids = role_ids.as_slice();
        let submenu_id = key.submenu_id().map(|value| value.as_i64());

        let rows = retry_transient("load menu permissions", move || {
            sqlx::query_as::<_, MenuPermissionRow>(
                r#"
                SELECT role_id, menu_id, submenu_id, all_data, team_data, individual_data
                FROM role_menu_permissions
                WHERE org_id = $1
                    AND role_id = ANY($2)
                    AND menu_id = $3
                    AND (submenu_id IS NULL OR submenu_id = $4)
                "#,
            )
            .bind(org_id.as_i64())
            .bind(role_ids)
            .bind(key.menu_id().as_i64())
            .bind(submenu_id)
            .fetch_all(pool)
        })
        .await?;

        Ok(rows.into_iter().map(MenuPermission::from).collect())
    }
}
