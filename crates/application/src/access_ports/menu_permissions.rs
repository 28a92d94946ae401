use async_trait::async_trait;

use com360_core::{AppResult, OrgId};
use com360_domain::{MenuKey, MenuPermission, RoleId};

/// Repository port for per-role menu permission rows.
#[async_trait]
pub trait MenuPermissionRepository: Send + Sync {
    /// Lists rows for the given roles on the key's menu.
    ///
    /// Returns menu-level rows and, when the key names a submenu, the rows
    /// for that submenu. Rows for other submenus may be omitted.
    async fn list_menu_permissions(
        &self,
        org_id: OrgId,
        role_ids: &[RoleId],
        key: MenuKey,
    ) -> AppResult<Vec<MenuPermission>>;
}
