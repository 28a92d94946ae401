use std::sync::Arc;

use com360_core::{AppResult, OrgId};
use com360_domain::{MenuKey, RoleSet, ScopeLevel, reduce_menu_permissions};
use tracing::debug;

use crate::MenuPermissionRepository;

/// Maps a role set and a menu key to a scope level.
#[derive(Clone)]
pub struct PermissionMatrixService {
    repository: Arc<dyn MenuPermissionRepository>,
}

impl PermissionMatrixService {
    /// Creates a matrix backed by a permission repository.
    #[must_use]
    pub fn new(repository: Arc<dyn MenuPermissionRepository>) -> Self {
        Self { repository }
    }

    /// Decides the scope level for the roles on one menu or submenu.
    ///
    /// Admin role sets always get [`ScopeLevel::All`] and empty role sets
    /// always get [`ScopeLevel::None`]; neither touches the repository.
    /// Menus without rows for any held role resolve to [`ScopeLevel::None`].
    pub async fn decide(
        &self,
        org_id: OrgId,
        roles: &RoleSet,
        key: MenuKey,
    ) -> AppResult<ScopeLevel> {
        if roles.is_empty() {
            return Ok(ScopeLevel::None);
        }

        if roles.is_admin() {
            return Ok(ScopeLevel::All);
        }

        let role_ids = roles.role_ids();
        let rows = self
            .repository
            .list_menu_permissions(org_id, &role_ids, key)
            .await?;
        let level = reduce_menu_permissions(&role_ids, &rows, key);

        debug!(
            org_id = %org_id,
            menu = %key,
            role_count = role_ids.len(),
            row_count = rows.len(),
            level = level.as_str(),
            "reduced menu permissions"
        );

        Ok(level)
    }
}
