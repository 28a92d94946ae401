use std::collections::BTreeMap;
use std::str::FromStr;

use com360_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{MenuId, MenuKey, RoleId, SubmenuId};

/// Breadth of records a role permits for one menu feature.
///
/// Variants are declared in ascending order so that `Ord` gives the
/// most-permissive-wins ordering `None < Individual < Team < All`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    /// No records are visible.
    #[default]
    None,
    /// Only records owned by the caller.
    Individual,
    /// Records owned by the caller's transitive reports.
    Team,
    /// Every record in the tenant.
    All,
}

impl ScopeLevel {
    /// Collapses the stored `alldata`/`teamdata`/`individualdata` triplet.
    ///
    /// The highest flag that is set wins; a row with no flag set grants nothing.
    #[must_use]
    pub fn from_flags(all_data: bool, team_data: bool, individual_data: bool) -> Self {
        if all_data {
            Self::All
        } else if team_data {
            Self::Team
        } else if individual_data {
            Self::Individual
        } else {
            Self::None
        }
    }

    /// Returns a stable transport value for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Individual => "individual",
            Self::Team => "team",
            Self::All => "all",
        }
    }
}

impl FromStr for ScopeLevel {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "individual" => Ok(Self::Individual),
            "team" => Ok(Self::Team),
            "all" => Ok(Self::All),
            _ => Err(AppError::Validation(format!(
                "unknown scope level '{value}'"
            ))),
        }
    }
}

/// One stored menu permission row for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPermission {
    /// Role the row belongs to.
    pub role_id: RoleId,
    /// Menu the row applies to.
    pub menu_id: MenuId,
    /// Submenu the row applies to, `None` for a menu-level row.
    pub submenu_id: Option<SubmenuId>,
    /// Scope granted by the row.
    pub level: ScopeLevel,
}

/// Reduces permission rows for a set of roles into one scope decision.
///
/// Per role, rows for the exact submenu in `key` take precedence over the
/// role's menu-level rows; rows for other menus or submenus never count.
/// Across roles the most permissive level wins. Roles outside `role_ids`
/// are ignored, and no matching row at all resolves to [`ScopeLevel::None`].
#[must_use]
pub fn reduce_menu_permissions(
    role_ids: &[RoleId],
    rows: &[MenuPermission],
    key: MenuKey,
) -> ScopeLevel {
    let mut per_role: BTreeMap<RoleId, (Option<ScopeLevel>, Option<ScopeLevel>)> =
        BTreeMap::new();

    for row in rows
        .iter()
        .filter(|row| row.menu_id == key.menu_id() && role_ids.contains(&row.role_id))
    {
        let (submenu_level, menu_level) = per_role.entry(row.role_id).or_default();
        match (row.submenu_id, key.submenu_id()) {
            (Some(row_submenu), Some(requested)) if row_submenu == requested => {
                *submenu_level = Some(submenu_level.map_or(row.level, |level| level.max(row.level)));
            }
            (None, _) => {
                *menu_level = Some(menu_level.map_or(row.level, |level| level.max(row.level)));
            }
            _ => {}
        }
    }

    per_role
        .into_values()
        .filter_map(|(submenu_level, menu_level)| submenu_level.or(menu_level))
        .max()
        .unwrap_or(ScopeLevel::None)
}
