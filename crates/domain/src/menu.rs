use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Role identifier within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(i64);

impl RoleId {
    /// Creates a role identifier from its stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the stored value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for RoleId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Menu (application feature) identifier used as a permission key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuId(i64);

impl MenuId {
    /// Creates a menu identifier from its stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the stored value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for MenuId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Submenu identifier, scoped under a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmenuId(i64);

impl SubmenuId {
    /// Creates a submenu identifier from its stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the stored value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for SubmenuId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Permission lookup key: a menu and, optionally, one of its submenus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuKey {
    menu_id: MenuId,
    submenu_id: Option<SubmenuId>,
}

impl MenuKey {
    /// Creates a key addressing the whole menu.
    #[must_use]
    pub fn menu(menu_id: MenuId) -> Self {
        Self {
            menu_id,
            submenu_id: None,
        }
    }

    /// Creates a key addressing one submenu of a menu.
    #[must_use]
    pub fn submenu(menu_id: MenuId, submenu_id: SubmenuId) -> Self {
        Self {
            menu_id,
            submenu_id: Some(submenu_id),
        }
    }

    /// Creates a key from transport values.
    #[must_use]
    pub fn from_parts(menu_id: MenuId, submenu_id: Option<SubmenuId>) -> Self {
        Self {
            menu_id,
            submenu_id,
        }
    }

    /// Returns the menu identifier.
    #[must_use]
    pub fn menu_id(&self) -> MenuId {
        self.menu_id
    }

    /// Returns the submenu identifier, if the key addresses a submenu.
    #[must_use]
    pub fn submenu_id(&self) -> Option<SubmenuId> {
        self.submenu_id
    }
}

impl Display for MenuKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.submenu_id {
            Some(submenu_id) => write!(formatter, "{}/{}", self.menu_id, submenu_id),
            None => write!(formatter, "{}", self.menu_id),
        }
    }
}
