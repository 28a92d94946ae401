//! Domain entities and invariants for menu-scoped data access.

#![forbid(unsafe_code)]

mod employee;
mod menu;
mod role;
mod row_filter;
mod scope;

pub use employee::{EmployeeNode, EmployeeStatus};
pub use menu::{MenuId, MenuKey, RoleId, SubmenuId};
pub use role::{RoleGrant, RoleSet};
pub use row_filter::{RowFilter, SelfPolicy};
pub use scope::{MenuPermission, ScopeLevel, reduce_menu_permissions};
