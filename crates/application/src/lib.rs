//! Application services and ports for menu-scoped data access.

#![forbid(unsafe_code)]

mod access_ports;
mod identity_service;
mod org_hierarchy_service;
mod permission_matrix_service;
mod role_lookup_service;
mod scope_filter;
mod scope_resolution_service;

#[cfg(test)]
mod test_fakes;

pub use access_ports::{
    EmployeeDirectoryRepository, MenuPermissionRepository, RoleRepository, SessionTokenVerifier,
};
pub use identity_service::IdentityResolver;
pub use org_hierarchy_service::OrgHierarchyResolver;
pub use permission_matrix_service::PermissionMatrixService;
pub use role_lookup_service::RoleLookupService;
pub use scope_filter::build_row_filter;
pub use scope_resolution_service::{ScopeResolution, ScopeResolutionService};
