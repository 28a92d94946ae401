mod employees;
mod menu_permissions;
mod roles;
mod session;

pub use employees::EmployeeDirectoryRepository;
pub use menu_permissions::MenuPermissionRepository;
pub use roles::RoleRepository;
pub use session::SessionTokenVerifier;
