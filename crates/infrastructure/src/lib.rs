//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_access_repository;
mod jwt_session_token_codec;
mod postgres_employee_directory_repository;
mod postgres_menu_permission_repository;
mod postgres_role_repository;
mod transient_retry;

pub use in_memory_access_repository::InMemoryAccessRepository;
pub use jwt_session_token_codec::JwtSessionTokenCodec;
pub use postgres_employee_directory_repository::PostgresEmployeeDirectoryRepository;
pub use postgres_menu_permission_repository::PostgresMenuPermissionRepository;
pub use postgres_role_repository::PostgresRoleRepository;
