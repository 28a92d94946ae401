use std::collections::BTreeSet;
use std::sync::Arc;

use com360_core::{Actor, AppError, AppResult, EmpId};
use com360_domain::{MenuKey, RowFilter, ScopeLevel, SelfPolicy};
use tracing::{debug, error};

use crate::{
    EmployeeDirectoryRepository, IdentityResolver, MenuPermissionRepository,
    OrgHierarchyResolver, PermissionMatrixService, RoleLookupService, RoleRepository,
    SessionTokenVerifier, build_row_filter,
};

/// Outcome of resolving a caller's data scope for one menu feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeResolution {
    /// Authenticated caller.
    pub actor: Actor,
    /// Effective scope level after role reduction and admin override.
    pub level: ScopeLevel,
    /// Predicate the calling screen applies to its own query.
    pub filter: RowFilter,
}

impl ScopeResolution {
    /// Builds the "show nothing" resolution for an actor.
    #[must_use]
    pub fn denied(actor: Actor) -> Self {
        Self {
            actor,
            level: ScopeLevel::None,
            filter: RowFilter::Deny,
        }
    }

    /// Returns the owner allow-list, or `None` when the filter is tenant-wide.
    #[must_use]
    pub fn allowed_emp_ids(&self) -> Option<&BTreeSet<EmpId>> {
        self.filter.allowed_emp_ids()
    }
}

/// Application service composing identity, roles, permissions and hierarchy
/// into one scope decision per request.
#[derive(Clone)]
pub struct ScopeResolutionService {
    identity: IdentityResolver,
    role_lookup: RoleLookupService,
    permission_matrix: PermissionMatrixService,
    hierarchy: OrgHierarchyResolver,
}

impl ScopeResolutionService {
    /// Creates the service from its ports.
    #[must_use]
    pub fn new(
        token_verifier: Arc<dyn SessionTokenVerifier>,
        role_repository: Arc<dyn RoleRepository>,
        menu_permission_repository: Arc<dyn MenuPermissionRepository>,
        employee_directory: Arc<dyn EmployeeDirectoryRepository>,
    ) -> Self {
        Self {
            identity: IdentityResolver::new(token_verifier),
            role_lookup: RoleLookupService::new(role_repository),
            permission_matrix: PermissionMatrixService::new(menu_permission_repository),
            hierarchy: OrgHierarchyResolver::new(employee_directory),
        }
    }

    /// Authenticates a raw session token.
    pub fn authenticate(&self, token: Option<&str>) -> AppResult<Actor> {
        self.identity.resolve(token)
    }

    /// Resolves the caller's scope for a menu feature from the session token.
    ///
    /// Fails with `AppError::Unauthorized` when the token is unusable.
    /// Lacking access is not an error: it resolves to [`ScopeLevel::None`].
    pub async fn resolve_scope(
        &self,
        token: Option<&str>,
        key: MenuKey,
        policy: SelfPolicy,
    ) -> AppResult<ScopeResolution> {
        let actor = self.authenticate(token)?;
        self.resolve_scope_for_actor(&actor, key, policy).await
    }

    /// Resolves the scope for an actor that was already authenticated.
    ///
    /// Corrupt hierarchy data fails closed for this request only: it is
    /// logged and resolves to a denied scope.
    pub async fn resolve_scope_for_actor(
        &self,
        actor: &Actor,
        key: MenuKey,
        policy: SelfPolicy,
    ) -> AppResult<ScopeResolution> {
        let roles = self.role_lookup.roles_for(actor).await?;
        let level = self
            .permission_matrix
            .decide(actor.org_id(), &roles, key)
            .await?;

        match build_row_filter(level, actor, roles.is_admin(), policy, &self.hierarchy).await {
            Ok(filter) => {
                debug!(
                    org_id = %actor.org_id(),
                    emp_id = %actor.emp_id(),
                    menu = %key,
                    level = level.as_str(),
                    filter = filter.kind(),
                    self_policy = policy.as_str(),
                    "resolved menu scope"
                );
                Ok(ScopeResolution {
                    actor: actor.clone(),
                    level,
                    filter,
                })
            }
            Err(AppError::DataIntegrity(detail)) => {
                error!(
                    org_id = %actor.org_id(),
                    emp_id = %actor.emp_id(),
                    menu = %key,
                    detail = %detail,
                    "scope resolution failed closed on corrupt hierarchy data"
                );
                Ok(ScopeResolution::denied(actor.clone()))
            }
            Err(other) => Err(other),
        }
    }
}
