use std::sync::Arc;

use com360_core::{Actor, AppResult};
use com360_domain::RoleSet;

use crate::RoleRepository;

/// Looks up the roles an actor holds in their organization.
#[derive(Clone)]
pub struct RoleLookupService {
    repository: Arc<dyn RoleRepository>,
}

impl RoleLookupService {
    /// Creates a lookup service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleRepository>) -> Self {
        Self { repository }
    }

    /// Returns the actor's roles. An unassigned employee gets an empty set.
    pub async fn roles_for(&self, actor: &Actor) -> AppResult<RoleSet> {
        let grants = self
            .repository
            .list_role_grants(actor.org_id(), actor.emp_id())
            .await?;

        Ok(RoleSet::new(grants))
    }
}
