use serde::{Deserialize, Serialize};

use crate::{EmpId, OrgId};

/// Authenticated employee recovered from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    org_id: OrgId,
    emp_id: EmpId,
}

impl Actor {
    /// Creates an actor from verified tenancy and employee data.
    #[must_use]
    pub fn new(org_id: OrgId, emp_id: EmpId) -> Self {
        Self { org_id, emp_id }
    }

    /// Returns the organization the actor belongs to.
    #[must_use]
    pub fn org_id(&self) -> OrgId {
        self.org_id
    }

    /// Returns the actor's employee identifier.
    #[must_use]
    pub fn emp_id(&self) -> &EmpId {
        &self.emp_id
    }
}
