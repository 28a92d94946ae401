use com360_core::{EmpId, OrgId};
use serde::{Deserialize, Serialize};

/// Employment status as far as hierarchy expansion is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Counts as a subordinate and is expanded further.
    Active,
    /// Excluded from team scopes together with everyone reached only through them.
    Inactive,
}

impl EmployeeStatus {
    /// Maps a stored status value. Only `active` (any case) is active.
    #[must_use]
    pub fn from_storage(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("active") {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Returns a stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// One employee in a tenant's reporting forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeNode {
    /// Employee identifier.
    pub emp_id: EmpId,
    /// Owning organization.
    pub org_id: OrgId,
    /// Direct superior, `None` for a root of the forest.
    pub superior_emp_id: Option<EmpId>,
    /// Employment status.
    pub status: EmployeeStatus,
}

impl EmployeeNode {
    /// Returns true when the employee counts towards team scopes.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
