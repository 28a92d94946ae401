use std::collections::BTreeSet;
use std::str::FromStr;

use com360_core::{AppError, EmpId};
use serde::{Deserialize, Serialize};

/// Whether a call site lets the caller see their own records.
///
/// There is no default. Every caller names its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfPolicy {
    /// Own records are always visible.
    Include,
    /// Own records are hidden under tenant-wide and team scopes.
    ///
    /// Applies to admins as well, overriding their default self-visibility.
    Exclude,
    /// Tenant-wide scope shows own records to admins only; team scope hides them.
    AdminOnly,
}

impl SelfPolicy {
    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
            Self::AdminOnly => "admin_only",
        }
    }

    /// Whether own records stay visible under tenant-wide scope.
    #[must_use]
    pub fn includes_self_in_all(&self, is_admin: bool) -> bool {
        match self {
            Self::Include => true,
            Self::Exclude => false,
            Self::AdminOnly => is_admin,
        }
    }

    /// Whether own records are added to a team allow-list.
    #[must_use]
    pub fn includes_self_in_team(&self) -> bool {
        matches!(self, Self::Include)
    }
}

impl FromStr for SelfPolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "include" => Ok(Self::Include),
            "exclude" => Ok(Self::Exclude),
            "admin_only" => Ok(Self::AdminOnly),
            _ => Err(AppError::Validation(format!(
                "unknown self policy '{value}'"
            ))),
        }
    }
}

/// Row-visibility predicate over a record's owning employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFilter {
    /// Every record in the tenant.
    Unrestricted,
    /// Every record in the tenant except those owned by this employee.
    AllExcept(EmpId),
    /// Records whose owner is in the set.
    Owners(BTreeSet<EmpId>),
    /// No record.
    Deny,
}

impl RowFilter {
    /// Returns whether a record owned by `owner` passes the filter.
    #[must_use]
    pub fn permits(&self, owner: &EmpId) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::AllExcept(excluded) => excluded != owner,
            Self::Owners(owners) => owners.contains(owner),
            Self::Deny => false,
        }
    }

    /// Returns the explicit allow-list, or `None` for tenant-wide filters.
    ///
    /// `Deny` yields an empty set so callers can bind it straight into an
    /// `owner = ANY(...)` clause.
    #[must_use]
    pub fn allowed_emp_ids(&self) -> Option<&BTreeSet<EmpId>> {
        static EMPTY: BTreeSet<EmpId> = BTreeSet::new();
        match self {
            Self::Unrestricted | Self::AllExcept(_) => None,
            Self::Owners(owners) => Some(owners),
            Self::Deny => Some(&EMPTY),
        }
    }

    /// Returns the single excluded owner of an `AllExcept` filter.
    #[must_use]
    pub fn excluded_emp_id(&self) -> Option<&EmpId> {
        match self {
            Self::AllExcept(excluded) => Some(excluded),
            _ => None,
        }
    }

    /// Returns true when nothing can pass the filter.
    #[must_use]
    pub fn is_deny(&self) -> bool {
        match self {
            Self::Deny => true,
            Self::Owners(owners) => owners.is_empty(),
            _ => false,
        }
    }

    /// Returns a stable transport label for the filter shape.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::AllExcept(_) => "all_except",
            Self::Owners(_) => "owners",
            Self::Deny => "deny",
        }
    }
}
