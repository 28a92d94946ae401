use std::collections::BTreeSet;

use com360_core::{Actor, AppResult};
use com360_domain::{RowFilter, ScopeLevel, SelfPolicy};

use crate::OrgHierarchyResolver;

/// Turns a scope level into the concrete row filter for one actor.
///
/// The hierarchy resolver is only consulted for [`ScopeLevel::Team`].
/// Individual scope always yields the actor's own records, whatever the
/// self policy says.
pub async fn build_row_filter(
    level: ScopeLevel,
    actor: &Actor,
    is_admin: bool,
    policy: SelfPolicy,
    hierarchy: &OrgHierarchyResolver,
) -> AppResult<RowFilter> {
    let filter = match level {
        ScopeLevel::All => {
            if policy.includes_self_in_all(is_admin) {
                RowFilter::Unrestricted
            } else {
                RowFilter::AllExcept(actor.emp_id().clone())
            }
        }
        ScopeLevel::Team => {
            let owners = if policy.includes_self_in_team() {
                hierarchy
                    .subordinates_with_root(actor.org_id(), actor.emp_id())
                    .await?
            } else {
                hierarchy
                    .subordinates(actor.org_id(), actor.emp_id())
                    .await?
            };
            RowFilter::Owners(owners)
        }
        ScopeLevel::Individual => RowFilter::Owners(BTreeSet::from([actor.emp_id().clone()])),
        ScopeLevel::None => RowFilter::Deny,
    };

    Ok(filter)
}
