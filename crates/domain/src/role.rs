use crate::RoleId;

/// Role held by an employee, with the role's admin metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGrant {
    /// Assigned role.
    pub role_id: RoleId,
    /// Admin roles receive tenant-wide scope on every menu.
    pub is_admin: bool,
}

/// All roles an actor holds within one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    grants: Vec<RoleGrant>,
}

impl RoleSet {
    /// Builds a role set, collapsing duplicate role ids.
    #[must_use]
    pub fn new(grants: Vec<RoleGrant>) -> Self {
        let mut collapsed: Vec<RoleGrant> = Vec::with_capacity(grants.len());
        for grant in grants {
            match collapsed
                .iter_mut()
                .find(|existing| existing.role_id == grant.role_id)
            {
                Some(existing) => existing.is_admin |= grant.is_admin,
                None => collapsed.push(grant),
            }
        }
        collapsed.sort_by_key(|grant| grant.role_id);

        Self { grants: collapsed }
    }

    /// Returns true when the actor holds no role.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Returns true when any held role is flagged admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.grants.iter().any(|grant| grant.is_admin)
    }

    /// Returns the held role ids in ascending order.
    #[must_use]
    pub fn role_ids(&self) -> Vec<RoleId> {
        self.grants.iter().map(|grant| grant.role_id).collect()
    }

    /// Returns the underlying grants.
    #[must_use]
    pub fn grants(&self) -> &[RoleGrant] {
        &self.grants
    }
}

#[cfg(test)]
mod tests {
    use super::{RoleGrant, RoleSet};
    use crate::RoleId;

    #[test]
    fn duplicate_roles_collapse_and_keep_admin_flag() {
        let roles = RoleSet::new(vec![
            RoleGrant {
                role_id: RoleId::new(7),
                is_admin: false,
            },
            RoleGrant {
                role_id: RoleId::new(3),
                is_admin: false,
            },
            RoleGrant {
                role_id: RoleId::new(7),
                is_admin: true,
            },
        ]);

        assert_eq!(roles.role_ids(), vec![RoleId::new(3), RoleId::new(7)]);
        assert!(roles.is_admin());
    }

    #[test]
    fn empty_role_set_is_not_admin() {
        let roles = RoleSet::default();
        assert!(roles.is_empty());
        assert!(!roles.is_admin());
    }
}
