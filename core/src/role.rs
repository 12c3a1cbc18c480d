/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Role changes of a user. Every place that mutates `user.role` goes through
//! [`RoleTransition::apply`].

use entity::user::UserRole;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoleTransition {
    /// The user created an organization and became its admin.
    CreateOrganization,
    /// The user redeemed a join code.
    JoinOrganization,
    /// An admin granted the user HR rights.
    PromoteToHr,
    /// An admin revoked the user's HR rights.
    DemoteToStaff,
    /// The user's last staff membership was removed.
    LeaveLastOrganization,
}

impl fmt::Display for RoleTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoleTransition::CreateOrganization => "create an organization",
            RoleTransition::JoinOrganization => "join an organization",
            RoleTransition::PromoteToHr => "promote to HR",
            RoleTransition::DemoteToStaff => "demote to staff",
            RoleTransition::LeaveLastOrganization => "leave the last organization",
        };

        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot {transition} for a user with role {from}")]
pub struct TransitionError {
    pub from: UserRole,
    pub transition: RoleTransition,
}

impl RoleTransition {
    pub fn apply(self, from: UserRole) -> Result<UserRole, TransitionError> {
        use UserRole::*;

        let to = match (self, from) {
            (RoleTransition::CreateOrganization, _) => OrgAdmin,
            (RoleTransition::JoinOrganization, User) => OrgStaff,
            (RoleTransition::JoinOrganization, role) => role,
            (RoleTransition::PromoteToHr, User | OrgStaff | OrgHr) => OrgHr,
            (RoleTransition::DemoteToStaff, OrgStaff | OrgHr) => OrgStaff,
            (RoleTransition::LeaveLastOrganization, OrgStaff | OrgHr) => User,
            (RoleTransition::LeaveLastOrganization, role) => role,
            (transition, from) => return Err(TransitionError { from, transition }),
        };

        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_organization_always_makes_admin() {
        for role in [
            UserRole::User,
            UserRole::OrgAdmin,
            UserRole::OrgStaff,
            UserRole::OrgHr,
        ] {
            assert_eq!(
                RoleTransition::CreateOrganization.apply(role),
                Ok(UserRole::OrgAdmin)
            );
        }
    }

    #[test]
    fn test_join_only_changes_plain_users() {
        assert_eq!(
            RoleTransition::JoinOrganization.apply(UserRole::User),
            Ok(UserRole::OrgStaff)
        );
        assert_eq!(
            RoleTransition::JoinOrganization.apply(UserRole::OrgHr),
            Ok(UserRole::OrgHr)
        );
        assert_eq!(
            RoleTransition::JoinOrganization.apply(UserRole::OrgAdmin),
            Ok(UserRole::OrgAdmin)
        );
    }

    #[test]
    fn test_admin_cannot_be_promoted_or_demoted() {
        let err = RoleTransition::PromoteToHr
            .apply(UserRole::OrgAdmin)
            .unwrap_err();
        assert_eq!(err.from, UserRole::OrgAdmin);
        assert_eq!(
            err.to_string(),
            "Cannot promote to HR for a user with role org_admin"
        );

        assert!(RoleTransition::DemoteToStaff.apply(UserRole::OrgAdmin).is_err());
        assert!(RoleTransition::DemoteToStaff.apply(UserRole::User).is_err());
    }

    #[test]
    fn test_leaving_last_organization() {
        assert_eq!(
            RoleTransition::LeaveLastOrganization.apply(UserRole::OrgHr),
            Ok(UserRole::User)
        );
        assert_eq!(
            RoleTransition::LeaveLastOrganization.apply(UserRole::OrgAdmin),
            Ok(UserRole::OrgAdmin)
        );
    }
}
