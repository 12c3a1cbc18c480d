/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Authorization decisions. Nothing in here touches the database: callers load
//! the facts (role, membership) and ask [`authorize`] for a verdict.

use super::types::*;

pub const NOT_AUTHORIZED: &str = "You are not authorized for this action!!!";
pub const STAFF_CANNOT_APPLY: &str =
    "You are a staff member of this org, you cannot apply for this role!!";
pub const NOT_AUTHORIZED_APPLICATIONS: &str =
    "You are not authorized to view applications to this job!!";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    CreateOrganization,
    JoinOrganization,
    ManageStaff,
    CreateJob,
    UpdateJob,
    Apply,
    ViewApplications,
}

#[derive(Copy, Clone, Debug)]
pub enum Rule {
    Anyone,
    HasRole(&'static [UserRole]),
    StaffOfOrganization,
    NotStaffOfOrganization,
    Either(&'static Rule, &'static Rule),
}

#[derive(Copy, Clone, Debug)]
pub struct Policy {
    pub rule: Rule,
    pub denial: &'static str,
}

/// What is known about the acting user. `staff_of_organization` is only
/// loaded for actions scoped to an organization.
#[derive(Copy, Clone, Debug)]
pub struct Facts {
    pub role: UserRole,
    pub staff_of_organization: Option<bool>,
}

impl Facts {
    pub fn of(user: &MUser) -> Self {
        Facts {
            role: user.role,
            staff_of_organization: None,
        }
    }

    pub fn with_membership(user: &MUser, is_staff: bool) -> Self {
        Facts {
            role: user.role,
            staff_of_organization: Some(is_staff),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("No organization with access code: {0}")]
    UnknownAccessCode(String),
    #[error("Membership fact required to authorize {0:?}")]
    MissingFact(Action),
}

const HR_ONLY: Rule = Rule::HasRole(&[UserRole::OrgHr]);
const ADMIN_ONLY: Rule = Rule::HasRole(&[UserRole::OrgAdmin]);
const HR_OR_ADMIN: Rule = Rule::HasRole(&[UserRole::OrgHr, UserRole::OrgAdmin]);
const MEMBER: Rule = Rule::StaffOfOrganization;

impl Action {
    pub fn policy(self) -> Policy {
        match self {
            Action::CreateOrganization | Action::JoinOrganization => Policy {
                rule: Rule::Anyone,
                denial: NOT_AUTHORIZED,
            },
            Action::ManageStaff => Policy {
                rule: ADMIN_ONLY,
                denial: NOT_AUTHORIZED,
            },
            // TODO: restrict updates to HR of the job's own organization once
            // the intended scope of job edits is settled.
            Action::CreateJob | Action::UpdateJob => Policy {
                rule: HR_ONLY,
                denial: NOT_AUTHORIZED,
            },
            Action::Apply => Policy {
                rule: Rule::NotStaffOfOrganization,
                denial: STAFF_CANNOT_APPLY,
            },
            Action::ViewApplications => Policy {
                rule: Rule::Either(&HR_OR_ADMIN, &MEMBER),
                denial: NOT_AUTHORIZED_APPLICATIONS,
            },
        }
    }
}

impl Rule {
    /// `None` when the rule depends on a membership fact that was not loaded.
    pub fn evaluate(&self, facts: &Facts) -> Option<bool> {
        match self {
            Rule::Anyone => Some(true),
            Rule::HasRole(roles) => Some(roles.contains(&facts.role)),
            Rule::StaffOfOrganization => facts.staff_of_organization,
            Rule::NotStaffOfOrganization => facts.staff_of_organization.map(|s| !s),
            Rule::Either(a, b) => match (a.evaluate(facts), b.evaluate(facts)) {
                (Some(true), _) | (_, Some(true)) => Some(true),
                (Some(false), Some(false)) => Some(false),
                _ => None,
            },
        }
    }

    pub fn needs_membership(&self) -> bool {
        match self {
            Rule::Anyone | Rule::HasRole(_) => false,
            Rule::StaffOfOrganization | Rule::NotStaffOfOrganization => true,
            Rule::Either(a, b) => a.needs_membership() || b.needs_membership(),
        }
    }
}

pub fn authorize(action: Action, facts: &Facts) -> Result<(), PolicyError> {
    let policy = action.policy();

    match policy.rule.evaluate(facts) {
        Some(true) => Ok(()),
        Some(false) => Err(PolicyError::Forbidden(policy.denial)),
        None => Err(PolicyError::MissingFact(action)),
    }
}

pub fn can_create_organization(user: &MUser) -> Result<(), PolicyError> {
    authorize(Action::CreateOrganization, &Facts::of(user))
}

/// Resolves the organization behind a join code.
pub fn can_join_organization(
    user: &MUser,
    organization: Option<MOrganization>,
    join_code: &str,
) -> Result<MOrganization, PolicyError> {
    let organization =
        organization.ok_or_else(|| PolicyError::UnknownAccessCode(join_code.to_string()))?;
    authorize(Action::JoinOrganization, &Facts::of(user))?;
    Ok(organization)
}

pub fn can_manage_staff(user: &MUser) -> Result<(), PolicyError> {
    authorize(Action::ManageStaff, &Facts::of(user))
}

pub fn can_create_job(user: &MUser) -> Result<(), PolicyError> {
    authorize(Action::CreateJob, &Facts::of(user))
}

pub fn can_update_job(user: &MUser) -> Result<(), PolicyError> {
    authorize(Action::UpdateJob, &Facts::of(user))
}

pub fn can_apply(user: &MUser, is_staff_of_job_organization: bool) -> Result<(), PolicyError> {
    authorize(
        Action::Apply,
        &Facts::with_membership(user, is_staff_of_job_organization),
    )
}

pub fn can_view_applications(
    user: &MUser,
    is_staff_of_job_organization: bool,
) -> Result<(), PolicyError> {
    authorize(
        Action::ViewApplications,
        &Facts::with_membership(user, is_staff_of_job_organization),
    )
}
