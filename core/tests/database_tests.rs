/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the query helpers against a mocked Postgres connection

use chrono::{NaiveDate, NaiveDateTime};
use hirebase_core::database::*;
use hirebase_core::types::*;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use uuid::Uuid;

fn naive_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn user(role: UserRole) -> MUser {
    MUser {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_string(),
        name: "Ada".to_string(),
        password: "hash".to_string(),
        role,
        is_active: true,
        last_login_at: naive_date(),
        created_at: naive_date(),
    }
}

fn organization(admin: Uuid) -> MOrganization {
    MOrganization {
        id: Uuid::new_v4(),
        name: "Acme".to_string(),
        valuation: 1_000.0,
        location: "Lagos".to_string(),
        admin,
        staff_access_code: "x7q".to_string(),
        created_at: naive_date(),
        modified_at: naive_date(),
    }
}

fn staff(user: Uuid, organization: Uuid) -> MStaff {
    MStaff {
        id: Uuid::new_v4(),
        user,
        organization,
        joined_at: naive_date(),
        exit_date: None,
        modified_at: naive_date(),
    }
}

#[tokio::test]
async fn test_get_organization_by_access_code() -> Result<(), DbErr> {
    let org = organization(Uuid::new_v4());
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![org.clone()]])
        .append_query_results([Vec::<MOrganization>::new()])
        .into_connection();

    let found = get_organization_by_access_code(&db, "x7q").await?;
    assert_eq!(found.map(|o| o.id), Some(org.id));

    let missing = get_organization_by_access_code(&db, "zzz").await?;
    assert!(missing.is_none());

    Ok(())
}

#[tokio::test]
async fn test_admin_is_staff_without_query() -> Result<(), DbErr> {
    let admin = user(UserRole::OrgAdmin);
    let org = organization(admin.id);

    // No results appended: any query would fail.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    assert!(is_staff_of(&db, admin.id, &org).await?);
    Ok(())
}

#[tokio::test]
async fn test_is_staff_of_checks_membership() -> Result<(), DbErr> {
    let member = user(UserRole::OrgStaff);
    let outsider = user(UserRole::User);
    let org = organization(Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![staff(member.id, org.id)]])
        .append_query_results([Vec::<MStaff>::new()])
        .into_connection();

    assert!(is_staff_of(&db, member.id, &org).await?);
    assert!(!is_staff_of(&db, outsider.id, &org).await?);
    Ok(())
}

#[tokio::test]
async fn test_get_or_create_staff_inserts() -> Result<(), DbErr> {
    let member = user(UserRole::User);
    let org = organization(Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let (membership, created) = get_or_create_staff(&db, member.id, org.id).await?;
    assert!(created);
    assert_eq!(membership.user, member.id);
    assert_eq!(membership.organization, org.id);
    assert!(membership.exit_date.is_none());
    Ok(())
}

#[tokio::test]
async fn test_get_or_create_staff_returns_existing() -> Result<(), DbErr> {
    let member = user(UserRole::OrgStaff);
    let org = organization(Uuid::new_v4());
    let existing = staff(member.id, org.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .append_query_results([vec![existing.clone()]])
        .into_connection();

    let (membership, created) = get_or_create_staff(&db, member.id, org.id).await?;
    assert!(!created);
    assert_eq!(membership.id, existing.id);
    Ok(())
}

#[tokio::test]
async fn test_insert_application_rejects_duplicate() -> Result<(), DbErr> {
    let applicant = user(UserRole::User);
    let job_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let first = insert_application(&db, applicant.id, job_id, "Rust, SQL".to_string()).await?;
    let application = first.expect("first application is stored");
    assert_eq!(application.job, job_id);
    assert_eq!(application.skill_description, "Rust, SQL");

    let second = insert_application(&db, applicant.id, job_id, "Rust".to_string()).await?;
    assert!(second.is_none());
    Ok(())
}

#[tokio::test]
async fn test_set_user_role_skips_unchanged() -> Result<(), DbErr> {
    let staff_user = user(UserRole::OrgStaff);
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let unchanged = set_user_role(&db, staff_user.clone(), UserRole::OrgStaff).await?;
    assert_eq!(unchanged, staff_user);
    Ok(())
}

#[tokio::test]
async fn test_set_user_role_updates() -> Result<(), DbErr> {
    let staff_user = user(UserRole::OrgStaff);
    let mut promoted = staff_user.clone();
    promoted.role = UserRole::OrgHr;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![promoted.clone()]])
        .into_connection();

    let updated = set_user_role(&db, staff_user, UserRole::OrgHr).await?;
    assert_eq!(updated.role, UserRole::OrgHr);
    Ok(())
}

#[tokio::test]
async fn test_list_managed_staff_spans_administered_organizations() -> Result<(), DbErr> {
    let admin = user(UserRole::OrgAdmin);
    let first = organization(admin.id);
    let second = organization(admin.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![first.clone(), second.clone()]])
        .append_query_results([vec![
            staff(Uuid::new_v4(), first.id),
            staff(Uuid::new_v4(), second.id),
        ]])
        .into_connection();

    let members = list_managed_staff(&db, admin.id).await?.unwrap_or_default();
    assert_eq!(members.len(), 2);
    assert_eq!(members[1].organization, second.id);
    Ok(())
}

#[tokio::test]
async fn test_list_managed_staff_falls_back_to_membership() -> Result<(), DbErr> {
    let admin = user(UserRole::OrgAdmin);
    let org = organization(Uuid::new_v4());
    let membership = staff(admin.id, org.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MOrganization>::new()])
        .append_query_results([vec![membership.clone()]])
        .append_query_results([vec![membership.clone()]])
        .into_connection();

    let members = list_managed_staff(&db, admin.id).await?;
    assert_eq!(members, Some(vec![membership]));
    Ok(())
}

#[tokio::test]
async fn test_list_managed_staff_without_organization() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MOrganization>::new()])
        .append_query_results([Vec::<MStaff>::new()])
        .into_connection();

    assert_eq!(list_managed_staff(&db, Uuid::new_v4()).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_get_managed_staff_filters_on_admin() -> Result<(), DbErr> {
    let admin_id = Uuid::new_v4();
    let membership = staff(Uuid::new_v4(), Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![membership.clone()]])
        .into_connection();

    let found = get_managed_staff(&db, membership.id, admin_id).await?;
    assert_eq!(found, Some(membership));

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("INNER JOIN"));
    assert!(log.contains(&admin_id.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_list_open_jobs() -> Result<(), DbErr> {
    let org = organization(Uuid::new_v4());
    let job = MJob {
        id: Uuid::new_v4(),
        created_by: Uuid::new_v4(),
        organization: org.id,
        title: "Backend Engineer".to_string(),
        description: "Build APIs".to_string(),
        is_open: true,
        created_at: naive_date(),
        modified_at: naive_date(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![job.clone()]])
        .into_connection();

    let jobs = list_open_jobs(&db).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Backend Engineer");
    Ok(())
}
