/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for job and application entities

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, QueryFilter, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_open_jobs_query() -> Result<(), DbErr> {
    let org_id = Uuid::new_v4();
    let hr_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![job::Model {
            id: Uuid::new_v4(),
            created_by: hr_id,
            organization: org_id,
            title: "Engineer".to_owned(),
            description: "Builds things".to_owned(),
            is_open: true,
            created_at: naive_date,
            modified_at: naive_date,
        }]])
        .into_connection();

    let jobs = job::Entity::find()
        .filter(job::Column::IsOpen.eq(true))
        .all(&db)
        .await?;

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Engineer");
    assert_eq!(jobs[0].organization, org_id);
    assert_eq!(jobs[0].created_by, hr_id);

    Ok(())
}

#[tokio::test]
async fn test_application_entity_basic() -> Result<(), DbErr> {
    let job_id = Uuid::new_v4();
    let applicant_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![application::Model {
            id: Uuid::new_v4(),
            applicant: applicant_id,
            job: job_id,
            skill_description: "Rust, SQL".to_owned(),
            created_at: naive_date,
            modified_at: naive_date,
        }]])
        .into_connection();

    let applications = application::Entity::find()
        .filter(application::Column::Job.eq(job_id))
        .all(&db)
        .await?;

    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].applicant, applicant_id);
    assert_eq!(applications[0].skill_description, "Rust, SQL");

    Ok(())
}
