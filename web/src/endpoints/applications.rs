/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::jobs::find_job;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::NaiveDateTime;
use hirebase_core::consts::MAX_SKILL_DESCRIPTION_LENGTH;
use hirebase_core::database::{insert_application, is_staff_of, list_applications};
use hirebase_core::input::*;
use hirebase_core::permission::{can_apply, can_view_applications};
use hirebase_core::types::*;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeApplicationRequest {
    pub skill_description: String,
}

/// An application with its job embedded.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub applicant: Uuid,
    pub job: MJob,
    pub skill_description: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

impl ApplicationResponse {
    fn new(application: MApplication, job: MJob) -> Self {
        ApplicationResponse {
            id: application.id,
            applicant: application.applicant,
            job,
            skill_description: application.skill_description,
            created_at: application.created_at,
            modified_at: application.modified_at,
        }
    }
}

async fn job_organization(state: &ServerState, job: &MJob) -> WebResult<MOrganization> {
    EOrganization::find_by_id(job.organization)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))
}

pub async fn post_apply(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    job_id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<MakeApplicationRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<ApplicationResponse>>)> {
    let job = find_job(&state, job_id).await?;
    let organization = job_organization(&state, &job).await?;
    let is_staff = is_staff_of(&state.db, user.id, &organization).await?;

    can_apply(&user, is_staff)?;

    if !job.is_open {
        return Err(WebError::job_closed());
    }

    let Json(body) = body?;

    let mut errors = InputError::new();
    errors.check(
        "skill_description",
        validate_text(&body.skill_description, MAX_SKILL_DESCRIPTION_LENGTH, true),
    );
    errors.finish()?;

    let application = insert_application(&state.db, user.id, job.id, body.skill_description)
        .await?
        .ok_or_else(WebError::already_applied)?;

    tracing::info!("User {} applied for job {}", user.id, job.id);

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success(
            "You have successfully applied for this job",
            ApplicationResponse::new(application, job),
        )),
    ))
}

pub async fn get_applications(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    job_id: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<Vec<ApplicationResponse>>>> {
    let job = find_job(&state, job_id).await?;
    let organization = job_organization(&state, &job).await?;
    let is_staff = is_staff_of(&state.db, user.id, &organization).await?;

    can_view_applications(&user, is_staff)?;

    let applications = list_applications(&state.db, job.id)
        .await?
        .into_iter()
        .map(|application| ApplicationResponse::new(application, job.clone()))
        .collect();

    Ok(Json(BaseResponse::success(
        "Applications returned, successfully.",
        applications,
    )))
}
