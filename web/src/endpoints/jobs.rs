/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use hirebase_core::consts::*;
use hirebase_core::database::{get_job, get_staff_record, list_open_jobs};
use hirebase_core::input::*;
use hirebase_core::permission::{can_create_job, can_update_job};
use hirebase_core::types::*;
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_open: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_open: Option<bool>,
}

fn check_job_fields(title: Option<&str>, description: Option<&str>) -> Result<(), InputError> {
    let mut errors = InputError::new();

    if let Some(title) = title {
        errors.check("title", validate_text(title, MAX_JOB_TITLE_LENGTH, false));
    }

    if let Some(description) = description {
        errors.check(
            "description",
            validate_text(description, MAX_JOB_DESCRIPTION_LENGTH, false),
        );
    }

    errors.finish()
}

/// Resolves the `{job}` path segment. Malformed ids cannot name a job.
pub(crate) async fn find_job(
    state: &ServerState,
    job_id: Result<Path<Uuid>, PathRejection>,
) -> WebResult<MJob> {
    let Path(job_id) = job_id.map_err(|_| WebError::not_found("Job"))?;

    get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))
}

pub async fn get_open(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<Vec<MJob>>>> {
    let jobs = list_open_jobs(&state.db).await?;

    Ok(Json(BaseResponse::success(
        "Jobs retrieved successfully.",
        jobs,
    )))
}

pub async fn post_create(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<MakeJobRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MJob>>)> {
    let Json(body) = body?;

    can_create_job(&user)?;
    check_job_fields(body.title.as_deref(), body.description.as_deref())?;

    let staff = get_staff_record(&state.db, user.id)
        .await?
        .ok_or_else(WebError::no_staff_record)?;

    let now = Utc::now().naive_utc();
    let job = AJob {
        id: Set(Uuid::new_v4()),
        created_by: Set(user.id),
        organization: Set(staff.organization),
        title: Set(body.title.unwrap_or_default()),
        description: Set(body.description.unwrap_or_default()),
        is_open: Set(body.is_open.unwrap_or(true)),
        created_at: Set(now),
        modified_at: Set(now),
    };

    let job = job.insert(&state.db).await?;

    tracing::info!("Job {} created in organization {}", job.id, job.organization);

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success("job created successfully.", job)),
    ))
}

pub async fn patch_job(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    job_id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<PatchJobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let Json(body) = body?;

    can_update_job(&user)?;

    let job = find_job(&state, job_id).await?;
    check_job_fields(body.title.as_deref(), body.description.as_deref())?;

    let mut ajob: AJob = job.into();

    if let Some(title) = body.title {
        ajob.title = Set(title);
    }

    if let Some(description) = body.description {
        ajob.description = Set(description);
    }

    if let Some(is_open) = body.is_open {
        ajob.is_open = Set(is_open);
    }

    ajob.modified_at = Set(Utc::now().naive_utc());
    let job = ajob.update(&state.db).await?;

    Ok(Json(BaseResponse::success("job updated successfully.", job)))
}
