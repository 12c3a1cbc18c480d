/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use hirebase_core::consts::*;
use hirebase_core::database::{generate_unique_access_code, set_user_role};
use hirebase_core::input::*;
use hirebase_core::permission::can_create_organization;
use hirebase_core::role::RoleTransition;
use hirebase_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeOrganizationRequest {
    pub name: String,
    #[serde(default)]
    pub valuation: f64,
    pub location: String,
}

pub async fn post_create(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<MakeOrganizationRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MOrganization>>)> {
    let Json(body) = body?;

    can_create_organization(&user)?;

    let mut errors = InputError::new();
    errors
        .check(
            "name",
            validate_text(&body.name, MAX_ORGANIZATION_NAME_LENGTH, true),
        )
        .check("valuation", validate_valuation(body.valuation))
        .check(
            "location",
            validate_text(&body.location, MAX_LOCATION_LENGTH, true),
        );
    errors.finish()?;

    let role = RoleTransition::CreateOrganization.apply(user.role)?;

    let txn = state.db.begin().await?;

    let staff_access_code = generate_unique_access_code(&txn).await?;
    let now = Utc::now().naive_utc();

    let organization = AOrganization {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.trim().to_string()),
        valuation: Set(body.valuation),
        location: Set(body.location.trim().to_string()),
        admin: Set(user.id),
        staff_access_code: Set(staff_access_code),
        created_at: Set(now),
        modified_at: Set(now),
    };

    let organization = organization.insert(&txn).await?;
    set_user_role(&txn, user, role).await?;

    txn.commit().await?;

    tracing::info!(
        "Created organization {} with access code {}",
        organization.id,
        organization.staff_access_code
    );

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success(
            "success, organization created!",
            organization,
        )),
    ))
}
