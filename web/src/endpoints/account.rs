/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{encode_jwt, update_last_login};
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use hirebase_core::consts::*;
use hirebase_core::database::get_user_by_email;
use hirebase_core::input::*;
use hirebase_core::types::*;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, SqlErr};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthCredentials {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub auth_credentials: AuthCredentials,
    pub user: MUser,
}

pub async fn post_create(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeUserRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MUser>>)> {
    let Json(body) = body?;

    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    let mut errors = InputError::new();
    errors
        .check("email", validate_email(&body.email))
        .check("name", validate_text(&body.name, MAX_USER_NAME_LENGTH, true))
        .check("password", validate_password(&body.password));
    errors.finish()?;

    let email = normalize_email(&body.email);

    if get_user_by_email(&state.db, &email).await?.is_some() {
        return Err(WebError::email_taken());
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        name: Set(body.name.trim().to_string()),
        password: Set(generate_hash(&body.password)),
        role: Set(UserRole::User),
        is_active: Set(true),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    // A concurrent signup with the same email loses on the unique index.
    let user = user.insert(&state.db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => WebError::email_taken(),
        _ => WebError::Database(e),
    })?;

    tracing::info!("Created account {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success("success, account created!", user)),
    ))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<LoginResponse>>> {
    let Json(body) = body?;

    let user = get_user_by_email(&state.db, &normalize_email(&body.email))
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    if verify_password(&body.password, &user.password).is_err() || !user.is_active {
        return Err(WebError::invalid_credentials());
    }

    let user = update_last_login(state.clone(), user).await?;
    let token = encode_jwt(state, user.id).map_err(|_| WebError::failed_to_generate_token())?;

    Ok(Json(BaseResponse::success(
        "login successful.",
        LoginResponse {
            auth_credentials: AuthCredentials { token },
            user,
        },
    )))
}

pub async fn get_me(Extension(user): Extension<MUser>) -> WebResult<Json<BaseResponse<MUser>>> {
    Ok(Json(BaseResponse::success("success, user returned.", user)))
}
