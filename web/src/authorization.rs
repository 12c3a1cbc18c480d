/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use hirebase_core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response> {
    let auth_header = match req.headers().get(axum::http::header::AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .map_err(|_| WebError::Forbidden("Authorization header empty".to_string()))?,
        None => {
            return Err(WebError::Forbidden(
                "Authorization header not found".to_string(),
            ));
        }
    };

    let mut header = auth_header.split_whitespace();

    let token = match (header.next(), header.next()) {
        (Some("Bearer"), Some(token)) => token.to_string(),
        _ => {
            return Err(WebError::Forbidden(
                "Invalid Authorization header".to_string(),
            ));
        }
    };

    let token_data = decode_jwt(state.clone(), token)
        .map_err(|_| WebError::Unauthorized("Unable to decode token".to_string()))?;

    let current_user = EUser::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    if !current_user.is_active {
        tracing::warn!("Inactive user {} presented a token", current_user.id);
        return Err(WebError::Unauthorized("User is inactive".to_string()));
    }

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

pub fn encode_jwt(state: State<Arc<ServerState>>, id: Uuid) -> Result<String, StatusCode> {
    let now = Utc::now();
    let expire = Duration::try_hours(state.cli.token_lifetime_hours)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    let exp: usize = now
        .checked_add_signed(expire)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?
        .timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claim = Claims { iat, exp, id };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(state.jwt_secret.as_ref()),
    )
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn decode_jwt(
    state: State<Arc<ServerState>>,
    jwt: String,
) -> Result<TokenData<Claims>, StatusCode> {
    decode(
        &jwt,
        &DecodingKey::from_secret(state.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| StatusCode::UNAUTHORIZED)
}

pub async fn update_last_login(state: State<Arc<ServerState>>, user: MUser) -> Result<MUser> {
    let mut auser: AUser = user.into();

    auser.last_login_at = Set(Utc::now().naive_utc());
    auser
        .update(&state.db)
        .await
        .context("Failed to update user last login")
}
