/*
* SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
*
* SPDX-License-Identifier: AGPL-3.0-only
*/

pub mod account;
pub mod applications;
pub mod jobs;
pub mod orgs;
pub mod staff;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use hirebase_core::types::BaseResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<BaseResponse<()>>> {
    Ok(Json(BaseResponse::<()>::message("200 ALIVE")))
}
