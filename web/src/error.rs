/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hirebase_core::input::InputError;
use hirebase_core::permission::PolicyError;
use hirebase_core::role::TransitionError;
use hirebase_core::types::{BaseResponse, Message};
use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Database(DbErr),
    InputValidation(InputError),
    Policy(PolicyError),
    Transition(TransitionError),
    JsonParsing(JsonRejection),
    QueryParsing(QueryRejection),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::InputValidation(err) => write!(f, "Input validation error: {}", err),
            WebError::Policy(err) => write!(f, "Policy error: {}", err),
            WebError::Transition(err) => write!(f, "Role transition error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::QueryParsing(err) => write!(f, "Query parsing error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::InputValidation(err) => Some(err),
            WebError::Policy(err) => Some(err),
            WebError::Transition(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::QueryParsing(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<InputError> for WebError {
    fn from(err: InputError) -> Self {
        WebError::InputValidation(err)
    }
}

impl From<PolicyError> for WebError {
    fn from(err: PolicyError) -> Self {
        WebError::Policy(err)
    }
}

impl From<TransitionError> for WebError {
    fn from(err: TransitionError) -> Self {
        WebError::Transition(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<QueryRejection> for WebError {
    fn from(err: QueryRejection) -> Self {
        WebError::QueryParsing(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, Message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.into()),
            WebError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.into()),
            WebError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.into()),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.into()),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".into(),
                )
            }
            WebError::InputValidation(err) => (StatusCode::BAD_REQUEST, err.messages().into()),
            WebError::Policy(PolicyError::MissingFact(action)) => {
                tracing::error!("Authorization of {:?} attempted without membership", action);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
            WebError::Policy(err) => {
                tracing::warn!("Denied: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string().into())
            }
            WebError::Transition(err) => {
                tracing::warn!("Rejected role change: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string().into())
            }
            WebError::JsonParsing(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", err.body_text()).into(),
            ),
            WebError::QueryParsing(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query: {}", err.body_text()).into(),
            ),
            WebError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(BaseResponse::<()>::failure(message))).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

// Helper functions for common error scenarios
impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn invalid_credentials() -> Self {
        WebError::BadRequest("Incorrect credentials! Check and try again.".to_string())
    }

    pub fn registration_disabled() -> Self {
        WebError::BadRequest("Registration is disabled".to_string())
    }

    pub fn email_taken() -> Self {
        WebError::BadRequest("user with this email already exists.".to_string())
    }

    pub fn failed_to_generate_token() -> Self {
        WebError::Internal(anyhow::anyhow!("Failed to generate token"))
    }

    pub fn missing_staff_id() -> Self {
        WebError::BadRequest("Must pass id of staff!!!".to_string())
    }

    pub fn staff_not_found() -> Self {
        WebError::NotFound("Staff not found!!!".to_string())
    }

    pub fn no_staff_record() -> Self {
        WebError::BadRequest("User has no staff record!!!".to_string())
    }

    pub fn already_applied() -> Self {
        WebError::BadRequest("Already applied for this job".to_string())
    }

    pub fn job_closed() -> Self {
        WebError::BadRequest("This job is no longer accepting applications".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hirebase_core::permission::{Action, NOT_AUTHORIZED};

    #[test]
    fn test_policy_denial_is_bad_request() {
        let res = WebError::from(PolicyError::Forbidden(NOT_AUTHORIZED)).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_fact_is_internal() {
        let res = WebError::from(PolicyError::MissingFact(Action::Apply)).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_staff_not_found_is_404() {
        let res = WebError::staff_not_found().into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_hides_details() {
        let err = WebError::from(DbErr::Custom("relation does not exist".to_string()));
        assert!(err.to_string().contains("relation does not exist"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
