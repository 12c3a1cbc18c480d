/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "HireBase", display_name = "HireBase", bin_name = "hirebase-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "HIREBASE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "HIREBASE_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "HIREBASE_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "HIREBASE_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "HIREBASE_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "HIREBASE_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "HIREBASE_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "HIREBASE_TOKEN_LIFETIME_HOURS", value_parser = greater_than_zero::<i64>, default_value = "24")]
    pub token_lifetime_hours: i64,
    #[arg(long, env = "HIREBASE_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "HIREBASE_DEBUG", default_value = "false")]
    pub debug: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

/// Either a single human readable message or a list of field errors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::Text(s)
    }
}

impl From<Vec<String>> for Message {
    fn from(v: Vec<String>) -> Self {
        Message::List(v)
    }
}

/// Envelope shared by every endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub status: bool,
    pub message: Message,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> BaseResponse<T> {
    pub fn success(message: impl Into<Message>, data: T) -> Self {
        BaseResponse {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<Message>) -> Self {
        BaseResponse {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}

impl BaseResponse<()> {
    pub fn message(message: impl Into<Message>) -> Self {
        BaseResponse {
            status: true,
            message: message.into(),
            data: None,
        }
    }
}

pub type EApplication = application::Entity;
pub type EJob = job::Entity;
pub type EOrganization = organization::Entity;
pub type EStaff = staff::Entity;
pub type EUser = user::Entity;

pub type MApplication = application::Model;
pub type MJob = job::Model;
pub type MOrganization = organization::Model;
pub type MStaff = staff::Model;
pub type MUser = user::Model;

pub type AApplication = application::ActiveModel;
pub type AJob = job::ActiveModel;
pub type AOrganization = organization::ActiveModel;
pub type AStaff = staff::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CApplication = application::Column;
pub type CJob = job::Column;
pub type COrganization = organization::Column;
pub type CStaff = staff::Column;
pub type CUser = user::Column;

pub type RApplication = application::Relation;
pub type RJob = job::Relation;
pub type RStaff = staff::Relation;

pub use entity::user::UserRole;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_omits_missing_data() {
        let res = BaseResponse::<()>::message("200 ALIVE");
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"status": true, "message": "200 ALIVE"})
        );
    }

    #[test]
    fn test_envelope_with_field_errors() {
        let res = BaseResponse::<()>::failure(vec![
            "email: Enter a valid email address.".to_string(),
            "name: This field may not be blank.".to_string(),
        ]);

        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({
                "status": false,
                "message": [
                    "email: Enter a valid email address.",
                    "name: This field may not be blank."
                ]
            })
        );
    }

    #[test]
    fn test_envelope_with_data() {
        let res = BaseResponse::success("Jobs retrieved successfully.", vec![1, 2]);
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["data"], json!([1, 2]));
        assert_eq!(value["status"], true);
    }
}
