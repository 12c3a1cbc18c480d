/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::extract::State;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use hirebase_core::types::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        debug: true,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        token_lifetime_hours: 24,
        disable_registration: false,
    }
}

pub fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
        jwt_secret: "test-secret".to_string(),
    })
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn test_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(web::create_router(state)).unwrap()
}

pub fn token_for(state: &Arc<ServerState>, user: &MUser) -> String {
    web::authorization::encode_jwt(State(Arc::clone(state)), user.id).unwrap()
}

pub fn naive_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn user(role: UserRole) -> MUser {
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

pub fn organization(admin: Uuid) -> MOrganization {
    MOrganization {
        id: Uuid::new_v4(),
        name: "Acme".to_string(),
        valuation: 1_000_000.0,
        location: "Lagos".to_string(),
        admin,
        staff_access_code: "x7q".to_string(),
        created_at: naive_date(),
        modified_at: naive_date(),
    }
}

pub fn staff(user: Uuid, organization: Uuid) -> MStaff {
    MStaff {
        id: Uuid::new_v4(),
        user,
        organization,
        joined_at: naive_date(),
        exit_date: None,
        modified_at: naive_date(),
    }
}

pub fn job(organization: Uuid, created_by: Uuid, is_open: bool) -> MJob {
    MJob {
        id: Uuid::new_v4(),
        created_by,
        organization,
        title: "Backend Engineer".to_string(),
        description: "Build and run the hiring APIs".to_string(),
        is_open,
        created_at: naive_date(),
        modified_at: naive_date(),
    }
}
