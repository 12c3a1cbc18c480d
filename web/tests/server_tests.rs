/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let server = common::test_server(common::create_mock_state(common::empty_db()));

    let res = server.get("/api/health").await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "200 ALIVE");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_unknown_route_uses_envelope() {
    let server = common::test_server(common::create_mock_state(common::empty_db()));

    let res = server.get("/api/does-not-exist").await;
    res.assert_status(StatusCode::NOT_FOUND);

    let body: Value = res.json();
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let server = common::test_server(common::create_mock_state(common::empty_db()));

    let res = server.get("/api/account/me").await;
    res.assert_status(StatusCode::FORBIDDEN);

    let body: Value = res.json();
    assert_eq!(body["message"], "Authorization header not found");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let server = common::test_server(common::create_mock_state(common::empty_db()));

    let res = server
        .get("/api/account/me")
        .authorization_bearer("not-a-jwt")
        .await;
    res.assert_status(StatusCode::UNAUTHORIZED);
}

#[test]
fn test_cors_layer_configuration() {
    let mut cli = common::create_mock_cli();
    assert!(web::cors_layer(&cli).is_ok());

    cli.debug = false;
    assert!(web::cors_layer(&cli).is_ok());

    cli.serve_url = "bad\nurl".to_string();
    assert!(web::cors_layer(&cli).is_err());
}
