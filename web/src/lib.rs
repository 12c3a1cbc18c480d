/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, patch, post};
use axum::{Router, middleware};
use endpoints::*;
use hirebase_core::types::{Cli, ServerState};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// All routes without the CORS layer.
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/account/me", get(account::get_me))
        .route("/api/org/create", post(orgs::post_create))
        .route("/api/org/staff/join", post(staff::post_join))
        .route(
            "/api/org/staff",
            get(staff::get_staff)
                .delete(staff::delete_staff)
                .patch(staff::patch_staff),
        )
        .route("/api/jobs/create/", post(jobs::post_create))
        .route("/api/jobs/create/{job}/", patch(jobs::patch_job))
        .route("/api/jobs/{job}/apply/", post(applications::post_apply))
        .route(
            "/api/jobs/{job}/applications/",
            get(applications::get_applications),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/account/create", post(account::post_create))
        .route("/api/account/login", post(account::post_login))
        .route("/api/jobs/", get(jobs::get_open))
        .route("/api/health", get(get_health))
        .fallback(handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn cors_layer(cli: &Cli) -> Result<CorsLayer> {
    let serve_url =
        HeaderValue::from_str(&cli.serve_url).context("Invalid serve url for CORS")?;

    let cors_allow_origin = if cli.debug {
        let local = HeaderValue::from_str(&format!("http://{}:8000", cli.ip))
            .context("Invalid debug origin for CORS")?;
        AllowOrigin::list(vec![serve_url, local])
    } else {
        AllowOrigin::exact(serve_url)
    };

    Ok(CorsLayer::new()
        .allow_origin(cors_allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true))
}

pub async fn serve_web(state: Arc<ServerState>) -> Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state)).layer(cors_layer(&state.cli)?);

    let listener = tokio::net::TcpListener::bind(&server_url)
        .await
        .with_context(|| format!("Failed to bind {}", server_url))?;

    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app)
        .await
        .context("HTTP server stopped")
}
