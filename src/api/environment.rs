// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    environment::{auth0::Auth0Endpoints, Environment},
    error::ApiError,
    state::AppState,
};

/// Resolved environment record, exactly as authored.
#[utoipa::path(
    get,
    path = "/v1/environment",
    tag = "Environment",
    responses((status = 200, body = Environment))
)]
pub async fn get_environment(State(state): State<AppState>) -> Json<Environment> {
    Json(state.environment.as_ref().clone())
}

/// Auth0 endpoints derived from the record's `auth0` block.
#[utoipa::path(
    get,
    path = "/v1/environment/auth0",
    tag = "Environment",
    responses(
        (status = 200, body = Auth0Endpoints),
        (status = 500, description = "Endpoints could not be derived")
    )
)]
pub async fn get_auth0_endpoints(
    State(state): State<AppState>,
) -> Result<Json<Auth0Endpoints>, ApiError> {
    state
        .environment
        .auth0
        .endpoints()
        .map(Json)
        .map_err(|e| ApiError::internal(format!("Failed to derive Auth0 endpoints: {e}")))
}
