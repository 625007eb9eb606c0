//! Birthday REST API handlers

use crate::{ApiResult, AppState, HelloResponse, SaveBirthdayRequest};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// PUT /hello/{username}
///
/// Save or replace the user's date of birth. 204 with no body on success.
pub async fn save_birthday(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<SaveBirthdayRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload?;

    let record = state
        .service
        .save_date_of_birth(&username, &request.date_of_birth)
        .await?;

    info!("Stored date of birth for {}", record.username);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /hello/{username}
///
/// Greet the user with the number of days until their birthday
pub async fn hello(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<HelloResponse>> {
    let greeting = state.service.greet(&username).await?;

    Ok(Json(HelloResponse {
        message: greeting.message(&username),
    }))
}
