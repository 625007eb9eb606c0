use crate::ApiError;

use bday_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Sorry!, dave not found in database".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Sorry!, dave not found in database");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid username. Please use letters only".into(),
        field: Some("username".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_error_converts_to_validation() {
    let api_error: ApiError = CoreError::validation("dateOfBirth", "bad date").into();

    match api_error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("dateOfBirth"));
            assert_eq!(message, "bad date");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_core_not_found_converts_to_not_found_naming_user() {
    let api_error: ApiError = CoreError::not_found("dave").into();

    match api_error {
        ApiError::NotFound { message, .. } => assert!(message.contains("dave")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_core_storage_error_hides_details() {
    let api_error: ApiError = CoreError::storage("disk I/O error at users.db").into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}
