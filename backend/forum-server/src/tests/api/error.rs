use crate::ApiError;

use forum_auth::AuthError;
use forum_chat::ChatError;
use forum_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;

async fn body_json(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_code() {
    // Given
    let error = ApiError::not_found("Thread", 7);

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Thread 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_core_validation_error_when_converted_then_400_with_field() {
    // Given
    let error: ApiError = CoreError::Validation {
        message: "title cannot be empty".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn given_auth_error_when_converted_then_401_with_auth_code() {
    // Given
    let error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
}

#[tokio::test]
async fn given_forbidden_when_rendered_then_403() {
    // Given
    let error = ApiError::forbidden("not yours");

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "not yours");
}

#[tokio::test]
async fn given_chat_persistence_error_when_converted_then_500_without_details() {
    // Given
    let error: ApiError = ChatError::Persistence {
        message: "disk I/O error at /var/lib/forum/data.db".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("/var/lib"));
}

#[tokio::test]
async fn given_hub_unavailable_when_converted_then_neutral_chat_message() {
    // Given
    let error: ApiError = ChatError::hub_unavailable().into();

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Chat operation failed");
}
