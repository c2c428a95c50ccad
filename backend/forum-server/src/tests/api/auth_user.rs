use crate::tests::{TEST_JWT_SECRET, create_test_state};
use crate::{ApiError, AuthUser};

use forum_auth::{Claims, JwtValidator};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

fn token_for(sub: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + 3600,
        iat: now,
        roles: vec![],
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .unwrap()
}

async fn extract(
    request: Request<Body>,
    validator: Option<Arc<JwtValidator>>,
) -> Result<AuthUser, ApiError> {
    let state = create_test_state(validator).await;
    let (mut parts, _body) = request.into_parts();

    AuthUser::from_request_parts(&mut parts, &state).await
}

fn hs256() -> Option<Arc<JwtValidator>> {
    Some(Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET)))
}

#[tokio::test]
async fn given_auth_disabled_and_user_header_when_extracted_then_returns_id() {
    // Given
    let request = Request::builder()
        .header("X-User-Id", "17")
        .body(Body::empty())
        .unwrap();

    // When
    let result = extract(request, None).await;

    // Then
    assert_eq!(result.unwrap(), AuthUser(17));
}

#[tokio::test]
async fn given_auth_disabled_and_no_header_when_extracted_then_unauthorized() {
    // Given
    let request = Request::builder().body(Body::empty()).unwrap();

    // When
    let result = extract(request, None).await;

    // Then
    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_USER_ID",
            ..
        })
    ));
}

#[tokio::test]
async fn given_auth_disabled_and_garbage_header_when_extracted_then_unauthorized() {
    // Given
    let request = Request::builder()
        .header("X-User-Id", "alice")
        .body(Body::empty())
        .unwrap();

    // When
    let result = extract(request, None).await;

    // Then
    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_USER_ID",
            ..
        })
    ));
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracted_then_returns_subject() {
    // Given
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("42")))
        .body(Body::empty())
        .unwrap();

    // When
    let result = extract(request, hs256()).await;

    // Then
    assert_eq!(result.unwrap(), AuthUser(42));
}

#[tokio::test]
async fn given_auth_enabled_when_only_user_header_sent_then_unauthorized() {
    // Given
    let request = Request::builder()
        .header("X-User-Id", "42")
        .body(Body::empty())
        .unwrap();

    // When
    let result = extract(request, hs256()).await;

    // Then
    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_AUTH_HEADER",
            ..
        })
    ));
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracted_then_unauthorized() {
    // Given
    let foreign = encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: "42".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
            roles: vec![],
        },
        &EncodingKey::from_secret(b"some-other-secret-that-is-32-bytes-long"),
    )
    .unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", foreign))
        .body(Body::empty())
        .unwrap();

    // When
    let result = extract(request, hs256()).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_non_numeric_subject_when_extracted_then_unauthorized() {
    // Given
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("alice")))
        .body(Body::empty())
        .unwrap();

    // When
    let result = extract(request, hs256()).await;

    // Then
    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_CLAIM",
            ..
        })
    ));
}
