use crate::{Post, Thread, ThreadUpdate};

use chrono::{TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_thread_when_serialized_then_uses_snake_case_user_id_and_rfc3339_time() {
    // Given
    let thread = Thread {
        id: 3,
        title: "Async Rust".to_string(),
        content: "Pinning explained".to_string(),
        create_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        user_id: 9,
    };

    // When
    let json = serde_json::to_value(&thread).unwrap();

    // Then
    assert_that!(json["user_id"].as_i64(), eq(Some(9)));
    assert_that!(json["create_at"].as_str(), eq(Some("2025-03-01T12:00:00Z")));
    assert!(json.get("user_ID").is_none());
}

#[test]
fn given_update_body_with_extra_fields_when_deserialized_then_only_editable_fields_kept() {
    // Given
    let body = r#"{"id": 4, "title": "new", "content": "text", "user_id": 99, "create_at": "x"}"#;

    // When
    let update: ThreadUpdate = serde_json::from_str(body).unwrap();

    // Then
    assert_that!(
        update,
        eq(&ThreadUpdate {
            id: 4,
            title: "new".to_string(),
            content: "text".to_string(),
        })
    );
}

#[test]
fn given_post_json_when_deserialized_then_round_trips_fields() {
    // Given
    let body = r#"{"id":1,"content":"hi","create_at":"2025-03-01T12:00:00Z","thread_id":7,"user_id":5}"#;

    // When
    let post: Post = serde_json::from_str(body).unwrap();

    // Then
    assert_that!(post.thread_id, eq(7));
    assert_that!(post.user_id, eq(5));
    assert_that!(post.create_at, eq(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()));
}
