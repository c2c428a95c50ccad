use crate::ApiError;
use crate::api::path_id::parse_id;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_numeric_segment_when_parsed_then_returns_id() {
    assert_that!(parse_id("42", "id").unwrap(), eq(42));
}

#[test]
fn given_non_numeric_segment_when_parsed_then_validation_error_names_field() {
    let result = parse_id("abc", "id");

    match result {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("id")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
