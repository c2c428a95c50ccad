use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Admin.as_str(), "admin");
    assert_eq!(UserRole::User.as_str(), "user");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("user").unwrap(), UserRole::User);
    assert!(UserRole::from_str("moderator").is_err());
}

#[test]
fn test_user_role_default() {
    assert_eq!(UserRole::default(), UserRole::User);
}
