use crate::{User, UserRole};

fn user(id: i64, role: UserRole) -> User {
    User {
        id,
        name: format!("user-{}", id),
        email: format!("user-{}@forum.local", id),
        role,
    }
}

#[test]
fn given_owner_when_can_modify_then_true() {
    assert!(user(5, UserRole::User).can_modify(5));
}

#[test]
fn given_other_user_when_can_modify_then_false() {
    assert!(!user(5, UserRole::User).can_modify(6));
}

#[test]
fn given_admin_when_can_modify_foreign_record_then_true() {
    assert!(user(1, UserRole::Admin).can_modify(42));
}
