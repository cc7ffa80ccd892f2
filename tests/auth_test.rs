mod helpers;

use helpers::test_db;
use tome::auth::{authenticate, register, Session};
use tome::kb::types::{Role, User};
use tome::kb::KbError;

#[test]
fn seeded_admin_signs_in() {
    let db = test_db();
    let user = authenticate(&db, "admin", "123").expect("seeded admin should authenticate");
    assert_eq!(user.id, "admin-1");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn wrong_password_is_rejected() {
    let db = test_db();
    assert!(authenticate(&db, "admin", "wrong").is_none());
}

#[test]
fn unknown_username_is_rejected() {
    let db = test_db();
    assert!(authenticate(&db, "nobody", "123").is_none());
}

#[test]
fn registered_account_can_sign_in() {
    let db = test_db();
    register(&db, User::new("Jane Roe", "jane", "s3cret", Role::User)).unwrap();

    let user = authenticate(&db, "jane", "s3cret").expect("new account should authenticate");
    assert_eq!(user.name, "Jane Roe");
}

#[test]
fn registration_with_taken_username_fails() {
    let db = test_db();
    let result = register(&db, User::new("Impostor", "user", "pw", Role::User));
    assert!(matches!(result, Err(KbError::DuplicateUsername(_))));
}

#[test]
fn session_reports_privileges() {
    let db = test_db();

    let admin = Session::login(&db, "admin", "123").unwrap();
    assert!(admin.is_admin());
    assert!(admin.can_delete_user("user-1"));
    assert!(!admin.can_delete_user("admin-1"));

    let user = Session::login(&db, "user", "123").unwrap();
    assert!(!user.is_admin());
    assert!(!user.can_delete_user("admin-1"));
}
