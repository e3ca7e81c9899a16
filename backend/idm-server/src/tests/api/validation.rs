use crate::{AccountValidator, LoginRequest, RegisterRequest, UpdateAccountRequest};
use crate::api::validation::is_well_formed_email;

use idm_config::ValidationConfig;
use idm_core::ErrorKind;

use googletest::prelude::*;

fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        display_name: None,
    }
}

fn assert_invalid(result: idm_core::Result<()>, expected: &str) {
    match result {
        Ok(()) => panic!("expected InvalidParams containing '{expected}'"),
        Err(e) => {
            assert_that!(e.kind(), eq(ErrorKind::InvalidParams));
            assert_that!(e.message().to_string(), contains_substring(expected));
        }
    }
}

#[test]
fn test_valid_registration_passes() {
    let limits = ValidationConfig::default();
    let req = register_request("alice", "alice@example.com", "secret1");

    assert_that!(AccountValidator::validate_register(&req, &limits), ok(anything()));
}

#[test]
fn test_username_length_bounds() {
    let limits = ValidationConfig::default();

    assert_invalid(
        AccountValidator::validate_register(
            &register_request("al", "al@example.com", "secret1"),
            &limits,
        ),
        "username",
    );
    assert_invalid(
        AccountValidator::validate_register(
            &register_request(&"a".repeat(51), "a@example.com", "secret1"),
            &limits,
        ),
        "username",
    );
    assert_that!(
        AccountValidator::validate_register(
            &register_request(&"a".repeat(50), "a@example.com", "secret1"),
            &limits,
        ),
        ok(anything())
    );
}

#[test]
fn test_username_length_counts_characters() {
    let limits = ValidationConfig::default();
    let req = register_request("ünï", "u@example.com", "secret1");

    assert_that!(AccountValidator::validate_register(&req, &limits), ok(anything()));
}

#[test]
fn test_short_password_is_rejected() {
    let limits = ValidationConfig::default();
    let req = register_request("alice", "alice@example.com", "12345");

    assert_invalid(AccountValidator::validate_register(&req, &limits), "password");
}

#[test]
fn test_malformed_email_is_rejected() {
    let limits = ValidationConfig::default();
    let req = register_request("alice", "not-an-email", "secret1");

    assert_invalid(AccountValidator::validate_register(&req, &limits), "email");
}

#[test]
fn test_overlong_email_is_rejected() {
    let limits = ValidationConfig::default();
    let email = format!("{}@example.com", "a".repeat(95));
    let req = register_request("alice", &email, "secret1");

    assert_invalid(AccountValidator::validate_register(&req, &limits), "email");
}

#[test]
fn test_overlong_display_name_is_rejected() {
    let limits = ValidationConfig::default();
    let mut req = register_request("alice", "alice@example.com", "secret1");
    req.display_name = Some("d".repeat(51));

    assert_invalid(
        AccountValidator::validate_register(&req, &limits),
        "display_name",
    );
}

#[test]
fn test_configured_limits_are_honoured() {
    let limits = ValidationConfig {
        username_min_length: 5,
        ..ValidationConfig::default()
    };
    let req = register_request("alice", "alice@example.com", "secret1");
    let short = register_request("bob", "bob@example.com", "secret1");

    assert_that!(AccountValidator::validate_register(&req, &limits), ok(anything()));
    assert_invalid(AccountValidator::validate_register(&short, &limits), "username");
}

#[test]
fn test_login_requires_both_fields() {
    let missing_user = LoginRequest {
        username: String::new(),
        password: "secret1".to_string(),
    };
    let missing_password = LoginRequest {
        username: "alice".to_string(),
        password: String::new(),
    };

    assert_invalid(AccountValidator::validate_login(&missing_user), "username");
    assert_invalid(AccountValidator::validate_login(&missing_password), "password");
}

#[test]
fn test_update_limits() {
    let limits = ValidationConfig::default();

    let ok_update = UpdateAccountRequest {
        display_name: Some(String::new()),
        avatar_reference: Some("https://cdn.example.com/a.png".to_string()),
    };
    assert_that!(
        AccountValidator::validate_update(&ok_update, &limits),
        ok(anything())
    );

    let long_avatar = UpdateAccountRequest {
        display_name: None,
        avatar_reference: Some("x".repeat(256)),
    };
    assert_invalid(
        AccountValidator::validate_update(&long_avatar, &limits),
        "avatar_reference",
    );
}

#[test]
fn test_email_shapes() {
    for good in ["a@b.co", "first.last@mail.example.org", "x+tag@sub-domain.io"] {
        assert!(is_well_formed_email(good), "{good} should be accepted");
    }

    for bad in [
        "",
        "plain",
        "@example.com",
        "a@",
        "a@localhost",
        "a@@example.com",
        "a b@example.com",
        "a@example..com",
        "a@-example.com",
    ] {
        assert!(!is_well_formed_email(bad), "{bad} should be rejected");
    }
}
