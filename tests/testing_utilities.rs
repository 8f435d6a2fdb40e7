//! Tests demonstrating the assertion macros on realistic outcome pipelines.

use outcome::prelude::*;
use outcome::{assert_failure, assert_reason, assert_success, assert_value};
use std::io;

#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: u8,
}

#[derive(Debug, Clone, PartialEq)]
enum SignupError {
    InvalidEmail,
    TooYoung,
    Unreadable,
}

fn read_age(raw: &str) -> Outcome<u8, SignupError> {
    Outcome::of(|| raw.trim().parse::<u8>(), SignupError::Unreadable)
}

fn register(email: &str, raw_age: &str) -> Outcome<User, SignupError> {
    Outcome::<_, SignupError>::success(email.to_string())
        .filter(|e| e.contains('@'), SignupError::InvalidEmail)
        .flat_map(|email| {
            read_age(raw_age)
                .filter(|age| *age >= 18, SignupError::TooYoung)
                .map(|age| User { email, age })
        })
}

#[test]
fn test_assert_success_on_valid_user() {
    assert_success!(register("user@example.com", "25"));
}

#[test]
fn test_assert_value_on_valid_user() {
    assert_value!(
        register("user@example.com", " 30 "),
        User {
            email: "user@example.com".to_string(),
            age: 30,
        }
    );
}

#[test]
fn test_assert_failure_on_invalid_email() {
    assert_failure!(register("invalid", "25"));
}

#[test]
fn test_assert_reason_on_each_rejection() {
    assert_reason!(register("invalid", "25"), SignupError::InvalidEmail);
    assert_reason!(register("user@example.com", "15"), SignupError::TooYoung);
    assert_reason!(register("user@example.com", "old"), SignupError::Unreadable);
}

#[test]
fn test_assert_value_with_recovery() {
    let age = read_age("n/a").recover(|_| 18);
    assert_value!(age, 18);
}

#[test]
fn test_assert_reason_with_unexpected() {
    let outcome = Outcome::<i32, _>::failure(Unexpected::new(io::Error::other("boom")));
    let description = outcome.map_failure(|reason| reason.description());
    assert_reason!(description, "boom".to_string());
}
