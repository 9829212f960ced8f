//! Client-side field predicates for the auth form.
//!
//! All checks are syntactic. Nothing here talks to a backend.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Length check only; no complexity rules.
///
/// Counts Unicode scalar values, so four emoji are four characters. A
/// browser's `String.length` counts UTF-16 code units and would see eight.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn is_confirm_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}

/// Per-field validity of the current form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidity {
    pub email: bool,
    pub password: bool,
    pub confirm: bool,
    pub name: bool,
}

impl FieldValidity {
    pub fn check(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            email: is_valid_email(email),
            password: is_valid_password(password),
            confirm: is_confirm_match(password, confirm_password),
            name: !name.is_empty(),
        }
    }

    /// Email and password both pass.
    pub fn credentials_ok(&self) -> bool {
        self.email && self.password
    }

    /// Everything a sign-up needs.
    pub fn registration_ok(&self) -> bool {
        self.credentials_ok() && self.name && self.confirm
    }
}

/// Whether a field gets the invalid marker: it has a value and that value fails.
/// Empty, untouched fields are never marked.
pub fn marks_invalid(value: &str, valid: bool) -> bool {
    !value.is_empty() && !valid
}
