use std::sync::LazyLock;

use regex::Regex;

use super::{Outcome, Rejection};
use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::NewUser;

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Creates an account for `user`.
///
/// Missing fields and malformed emails are validation errors. A short
/// password or an email that is already registered is a rejection and
/// leaves the users table untouched.
pub fn register(store: &dyn Store, user: &NewUser) -> Result<Outcome<()>> {
    if user.name.is_empty() || user.email.is_empty() || user.password.is_empty() {
        return Err(Error::validation("All fields are required"));
    }

    if !is_valid_email(&user.email) {
        return Err(Error::validation("Invalid email"));
    }

    if user.password.chars().count() < MIN_PASSWORD_LEN {
        return Ok(Outcome::Rejected(Rejection::WeakPassword));
    }

    if store.email_exists(&user.email)? {
        tracing::warn!("Registration refused, email already in use");
        return Ok(Outcome::Rejected(Rejection::DuplicateEmail));
    }

    store.insert_user(user)?;
    tracing::info!("Registered user {}", user.name);

    Ok(Outcome::Accepted(()))
}
