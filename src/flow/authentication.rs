use super::{Outcome, Rejection};
use crate::error::Result;
use crate::store::Store;

/// Resolves the display name for a matching email and password.
///
/// No session is created; the name is only echoed back to the caller.
pub fn authenticate(store: &dyn Store, email: &str, password: &str) -> Result<Outcome<String>> {
    match store.find_username_by_credentials(email, password)? {
        Some(name) => Ok(Outcome::Accepted(name)),
        None => {
            tracing::warn!("Login refused, credentials did not match");
            Ok(Outcome::Rejected(Rejection::WrongCredentials))
        }
    }
}
