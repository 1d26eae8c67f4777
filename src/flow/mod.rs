//! Request-level operations shared by the HTTP handlers and the CLI.
//!
//! A flow validates its input, talks to the [`Store`](crate::store::Store)
//! and reports one of three things: a result, a [`Rejection`] the user can
//! act on, or an [`Error`](crate::error::Error).

mod authentication;
mod lists;
mod registration;

pub use authentication::authenticate;
pub use lists::{NewList, create_list, fetch_list_views};
pub use registration::{MIN_PASSWORD_LEN, is_valid_email, register};

use std::fmt;

/// An expected refusal. Shown inline on the form that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    WeakPassword,
    DuplicateEmail,
    WrongCredentials,
    DuplicateListName,
}

impl Rejection {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::WeakPassword => "Password should be at least 8 characters long",
            Self::DuplicateEmail => "Email already exists",
            Self::WrongCredentials => "Wrong credentials",
            Self::DuplicateListName => "The list with such name already exists",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Accepted(T),
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(rejection) => Some(*rejection),
        }
    }
}
