use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::flow::{self, Outcome};
use crate::server::AppState;
use crate::server::dto::{LoginForm, RegisterForm};
use crate::server::pages::{
    IndexPage, LoginPage, LoginSuccessPage, RegisterPage, RegisterSuccessPage,
};
use crate::server::response::{PageError, found, render};
use crate::types::NewUser;

pub async fn index() -> impl IntoResponse {
    render(&IndexPage)
}

pub async fn login_page() -> impl IntoResponse {
    render(&LoginPage::default())
}

/// POST /login
///
/// Renders the welcome page with the account name, or the login form
/// again when nothing matches.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    match flow::authenticate(store, &form.email, &form.password)? {
        Outcome::Accepted(username) => render(&LoginSuccessPage {
            username: Some(username),
        }),
        Outcome::Rejected(rejection) => render(&LoginPage {
            error_message: Some(rejection.message()),
        }),
    }
}

pub async fn login_success() -> impl IntoResponse {
    render(&LoginSuccessPage::default())
}

pub async fn register_page() -> impl IntoResponse {
    render(&RegisterPage::default())
}

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, PageError> {
    let store = state.store.as_ref();
    let user = NewUser {
        name: form.name,
        email: form.email,
        password: form.password,
    };

    match flow::register(store, &user)? {
        Outcome::Accepted(()) => Ok(found("/register-success")),
        Outcome::Rejected(rejection) => Ok(render(&RegisterPage {
            error_message: Some(rejection.message()),
        })?
        .into_response()),
    }
}

pub async fn register_success() -> impl IntoResponse {
    render(&RegisterSuccessPage)
}
