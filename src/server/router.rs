use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use super::account;
use super::lists;
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, static_dir: PathBuf) -> Self {
        Self { store, static_dir }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/health", get(health))
        .route("/", get(account::index))
        .route("/login", get(account::login_page).post(account::login))
        .route("/login-success", get(account::login_success))
        .route("/register", get(account::register_page).post(account::register))
        .route("/register-success", get(account::register_success))
        .route("/create-list", get(lists::create_list_page).post(lists::create_list))
        .route("/list-success", get(lists::list_success))
        .route("/view-lists", get(lists::view_lists))
        .nest_service("/static", assets)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
