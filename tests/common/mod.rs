#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use shoplist::server::{AppState, create_router};
use shoplist::store::{SqliteStore, Store};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub temp_dir: TempDir,
    pub router: Router,
}

impl TestApp {
    /// Router over a fresh, initialized database.
    pub fn new() -> Self {
        Self::build(true)
    }

    /// Router over a database whose schema was never created, so every
    /// query fails.
    pub fn without_schema() -> Self {
        Self::build(false)
    }

    fn build(initialize: bool) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = SqliteStore::new(temp_dir.path().join("shoplist.db")).expect("open store");
        if initialize {
            store.initialize().expect("initialize store");
        }

        let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
        let state = Arc::new(AppState::new(Arc::new(store), static_dir));

        Self {
            temp_dir,
            router: create_router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        self.router.clone().oneshot(request).await.expect("send request")
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.router.clone().oneshot(request).await.expect("send request")
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
}
