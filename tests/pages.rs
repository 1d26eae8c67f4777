//! Router-level tests for the HTML pages.
//!
//! Requests go straight to the axum router through `tower::ServiceExt`, each
//! test against its own temporary database.

mod common;

use axum::http::StatusCode;
use common::{TestApp, body_text, location};

const GROCERIES_FORM: &str = "listName=Groceries\
    &product[]=Milk&quantity[]=2&store[]=Store+A\
    &product[]=Eggs&quantity[]=12&store[]=Store+B";

#[tokio::test]
async fn health_returns_ok() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn static_pages_render() {
    let app = TestApp::new();

    for (uri, marker) in [
        ("/", "Shopping Lists"),
        ("/login", "<form method=\"post\" action=\"/login\">"),
        ("/register", "<form method=\"post\" action=\"/register\">"),
        ("/register-success", "Registration complete"),
        ("/login-success", "<h1>Welcome!</h1>"),
        ("/create-list", "name=\"product[]\""),
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert!(body_text(response).await.contains(marker), "GET {uri}");
    }
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = TestApp::new();
    let response = app.get("/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = TestApp::new();
    let response = app.get("/static/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(".error"));
}

#[tokio::test]
async fn register_then_login() {
    let app = TestApp::new();

    let response = app
        .post_form("/register", "name=Alice&email=alice%40example.com&password=hunter2hunter2")
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/register-success");

    let response = app
        .post_form("/login", "email=alice%40example.com&password=hunter2hunter2")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Welcome, Alice!"));
}

#[tokio::test]
async fn duplicate_email_rerenders_form() {
    let app = TestApp::new();
    let form = "name=Alice&email=alice%40example.com&password=password123";

    let first = app.post_form("/register", form).await;
    assert_eq!(first.status(), StatusCode::FOUND);

    let second = app.post_form("/register", form).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert!(body_text(second).await.contains("Email already exists"));
}

#[tokio::test]
async fn short_password_rerenders_form() {
    let app = TestApp::new();
    let response = app
        .post_form("/register", "name=Bob&email=bob%40example.com&password=short")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_text(response)
            .await
            .contains("Password should be at least 8 characters long")
    );
}

#[tokio::test]
async fn registration_validation_errors_are_bad_requests() {
    let app = TestApp::new();

    let response = app.post_form("/register", "name=Bob&password=password123").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "All fields are required");

    let response = app
        .post_form("/register", "name=Bob&email=not-an-email&password=password123")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid email");
}

#[tokio::test]
async fn wrong_credentials_rerender_login() {
    let app = TestApp::new();
    app.post_form("/register", "name=Alice&email=alice%40example.com&password=password123")
        .await;

    for form in [
        "email=alice%40example.com&password=password124",
        "email=nobody%40example.com&password=password123",
    ] {
        let response = app.post_form("/login", form).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Wrong credentials"));
    }
}

#[tokio::test]
async fn create_list_then_view() {
    let app = TestApp::new();

    let response = app.post_form("/create-list", GROCERIES_FORM).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/list-success?name=Groceries");

    let response = app.get("/list-success?name=Groceries").await;
    assert!(body_text(response).await.contains("<strong>Groceries</strong>"));

    let response = app.get("/view-lists").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h2>Groceries</h2>"));
    assert!(body.contains("<td>Milk</td><td>2</td><td>Store A</td>"));
    assert!(body.contains("<td>Eggs</td><td>12</td><td>Store B</td>"));
    let milk = body.find("Milk").expect("milk listed");
    let eggs = body.find("Eggs").expect("eggs listed");
    assert!(milk < eggs);
}

#[tokio::test]
async fn list_name_is_url_encoded_in_redirect() {
    let app = TestApp::new();
    let response = app
        .post_form("/create-list", "listName=Weekly+Shop&product[]=Bread&quantity[]=1&store[]=Bakery")
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/list-success?name=Weekly%20Shop");
}

#[tokio::test]
async fn duplicate_list_name_rerenders_form() {
    let app = TestApp::new();
    app.post_form("/create-list", GROCERIES_FORM).await;

    let response = app
        .post_form("/create-list", "listName=Groceries&product[]=Bread&quantity[]=1&store[]=Bakery")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_text(response)
            .await
            .contains("The list with such name already exists")
    );

    let body = body_text(app.get("/view-lists").await).await;
    assert!(!body.contains("Bread"));
}

#[tokio::test]
async fn mismatched_product_rows_are_rejected_before_insert() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/create-list",
            "listName=Broken&product[]=Milk&product[]=Eggs&quantity[]=2&store[]=Store+A",
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_text(app.get("/view-lists").await).await;
    assert!(!body.contains("Broken"));
    assert!(body.contains("No lists yet."));
}

#[tokio::test]
async fn non_numeric_quantity_is_a_bad_request() {
    let app = TestApp::new();
    let response = app
        .post_form("/create-list", "listName=Groceries&product[]=Milk&quantity[]=two&store[]=Store+A")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_store_shows_no_lists() {
    let app = TestApp::new();
    let response = app.get("/view-lists").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No lists yet."));
}

#[tokio::test]
async fn list_success_escapes_name() {
    let app = TestApp::new();
    let response = app.get("/list-success?name=%3Cb%3Ebold").await;

    let body = body_text(response).await;
    assert!(body.contains("&#60;b&#62;bold"));
    assert!(!body.contains("<b>bold"));
}

#[tokio::test]
async fn store_failures_expose_raw_error() {
    let app = TestApp::without_schema();

    let response = app.get("/view-lists").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("no such table: lists"));

    let response = app
        .post_form("/login", "email=alice%40example.com&password=password123")
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("no such table: users"));
}
