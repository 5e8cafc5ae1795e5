use std::time::Duration;

use axum::http::StatusCode;
use forms::login::INVALID_CREDENTIALS;
use forms::signup::CREATE_FAILED;
use forms::validation::NAME_REQUIRED;
use serde_json::json;

use super::*;
use crate::test_support::{MockBackend, closed_base_url, spawn_backend};

fn runtime(base_url: &str, dir: &tempfile::TempDir) -> Runtime {
    let api = AuthApi::new(base_url, Duration::from_secs(5)).expect("client");
    let store = TokenStore::open(dir.path().join("token.json")).expect("store");
    Runtime::new(api, store)
}

async fn backend(login_status: StatusCode, login_body: serde_json::Value, signup_status: StatusCode) -> MockBackend {
    spawn_backend(login_status, login_body, signup_status).await
}

// =============================================================
// Login
// =============================================================

#[tokio::test]
async fn login_success_stores_token_dispatches_once_and_navigates_home() {
    let backend = backend(StatusCode::OK, json!({ "token": "abc" }), StatusCode::OK).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&backend.base_url, &dir);
    assert!(!rt.session().is_logged_in());

    let report = rt.login("x@y.com", "right").await.expect("login");

    assert!(report.succeeded());
    assert_eq!(report.navigated_to, Some(Route::Home));
    assert_eq!(report.dispatched, vec![AuthSignal::Login]);
    assert_eq!(report.error, "");
    assert_eq!(rt.store().get(TOKEN_STORAGE_KEY), Some("abc"));
    assert!(rt.session().is_logged_in());

    let persisted = TokenStore::open(dir.path().join("token.json")).expect("reopen");
    assert_eq!(persisted.get("token"), Some("abc"));
}

#[tokio::test]
async fn login_rejected_sets_generic_error_without_side_effects() {
    let backend = backend(StatusCode::UNAUTHORIZED, json!({ "error": "bad" }), StatusCode::OK).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&backend.base_url, &dir);

    let report = rt.login("x@y.com", "wrong").await.expect("login");

    assert!(!report.succeeded());
    assert_eq!(report.error, INVALID_CREDENTIALS);
    assert!(report.dispatched.is_empty());
    assert_eq!(rt.store().get(TOKEN_STORAGE_KEY), None);
    assert!(!rt.session().is_logged_in());
    assert_eq!(backend.recorder.logins().len(), 1);
}

#[tokio::test]
async fn login_submits_even_with_empty_fields() {
    let backend = backend(StatusCode::BAD_REQUEST, json!({}), StatusCode::OK).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&backend.base_url, &dir);

    let report = rt.login("", "").await.expect("login");

    assert_eq!(report.error, INVALID_CREDENTIALS);
    assert_eq!(backend.recorder.logins(), vec![json!({ "email": "", "password": "" })]);
}

#[tokio::test]
async fn login_network_failure_uses_same_message() {
    let base_url = closed_base_url().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&base_url, &dir);

    let report = rt.login("x@y.com", "pw").await.expect("login");

    assert_eq!(report.error, INVALID_CREDENTIALS);
    assert_eq!(report.navigated_to, None);
}

#[tokio::test]
async fn existing_token_seeds_logged_in_session_and_logout_clears_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = TokenStore::open(dir.path().join("token.json")).expect("store");
    store.set(TOKEN_STORAGE_KEY, "abc").expect("seed");

    let mut rt = runtime("http://localhost:8000", &dir);
    assert!(rt.session().is_logged_in());

    assert!(rt.logout().expect("logout"));
    assert!(!rt.session().is_logged_in());
    assert_eq!(rt.store().get(TOKEN_STORAGE_KEY), None);
    assert!(!rt.logout().expect("second logout"));
}

// =============================================================
// Signup
// =============================================================

#[tokio::test]
async fn signup_with_blank_name_never_reaches_the_network() {
    let backend = backend(StatusCode::OK, json!({}), StatusCode::OK).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&backend.base_url, &dir);

    let report = rt.signup("", "a@b.com", "123456", None).await.expect("signup");

    assert!(!report.succeeded());
    assert_eq!(report.field_errors, vec![(SignupField::Name, NAME_REQUIRED.to_owned())]);
    assert_eq!(report.error, "");
    assert!(backend.recorder.signups().is_empty());
}

#[tokio::test]
async fn signup_success_posts_multipart_and_navigates_to_login() {
    let backend = backend(StatusCode::OK, json!({}), StatusCode::CREATED).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&backend.base_url, &dir);

    let report = rt.signup("Ann", "ann@example.com", "secret1", None).await.expect("signup");

    assert_eq!(report.navigated_to, Some(Route::Login));
    assert!(report.dispatched.is_empty());
    let signups = backend.recorder.signups();
    assert_eq!(signups.len(), 1);
    let names: Vec<_> = signups[0].iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["name", "email", "password"]);
    assert_eq!(rt.store().get(TOKEN_STORAGE_KEY), None);
}

#[tokio::test]
async fn signup_failure_reports_generic_error() {
    let backend = backend(StatusCode::OK, json!({}), StatusCode::INTERNAL_SERVER_ERROR).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&backend.base_url, &dir);

    let report = rt.signup("Ann", "ann@example.com", "secret1", None).await.expect("signup");

    assert_eq!(report.error, CREATE_FAILED);
    assert_eq!(report.navigated_to, None);
}

#[tokio::test]
async fn signup_with_picture_uploads_file_part() {
    let backend = backend(StatusCode::OK, json!({}), StatusCode::OK).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rt = runtime(&backend.base_url, &dir);
    let picture = Attachment { file_name: "ann.jpg".to_owned(), mime: "image/jpeg".to_owned(), bytes: vec![9, 9] };

    let report = rt
        .signup("Ann", "ann@example.com", "secret1", Some(picture))
        .await
        .expect("signup");

    assert!(report.succeeded());
    let signups = backend.recorder.signups();
    let file = signups[0].iter().find(|p| p.name == "profilePicture").expect("file part");
    assert_eq!(file.file_name.as_deref(), Some("ann.jpg"));
}
