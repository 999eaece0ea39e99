use std::sync::Arc;

use pretty_assertions::assert_eq;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Request, StatusCode, Url};
use sabor_auth::{AuthInterceptor, CredentialStore, FileStore, StoredSession};
use sabor_core::SessionUser;
use sabor_core::enums::Role;
use tempfile::TempDir;

fn ana() -> SessionUser {
    SessionUser {
        id: "u1".into(),
        name: Some("Ana".into()),
        email: "ana@x.com".into(),
        role: Role::Cliente,
    }
}

fn get(path: &str) -> Request {
    let url = Url::parse("http://localhost:3000/api/")
        .and_then(|base| base.join(path))
        .expect("url");
    Request::new(Method::GET, url)
}

#[test]
fn file_store_round_trip_then_clear() {
    let tmp = TempDir::new().expect("tmp dir");
    let store = FileStore::new(tmp.path().join("sabor").join("session.json"));

    store
        .save(&StoredSession::new("abc123", ana()))
        .expect("save");

    // A second handle on the same file sees the same session.
    let reopened = FileStore::new(store.path());
    let loaded = reopened.load().expect("load").expect("session");
    assert_eq!(loaded.token, "abc123");
    assert_eq!(loaded.user, ana());
    assert_eq!(reopened.current_user().map(|u| u.email), Some("ana@x.com".into()));

    reopened.clear().expect("clear");
    assert!(store.load().expect("load").is_none());
    assert!(!store.is_logged_in());
}

#[cfg(unix)]
#[test]
fn session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().expect("tmp dir");
    let store = FileStore::new(tmp.path().join("session.json"));
    store
        .save(&StoredSession::new("abc123", ana()))
        .expect("save");

    let mode = std::fs::metadata(store.path()).expect("meta").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn interceptor_over_file_store() {
    let tmp = TempDir::new().expect("tmp dir");
    let store = Arc::new(FileStore::new(tmp.path().join("session.json")));
    store
        .save(&StoredSession::new("abc123", ana()))
        .expect("save");
    let interceptor = AuthInterceptor::new(store.clone());

    let request = interceptor.decorate(get("productos"));
    assert_eq!(
        request.headers().get(AUTHORIZATION).map(|v| v.to_str().ok()),
        Some(Some("Bearer abc123"))
    );
    let sent = AuthInterceptor::attached_token(&request);

    // Wrong password on login leaves the session alone.
    assert!(!interceptor.observe("/api/auth/login", StatusCode::UNAUTHORIZED, None));
    assert!(store.is_logged_in());

    // An expired token on a protected path removes the file.
    assert!(interceptor.observe("/api/pedidos", StatusCode::UNAUTHORIZED, sent.as_deref()));
    assert!(!store.path().exists());

    let request = interceptor.decorate(get("productos"));
    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn late_rejection_keeps_file_session_saved_after_request() {
    let tmp = TempDir::new().expect("tmp dir");
    let store = Arc::new(FileStore::new(tmp.path().join("session.json")));
    store
        .save(&StoredSession::new("old-expired", ana()))
        .expect("save");
    let interceptor = AuthInterceptor::new(store.clone());

    let request = interceptor.decorate(get("pedidos"));
    store
        .save(&StoredSession::new("fresh-token", ana()))
        .expect("relogin");

    let sent = AuthInterceptor::attached_token(&request);
    assert!(!interceptor.observe("/api/pedidos", StatusCode::UNAUTHORIZED, sent.as_deref()));
    assert_eq!(
        store.load().expect("load").map(|session| session.token).as_deref(),
        Some("fresh-token")
    );
}
