mod common;

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use sabor_auth::{CredentialStore, MemoryStore, StoredSession};
use sabor_client::{ErrorKind, RegisterRequest};
use sabor_core::enums::Role;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{ana, client_for, logged_in_store, ok, producto_json};

#[tokio::test]
async fn login_stores_token_and_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@x.com", "password": "secreto"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "access_token": "abc123",
            "user": {"_id": "u1", "nombre": "Ana", "email": "ana@x.com", "rol": "CLIENTE"}
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let client = client_for(&server, store.clone());

    let user = client.login("ana@x.com", "secreto").await.expect("login");
    assert_eq!(user, ana());
    assert!(client.is_logged_in());

    let stored = store.load().expect("load").expect("session");
    assert_eq!(stored.token, "abc123");
    assert_eq!(stored.user, ana());
}

#[tokio::test]
async fn login_rejection_keeps_existing_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Credenciales inválidas"
        })))
        .mount(&server)
        .await;

    let store = logged_in_store("old-token");
    let client = client_for(&server, store.clone());

    let failure = client.login("ana@x.com", "mal").await.unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::Unauthorized);
    assert_eq!(failure.message(), "Credenciales inválidas");
    assert_eq!(store.load().expect("load").expect("session").token, "old-token");
}

#[tokio::test]
async fn invalid_login_input_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(MemoryStore::new()));
    let failure = client.login("no-es-un-correo", "x").await.unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::ValidationFailed);
}

#[tokio::test]
async fn register_accepts_token_alias() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(json!({
            "token": "t-new",
            "user": {"id": "u2", "name": "Granja Sol", "email": "sol@x.com", "role": "PRODUCTOR"}
        }))))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let client = client_for(&server, store.clone());
    let user = client
        .register(&RegisterRequest {
            nombre: "Granja Sol".into(),
            email: "sol@x.com".into(),
            password: "123456".into(),
            rol: Role::Productor,
            telefono: None,
        })
        .await
        .expect("register");

    assert_eq!(user.role, Role::Productor);
    assert_eq!(store.load().expect("load").expect("session").token, "t-new");
}

#[tokio::test]
async fn bearer_header_sent_when_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            producto_json("pr1", "Miel")
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in_store("abc123"));
    let page = client.list_productos().await.expect("list");
    assert_eq!(page.items.len(), 1);

    let requests = server.received_requests().await.expect("recording");
    assert_eq!(requests[0].headers.get_all("authorization").iter().count(), 1);
}

#[tokio::test]
async fn no_header_without_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([]))))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(MemoryStore::new()));
    let page = client.list_productos().await.expect("list");
    assert!(page.is_empty());

    let requests = server.received_requests().await.expect("recording");
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn protected_unauthorized_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pedidos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "statusCode": 401,
            "message": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let store = logged_in_store("expired");
    let client = client_for(&server, store.clone());

    let failure = client.list_pedidos().await.unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::Unauthorized);
    assert_eq!(failure.message(), ErrorKind::Unauthorized.default_message());
    assert!(!client.is_logged_in());
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn late_unauthorized_keeps_session_saved_in_flight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pedidos"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"statusCode": 401, "message": "Unauthorized"}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let store = logged_in_store("old-expired");
    let client = client_for(&server, store.clone());

    let relogin = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        store
            .save(&StoredSession::new("fresh-token", ana()))
            .expect("relogin");
    };
    let (result, ()) = tokio::join!(client.list_pedidos(), relogin);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Unauthorized);
    let stored = store.load().expect("load").expect("session survives");
    assert_eq!(stored.token, "fresh-token");
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn unauthorized_without_session_leaves_store_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pedidos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let client = client_for(&server, store.clone());

    let failure = client.list_pedidos().await.unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::Unauthorized);
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn profile_does_not_restore_session_cleared_in_flight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok(json!({
                    "_id": "u1", "nombre": "Ana María", "email": "ana@x.com", "rol": "CLIENTE"
                })))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let store = logged_in_store("abc123");
    let client = client_for(&server, store.clone());

    let cleared_elsewhere = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        store.clear().expect("clear");
    };
    let (result, ()) = tokio::join!(client.profile(), cleared_elsewhere);

    assert_eq!(result.expect("profile").name.as_deref(), Some("Ana María"));
    assert!(store.load().expect("load").is_none());
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn profile_does_not_overwrite_session_replaced_in_flight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok(json!({
                    "_id": "u1", "nombre": "Ana María", "email": "ana@x.com", "rol": "CLIENTE"
                })))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let store = logged_in_store("abc123");
    let client = client_for(&server, store.clone());

    let relogin = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        store
            .save(&StoredSession::new("fresh-token", ana()))
            .expect("relogin");
    };
    let (result, ()) = tokio::join!(client.profile(), relogin);
    result.expect("profile");

    let stored = store.load().expect("load").expect("session");
    assert_eq!(stored.token, "fresh-token");
    assert_eq!(stored.user, ana());
}

#[tokio::test]
async fn profile_refreshes_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "_id": "u1", "nombre": "Ana María", "email": "ana@x.com", "rol": "CLIENTE"
        }))))
        .mount(&server)
        .await;

    let store = logged_in_store("abc123");
    let client = client_for(&server, store.clone());
    let user = client.profile().await.expect("profile");

    assert_eq!(user.name.as_deref(), Some("Ana María"));
    let stored = store.load().expect("load").expect("session");
    assert_eq!(stored.token, "abc123");
    assert_eq!(stored.user.name.as_deref(), Some("Ana María"));
}

#[tokio::test]
async fn logout_is_local() {
    let server = MockServer::start().await;
    let client = client_for(&server, logged_in_store("abc123"));
    client.logout().expect("logout");
    assert!(client.current_user().is_none());
    assert!(server.received_requests().await.expect("recording").is_empty());
}
