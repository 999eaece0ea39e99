#![allow(dead_code)]

use std::sync::Arc;

use sabor_auth::{CredentialStore, MemoryStore, StoredSession};
use sabor_client::SaborClient;
use sabor_config::ApiConfig;
use sabor_core::SessionUser;
use sabor_core::enums::Role;
use serde_json::{Value, json};
use wiremock::MockServer;

pub fn ana() -> SessionUser {
    SessionUser {
        id: "u1".into(),
        name: Some("Ana".into()),
        email: "ana@x.com".into(),
        role: Role::Cliente,
    }
}

pub fn logged_in_store(token: &str) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_session(StoredSession::new(token, ana())))
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.into(),
        ..ApiConfig::default()
    }
}

pub fn client_for(server: &MockServer, store: Arc<dyn CredentialStore>) -> SaborClient {
    SaborClient::new(&api_config(&format!("{}/api", server.uri())), store).expect("client")
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn producto_json(id: &str, nombre: &str) -> Value {
    json!({
        "_id": id,
        "nombre": nombre,
        "precio": 4.5,
        "stock": 10,
        "unidad": "kg",
        "disponible": true,
        "productor": "p1"
    })
}
