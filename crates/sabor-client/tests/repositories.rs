mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sabor_client::{ErrorKind, NewEntrega, NewPedido, NewProducto, StateHolder, ViewScope, ViewState};
use sabor_core::Related;
use sabor_core::enums::{EntregaEstado, PedidoEstado};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, logged_in_store, ok, producto_json};

fn pedido_json(estado: &str) -> serde_json::Value {
    json!({
        "_id": "pe1",
        "cliente": {"_id": "c1", "nombre": "Ana"},
        "productos": [{"producto": "pr1", "cantidad": 2, "precioUnitario": 4.5}],
        "total": 9.0,
        "estado": estado
    })
}

#[tokio::test]
async fn list_uses_envelope_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productores/p1/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [producto_json("pr1", "Miel"), producto_json("pr2", "Queso")],
            "total": 12
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in_store("abc123"));
    let page = client.list_productos_by_productor("p1").await.expect("list");
    assert_eq!(page.total, 12);
    assert_eq!(page.items[1].nombre, "Queso");
    assert_eq!(page.items[0].productor, Some(Related::Reference("p1".into())));
}

#[tokio::test]
async fn path_ids_are_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(producto_json("a b", "Miel"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in_store("abc123"));
    let producto = client.get_producto("a b").await.expect("get");
    assert_eq!(producto.id, "a b");
}

#[tokio::test]
async fn create_producto_validates_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in_store("abc123"));
    let failure = client
        .create_producto(&NewProducto {
            nombre: "Miel".into(),
            descripcion: None,
            precio: 0.0,
            stock: 1,
            categoria: None,
            unidad: None,
            imagen_url: None,
        })
        .await
        .unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::ValidationFailed);
    assert_eq!(failure.message(), "El precio debe ser mayor que cero.");
}

#[tokio::test]
async fn delete_producto_accepts_empty_data() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/productos/pr1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Producto eliminado"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in_store("abc123"));
    client.delete_producto("pr1").await.expect("delete");
}

#[tokio::test]
async fn pedido_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pedidos"))
        .and(body_json(json!({"productos": [{"producto": "pr1", "cantidad": 2}]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(pedido_json("PENDIENTE"))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/pedidos/pe1/estado"))
        .and(body_json(json!({"estado": "CONFIRMADO"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(pedido_json("CONFIRMADO"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in_store("abc123"));
    let pedido = client
        .create_pedido(&NewPedido::default().with_item("pr1", 2))
        .await
        .expect("create");
    assert_eq!(pedido.estado, PedidoEstado::Pendiente);
    assert_eq!(pedido.cliente.id(), "c1");

    let confirmed = client
        .advance_pedido(&pedido, PedidoEstado::Confirmado)
        .await
        .expect("advance");
    assert_eq!(confirmed.estado, PedidoEstado::Confirmado);

    // Going backwards never reaches the network (the PATCH mock expects one call).
    let failure = client
        .advance_pedido(&confirmed, PedidoEstado::Pendiente)
        .await
        .unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::ValidationFailed);
}

#[tokio::test]
async fn pedidos_by_cliente_and_entrega() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pedidos/cliente/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([pedido_json("ENVIADO")]))))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/entregas"))
        .and(body_json(json!({"pedido": "pe1", "repartidor": "Luis"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(json!({
            "_id": "e1", "pedido": "pe1", "repartidor": "Luis", "estado": "PENDIENTE"
        }))))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/entregas/e1/estado"))
        .and(body_json(json!({"estado": "EN_CAMINO"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "_id": "e1", "pedido": {"_id": "pe1"}, "estado": "EN_CAMINO"
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in_store("abc123"));
    let pedidos = client.list_pedidos_by_cliente("c1").await.expect("pedidos");
    assert_eq!(pedidos.items[0].estado, PedidoEstado::Enviado);

    let entrega = client
        .create_entrega(&NewEntrega {
            pedido: "pe1".into(),
            repartidor: Some("Luis".into()),
            direccion: None,
            fecha_estimada: None,
        })
        .await
        .expect("entrega");
    assert_eq!(entrega.estado, EntregaEstado::Pendiente);

    let entrega = client
        .update_entrega_estado(&entrega.id, EntregaEstado::EnCamino)
        .await
        .expect("estado");
    assert_eq!(entrega.pedido_id, "pe1");
    assert_eq!(entrega.estado, EntregaEstado::EnCamino);
}

#[tokio::test]
async fn view_scope_publishes_repository_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([producto_json("pr1", "Miel")]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/productos/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false, "message": "Producto no encontrado"
        })))
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server, logged_in_store("abc123")));
    let listado = StateHolder::new();
    let detalle = StateHolder::new();
    let mut scope = ViewScope::new();

    let c = Arc::clone(&client);
    scope.launch(&listado, async move { c.list_productos().await });
    let c = Arc::clone(&client);
    scope.launch(&detalle, async move { c.get_producto("nope").await });
    scope.join_all().await;

    assert_eq!(listado.current().loaded().map(|p| p.items.len()), Some(1));
    assert_eq!(
        detalle.current(),
        ViewState::Failed("Producto no encontrado".into())
    );
}
