#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn vehicles() -> Value {
    json!([
        {"id": "A", "name": "Van A", "base_price": 100},
        {"id": "B", "name": "Truck B", "base_price": 45990.5}
    ])
}

pub fn colors() -> Value {
    json!([
        {"code": "BLK", "name": "Black", "price": 0},
        {"code": "RED", "name": "Flame red", "price": 490}
    ])
}

pub fn upholsteries() -> Value {
    json!([
        {"code": "CLOTH", "name": "Cloth", "price": 0},
        {"code": "LEATHER", "name": "Leather", "price": 50}
    ])
}

pub fn factory_options() -> Value {
    json!([
        {"code": "O1", "name": "Tow bar", "price": 20},
        {"code": "O2", "name": "Heated seats", "price": 300}
    ])
}

pub fn accessories() -> Value {
    json!([
        {"code": "X1", "name": "Floor mats", "price": 89.9}
    ])
}

/// Starts a mock backend serving the sample catalog on all five endpoints.
pub async fn catalog_server() -> MockServer {
    let server = MockServer::start().await;
    for (endpoint, body) in [
        ("/api/catalog/vehicles", vehicles()),
        ("/api/catalog/colors", colors()),
        ("/api/catalog/upholsteries", upholsteries()),
        ("/api/catalog/factory-options", factory_options()),
        ("/api/catalog/accessories", accessories()),
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }
    server
}

/// Mounts an offer endpoint answering every POST with `status` and `body`.
pub async fn mount_offers(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/api/offers"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
