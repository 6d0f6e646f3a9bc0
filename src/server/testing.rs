use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::db::memory::MemoryStore;
use crate::server::app::{router, AppState};

pub fn setup() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (router(AppState::new(store.clone())), store)
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// JSON body, or `Value::Null` when the body is not JSON.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = call(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn send_text(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let (status, bytes) = call(app, method, uri, None).await;
    (status, String::from_utf8(bytes).unwrap())
}

pub async fn submit(app: &Router, nome: &str, departamento: &str, pergunta: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/perguntas",
        Some(serde_json::json!({
            "nome": nome,
            "departamento": departamento,
            "pergunta": pergunta,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}

pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
