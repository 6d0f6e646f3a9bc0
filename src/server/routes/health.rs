use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::server::app::{AppState, Store};

// plain text on both paths, unlike the JSON routes
async fn index(State(store): State<Store>) -> (StatusCode, String) {
    match store.server_time().await {
        Ok(now) => (
            StatusCode::OK,
            format!("API funcionando! Hora do servidor: {now}"),
        ),
        Err(error) => {
            tracing::error!("Health check failed: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Erro ao conectar com o banco: {error}"),
            )
        }
    }
}

pub fn health_router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}
