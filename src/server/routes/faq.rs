use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::{
    db::Question,
    server::app::{AppState, Store},
    telemetry::record_operation,
};

use super::{ApiError, ApiResponse, Message};

async fn get_faq(State(store): State<Store>) -> ApiResponse<Json<Vec<Question>>> {
    Ok(Json(store.get_faq_questions().await?))
}

async fn toggle_faq(State(store): State<Store>, Path(id): Path<i32>) -> ApiResponse<Json<Message>> {
    let faq = store
        .toggle_faq(id)
        .await?
        .ok_or(ApiError::NotFound("Pergunta não encontrada."))?;
    record_operation("toggle_faq");

    let msg = if faq {
        "Pergunta marcada como FAQ!"
    } else {
        "Pergunta removida do FAQ!"
    };
    Ok(Json(Message { msg }))
}

pub fn faq_router(state: AppState) -> Router {
    Router::new()
        .route("/faq", get(get_faq))
        .route("/perguntas/{id}/faq", post(toggle_faq))
        .with_state(state)
}
