use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    db::{NewQuestion, Question},
    server::app::{AppState, Store},
    telemetry::record_operation,
};

use super::{required, ApiError, ApiResponse, Message};

const MISSING_FIELDS: &str = "Preencha todos os campos obrigatórios.";
const EMPTY_ANSWER: &str = "A resposta não pode estar vazia.";

#[derive(Deserialize)]
struct NewQuestionBody {
    nome: Option<String>,
    departamento: Option<String>,
    pergunta: Option<String>,
}

#[derive(Deserialize)]
struct AnswerBody {
    resposta: Option<String>,
}

#[derive(Serialize)]
struct Created {
    msg: &'static str,
    id: i32,
}

async fn create_question(
    State(store): State<Store>,
    body: Result<Json<NewQuestionBody>, JsonRejection>,
) -> ApiResponse<Json<Created>> {
    // an unreadable body is reported like a missing field
    let Ok(Json(body)) = body else {
        return Err(ApiError::BadRequest(MISSING_FIELDS));
    };
    let (Some(nome), Some(departamento), Some(pergunta)) = (
        required(body.nome),
        required(body.departamento),
        required(body.pergunta),
    ) else {
        return Err(ApiError::BadRequest(MISSING_FIELDS));
    };

    let id = store
        .create_question(NewQuestion {
            nome,
            departamento,
            pergunta,
            data: Utc::now(),
        })
        .await?;
    record_operation("create");
    tracing::info!(id, "Question submitted");

    Ok(Json(Created {
        msg: "Pergunta enviada com sucesso!",
        id,
    }))
}

async fn get_questions(State(store): State<Store>) -> ApiResponse<Json<Vec<Question>>> {
    Ok(Json(store.get_all_questions().await?))
}

async fn get_questions_by_department(
    State(store): State<Store>,
    Path(departamento): Path<String>,
) -> ApiResponse<Json<Vec<Question>>> {
    Ok(Json(store.get_questions_by_department(&departamento).await?))
}

async fn answer_question(
    State(store): State<Store>,
    Path(id): Path<i32>,
    body: Result<Json<AnswerBody>, JsonRejection>,
) -> ApiResponse<Json<Message>> {
    let Some(resposta) = body.ok().and_then(|Json(body)| required(body.resposta)) else {
        return Err(ApiError::BadRequest(EMPTY_ANSWER));
    };

    let updated = store.answer_question(id, &resposta).await?;
    if updated == 0 {
        tracing::debug!(id, "Answer for unknown question ignored");
    } else {
        record_operation("answer");
    }

    Ok(Json(Message {
        msg: "Pergunta respondida com sucesso!",
    }))
}

async fn delete_question(
    State(store): State<Store>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<Message>> {
    let deleted = store.delete_question(id).await?;
    if deleted == 0 {
        tracing::debug!(id, "Delete of unknown question ignored");
    } else {
        record_operation("delete");
    }

    Ok(Json(Message {
        msg: "Pergunta excluída com sucesso!",
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/perguntas", get(get_questions).post(create_question))
        .route(
            "/perguntas/departamento/{departamento}",
            get(get_questions_by_department),
        )
        .route("/perguntas/{id}", delete(delete_question))
        .route("/perguntas/{id}/responder", post(answer_question))
        .with_state(state)
}
