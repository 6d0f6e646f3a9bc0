use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::server::serializers::serialize_locale_timestamp;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub nome: String,
    pub departamento: String,
    pub pergunta: String,
    pub resposta: Option<String>,
    pub faq: bool,
    #[serde(serialize_with = "serialize_locale_timestamp")]
    pub data: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub nome: String,
    pub departamento: String,
    pub pergunta: String,
    pub data: DateTime<Utc>,
}

pub async fn server_time(pool: &PgPool) -> sqlx::Result<DateTime<Utc>> {
    sqlx::query_scalar("SELECT NOW()").fetch_one(pool).await
}

pub async fn create_question(pool: &PgPool, question: &NewQuestion) -> sqlx::Result<i32> {
    sqlx::query_scalar(
        r#"
        INSERT INTO perguntas (nome, departamento, pergunta, data)
        VALUES ($1, $2, $3, $4) RETURNING id
        "#,
    )
    .bind(&question.nome)
    .bind(&question.departamento)
    .bind(&question.pergunta)
    .bind(question.data)
    .fetch_one(pool)
    .await
}

pub async fn get_all_questions(pool: &PgPool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, nome, departamento, pergunta, resposta, faq, data FROM perguntas ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_by_department(
    pool: &PgPool,
    departamento: &str,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, nome, departamento, pergunta, resposta, faq, data FROM perguntas
        WHERE departamento = $1 ORDER BY id DESC
        "#,
    )
    .bind(departamento)
    .fetch_all(pool)
    .await
}

pub async fn answer_question(pool: &PgPool, id: i32, resposta: &str) -> sqlx::Result<u64> {
    let result = sqlx::query("UPDATE perguntas SET resposta = $1 WHERE id = $2")
        .bind(resposta)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_question(pool: &PgPool, id: i32) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM perguntas WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

// Read and write happen in one statement. None means no row has this id.
pub async fn toggle_faq(pool: &PgPool, id: i32) -> sqlx::Result<Option<bool>> {
    sqlx::query_scalar("UPDATE perguntas SET faq = NOT faq WHERE id = $1 RETURNING faq")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_faq_questions(pool: &PgPool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, nome, departamento, pergunta, resposta, faq, data FROM perguntas
        WHERE faq = TRUE ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
