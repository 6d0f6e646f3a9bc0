pub mod queries;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};

pub use queries::questions::{NewQuestion, Question};

use crate::settings::DatabaseSettings;

const CREATE_QUESTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS perguntas (
    id SERIAL PRIMARY KEY,
    nome TEXT NOT NULL,
    departamento TEXT NOT NULL,
    pergunta TEXT NOT NULL,
    resposta TEXT,
    faq BOOLEAN NOT NULL DEFAULT FALSE,
    data TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Builds the pool without opening a connection yet, so the process can start
/// while the database is unreachable. Every acquire gives up after
/// `acquire_timeout_secs`.
pub fn establish_connection(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let options = settings.connect_options()?;
    Ok(PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect_lazy_with(options))
}

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_QUESTIONS_TABLE).execute(pool).await?;
    Ok(())
}

/// Startup variant of [`init_schema`]: a failure is logged and the caller
/// carries on, later queries report the missing table themselves.
pub async fn ensure_schema(pool: &PgPool) {
    tracing::info!("Creating table perguntas if missing...");
    match init_schema(pool).await {
        Ok(()) => tracing::info!("Table perguntas is ready"),
        Err(error) => tracing::error!("Failed to create table perguntas: {error}"),
    }
}

/// Everything the HTTP handlers need from persistence.
///
/// `answer_question` and `delete_question` report the number of affected rows;
/// `toggle_faq` returns the new flag, or `None` when the question does not exist.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn server_time(&self) -> sqlx::Result<DateTime<Utc>>;
    async fn create_question(&self, question: NewQuestion) -> sqlx::Result<i32>;
    async fn get_all_questions(&self) -> sqlx::Result<Vec<Question>>;
    async fn get_questions_by_department(&self, departamento: &str) -> sqlx::Result<Vec<Question>>;
    async fn answer_question(&self, id: i32, resposta: &str) -> sqlx::Result<u64>;
    async fn delete_question(&self, id: i32) -> sqlx::Result<u64>;
    async fn toggle_faq(&self, id: i32) -> sqlx::Result<Option<bool>>;
    async fn get_faq_questions(&self) -> sqlx::Result<Vec<Question>>;
}

#[async_trait]
impl QuestionStore for PgPool {
    async fn server_time(&self) -> sqlx::Result<DateTime<Utc>> {
        queries::questions::server_time(self).await
    }

    async fn create_question(&self, question: NewQuestion) -> sqlx::Result<i32> {
        queries::questions::create_question(self, &question).await
    }

    async fn get_all_questions(&self) -> sqlx::Result<Vec<Question>> {
        queries::questions::get_all_questions(self).await
    }

    async fn get_questions_by_department(
        &self,
        departamento: &str,
    ) -> sqlx::Result<Vec<Question>> {
        queries::questions::get_questions_by_department(self, departamento).await
    }

    async fn answer_question(&self, id: i32, resposta: &str) -> sqlx::Result<u64> {
        queries::questions::answer_question(self, id, resposta).await
    }

    async fn delete_question(&self, id: i32) -> sqlx::Result<u64> {
        queries::questions::delete_question(self, id).await
    }

    async fn toggle_faq(&self, id: i32) -> sqlx::Result<Option<bool>> {
        queries::questions::toggle_faq(self, id).await
    }

    async fn get_faq_questions(&self) -> sqlx::Result<Vec<Question>> {
        queries::questions::get_faq_questions(self).await
    }
}
