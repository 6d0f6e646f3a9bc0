use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{NewQuestion, Question, QuestionStore};

/// In-process stand-in for `PgPool` that answers the same way the SQL does.
/// `close` makes every call fail with `PoolClosed`.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Question>>,
    next_id: Mutex<i32>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn get(&self, id: i32) -> Option<Question> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_open(&self) -> sqlx::Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }

    fn select(&self, filter: impl Fn(&Question) -> bool) -> sqlx::Result<Vec<Question>> {
        self.check_open()?;
        let mut out: Vec<Question> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| filter(q))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(out)
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn server_time(&self) -> sqlx::Result<DateTime<Utc>> {
        self.check_open()?;
        Ok(Utc::now())
    }

    async fn create_question(&self, question: NewQuestion) -> sqlx::Result<i32> {
        self.check_open()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.rows.lock().unwrap().push(Question {
            id: *next_id,
            nome: question.nome,
            departamento: question.departamento,
            pergunta: question.pergunta,
            resposta: None,
            faq: false,
            data: question.data,
        });
        Ok(*next_id)
    }

    async fn get_all_questions(&self) -> sqlx::Result<Vec<Question>> {
        self.select(|_| true)
    }

    async fn get_questions_by_department(
        &self,
        departamento: &str,
    ) -> sqlx::Result<Vec<Question>> {
        self.select(|q| q.departamento == departamento)
    }

    async fn answer_question(&self, id: i32, resposta: &str) -> sqlx::Result<u64> {
        self.check_open()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(match rows.iter_mut().find(|q| q.id == id) {
            Some(q) => {
                q.resposta = Some(resposta.to_owned());
                1
            }
            None => 0,
        })
    }

    async fn delete_question(&self, id: i32) -> sqlx::Result<u64> {
        self.check_open()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|q| q.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn toggle_faq(&self, id: i32) -> sqlx::Result<Option<bool>> {
        self.check_open()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|q| q.id == id).map(|q| {
            q.faq = !q.faq;
            q.faq
        }))
    }

    async fn get_faq_questions(&self) -> sqlx::Result<Vec<Question>> {
        self.select(|q| q.faq)
    }
}
