mod faq;
mod health;
mod questions;

use serde::Serialize;

pub use faq::faq_router;
pub use health::health_router;
pub use questions::questions_router;

pub use super::error::{ApiError, ApiResponse};

#[derive(Serialize)]
pub struct Message {
    pub msg: &'static str,
}

// presence-only: absent and "" are both missing, whitespace counts as a value
pub(crate) fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
