use serde::Deserialize;

use super::{one_of, text_or, Required, ValidationError};
use crate::database::query_builder::Assignment;

pub const TABLE: &str = "faqs";
pub const PUBLIC_LIMIT: u32 = 50;
pub const ADMIN_LIMIT: u32 = 100;
pub const STATUSES: &[&str] = &["active", "inactive"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl FaqInput {
    pub fn into_assignments(self) -> Result<Vec<Assignment>, ValidationError> {
        let mut required = Required::default();
        let question = required.text("question", &self.question);
        let answer = required.text("answer", &self.answer);
        required.finish()?;

        let status = one_of("status", text_or(&self.status, "active"), STATUSES)?;

        Ok(vec![
            Assignment::new("question", question),
            Assignment::new("answer", answer),
            Assignment::new("category", text_or(&self.category, "general")),
            Assignment::new("status", status),
        ])
    }
}
