use serde::Deserialize;

use super::{optional_text, text_or, Required, ValidationError};
use crate::database::query_builder::Assignment;

pub const TABLE: &str = "knowledge_base";
pub const LIST_LIMIT: u32 = 50;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub author: Option<String>,
}

impl ArticleInput {
    pub fn into_assignments(self) -> Result<Vec<Assignment>, ValidationError> {
        let mut required = Required::default();
        let title = required.text("title", &self.title);
        let content = required.text("content", &self.content);
        let category = required.text("category", &self.category);
        required.finish()?;

        Ok(vec![
            Assignment::new("title", title),
            Assignment::new("content", content),
            Assignment::new("category", category),
            Assignment::new("tags", optional_text(&self.tags)),
            Assignment::new("author", text_or(&self.author, "Admin")),
        ])
    }
}
