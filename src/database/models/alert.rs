use serde::Deserialize;

use super::{one_of, text_or, Required, ValidationError};
use crate::database::query_builder::Assignment;

pub const TABLE: &str = "alerts";
pub const PUBLIC_LIMIT: u32 = 10;
pub const ADMIN_LIMIT: u32 = 100;
pub const TYPES: &[&str] = &["info", "warning", "danger", "success"];
pub const STATUSES: &[&str] = &["new", "read", "archived"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInput {
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub status: Option<String>,
}

impl AlertInput {
    pub fn into_assignments(self) -> Result<Vec<Assignment>, ValidationError> {
        let mut required = Required::default();
        let title = required.text("title", &self.title);
        let message = required.text("message", &self.message);
        required.finish()?;

        let alert_type = one_of("type", text_or(&self.alert_type, "info"), TYPES)?;
        let status = one_of("status", text_or(&self.status, "new"), STATUSES)?;

        Ok(vec![
            Assignment::new("title", title),
            Assignment::new("message", message),
            Assignment::new("type", alert_type),
            Assignment::new("status", status),
        ])
    }
}
