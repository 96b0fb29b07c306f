use serde::Deserialize;

use super::{text_or, Required, ValidationError};
use crate::database::query_builder::Assignment;

pub const TABLE: &str = "settings";
pub const LIST_LIMIT: u32 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingInput {
    pub category: Option<String>,
    pub setting_key: Option<String>,
    pub setting_value: Option<String>,
}

impl SettingInput {
    pub fn into_assignments(self) -> Result<Vec<Assignment>, ValidationError> {
        let mut required = Required::default();
        let key = required.text("settingKey", &self.setting_key);
        let value = required.text("settingValue", &self.setting_value);
        required.finish()?;

        Ok(vec![
            Assignment::new("category", text_or(&self.category, "general")),
            Assignment::new("setting_key", key),
            Assignment::new("setting_value", value),
        ])
    }
}
