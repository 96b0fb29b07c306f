use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::{lenient_number, optional_text, text_or, Required, ValidationError};
use crate::database::query_builder::Assignment;

pub const TABLE: &str = "yield_records";
pub const LIST_LIMIT: u32 = 100;
pub const RECENT_LIMIT: u32 = 5;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldRecordInput {
    pub crop_type: Option<String>,
    pub variety: Option<String>,
    pub planting_date: Option<String>,
    pub harvest_date: Option<String>,
    /// JSON number or numeric text
    pub yield_amount: Option<Value>,
    pub yield_unit: Option<String>,
    pub notes: Option<String>,
}

impl YieldRecordInput {
    pub fn into_assignments(self) -> Result<Vec<Assignment>, ValidationError> {
        let amount = lenient_number("yieldAmount", self.yield_amount.as_ref())?;

        let mut required = Required::default();
        let crop_type = required.text("cropType", &self.crop_type);
        let planting_date = required.text("plantingDate", &self.planting_date);
        let harvest_date = required.text("harvestDate", &self.harvest_date);
        let yield_amount = required.number("yieldAmount", amount);
        required.finish()?;

        let planting_date = parse_date("plantingDate", &planting_date)?;
        let harvest_date = parse_date("harvestDate", &harvest_date)?;
        if yield_amount < 0.0 {
            return Err(ValidationError::Invalid("yieldAmount must not be negative".to_string()));
        }

        Ok(vec![
            Assignment::new("crop_type", crop_type),
            Assignment::new("variety", optional_text(&self.variety)),
            Assignment::cast("planting_date", planting_date, "date"),
            Assignment::cast("harvest_date", harvest_date, "date"),
            Assignment::new("yield_amount", yield_amount),
            Assignment::new("yield_unit", text_or(&self.yield_unit, "kg")),
            Assignment::new("notes", optional_text(&self.notes)),
        ])
    }
}

/// Normalize a `YYYY-MM-DD` date or reject it
fn parse_date(field: &str, value: &str) -> Result<String, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| ValidationError::Invalid(format!("{} must be a date in YYYY-MM-DD format", field)))
}
