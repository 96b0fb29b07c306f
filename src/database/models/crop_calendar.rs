use serde::Deserialize;
use serde_json::Value;

use super::{optional_text, text_or, Required, ValidationError};
use crate::database::query_builder::Assignment;

pub const TABLE: &str = "crop_calendar";
pub const LIST_LIMIT: u32 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCalendarInput {
    pub crop_name: Option<String>,
    pub scientific_name: Option<String>,
    pub planting_season: Option<String>,
    pub harvesting_season: Option<String>,
    pub duration_days: Option<i64>,
    pub soil_type: Option<String>,
    pub temperature_range: Option<String>,
    pub rainfall_requirement: Option<String>,
    pub key_activities: Option<String>,
    pub optimal_conditions: Option<String>,
    pub region: Option<String>,
}

impl CropCalendarInput {
    pub fn into_assignments(self) -> Result<Vec<Assignment>, ValidationError> {
        let mut required = Required::default();
        let crop_name = required.text("cropName", &self.crop_name);
        let planting_season = required.text("plantingSeason", &self.planting_season);
        let harvesting_season = required.text("harvestingSeason", &self.harvesting_season);
        required.finish()?;

        if matches!(self.duration_days, Some(d) if d <= 0) {
            return Err(ValidationError::Invalid("durationDays must be positive".to_string()));
        }

        Ok(vec![
            Assignment::new("crop_name", crop_name),
            Assignment::new("scientific_name", optional_text(&self.scientific_name)),
            Assignment::new("planting_season", planting_season),
            Assignment::new("harvesting_season", harvesting_season),
            Assignment::cast(
                "duration_days",
                self.duration_days.map(Value::from).unwrap_or(Value::Null),
                "integer",
            ),
            Assignment::new("soil_type", optional_text(&self.soil_type)),
            Assignment::new("temperature_range", optional_text(&self.temperature_range)),
            Assignment::new("rainfall_requirement", optional_text(&self.rainfall_requirement)),
            Assignment::new("key_activities", optional_text(&self.key_activities)),
            Assignment::new("optimal_conditions", optional_text(&self.optimal_conditions)),
            Assignment::new("region", text_or(&self.region, "All")),
        ])
    }
}
