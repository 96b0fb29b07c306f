use serde::Deserialize;

use super::{Required, ValidationError};
use crate::auth::hash_password;
use crate::database::query_builder::Assignment;

pub const TABLE: &str = "farmers";

/// Columns safe to return; the stored credential is never selected
pub const PUBLIC_COLUMNS: &[&str] = &["id", "name", "phone", "location", "created_at"];

pub const PHONE_CONSTRAINT: &str = "farmers_phone_key";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerRegistration {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub password: Option<String>,
}

impl FarmerRegistration {
    pub fn into_assignments(self) -> Result<Vec<Assignment>, ValidationError> {
        let mut required = Required::default();
        let name = required.text("name", &self.name);
        let phone = required.text("phone", &self.phone);
        let location = required.text("location", &self.location);
        let password = required.text("password", &self.password);
        required.finish()?;

        if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::Invalid(
                "Phone number must be exactly 10 digits".to_string(),
            ));
        }
        if password.chars().count() < 6 {
            return Err(ValidationError::Invalid(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        Ok(vec![
            Assignment::new("name", name),
            Assignment::new("phone", phone),
            Assignment::new("location", location),
            Assignment::new("password", hash_password(&password)),
        ])
    }
}
