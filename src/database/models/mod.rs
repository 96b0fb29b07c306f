use serde_json::Value;
use thiserror::Error;

pub mod alert;
pub mod crop_calendar;
pub mod farmer;
pub mod faq;
pub mod knowledge_base;
pub mod recommendation;
pub mod setting;
pub mod yield_record;

pub use alert::AlertInput;
pub use crop_calendar::CropCalendarInput;
pub use farmer::FarmerRegistration;
pub use faq::FaqInput;
pub use knowledge_base::ArticleInput;
pub use setting::SettingInput;
pub use yield_record::YieldRecordInput;

/// Payload problems detected before any statement is sent
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{0}")]
    Invalid(String),
}

/// Collects required fields as they are read so every gap is reported at once
#[derive(Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    /// Non-blank text, or record the field as missing
    pub fn text(&mut self, name: &'static str, value: &Option<String>) -> String {
        match non_blank(value) {
            Some(v) => v.to_string(),
            None => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    pub fn number(&mut self, name: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(v) if v.is_finite() => v,
            _ => {
                self.missing.push(name);
                0.0
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(self.missing))
        }
    }
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Optional text column: blank becomes NULL
pub(crate) fn optional_text(value: &Option<String>) -> Value {
    non_blank(value).map(Value::from).unwrap_or(Value::Null)
}

/// Optional text column with a default for blanks
pub(crate) fn text_or(value: &Option<String>, default: &str) -> String {
    non_blank(value).unwrap_or(default).to_string()
}

/// Number sent either as JSON or as numeric text (HTML forms post strings).
/// Absent, null or blank is `None`; anything else non-numeric is invalid.
pub(crate) fn lenient_number(field: &str, value: Option<&Value>) -> Result<Option<f64>, ValidationError> {
    let invalid = || ValidationError::Invalid(format!("{} must be a number", field));
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(invalid),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}

pub(crate) fn one_of(field: &str, value: String, allowed: &[&str]) -> Result<String, ValidationError> {
    if allowed.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(ValidationError::Invalid(format!(
            "{} must be one of: {}",
            field,
            allowed.join(", ")
        )))
    }
}
