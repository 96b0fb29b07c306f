//! Seeded, read-only recommendation tables

pub const CROP_TABLE: &str = "crop_recommendations";
pub const FERTILIZER_TABLE: &str = "fertilizer_recommendations";

pub const CROP_COLUMNS: &[&str] = &[
    "id",
    "soil_type",
    "temperature",
    "rainfall",
    "recommended_crop",
    "crop_details",
];

pub const FERTILIZER_COLUMNS: &[&str] = &[
    "id",
    "soil_type",
    "crop_type",
    "nutrient_deficiency",
    "fertilizer_type",
    "application_method",
    "dosage",
    "benefits",
    "timing",
    "effectiveness",
];

/// Row caps for the recommendation lists
pub const CROP_LIMIT: u32 = 5;
pub const FERTILIZER_LIMIT: u32 = 5;
