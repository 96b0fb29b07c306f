use tracing::info;

use crate::database::gateway::{Gateway, Statement};
use crate::database::manager::DatabaseError;

/// Idempotent DDL for every table, in dependency order
pub const TABLES: &[(&str, &str)] = &[
    (
        "farmers",
        "CREATE TABLE IF NOT EXISTS farmers (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            phone VARCHAR(10) NOT NULL CONSTRAINT farmers_phone_key UNIQUE,
            location TEXT NOT NULL,
            password TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "crop_recommendations",
        "CREATE TABLE IF NOT EXISTS crop_recommendations (
            id BIGSERIAL PRIMARY KEY,
            soil_type TEXT NOT NULL,
            temperature DOUBLE PRECISION NOT NULL,
            rainfall DOUBLE PRECISION NOT NULL,
            recommended_crop TEXT NOT NULL,
            crop_details TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "fertilizer_recommendations",
        "CREATE TABLE IF NOT EXISTS fertilizer_recommendations (
            id BIGSERIAL PRIMARY KEY,
            soil_type TEXT NOT NULL,
            crop_type TEXT NOT NULL,
            nutrient_deficiency TEXT NOT NULL,
            fertilizer_type TEXT NOT NULL,
            application_method TEXT,
            dosage TEXT,
            benefits TEXT,
            timing TEXT,
            effectiveness INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "yield_records",
        "CREATE TABLE IF NOT EXISTS yield_records (
            id BIGSERIAL PRIMARY KEY,
            crop_type TEXT NOT NULL,
            variety TEXT,
            planting_date DATE NOT NULL,
            harvest_date DATE NOT NULL,
            yield_amount DOUBLE PRECISION NOT NULL,
            yield_unit TEXT NOT NULL DEFAULT 'kg',
            notes TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "faqs",
        "CREATE TABLE IF NOT EXISTS faqs (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT 'general',
            status TEXT NOT NULL DEFAULT 'active',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "alerts",
        "CREATE TABLE IF NOT EXISTS alerts (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            type TEXT NOT NULL DEFAULT 'info',
            status TEXT NOT NULL DEFAULT 'new',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "crop_calendar",
        "CREATE TABLE IF NOT EXISTS crop_calendar (
            id BIGSERIAL PRIMARY KEY,
            crop_name TEXT NOT NULL,
            scientific_name TEXT,
            planting_season TEXT NOT NULL,
            harvesting_season TEXT NOT NULL,
            duration_days INTEGER,
            soil_type TEXT,
            temperature_range TEXT,
            rainfall_requirement TEXT,
            key_activities TEXT,
            optimal_conditions TEXT,
            region TEXT NOT NULL DEFAULT 'All',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "knowledge_base",
        "CREATE TABLE IF NOT EXISTS knowledge_base (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            category TEXT NOT NULL,
            tags TEXT,
            author TEXT NOT NULL DEFAULT 'Admin',
            views BIGINT NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
    (
        "settings",
        "CREATE TABLE IF NOT EXISTS settings (
            id BIGSERIAL PRIMARY KEY,
            category TEXT NOT NULL DEFAULT 'general',
            setting_key TEXT NOT NULL CONSTRAINT settings_setting_key_key UNIQUE,
            setting_value TEXT NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ),
];

/// Create any missing tables
pub async fn initialize(gateway: &dyn Gateway) -> Result<(), DatabaseError> {
    for (table, ddl) in TABLES {
        gateway.execute(&Statement::new(*ddl)).await?;
        info!("Ensured table '{}'", table);
    }
    Ok(())
}
