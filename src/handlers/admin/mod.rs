// handlers/admin/mod.rs - Admin handlers
//
// Everything here is mounted under /api/admin behind `admin_gate`, which
// places an `AdminGrant` in the request extensions before any handler runs.

pub mod alerts;
pub mod analytics;
pub mod crop_calendar;
pub mod farmers;
pub mod faqs;
pub mod knowledge_base;
pub mod settings;
