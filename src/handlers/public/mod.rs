// handlers/public/mod.rs - Public handlers (no admin header required)
//
// Read access to every resource, farmer registration, yield record writes,
// search and the dashboard.

pub mod alerts;
pub mod crop_calendar;
pub mod dashboard;
pub mod faqs;
pub mod knowledge_base;
pub mod recommendations;
pub mod register;
pub mod root;
pub mod search;
pub mod yield_records;

pub use recommendations::{crop_types, crops, fertilizers, soil_types};
pub use register::register;
pub use root::{health, root};
