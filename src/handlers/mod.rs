// handlers/mod.rs - Two-tier handler layout
//
// Public (no header) → Admin (admin header checked by `middleware::admin_gate`)

pub mod admin;
pub mod public;
