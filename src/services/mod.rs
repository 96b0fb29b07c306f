pub mod analytics_service;
pub mod dashboard_service;
pub mod search_service;

pub use analytics_service::{analytics, Analytics};
pub use dashboard_service::{dashboard_stats, DashboardStats};
pub use search_service::{search, SearchHit};
