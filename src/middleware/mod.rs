pub mod admin;
pub mod extract;
pub mod response;

pub use admin::admin_gate;
pub use extract::{JsonBody, QueryParams, RecordId};
pub use response::{ApiResponse, ApiResult};
