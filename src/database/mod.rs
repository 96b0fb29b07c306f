pub mod gateway;
pub mod manager;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod schema;

pub use gateway::{Gateway, Outcome, PgGateway, Row, Statement};
pub use manager::{DatabaseError, DatabaseManager};
pub use query_builder::{present, Assignment, SelectQuery};
pub use repository::{count_rows, Repository};
