use async_trait::async_trait;
use futures::TryStreamExt;
use serde_json::{Map, Value};
use sqlx::{postgres::PgRow, Column, PgPool, Row as _, TypeInfo};

use crate::database::manager::DatabaseError;

/// A single result row keyed by column name
pub type Row = Map<String, Value>;

/// SQL text plus positional parameters. Values only ever travel in `params`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into(), params: vec![] }
    }

    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// Result descriptor for INSERT/UPDATE/DELETE
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub rows_affected: u64,
    pub last_insert_id: Option<i64>,
}

/// Persistence gateway shared by every handler
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Run a statement and return its rows
    async fn query(&self, statement: &Statement) -> Result<Vec<Row>, DatabaseError>;

    /// Run a mutation. An `id` column returned via `RETURNING id` becomes `last_insert_id`.
    async fn execute(&self, statement: &Statement) -> Result<Outcome, DatabaseError>;

    /// Trivial round trip used by the health probe
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// PostgreSQL gateway over a bounded sqlx pool
#[derive(Clone)]
pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Gateway for PgGateway {
    async fn query(&self, statement: &Statement) -> Result<Vec<Row>, DatabaseError> {
        let query_start = std::time::Instant::now();

        let mut query = sqlx::query(&statement.sql);
        for param in &statement.params {
            query = bind_param(query, param);
        }

        let rows = query.fetch_all(&self.pool).await?;
        let records = rows.iter().map(row_to_map).collect::<Vec<_>>();

        tracing::debug!(
            "query returned {} rows in {}ms",
            records.len(),
            query_start.elapsed().as_millis()
        );
        Ok(records)
    }

    async fn execute(&self, statement: &Statement) -> Result<Outcome, DatabaseError> {
        let mut query = sqlx::query(&statement.sql);
        for param in &statement.params {
            query = bind_param(query, param);
        }

        let mut outcome = Outcome::default();
        let mut results = query.fetch_many(&self.pool);
        while let Some(step) = results.try_next().await? {
            match step {
                sqlx::Either::Left(done) => outcome.rows_affected += done.rows_affected(),
                sqlx::Either::Right(row) => {
                    if outcome.last_insert_id.is_none() {
                        outcome.last_insert_id = row.try_get::<i64, _>("id").ok();
                    }
                }
            }
        }

        tracing::debug!("statement affected {} rows", outcome.rows_affected);
        Ok(outcome)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Bind a JSON value as a typed PostgreSQL parameter
fn bind_param<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
    v: &'q Value,
) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        Value::Array(_) | Value::Object(_) => q.bind(v),
    }
}

fn row_to_map(row: &PgRow) -> Row {
    let mut record = Map::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value = column_value(row, index, column.type_info().name());
        record.insert(column.name().to_string(), value);
    }
    record
}

/// Decode one column into JSON according to its PostgreSQL type
fn column_value(row: &PgRow, index: usize, type_name: &str) -> Value {
    match type_name {
        "INT2" => row
            .try_get::<Option<i16>, _>(index)
            .ok()
            .flatten()
            .map(Value::from)
            .unwrap_or(Value::Null),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)
            .ok()
            .flatten()
            .map(Value::from)
            .unwrap_or(Value::Null),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::from)
            .unwrap_or(Value::Null),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)
            .ok()
            .flatten()
            .map(|f| Value::from(f as f64))
            .unwrap_or(Value::Null),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .map(Value::from)
            .unwrap_or(Value::Null),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(Value::String)
            .unwrap_or(Value::Null),
        "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(index)
            .ok()
            .flatten()
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(index)
            .ok()
            .flatten()
            .map(|t| Value::String(t.to_rfc3339()))
            .unwrap_or(Value::Null),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(index)
            .ok()
            .flatten()
            .map(|t| Value::String(t.format("%Y-%m-%dT%H:%M:%S").to_string()))
            .unwrap_or(Value::Null),
        "JSON" | "JSONB" => row
            .try_get::<Option<Value>, _>(index)
            .ok()
            .flatten()
            .unwrap_or(Value::Null),
        other => {
            tracing::warn!("Unhandled PostgreSQL type: {}, returning null", other);
            Value::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn statement_collects_params_in_order() {
        let stmt = Statement::new("SELECT * FROM faqs WHERE id = $1 AND status = $2")
            .bind(7)
            .bind("active");
        assert_eq!(stmt.params, vec![json!(7), json!("active")]);
        assert!(!stmt.sql.contains("active"));
    }
}
