use serde_json::Value;

use crate::database::gateway::{Gateway, Row, Statement};
use crate::database::manager::DatabaseError;
use crate::database::query_builder::{insert_statement, update_statement, Assignment, SelectQuery};

/// Table-scoped data access over an injected gateway
pub struct Repository<'a> {
    table: &'static str,
    gateway: &'a dyn Gateway,
}

impl<'a> Repository<'a> {
    pub fn new(table: &'static str, gateway: &'a dyn Gateway) -> Self {
        Self { table, gateway }
    }

    pub fn select(&self) -> SelectQuery {
        SelectQuery::new(self.table)
    }

    pub async fn select_any(&self, query: SelectQuery) -> Result<Vec<Row>, DatabaseError> {
        self.gateway.query(&query.build()).await
    }

    /// Fetch by id or fail with `NotFound`
    pub async fn select_404(&self, id: i64, columns: &[&'static str]) -> Result<Row, DatabaseError> {
        let query = self.select().columns(columns).filter_eq("id", Some(id)).limit(1);
        self.gateway
            .query(&query.build())
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::NotFound(format!("{} record {} not found", self.table, id)))
    }

    pub async fn insert(&self, assignments: Vec<Assignment>) -> Result<i64, DatabaseError> {
        let outcome = self.gateway.execute(&insert_statement(self.table, assignments)).await?;
        outcome
            .last_insert_id
            .ok_or_else(|| DatabaseError::QueryError(format!("insert into {} returned no id", self.table)))
    }

    /// Full-row replace; returns affected rows without checking existence first
    pub async fn update(&self, id: i64, assignments: Vec<Assignment>, touch: &[&'static str]) -> Result<u64, DatabaseError> {
        let outcome = self
            .gateway
            .execute(&update_statement(self.table, id, assignments, touch))
            .await?;
        Ok(outcome.rows_affected)
    }

    /// Returns affected rows; zero is not an error
    pub async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let statement = Statement::new(format!("DELETE FROM {} WHERE id = $1", self.table)).bind(id);
        Ok(self.gateway.execute(&statement).await?.rows_affected)
    }

    pub async fn count(&self, query: SelectQuery) -> Result<i64, DatabaseError> {
        count_rows(self.gateway, query).await
    }

    /// Alphabetical distinct values of one column, skipping NULLs
    pub async fn distinct(&self, column: &'static str) -> Result<Vec<Value>, DatabaseError> {
        let statement = Statement::new(format!(
            "SELECT DISTINCT {col} FROM {table} WHERE {col} IS NOT NULL ORDER BY {col}",
            col = column,
            table = self.table
        ));
        let rows = self.gateway.query(&statement).await?;
        Ok(rows.into_iter().filter_map(|mut row| row.remove(column)).collect())
    }
}

/// `SELECT COUNT(*)` over whatever filters the query carries
pub async fn count_rows(gateway: &dyn Gateway, query: SelectQuery) -> Result<i64, DatabaseError> {
    let rows = gateway
        .query(&query.columns(&["COUNT(*) AS count"]).build())
        .await?;
    Ok(rows
        .first()
        .and_then(|row| row.get("count"))
        .and_then(Value::as_i64)
        .unwrap_or(0))
}
