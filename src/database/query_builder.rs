use serde_json::Value;

use crate::database::gateway::Statement;

/// Treat missing and blank query-string values the same way
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// SELECT builder. Table and column names are compile-time constants;
/// every caller-supplied value becomes a numbered parameter.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: &'static str,
    columns: String,
    conditions: Vec<String>,
    params: Vec<Value>,
    order_by: Option<&'static str>,
    limit: Option<u32>,
}

impl SelectQuery {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: "*".to_string(),
            conditions: vec![],
            params: vec![],
            order_by: None,
            limit: None,
        }
    }

    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns = columns.join(", ");
        self
    }

    /// Append `column = $n` when the value is present, otherwise leave the clause out
    pub fn filter_eq(self, column: &'static str, value: Option<impl Into<Value>>) -> Self {
        self.filter_op(column, "=", value)
    }

    /// Append `column <op> $n` when the value is present
    pub fn filter_op(mut self, column: &'static str, op: &'static str, value: Option<impl Into<Value>>) -> Self {
        if let Some(value) = value {
            let p = self.param(value.into());
            self.conditions.push(format!("{} {} {}", column, op, p));
        }
        self
    }

    /// Append `(a = $n OR b = $n)` when the value is present
    pub fn filter_any_eq(mut self, columns: &[&'static str], value: Option<impl Into<Value>>) -> Self {
        if let Some(value) = value {
            let p = self.param(value.into());
            let parts: Vec<String> = columns.iter().map(|c| format!("{} = {}", c, p)).collect();
            self.conditions.push(format!("({})", parts.join(" OR ")));
        }
        self
    }

    /// Append a case-insensitive substring match across several columns
    pub fn filter_search(mut self, columns: &[&'static str], text: Option<&str>) -> Self {
        if let Some(text) = present(text) {
            let p = self.param(Value::String(format!("%{}%", text)));
            let parts: Vec<String> = columns.iter().map(|c| format!("{} ILIKE {}", c, p)).collect();
            self.conditions.push(format!("({})", parts.join(" OR ")));
        }
        self
    }

    /// Append a condition with no caller-supplied values
    pub fn filter_static(mut self, condition: &'static str) -> Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Always emit `($n::cast IS NULL OR column <op> $m::cast)` and bind the value
    /// twice, so an absent filter binds NULL and matches every row.
    pub fn filter_nullable(
        mut self,
        column: &'static str,
        op: &'static str,
        cast: &'static str,
        value: Option<impl Into<Value>>,
    ) -> Self {
        let value = value.map(Into::into).unwrap_or(Value::Null);
        let first = self.param(value.clone());
        let second = self.param(value);
        self.conditions.push(format!(
            "({}::{} IS NULL OR {} {} {}::{})",
            first, cast, column, op, second, cast
        ));
        self
    }

    pub fn order_by(mut self, order: &'static str) -> Self {
        self.order_by = Some(order);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Statement {
        let mut sql = format!("SELECT {} FROM {}", self.columns, self.table);
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        if let Some(order) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        Statement { sql, params: self.params }
    }

    fn param(&mut self, value: Value) -> String {
        self.params.push(value);
        format!("${}", self.params.len())
    }
}

/// One `column = value` pair for INSERT and UPDATE
#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: &'static str,
    pub value: Value,
    pub cast: Option<&'static str>,
}

impl Assignment {
    pub fn new(column: &'static str, value: impl Into<Value>) -> Self {
        Self { column, value: value.into(), cast: None }
    }

    /// Bind with an explicit cast, e.g. text dates into DATE columns
    pub fn cast(column: &'static str, value: impl Into<Value>, cast: &'static str) -> Self {
        Self { column, value: value.into(), cast: Some(cast) }
    }

    fn placeholder(&self, index: usize) -> String {
        match self.cast {
            Some(cast) => format!("${}::{}", index, cast),
            None => format!("${}", index),
        }
    }
}

/// `INSERT INTO table (...) VALUES (...) RETURNING id`
pub fn insert_statement(table: &'static str, assignments: Vec<Assignment>) -> Statement {
    let columns: Vec<&str> = assignments.iter().map(|a| a.column).collect();
    let placeholders: Vec<String> = assignments
        .iter()
        .enumerate()
        .map(|(i, a)| a.placeholder(i + 1))
        .collect();

    Statement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
            table,
            columns.join(", "),
            placeholders.join(", ")
        ),
        params: assignments.into_iter().map(|a| a.value).collect(),
    }
}

/// `UPDATE table SET ... WHERE id = $n`. `touch` lists columns reset to NOW().
pub fn update_statement(
    table: &'static str,
    id: i64,
    assignments: Vec<Assignment>,
    touch: &[&'static str],
) -> Statement {
    let mut sets: Vec<String> = assignments
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{} = {}", a.column, a.placeholder(i + 1)))
        .collect();
    sets.extend(touch.iter().map(|c| format!("{} = NOW()", c)));

    let mut params: Vec<Value> = assignments.into_iter().map(|a| a.value).collect();
    params.push(Value::from(id));

    Statement {
        sql: format!("UPDATE {} SET {} WHERE id = ${}", table, sets.join(", "), params.len()),
        params,
    }
}
