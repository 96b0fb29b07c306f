use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::database::gateway::{Gateway, Outcome, Row, Statement};
use crate::database::manager::DatabaseError;

/// Failure a scripted rule can raise
#[derive(Debug, Clone)]
pub enum MockFailure {
    Timeout,
    UniqueViolation(&'static str),
    Query(&'static str),
}

impl MockFailure {
    fn to_error(&self) -> DatabaseError {
        match self {
            MockFailure::Timeout => DatabaseError::ConnectionTimeout,
            MockFailure::UniqueViolation(c) => DatabaseError::UniqueViolation(c.to_string()),
            MockFailure::Query(msg) => DatabaseError::QueryError(msg.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Rows(Vec<Row>),
    Outcome(Outcome),
    Fail(MockFailure),
}

#[derive(Debug)]
struct Rule {
    pattern: String,
    reply: Reply,
    remaining: Option<usize>,
}

/// Scripted in-memory gateway. Rules match on a substring of the SQL text,
/// first match wins; unmatched queries return no rows and unmatched
/// mutations affect nothing. Every statement is recorded.
#[derive(Default)]
pub struct MockGateway {
    rules: Mutex<Vec<Rule>>,
    log: Mutex<Vec<Statement>>,
    ping_fails: bool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_query(self, pattern: &str, rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        self.rule(pattern, Reply::Rows(rows))
    }

    pub fn on_execute(self, pattern: &str, rows_affected: u64, last_insert_id: Option<i64>) -> Self {
        self.rule(pattern, Reply::Outcome(Outcome { rows_affected, last_insert_id }))
    }

    pub fn fail_on(self, pattern: &str, failure: MockFailure) -> Self {
        self.rule(pattern, Reply::Fail(failure))
    }

    /// Limit the most recently added rule to a single use
    pub fn once(self) -> Self {
        if let Some(rule) = self.rules.lock().unwrap_or_else(PoisonError::into_inner).last_mut() {
            rule.remaining = Some(1);
        }
        self
    }

    pub fn failing_ping(mut self) -> Self {
        self.ping_fails = true;
        self
    }

    /// Every statement seen so far, in order
    pub fn statements(&self) -> Vec<Statement> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn statements_matching(&self, pattern: &str) -> Vec<Statement> {
        self.statements().into_iter().filter(|s| s.sql.contains(pattern)).collect()
    }

    fn rule(self, pattern: &str, reply: Reply) -> Self {
        self.rules.lock().unwrap_or_else(PoisonError::into_inner).push(Rule {
            pattern: pattern.to_string(),
            reply,
            remaining: None,
        });
        self
    }

    fn next_reply(&self, statement: &Statement) -> Option<Reply> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).push(statement.clone());
        let mut rules = self.rules.lock().unwrap_or_else(PoisonError::into_inner);
        let rule = rules
            .iter_mut()
            .find(|r| statement.sql.contains(&r.pattern) && r.remaining != Some(0))?;
        if let Some(n) = rule.remaining.as_mut() {
            *n -= 1;
        }
        Some(rule.reply.clone())
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn query(&self, statement: &Statement) -> Result<Vec<Row>, DatabaseError> {
        match self.next_reply(statement) {
            Some(Reply::Rows(rows)) => Ok(rows),
            Some(Reply::Fail(f)) => Err(f.to_error()),
            Some(Reply::Outcome(_)) | None => Ok(vec![]),
        }
    }

    async fn execute(&self, statement: &Statement) -> Result<Outcome, DatabaseError> {
        match self.next_reply(statement) {
            Some(Reply::Outcome(outcome)) => Ok(outcome),
            Some(Reply::Fail(f)) => Err(f.to_error()),
            Some(Reply::Rows(_)) | None => Ok(Outcome::default()),
        }
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.ping_fails {
            Err(DatabaseError::ConnectionTimeout)
        } else {
            Ok(())
        }
    }
}
