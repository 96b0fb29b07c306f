use serde::Serialize;
use serde_json::Value;

use crate::database::models::{alert, faq, knowledge_base};
use crate::database::{DatabaseError, Gateway, Row, SelectQuery};

/// Per-table cap on search matches
pub const SEARCH_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: Value,
    pub title: Value,
    pub snippet: Value,
}

impl SearchHit {
    fn from_row(kind: &'static str, mut row: Row) -> Self {
        Self {
            kind,
            id: row.remove("id").unwrap_or(Value::Null),
            title: row.remove("title").unwrap_or(Value::Null),
            snippet: row.remove("snippet").unwrap_or(Value::Null),
        }
    }
}

/// Fan one query string out to articles, FAQs and alerts. Results are
/// concatenated in that order with no ranking across tables.
pub async fn search(gateway: &dyn Gateway, text: &str) -> Result<Vec<SearchHit>, DatabaseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(vec![]);
    }

    let articles = SelectQuery::new(knowledge_base::TABLE)
        .columns(&["id", "title", "LEFT(content, 200) AS snippet"])
        .filter_search(&["title", "content"], Some(text))
        .order_by("created_at DESC, id DESC")
        .limit(SEARCH_LIMIT)
        .build();
    let faqs = SelectQuery::new(faq::TABLE)
        .columns(&["id", "question AS title", "LEFT(answer, 200) AS snippet"])
        .filter_eq("status", Some("active"))
        .filter_search(&["question", "answer"], Some(text))
        .order_by("id ASC")
        .limit(SEARCH_LIMIT)
        .build();
    let alerts = SelectQuery::new(alert::TABLE)
        .columns(&["id", "title", "LEFT(message, 200) AS snippet"])
        .filter_search(&["title", "message"], Some(text))
        .order_by("created_at DESC, id DESC")
        .limit(SEARCH_LIMIT)
        .build();

    let (articles, faqs, alerts) = tokio::try_join!(
        gateway.query(&articles),
        gateway.query(&faqs),
        gateway.query(&alerts),
    )?;

    let hits = articles
        .into_iter()
        .map(|row| SearchHit::from_row("article", row))
        .chain(faqs.into_iter().map(|row| SearchHit::from_row("faq", row)))
        .chain(alerts.into_iter().map(|row| SearchHit::from_row("alert", row)))
        .collect();
    Ok(hits)
}
