use serde::Serialize;

use crate::database::models::{alert, crop_calendar, farmer, faq, knowledge_base, recommendation, yield_record};
use crate::database::{count_rows, Gateway, Row, SelectQuery};

/// Dashboard counters plus the most recent harvests
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_crops: i64,
    pub total_fertilizers: i64,
    pub total_yield_records: i64,
    pub total_alerts: i64,
    pub new_alerts: i64,
    pub total_farmers: i64,
    pub total_faqs: i64,
    pub total_articles: i64,
    pub total_calendar_entries: i64,
    pub recent_yields: Vec<Row>,
}

/// Run every sub-query concurrently. A failed count reports 0 and a failed
/// list reports `[]`; the endpoint itself never fails.
pub async fn dashboard_stats(gateway: &dyn Gateway) -> DashboardStats {
    let recent = SelectQuery::new(yield_record::TABLE)
        .columns(&["crop_type", "yield_amount", "yield_unit"])
        .order_by("created_at DESC, id DESC")
        .limit(yield_record::RECENT_LIMIT)
        .build();

    let (
        total_crops,
        total_fertilizers,
        total_yield_records,
        total_alerts,
        new_alerts,
        total_farmers,
        total_faqs,
        total_articles,
        total_calendar_entries,
        recent_yields,
    ) = tokio::join!(
        count_or_zero(gateway, "totalCrops", SelectQuery::new(recommendation::CROP_TABLE)),
        count_or_zero(gateway, "totalFertilizers", SelectQuery::new(recommendation::FERTILIZER_TABLE)),
        count_or_zero(gateway, "totalYieldRecords", SelectQuery::new(yield_record::TABLE)),
        count_or_zero(gateway, "totalAlerts", SelectQuery::new(alert::TABLE)),
        count_or_zero(
            gateway,
            "newAlerts",
            SelectQuery::new(alert::TABLE).filter_eq("status", Some("new")),
        ),
        count_or_zero(gateway, "totalFarmers", SelectQuery::new(farmer::TABLE)),
        count_or_zero(gateway, "totalFaqs", SelectQuery::new(faq::TABLE)),
        count_or_zero(gateway, "totalArticles", SelectQuery::new(knowledge_base::TABLE)),
        count_or_zero(gateway, "totalCalendarEntries", SelectQuery::new(crop_calendar::TABLE)),
        gateway.query(&recent),
    );

    let recent_yields = rows_or_empty("recentYields", recent_yields);

    DashboardStats {
        total_crops,
        total_fertilizers,
        total_yield_records,
        total_alerts,
        new_alerts,
        total_farmers,
        total_faqs,
        total_articles,
        total_calendar_entries,
        recent_yields,
    }
}

pub(crate) async fn count_or_zero(gateway: &dyn Gateway, stat: &'static str, query: SelectQuery) -> i64 {
    match count_rows(gateway, query).await {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(stat, error = %e, "aggregate sub-query failed, defaulting to zero");
            0
        }
    }
}

/// Row list that degrades to empty on failure
pub(crate) fn rows_or_empty(stat: &'static str, result: Result<Vec<Row>, crate::database::DatabaseError>) -> Vec<Row> {
    result.unwrap_or_else(|e| {
        tracing::warn!(stat, error = %e, "aggregate sub-query failed, defaulting to empty");
        vec![]
    })
}
