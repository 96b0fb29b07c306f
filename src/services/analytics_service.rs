use serde::Serialize;

use crate::database::models::farmer;
use crate::database::{Gateway, Row, SelectQuery, Statement};

use super::dashboard_service::{count_or_zero, rows_or_empty};

const FARMERS_BY_LOCATION: &str = "SELECT location, COUNT(*) AS farmers FROM farmers \
     GROUP BY location ORDER BY farmers DESC, location ASC LIMIT 10";
const YIELD_BY_CROP: &str = "SELECT crop_type, COUNT(*) AS records, SUM(yield_amount) AS total_yield \
     FROM yield_records GROUP BY crop_type ORDER BY total_yield DESC, crop_type ASC";
const ALERTS_BY_TYPE: &str = "SELECT type, COUNT(*) AS count FROM alerts GROUP BY type ORDER BY type ASC";
const FAQS_BY_CATEGORY: &str =
    "SELECT category, COUNT(*) AS count FROM faqs GROUP BY category ORDER BY category ASC";
const TOP_ARTICLES: &str =
    "SELECT id, title, category, views FROM knowledge_base ORDER BY views DESC, id ASC LIMIT 5";

/// Admin analytics. Same degrade-on-failure policy as the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub farmers_by_location: Vec<Row>,
    pub yield_by_crop: Vec<Row>,
    pub alerts_by_type: Vec<Row>,
    pub faqs_by_category: Vec<Row>,
    pub top_articles: Vec<Row>,
    pub new_farmers_last_30_days: i64,
}

pub async fn analytics(gateway: &dyn Gateway) -> Analytics {
    let farmers_by_location = Statement::new(FARMERS_BY_LOCATION);
    let yield_by_crop = Statement::new(YIELD_BY_CROP);
    let alerts_by_type = Statement::new(ALERTS_BY_TYPE);
    let faqs_by_category = Statement::new(FAQS_BY_CATEGORY);
    let top_articles = Statement::new(TOP_ARTICLES);

    let (farmers_by_location, yield_by_crop, alerts_by_type, faqs_by_category, top_articles, new_farmers) = tokio::join!(
        gateway.query(&farmers_by_location),
        gateway.query(&yield_by_crop),
        gateway.query(&alerts_by_type),
        gateway.query(&faqs_by_category),
        gateway.query(&top_articles),
        count_or_zero(
            gateway,
            "newFarmersLast30Days",
            SelectQuery::new(farmer::TABLE).filter_static("created_at >= NOW() - INTERVAL '30 days'"),
        ),
    );

    Analytics {
        farmers_by_location: rows_or_empty("farmersByLocation", farmers_by_location),
        yield_by_crop: rows_or_empty("yieldByCrop", yield_by_crop),
        alerts_by_type: rows_or_empty("alertsByType", alerts_by_type),
        faqs_by_category: rows_or_empty("faqsByCategory", faqs_by_category),
        top_articles: rows_or_empty("topArticles", top_articles),
        new_farmers_last_30_days: new_farmers,
    }
}
