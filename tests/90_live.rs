//! Live round trips against the built binary and a real PostgreSQL.
//! Run with `cargo test --test 90_live -- --ignored` once DB_* points at a database.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn unique_phone() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("9{:09}", nanos % 1_000_000_000)
}

#[tokio::test]
#[ignore]
async fn yield_record_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/yield-records", server.base_url))
        .json(&json!({
            "cropType": "LiveTestCrop",
            "plantingDate": "2024-06-01",
            "harvestDate": "2024-10-01",
            "yieldAmount": 250.5
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = res.json::<Value>().await?["id"].as_i64().expect("id in create response");

    let record = client
        .get(format!("{}/api/yield-records/{}", server.base_url, id))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(record["crop_type"], "LiveTestCrop");
    assert_eq!(record["harvest_date"], "2024-10-01");
    assert_eq!(record["yield_unit"], "kg");

    let deleted = client
        .delete(format!("{}/api/yield-records/{}", server.base_url, id))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(deleted["affected"], 1);

    let gone = client
        .get(format!("{}/api/yield-records/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn concurrent_duplicate_registration_admits_one() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let body = json!({"name": "Twin", "phone": unique_phone(), "location": "Pune", "password": "secret1"});

    let url = format!("{}/api/register", server.base_url);
    let (a, b) = tokio::join!(
        client.post(&url).json(&body).send(),
        client.post(&url).json(&body).send(),
    );
    let mut statuses = vec![a?.status(), b?.status()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn article_views_count_each_read() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/api/admin/knowledge-base", server.base_url))
        .header(common::ADMIN_HEADER, "true")
        .json(&json!({"title": "Mulching", "content": "Keeps soil moist", "category": "soil"}))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let id = created["id"].as_i64().expect("id in create response");
    let url = format!("{}/api/knowledge-base/{}", server.base_url, id);

    let first = client.get(&url).send().await?.json::<Value>().await?;
    let second = client.get(&url).send().await?.json::<Value>().await?;
    assert_eq!(first["views"], 1);
    assert_eq!(second["views"], 2);

    client
        .delete(format!("{}/api/admin/knowledge-base/{}", server.base_url, id))
        .header(common::ADMIN_HEADER, "true")
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn admin_faq_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/admin/faqs", server.base_url))
        .header(common::ADMIN_HEADER, "true")
        .json(&json!({"question": "When to sow millet?", "answer": "After the first rains", "category": "soil"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = res.json::<Value>().await?["id"].as_i64().expect("id in create response");
    let url = format!("{}/api/admin/faqs/{}", server.base_url, id);

    let faq = client
        .get(&url)
        .header(common::ADMIN_HEADER, "true")
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(faq["question"], "When to sow millet?");
    assert_eq!(faq["answer"], "After the first rains");
    assert_eq!(faq["category"], "soil");
    assert_eq!(faq["status"], "active");

    client.delete(&url).header(common::ADMIN_HEADER, "true").send().await?;
    let gone = client.get(&url).header(common::ADMIN_HEADER, "true").send().await?;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    Ok(())
}
