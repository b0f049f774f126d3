// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeTransport, client};
use fintrack::api::Method;
use fintrack::commands::analytics::summary;
use fintrack::errors::Error;
use rust_decimal::Decimal;

#[tokio::test]
async fn absent_bodies_read_as_zero_and_empty() {
    let fake = FakeTransport::new();
    fake.respond(Method::Get, "analytics/get-total-balance", 200, "");
    fake.respond(Method::Get, "analytics/get-monthly-income", 200, "null");
    fake.respond(Method::Get, "analytics/get-monthly-expense", 204, "");
    fake.respond(Method::Get, "analytics/get-expense-category", 200, "");
    let analytics = client(&fake).analytics();

    assert_eq!(analytics.total_balance().await.unwrap(), Decimal::ZERO);
    assert_eq!(analytics.monthly_income().await.unwrap(), Decimal::ZERO);
    assert_eq!(analytics.monthly_expenses().await.unwrap(), Decimal::ZERO);
    assert!(analytics.expenses_by_category().await.unwrap().is_empty());
}

#[tokio::test]
async fn values_are_decoded() {
    let fake = FakeTransport::new();
    fake.respond(Method::Get, "analytics/get-total-balance", 200, "10432.75");
    fake.respond(Method::Get, "analytics/get-monthly-income", 200, "5200");
    fake.respond(Method::Get, "analytics/get-monthly-expense", 200, "1830.4");
    fake.respond(
        Method::Get,
        "analytics/get-expense-category",
        200,
        r#"{"Housing": 1200, "Food & Dining": 430.4, "Transportation": 200}"#,
    );
    let api = client(&fake);

    let s = summary(&api).await.unwrap();
    assert_eq!(s.total_balance, Decimal::new(1043275, 2));
    assert_eq!(s.monthly_income, Decimal::new(5200, 0));
    assert_eq!(s.monthly_expenses, Decimal::new(18304, 1));

    let by_cat = api.analytics().expenses_by_category().await.unwrap();
    assert_eq!(by_cat.len(), 3);
    assert_eq!(by_cat["Food & Dining"], Decimal::new(4304, 1));
    let keys: Vec<&str> = by_cat.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Food & Dining", "Housing", "Transportation"]);
}

#[tokio::test]
async fn server_error_is_not_masked_as_zero() {
    let fake = FakeTransport::new();
    fake.respond(Method::Get, "analytics/get-total-balance", 503, "maintenance");
    let err = client(&fake).analytics().total_balance().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 503, .. }));
}

#[tokio::test]
async fn fetch_all_collects_every_collection() {
    let fake = FakeTransport::new();
    fake.respond(
        Method::Get,
        "account",
        200,
        r#"[{"id":"a1","name":"Everyday","type":"checking","balance":120,"currency":"USD"}]"#,
    );
    fake.respond(
        Method::Get,
        "transaction",
        200,
        r#"[{"id":"t1","accountId":"a1","amount":-5,"description":"Tea","category":"Food","date":"2025-01-02","type":"expense"},
            {"id":"t2","accountId":"a1","amount":-9,"description":"Lunch","category":"Food","date":"2025-03-04","type":"expense"}]"#,
    );
    fake.respond(
        Method::Get,
        "budget",
        200,
        r#"[{"id":"b1","category":"Food","limit":200,"spent":14,"period":"monthly"}]"#,
    );
    fake.respond(Method::Get, "goal", 200, "");

    let data = client(&fake).fetch_all().await.unwrap();
    assert_eq!(data.accounts.len(), 1);
    let order: Vec<&str> = data.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, ["t2", "t1"]);
    assert_eq!(data.budgets[0].spent, Decimal::new(14, 0));
    assert!(data.goals.is_empty());

    let v = serde_json::to_value(&data).unwrap();
    assert_eq!(v["transactions"][0]["accountId"], "a1");
    assert_eq!(v["goals"], serde_json::json!([]));
}

#[tokio::test]
async fn fetch_all_fails_when_any_collection_fails() {
    let fake = FakeTransport::new();
    fake.respond(Method::Get, "account", 200, "[]");
    fake.respond(Method::Get, "transaction", 200, "[]");
    fake.respond(Method::Get, "budget", 502, "bad gateway");
    fake.respond(Method::Get, "goal", 200, "[]");

    let err = client(&fake).fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 502, .. }));
}
