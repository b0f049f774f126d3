// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Runs the reqwest transport against a local axum backend.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use axum::{Json, Router};
use fintrack::api::ApiClient;
use fintrack::config::Config;
use fintrack::errors::Error;
use fintrack::models::{Goal, RecordId};
use rust_decimal::Decimal;
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Seen {
    content_types: Arc<Mutex<Vec<String>>>,
}

async fn list_goals() -> Json<Value> {
    Json(json!([
        {"id": "g1", "name": "Bike", "targetAmount": 900, "currentAmount": 300,
         "deadline": "2026-12-31", "category": "Shopping"}
    ]))
}

async fn create_goal(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    seen.content_types.lock().unwrap().push(ct);
    body["id"] = json!("g2");
    (StatusCode::CREATED, Json(body))
}

async fn delete_goal(Path(id): Path<String>) -> StatusCode {
    if id == "g1" {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn empty_accounts() -> StatusCode {
    StatusCode::OK
}

async fn start_backend() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/api/goal", get(list_goals).post(create_goal))
        .route("/api/goal/{id}", delete(delete_goal))
        .route("/api/account", get(empty_accounts))
        .route("/api/analytics/get-total-balance", get(|| async { Json(json!(1234.5)) }))
        .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/api/", addr), seen)
}

#[tokio::test]
async fn round_trips_through_real_http() {
    let (base_url, seen) = start_backend().await;
    let api = ApiClient::from_config(&Config::default().with_base_url(base_url)).unwrap();

    let goals = api.goals().list().await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].current_amount, Decimal::new(300, 0));

    let created = api
        .goals()
        .create(&Goal {
            name: "Laptop".into(),
            target_amount: Decimal::new(1500, 0),
            current_amount: Decimal::ZERO,
            deadline: "2027-03-01".into(),
            category: "Shopping".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id.as_str(), "g2");
    assert_eq!(created.name, "Laptop");
    assert_eq!(
        seen.content_types.lock().unwrap().as_slice(),
        ["application/json"]
    );

    assert!(api.goals().delete(&RecordId::new("g1")).await.unwrap());
    assert!(!api.goals().delete(&RecordId::new("zzz")).await.unwrap());

    assert!(api.accounts().list().await.unwrap().is_empty());
    assert_eq!(
        api.analytics().total_balance().await.unwrap(),
        Decimal::new(12345, 1)
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut cfg = Config::default().with_base_url(format!("http://{}/api", addr));
    cfg.timeout_secs = 2;
    let api = ApiClient::from_config(&cfg).unwrap();
    let err = api.goals().delete(&RecordId::new("g1")).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
