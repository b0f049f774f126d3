// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeTransport, client};
use fintrack::api::Method;
use fintrack::{cli, commands::exporter};
use serde_json::json;
use tempfile::tempdir;

fn seed(fake: &FakeTransport) {
    let body = json!([
        {"id": "t1", "accountId": "a1", "amount": -12.34, "description": "Corner Shop",
         "category": "Food & Dining", "date": "2025-01-02", "type": "expense"},
        {"id": "t2", "accountId": "a1", "amount": 1000, "description": "Pay, January",
         "category": "Income", "date": "2025-01-31", "type": "income"}
    ]);
    fake.respond(Method::Get, "transaction", 200, &body.to_string());
}

#[tokio::test]
async fn export_transactions_writes_csv_newest_first() {
    let fake = FakeTransport::new();
    seed(&fake);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "fintrack",
        "export",
        "transactions",
        "--out",
        out_str.as_str(),
    ]);
    let (_, export_m) = matches.subcommand().unwrap();
    exporter::handle(&client(&fake), export_m).await.unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["id", "date", "account_id", "description", "amount", "type", "category"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "t2");
    assert_eq!(&rows[0][3], "Pay, January");
    assert_eq!(&rows[1][4], "-12.34");
}

#[tokio::test]
async fn export_transactions_streams_pretty_json() {
    let fake = FakeTransport::new();
    seed(&fake);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "fintrack",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        out_str.as_str(),
    ]);
    let (_, export_m) = matches.subcommand().unwrap();
    exporter::handle(&client(&fake), export_m).await.unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.contains('\n'), "output should be pretty printed");
    let v: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(v[0]["id"], "t2");
    assert_eq!(v[1]["accountId"], "a1");
    assert_eq!(v[1]["type"], "expense");
    assert_eq!(v[1]["amount"].as_f64(), Some(-12.34));
    assert_eq!(v[1]["category"], "Food & Dining");
    assert_eq!(v[0]["date"], "2025-01-31");
    assert_eq!(v[0].as_object().unwrap().len(), 7);
}

#[test]
fn unknown_export_format_is_rejected_by_the_cli() {
    let res = cli::build_cli().try_get_matches_from([
        "fintrack", "export", "transactions", "--format", "xml", "--out", "x.xml",
    ]);
    assert!(res.is_err());
}
