// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::api::ApiClient;
use crate::errors;
use crate::models::{Saved, Transaction};
use anyhow::{Context, Result};

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(api, sub).await,
        _ => Ok(()),
    }
}

async fn export_transactions(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = super::required(sub, "format")?.to_lowercase();
    let out = super::required(sub, "out")?;

    let rows = api.transactions().list().await?;

    if fmt == "json" {
        std::fs::write(&out, serde_json::to_string_pretty(&rows)?)
            .with_context(|| format!("Write JSON to {}", out))?;
    } else {
        write_csv(Path::new(&out), &rows).with_context(|| format!("Write CSV to {}", out))?;
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}

pub fn write_csv(path: &Path, rows: &[Saved<Transaction>]) -> errors::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "id", "date", "account_id", "description", "amount", "type", "category",
    ])?;
    for t in rows {
        let amount = t.amount.to_string();
        wtr.write_record([
            t.id.as_str(),
            t.date.as_str(),
            t.account_id.as_str(),
            t.description.as_str(),
            amount.as_str(),
            t.r#type.as_str(),
            t.category.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
