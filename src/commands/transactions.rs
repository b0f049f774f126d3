// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{
    optional, optional_date, optional_decimal, parse_choice, record_id, report_delete, required,
};
use crate::api::ApiClient;
use crate::models::{Transaction, TransactionPatch};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(api, sub).await?,
        Some(("list", sub)) => list(api, sub).await?,
        Some(("update", sub)) => {
            let id = record_id(sub)?;
            let saved = api.transactions().update(&id, &patch_from(sub)?).await?;
            println!("Updated transaction {} ({} on {})", saved.id, saved.amount, saved.date);
        }
        Some(("rm", sub)) => {
            let id = record_id(sub)?;
            let outcome = api.transactions().delete_with_status(&id).await?;
            report_delete("transaction", &id, outcome);
        }
        _ => {}
    }
    Ok(())
}

async fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let tx = transaction_from(sub)?;
    let saved = api.transactions().create(&tx).await?;
    println!(
        "Recorded {} {} on {} in '{}' (acct: {}, id={})",
        saved.r#type, saved.amount, saved.date, saved.category, saved.account_id, saved.id
    );
    Ok(())
}

async fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(api, sub).await?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.account.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Account", "Description", "Amount", "Type", "Category"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub account: String,
    pub description: String,
    pub amount: String,
    pub r#type: String,
    pub category: String,
}

/// Newest-first transactions narrowed by the `list` filters.
pub async fn query_rows(api: &ApiClient, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let category = optional(sub, "category");
    let account = optional(sub, "account");
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let data = api
        .transactions()
        .list()
        .await?
        .into_iter()
        .filter(|t| category.as_ref().is_none_or(|c| &t.category == c))
        .filter(|t| account.as_ref().is_none_or(|a| &t.account_id == a))
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id.to_string(),
            date: t.date.clone(),
            account: t.account_id.clone(),
            description: t.description.clone(),
            amount: format!("{:.2}", t.amount),
            r#type: t.r#type.to_string(),
            category: t.category.clone(),
        })
        .collect();
    Ok(data)
}

pub fn transaction_from(sub: &clap::ArgMatches) -> Result<Transaction> {
    Ok(Transaction {
        account_id: required(sub, "account")?,
        amount: parse_decimal(&required(sub, "amount")?)?,
        description: optional(sub, "description").unwrap_or_default(),
        category: required(sub, "category")?,
        date: optional_date(sub, "date")?.context("Missing --date")?,
        r#type: parse_choice(sub, "type")?.context("Missing --type")?,
    })
}

pub fn patch_from(sub: &clap::ArgMatches) -> Result<TransactionPatch> {
    Ok(TransactionPatch {
        account_id: optional(sub, "account"),
        amount: optional_decimal(sub, "amount")?,
        description: optional(sub, "description"),
        category: optional(sub, "category"),
        date: optional_date(sub, "date")?,
        r#type: parse_choice(sub, "type")?,
    })
}
