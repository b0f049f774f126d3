// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::api::analytics::summarize_accounts;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_balance: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
}

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => {
            let s = summary(api).await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
                let data = vec![
                    vec!["Total balance".into(), format!("{:.2}", s.total_balance)],
                    vec!["Monthly income".into(), format!("{:.2}", s.monthly_income)],
                    vec!["Monthly expenses".into(), format!("{:.2}", s.monthly_expenses)],
                ];
                println!("{}", pretty_table(&["Metric", "Value"], data));
            }
        }
        Some(("by-category", sub)) => {
            let by_cat = api.analytics().expenses_by_category().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &by_cat)? {
                let data = by_cat
                    .iter()
                    .map(|(c, v)| vec![c.clone(), format!("{:.2}", v)])
                    .collect();
                println!("{}", pretty_table(&["Category", "Spent"], data));
            }
        }
        Some(("net-worth", sub)) => {
            let accounts = api.accounts().list().await?;
            let totals = summarize_accounts(&accounts);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
                let data = totals
                    .iter()
                    .map(|t| {
                        vec![
                            t.currency.clone(),
                            format!("{:.2}", t.total_assets),
                            format!("{:.2}", t.total_liabilities),
                            format!("{:.2}", t.net_worth),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Currency", "Assets", "Liabilities", "Net worth"], data)
                );
            }
        }
        Some(("dashboard", sub)) => {
            let data = api.fetch_all().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let data = vec![
                    vec!["Accounts".into(), data.accounts.len().to_string()],
                    vec!["Transactions".into(), data.transactions.len().to_string()],
                    vec!["Budgets".into(), data.budgets.len().to_string()],
                    vec!["Goals".into(), data.goals.len().to_string()],
                ];
                println!("{}", pretty_table(&["Collection", "Records"], data));
            }
        }
        _ => {}
    }
    Ok(())
}

/// The three scalar figures, fetched concurrently.
pub async fn summary(api: &ApiClient) -> Result<Summary> {
    let analytics = api.analytics();
    let (total_balance, monthly_income, monthly_expenses) = tokio::try_join!(
        analytics.total_balance(),
        analytics.monthly_income(),
        analytics.monthly_expenses(),
    )?;
    Ok(Summary {
        total_balance,
        monthly_income,
        monthly_expenses,
    })
}
