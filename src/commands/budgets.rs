// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{optional, optional_decimal, parse_choice, record_id, report_delete, required};
use crate::api::ApiClient;
use crate::categories::is_known;
use crate::models::{BudgetPatch, NewBudget};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use log::warn;

fn warn_if_unknown_category(category: &str) {
    if !is_known(category) {
        warn!("'{}' is not one of the built-in categories", category);
    }
}

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let client = api.budgets();
    match m.subcommand() {
        Some(("add", sub)) => {
            let budget = budget_from(sub)?;
            warn_if_unknown_category(&budget.category);
            let saved = client.create(&budget).await?;
            println!(
                "Budget set for {} ({}) = {}, spent so far {} (id={})",
                saved.category, saved.period, saved.limit, saved.spent, saved.id
            );
        }
        Some(("list", sub)) => {
            let budgets = client.list().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &budgets)? {
                let data = budgets
                    .iter()
                    .map(|b| {
                        vec![
                            b.id.to_string(),
                            b.category.clone(),
                            b.period.to_string(),
                            format!("{:.2}", b.limit),
                            format!("{:.2}", b.spent),
                            format!("{:.2}", b.limit - b.spent),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &["Id", "Category", "Period", "Limit", "Spent", "Remaining"],
                        data,
                    )
                );
            }
        }
        Some(("update", sub)) => {
            let id = record_id(sub)?;
            let patch = patch_from(sub)?;
            if let Some(c) = &patch.category {
                warn_if_unknown_category(c);
            }
            let saved = client.update(&id, &patch).await?;
            println!(
                "Updated budget {} for {}: spent {} of {}",
                saved.id, saved.category, saved.spent, saved.limit
            );
        }
        Some(("rm", sub)) => {
            let id = record_id(sub)?;
            report_delete("budget", &id, client.delete_with_status(&id).await?);
        }
        _ => {}
    }
    Ok(())
}

pub fn budget_from(sub: &clap::ArgMatches) -> Result<NewBudget> {
    Ok(NewBudget {
        category: required(sub, "category")?,
        limit: parse_decimal(&required(sub, "limit")?)?,
        period: parse_choice(sub, "period")?.context("Missing --period")?,
    })
}

pub fn patch_from(sub: &clap::ArgMatches) -> Result<BudgetPatch> {
    Ok(BudgetPatch {
        category: optional(sub, "category"),
        limit: optional_decimal(sub, "limit")?,
        period: parse_choice(sub, "period")?,
    })
}
