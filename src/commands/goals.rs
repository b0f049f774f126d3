// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{optional, optional_date, optional_decimal, record_id, report_delete, required};
use crate::api::ApiClient;
use crate::models::{Goal, GoalPatch};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let client = api.goals();
    match m.subcommand() {
        Some(("add", sub)) => {
            let saved = client.create(&goal_from(sub)?).await?;
            println!(
                "Added goal '{}' ({} of {}) id={}",
                saved.name, saved.current_amount, saved.target_amount, saved.id
            );
        }
        Some(("list", sub)) => {
            let goals = client.list().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &goals)? {
                let data = goals
                    .iter()
                    .map(|g| {
                        vec![
                            g.id.to_string(),
                            g.name.clone(),
                            g.category.clone(),
                            format!("{:.2}", g.current_amount),
                            format!("{:.2}", g.target_amount),
                            format!("{:.0}%", progress(g)),
                            g.deadline.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &["Id", "Name", "Category", "Saved", "Target", "Progress", "Deadline"],
                        data,
                    )
                );
            }
        }
        Some(("update", sub)) => {
            let id = record_id(sub)?;
            let saved = client.update(&id, &patch_from(sub)?).await?;
            println!("Updated goal '{}' ({})", saved.name, saved.id);
        }
        Some(("rm", sub)) => {
            let id = record_id(sub)?;
            report_delete("goal", &id, client.delete_with_status(&id).await?);
        }
        _ => {}
    }
    Ok(())
}

fn progress(g: &Goal) -> Decimal {
    if g.target_amount.is_zero() {
        return Decimal::ZERO;
    }
    g.current_amount / g.target_amount * Decimal::ONE_HUNDRED
}

pub fn goal_from(sub: &clap::ArgMatches) -> Result<Goal> {
    Ok(Goal {
        name: required(sub, "name")?,
        target_amount: parse_decimal(&required(sub, "target")?)?,
        current_amount: parse_decimal(&required(sub, "current")?)?,
        deadline: optional_date(sub, "deadline")?.context("Missing --deadline")?,
        category: required(sub, "category")?,
    })
}

pub fn patch_from(sub: &clap::ArgMatches) -> Result<GoalPatch> {
    Ok(GoalPatch {
        name: optional(sub, "name"),
        target_amount: optional_decimal(sub, "target")?,
        current_amount: optional_decimal(sub, "current")?,
        deadline: optional_date(sub, "deadline")?,
        category: optional(sub, "category"),
    })
}
