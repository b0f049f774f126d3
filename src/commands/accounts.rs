// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{optional, optional_decimal, parse_choice, record_id, report_delete, required};
use crate::api::ApiClient;
use crate::models::{Account, AccountPatch};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let client = api.accounts();
    match m.subcommand() {
        Some(("add", sub)) => {
            let account = account_from(sub)?;
            let saved = client.create(&account).await?;
            println!(
                "Added account '{}' ({}, {}) id={}",
                saved.name, saved.r#type, saved.currency, saved.id
            );
        }
        Some(("list", sub)) => {
            let accounts = client.list().await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &accounts)? {
                let data = accounts
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.to_string(),
                            a.name.clone(),
                            a.r#type.to_string(),
                            fmt_money(&a.balance, &a.currency),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Name", "Type", "Balance"], data)
                );
            }
        }
        Some(("update", sub)) => {
            let id = record_id(sub)?;
            let saved = client.update(&id, &patch_from(sub)?).await?;
            println!("Updated account '{}' ({})", saved.name, saved.id);
        }
        Some(("rm", sub)) => {
            let id = record_id(sub)?;
            report_delete("account", &id, client.delete_with_status(&id).await?);
        }
        _ => {}
    }
    Ok(())
}

pub fn account_from(sub: &clap::ArgMatches) -> Result<Account> {
    Ok(Account {
        name: required(sub, "name")?,
        r#type: parse_choice(sub, "type")?.context("Missing --type")?,
        balance: parse_decimal(&required(sub, "balance")?)?,
        currency: required(sub, "currency")?.to_uppercase(),
    })
}

pub fn patch_from(sub: &clap::ArgMatches) -> Result<AccountPatch> {
    Ok(AccountPatch {
        name: optional(sub, "name"),
        r#type: parse_choice(sub, "type")?,
        balance: optional_decimal(sub, "balance")?,
        currency: optional(sub, "currency").map(|c| c.to_uppercase()),
    })
}
