// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod exporter;
pub mod goals;
pub mod routes;
pub mod transactions;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::api::DeleteOutcome;
use crate::models::RecordId;
use crate::utils::{parse_date, parse_decimal};

pub(crate) fn required(sub: &clap::ArgMatches, name: &str) -> Result<String> {
    sub.get_one::<String>(name)
        .cloned()
        .with_context(|| format!("Missing --{}", name))
}

pub(crate) fn optional(sub: &clap::ArgMatches, name: &str) -> Option<String> {
    sub.get_one::<String>(name).cloned()
}

pub(crate) fn record_id(sub: &clap::ArgMatches) -> Result<RecordId> {
    Ok(RecordId::new(required(sub, "id")?))
}

pub(crate) fn optional_decimal(sub: &clap::ArgMatches, name: &str) -> Result<Option<Decimal>> {
    optional(sub, name).map(|s| parse_decimal(&s)).transpose()
}

/// Validates YYYY-MM-DD and returns it in canonical form.
pub(crate) fn optional_date(sub: &clap::ArgMatches, name: &str) -> Result<Option<String>> {
    optional(sub, name)
        .map(|s| parse_date(&s).map(|d| d.to_string()))
        .transpose()
}

pub(crate) fn parse_choice<T>(sub: &clap::ArgMatches, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional(sub, name)
        .map(|s| s.parse::<T>().with_context(|| format!("Invalid --{}", name)))
        .transpose()
}

pub(crate) fn report_delete(kind: &str, id: &RecordId, outcome: DeleteOutcome) {
    if outcome.is_deleted() {
        println!("Removed {} {}", kind, id);
    } else {
        println!("{} {} was not removed (HTTP {})", kind, id, outcome.status);
    }
}
