// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! `/budget`, with `spent` recomputed from the transaction history on every write.

use chrono::{Local, NaiveDate};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use super::client::ApiClient;
use super::resource::{DeleteOutcome, Resource, ResourceClient, item_path};
use crate::errors::{Error, Result};
use crate::models::{
    Budget, BudgetPatch, NewBudget, Record, RecordId, Saved, Transaction, TransactionType,
};
use crate::utils::same_month;

impl Resource for Budget {
    const COLLECTION: &'static str = "budget";
    type Patch = BudgetPatch;
}

#[derive(Serialize)]
struct BudgetUpdate<'a> {
    #[serde(flatten)]
    patch: &'a BudgetPatch,
    spent: Decimal,
}

#[derive(Clone)]
pub struct BudgetClient {
    api: ApiClient,
    budgets: ResourceClient<Budget>,
    transactions: ResourceClient<Transaction>,
}

impl BudgetClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            budgets: ResourceClient::new(api.clone()),
            transactions: ResourceClient::new(api.clone()),
            api,
        }
    }

    pub async fn list(&self) -> Result<Vec<Saved<Budget>>> {
        self.budgets.list().await
    }

    pub async fn create(&self, budget: &NewBudget) -> Result<Saved<Budget>> {
        let spent = self.spent_this_month(Some(&budget.category)).await?;
        let body = budget.clone().with_spent(spent);
        self.budgets.create(&body).await
    }

    /// When the patch leaves `category` out, the stored budget's category is used.
    pub async fn update(&self, id: &RecordId, patch: &BudgetPatch) -> Result<Saved<Budget>> {
        let category = match &patch.category {
            Some(c) => Some(c.clone()),
            None => self.stored_category(id).await?,
        };
        if category.is_none() {
            warn!(
                "[fintrack] Budget {} has no known category; spent will be zero",
                id
            );
        }
        let spent = self.spent_this_month(category.as_deref()).await?;
        let body = BudgetUpdate { patch, spent };
        self.api
            .put_json(&item_path(Budget::COLLECTION, id), &body)
            .await
    }

    pub async fn delete(&self, id: &RecordId) -> Result<bool> {
        self.budgets.delete(id).await
    }

    pub async fn delete_with_status(&self, id: &RecordId) -> Result<DeleteOutcome> {
        self.budgets.delete_with_status(id).await
    }

    /// Any `spent` carried by the record is discarded and recomputed.
    pub async fn save(&self, record: Record<Budget>) -> Result<Saved<Budget>> {
        match record {
            Record::Unsaved(budget) => self.create(&NewBudget::from(budget)).await,
            Record::Persisted(Saved { id, data }) => {
                self.update(&id, &BudgetPatch::from(data)).await
            }
        }
    }

    async fn spent_this_month(&self, category: Option<&str>) -> Result<Decimal> {
        let transactions = self.transactions.list().await?;
        let today = Local::now().date_naive();
        let spent = spent_for_category(&transactions, category, today);
        debug!(
            "[fintrack] Spent for {:?} in {}: {}",
            category,
            today.format("%Y-%m"),
            spent
        );
        Ok(spent)
    }

    /// Category of the stored budget `id`. A lookup the backend rejects or answers
    /// with garbage counts as unknown; only transport failures propagate.
    async fn stored_category(&self, id: &RecordId) -> Result<Option<String>> {
        let budgets = match self.budgets.list().await {
            Ok(budgets) => budgets,
            Err(err @ (Error::Status { .. } | Error::Decode(_))) => {
                warn!("[fintrack] Budget lookup for {} failed: {}", id, err);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        Ok(budgets
            .into_iter()
            .find(|b| &b.id == id)
            .map(|b| b.data.category))
    }
}

/// Absolute sum of expense amounts in `category` dated in the same month as `today`.
///
/// A `None` category matches nothing.
pub fn spent_for_category(
    transactions: &[Saved<Transaction>],
    category: Option<&str>,
    today: NaiveDate,
) -> Decimal {
    let Some(category) = category else {
        return Decimal::ZERO;
    };
    let total: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense && t.category == category)
        .filter(|t| t.timestamp().is_some_and(|ts| same_month(ts.date(), today)))
        .map(|t| t.amount)
        .sum();
    total.abs()
}
