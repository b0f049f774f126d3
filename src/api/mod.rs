// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod analytics;
pub mod budgets;
pub mod client;
pub mod goals;
pub mod resource;
pub mod transactions;

pub use accounts::AccountClient;
pub use analytics::AnalyticsClient;
pub use budgets::BudgetClient;
pub use client::{ApiClient, ApiRequest, ApiResponse, HttpTransport, Method, Transport};
pub use goals::GoalClient;
pub use resource::{DeleteOutcome, Resource, ResourceClient};
pub use transactions::TransactionClient;

use crate::errors::Result;
use crate::models::FinancialData;

impl ApiClient {
    pub fn accounts(&self) -> AccountClient {
        AccountClient::new(self.clone())
    }

    pub fn transactions(&self) -> TransactionClient {
        TransactionClient::new(self.clone())
    }

    pub fn budgets(&self) -> BudgetClient {
        BudgetClient::new(self.clone())
    }

    pub fn goals(&self) -> GoalClient {
        GoalClient::new(self.clone())
    }

    pub fn analytics(&self) -> AnalyticsClient {
        AnalyticsClient::new(self.clone())
    }

    /// Loads the four collections concurrently. Any failure fails the snapshot.
    pub async fn fetch_all(&self) -> Result<FinancialData> {
        let (accounts, transactions, budgets, goals) = (
            self.accounts(),
            self.transactions(),
            self.budgets(),
            self.goals(),
        );
        let (accounts, transactions, budgets, goals) = tokio::try_join!(
            accounts.list(),
            transactions.list(),
            budgets.list(),
            goals.list(),
        )?;
        Ok(FinancialData {
            accounts,
            transactions,
            budgets,
            goals,
        })
    }
}
