// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::client::ApiClient;
use crate::errors::Result;
use crate::models::{Account, AccountType, Saved, TotalAccounts};

const TOTAL_BALANCE: &str = "analytics/get-total-balance";
const MONTHLY_INCOME: &str = "analytics/get-monthly-income";
const MONTHLY_EXPENSE: &str = "analytics/get-monthly-expense";
const EXPENSE_CATEGORY: &str = "analytics/get-expense-category";

/// Read-only aggregates. An empty body reads as zero (or an empty map).
#[derive(Clone)]
pub struct AnalyticsClient {
    api: ApiClient,
}

impl AnalyticsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn total_balance(&self) -> Result<Decimal> {
        self.scalar(TOTAL_BALANCE).await
    }

    pub async fn monthly_income(&self) -> Result<Decimal> {
        self.scalar(MONTHLY_INCOME).await
    }

    pub async fn monthly_expenses(&self) -> Result<Decimal> {
        self.scalar(MONTHLY_EXPENSE).await
    }

    pub async fn expenses_by_category(&self) -> Result<BTreeMap<String, Decimal>> {
        Ok(self
            .api
            .get_optional(EXPENSE_CATEGORY)
            .await?
            .unwrap_or_default())
    }

    async fn scalar(&self, path: &str) -> Result<Decimal> {
        Ok(self.api.get_optional(path).await?.unwrap_or(Decimal::ZERO))
    }
}

/// Per-currency assets, liabilities and net worth over a set of accounts.
///
/// Credit accounts and overdrawn balances count as liabilities; every other
/// positive balance is an asset.
pub fn summarize_accounts(accounts: &[Saved<Account>]) -> Vec<TotalAccounts> {
    let mut by_ccy: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for a in accounts {
        let entry = by_ccy
            .entry(a.currency.to_uppercase())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        if a.r#type == AccountType::Credit || a.balance.is_sign_negative() {
            entry.1 += a.balance.abs();
        } else {
            entry.0 += a.balance;
        }
    }
    by_ccy
        .into_iter()
        .map(|(currency, (assets, liabilities))| TotalAccounts {
            currency,
            total_assets: assets,
            total_liabilities: liabilities,
            net_worth: assets - liabilities,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn account(kind: AccountType, balance: i64, ccy: &str) -> Saved<Account> {
        Saved {
            id: RecordId::new(format!("{}-{}", kind, balance)),
            data: Account {
                name: kind.to_string(),
                r#type: kind,
                balance: Decimal::new(balance, 0),
                currency: ccy.into(),
            },
        }
    }

    #[test]
    fn splits_assets_and_liabilities_per_currency() {
        let accounts = vec![
            account(AccountType::Checking, 1500, "USD"),
            account(AccountType::Savings, 500, "usd"),
            account(AccountType::Credit, -300, "USD"),
            account(AccountType::Checking, -50, "USD"),
            account(AccountType::Investment, 2000, "EUR"),
        ];
        let totals = summarize_accounts(&accounts);
        assert_eq!(totals.len(), 2);

        let eur = &totals[0];
        assert_eq!(eur.currency, "EUR");
        assert_eq!(eur.net_worth, Decimal::new(2000, 0));

        let usd = &totals[1];
        assert_eq!(usd.total_assets, Decimal::new(2000, 0));
        assert_eq!(usd.total_liabilities, Decimal::new(350, 0));
        assert_eq!(usd.net_worth, Decimal::new(1650, 0));
    }

    #[test]
    fn credit_balance_counts_as_liability_whatever_its_sign() {
        let totals = summarize_accounts(&[account(AccountType::Credit, 120, "GBP")]);
        assert_eq!(totals[0].total_assets, Decimal::ZERO);
        assert_eq!(totals[0].total_liabilities, Decimal::new(120, 0));
    }
}
