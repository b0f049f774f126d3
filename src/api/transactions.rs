// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Reverse;

use super::client::ApiClient;
use super::resource::{DeleteOutcome, Resource, ResourceClient};
use crate::errors::Result;
use crate::models::{Record, RecordId, Saved, Transaction, TransactionPatch};

impl Resource for Transaction {
    const COLLECTION: &'static str = "transaction";
    type Patch = TransactionPatch;
}

/// `/transaction`, listed newest first.
#[derive(Clone)]
pub struct TransactionClient {
    inner: ResourceClient<Transaction>,
}

impl TransactionClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: ResourceClient::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<Saved<Transaction>>> {
        let mut items = self.inner.list().await?;
        sort_newest_first(&mut items);
        Ok(items)
    }

    pub async fn create(&self, transaction: &Transaction) -> Result<Saved<Transaction>> {
        self.inner.create(transaction).await
    }

    pub async fn update(
        &self,
        id: &RecordId,
        patch: &TransactionPatch,
    ) -> Result<Saved<Transaction>> {
        self.inner.update(id, patch).await
    }

    pub async fn delete(&self, id: &RecordId) -> Result<bool> {
        self.inner.delete(id).await
    }

    pub async fn delete_with_status(&self, id: &RecordId) -> Result<DeleteOutcome> {
        self.inner.delete_with_status(id).await
    }

    pub async fn save(&self, record: Record<Transaction>) -> Result<Saved<Transaction>> {
        self.inner.save(record).await
    }
}

/// Stable sort by `date`, most recent first. Unparseable dates sink to the end.
pub fn sort_newest_first(items: &mut [Saved<Transaction>]) {
    items.sort_by_key(|t| Reverse(t.timestamp()));
}
