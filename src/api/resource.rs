// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The list/create/update/delete contract every backend collection follows.

use std::marker::PhantomData;

use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::client::ApiClient;
use crate::errors::Result;
use crate::models::{Record, RecordId, Saved};

/// A record type backed by a REST collection at `/{COLLECTION}`.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    /// Partial update body; converting a full record sets every field.
    type Patch: Serialize + From<Self> + Send + Sync;
}

/// Result of a DELETE, kept for callers that want the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub status: u16,
}

impl DeleteOutcome {
    /// Only 200 and 204 mean the record is gone; 404 and friends do not.
    pub fn is_deleted(&self) -> bool {
        self.status == 200 || self.status == 204
    }
}

pub(crate) fn item_path(collection: &str, id: &RecordId) -> String {
    format!("{}/{}", collection, id)
}

pub struct ResourceClient<R> {
    api: ApiClient,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    /// Every record in the collection; an empty body is an empty list.
    pub async fn list(&self) -> Result<Vec<Saved<R>>> {
        let items: Vec<Saved<R>> = self
            .api
            .get_optional(R::COLLECTION)
            .await?
            .unwrap_or_default();
        info!("[fintrack] Fetched {} {} records", items.len(), R::COLLECTION);
        Ok(items)
    }

    pub async fn create(&self, record: &R) -> Result<Saved<R>> {
        let saved: Saved<R> = self.api.post_json(R::COLLECTION, record).await?;
        info!("[fintrack] Created {} {}", R::COLLECTION, saved.id);
        Ok(saved)
    }

    /// Returns the record exactly as the backend reports it after the update.
    pub async fn update(&self, id: &RecordId, patch: &R::Patch) -> Result<Saved<R>> {
        self.api
            .put_json(&item_path(R::COLLECTION, id), patch)
            .await
    }

    pub async fn delete(&self, id: &RecordId) -> Result<bool> {
        Ok(self.delete_with_status(id).await?.is_deleted())
    }

    pub async fn delete_with_status(&self, id: &RecordId) -> Result<DeleteOutcome> {
        let status = self.api.delete(&item_path(R::COLLECTION, id)).await?;
        let outcome = DeleteOutcome { status };
        if !outcome.is_deleted() {
            warn!(
                "[fintrack] Delete of {} {} answered {}",
                R::COLLECTION,
                id,
                status
            );
        }
        Ok(outcome)
    }

    /// Create an unsaved record or overwrite every field of a persisted one.
    pub async fn save(&self, record: Record<R>) -> Result<Saved<R>> {
        match record {
            Record::Unsaved(data) => self.create(&data).await,
            Record::Persisted(Saved { id, data }) => {
                self.update(&id, &R::Patch::from(data)).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_and_204_count_as_deleted() {
        for status in [200, 204] {
            assert!(DeleteOutcome { status }.is_deleted());
        }
        for status in [201, 202, 301, 400, 404, 409, 500, 503] {
            assert!(!DeleteOutcome { status }.is_deleted());
        }
    }

    #[test]
    fn item_paths_join_collection_and_id() {
        assert_eq!(item_path("goal", &RecordId::new("g-1")), "goal/g-1");
    }
}
