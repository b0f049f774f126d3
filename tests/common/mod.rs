// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fintrack::api::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
use fintrack::errors::Result;

/// Scripted backend: fixed responses per (method, path), every request recorded.
/// Anything unscripted answers 404 with an empty body.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<(Method, String), ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.responses.lock().unwrap().insert(
            (method, path.to_string()),
            ApiResponse {
                status,
                body: body.as_bytes().to_vec(),
            },
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or(ApiResponse {
                status: 404,
                body: Vec::new(),
            }))
    }
}

pub fn client(fake: &Arc<FakeTransport>) -> ApiClient {
    ApiClient::new(fake.clone())
}
