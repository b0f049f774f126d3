// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Shared HTTP plumbing for the resource clients.
//!
//! Every client holds a clone of one [`ApiClient`], which in turn owns a single
//! [`Transport`]. In production that is [`HttpTransport`] (reqwest); tests swap in
//! an in-memory implementation.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::{Error, Result};
use crate::utils::http_client;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One request, with `path` relative to the API base (e.g. `account/42`).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True for a zero-length, whitespace-only or literal `null` body.
    pub fn is_empty(&self) -> bool {
        let trimmed = self.body.trim_ascii();
        trimmed.is_empty() || trimmed == b"null"
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).chars().take(200).collect()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. Only failures to get a response at all are errors;
    /// any status code comes back as an `ApiResponse`.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            client: http_client(cfg)?,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url(&request.path);
        let mut builder = self.client.request(request.method.into(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(ApiResponse { status, body })
    }
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(cfg)?)))
    }

    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        debug!("[fintrack] {} {}", request.method, request.path);
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        debug!("[fintrack] {} {} -> {}", method, path, response.status);
        Ok(response)
    }

    /// GET `path`; `None` when the backend answers with no body.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self
            .send(ApiRequest {
                method: Method::Get,
                path: path.to_string(),
                body: None,
            })
            .await?;
        let response = ensure_success(response)?;
        if response.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&response.body)?))
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write(Method::Post, path, body).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write(Method::Put, path, body).await
    }

    /// DELETE `path` and hand back the raw status; callers decide what counts.
    pub async fn delete(&self, path: &str) -> Result<u16> {
        let response = self
            .send(ApiRequest {
                method: Method::Delete,
                path: path.to_string(),
                body: None,
            })
            .await?;
        Ok(response.status)
    }

    async fn write<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(ApiRequest {
                method,
                path: path.to_string(),
                body: Some(serde_json::to_value(body)?),
            })
            .await?;
        let response = ensure_success(response)?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}

fn ensure_success(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::Status {
            status: response.status,
            body: response.body_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let cfg = Config::default().with_base_url("http://localhost:8000/api/");
        let transport = HttpTransport::new(&cfg).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000/api");
        assert_eq!(transport.url("/account"), "http://localhost:8000/api/account");
        assert_eq!(transport.url("goal/7"), "http://localhost:8000/api/goal/7");
    }

    #[test]
    fn null_and_blank_bodies_count_as_empty() {
        for body in [&b""[..], &b"  \n"[..], &b"null"[..]] {
            let r = ApiResponse {
                status: 200,
                body: body.to_vec(),
            };
            assert!(r.is_empty());
        }
        let r = ApiResponse {
            status: 200,
            body: b"[]".to_vec(),
        };
        assert!(!r.is_empty());
    }
}
