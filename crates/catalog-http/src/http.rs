//! HTTP backend abstraction for the catalog endpoint.
//!
//! The production implementation wraps reqwest and issues exactly one
//! request per call. Tests inject [`testing::FakeBackend`].

use crate::config::CatalogClientConfig;
use crate::error::{HttpError, HttpResult};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Sends one request and returns the body of a successful response.
///
/// Non-success statuses come back as [`HttpError::Status`]. Interpreting the
/// body is left to the caller, so an empty body is `Ok("")`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(
        &self,
        method: HttpMethod,
        url: &Url,
        body: Option<&Value>,
    ) -> HttpResult<String>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &CatalogClientConfig) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| HttpError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

/// Connectivity failures (refused, DNS, timeout) versus everything else.
fn classify(err: &reqwest::Error) -> HttpError {
    if err.is_connect() || err.is_timeout() {
        HttpError::Unreachable {
            message: err.to_string(),
        }
    } else {
        HttpError::Transport {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(
        &self,
        method: HttpMethod,
        url: &Url,
        body: Option<&Value>,
    ) -> HttpResult<String> {
        debug!(%method, %url, "Sending catalog request");

        let mut request = self.client.request(method.into(), url.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| classify(&e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .ok()
                .filter(|text| !text.trim().is_empty());
            debug!(%method, %url, status = status.as_u16(), "Catalog request rejected");
            return Err(HttpError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        response.text().await.map_err(|e| classify(&e))
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
