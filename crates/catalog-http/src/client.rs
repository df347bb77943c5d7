//! Catalog client: one method per request shape against the collection.

use catalog_core::{ApiPortError, ApiPortResult};
use serde_json::Value;
use url::Url;

use crate::config::CatalogClientConfig;
use crate::endpoint::{collection_url, item_url};
use crate::error::{HttpError, HttpResult};
use crate::http::{HttpBackend, HttpMethod, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCatalogClient = CatalogClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the remote product collection.
///
/// Generic over the HTTP backend so tests can inject a fake. External code
/// uses [`DefaultCatalogClient`] through the `ProductApiPort` trait.
pub struct CatalogClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
    pub(crate) resource: String,
}

impl DefaultCatalogClient {
    /// Create a client from configuration.
    ///
    /// Fails with [`ApiPortError::Configuration`] when the base URL is not an
    /// absolute http(s) URL or the HTTP client cannot be built.
    pub fn new(config: &CatalogClientConfig) -> ApiPortResult<Self> {
        let base_url = parse_base_url(&config.base_url).map_err(|e| {
            ApiPortError::Configuration {
                message: e.to_string(),
            }
        })?;
        let backend = ReqwestBackend::new(config).map_err(|e| ApiPortError::Configuration {
            message: e.to_string(),
        })?;

        Ok(Self {
            backend,
            base_url,
            resource: config.resource.clone(),
        })
    }
}

fn parse_base_url(raw: &str) -> HttpResult<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(HttpError::ClientBuild {
            message: format!("base URL must be an absolute http(s) URL: {raw}"),
        });
    }
    Ok(url)
}

impl<B: HttpBackend> CatalogClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, resource: &str, backend: B) -> Self {
        Self {
            backend,
            base_url: Url::parse(base_url).unwrap(),
            resource: resource.to_string(),
        }
    }

    pub(crate) fn collection(&self) -> Url {
        collection_url(&self.base_url, &self.resource)
    }

    pub(crate) fn item(&self, id: &str) -> Url {
        item_url(&self.base_url, &self.resource, id)
    }

    /// `GET /{resource}`: the body must be a JSON array.
    pub(crate) async fn fetch_all(&self) -> HttpResult<Vec<Value>> {
        let url = self.collection();
        let body = self.backend.send(HttpMethod::Get, &url, None).await?;
        match decode(&body)? {
            Value::Array(entries) => Ok(entries),
            other => Err(HttpError::Decode {
                message: format!("expected a JSON array from {url}, got {}", kind(&other)),
            }),
        }
    }

    pub(crate) async fn fetch_one(&self, id: &str) -> HttpResult<Value> {
        let body = self.backend.send(HttpMethod::Get, &self.item(id), None).await?;
        decode(&body)
    }

    pub(crate) async fn post(&self, payload: &Value) -> HttpResult<Value> {
        let url = self.collection();
        let body = self
            .backend
            .send(HttpMethod::Post, &url, Some(payload))
            .await?;
        decode(&body)
    }

    pub(crate) async fn put(&self, id: &str, payload: &Value) -> HttpResult<Value> {
        let body = self
            .backend
            .send(HttpMethod::Put, &self.item(id), Some(payload))
            .await?;
        decode(&body)
    }

    /// `DELETE /{resource}/{id}`; any success body is ignored.
    pub(crate) async fn remove(&self, id: &str) -> HttpResult<()> {
        self.backend
            .send(HttpMethod::Delete, &self.item(id), None)
            .await
            .map(drop)
    }
}

/// Parse a success body. Empty bodies are a decode error.
fn decode(body: &str) -> HttpResult<Value> {
    if body.trim().is_empty() {
        return Err(HttpError::Decode {
            message: "empty response body".to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn client(backend: FakeBackend) -> CatalogClient<FakeBackend> {
        CatalogClient::with_backend("http://localhost:3000", "products", backend)
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultCatalogClient::new(&CatalogClientConfig::new()).unwrap();
        assert_eq!(client.collection().as_str(), "http://localhost:3000/products");
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        for raw in ["not a url", "mailto:ops@example.test", "ftp://example.test"] {
            let config = CatalogClientConfig::new().with_base_url(raw);
            let result = DefaultCatalogClient::new(&config);
            assert!(
                matches!(result, Err(ApiPortError::Configuration { .. })),
                "{raw}"
            );
        }
    }

    #[tokio::test]
    async fn test_fetch_all_requires_array() {
        let client = client(FakeBackend::new().with_body(r#"{"id": "1"}"#));
        let result = client.fetch_all().await;
        assert!(matches!(result, Err(HttpError::Decode { message }) if message.contains("an object")));
    }

    #[tokio::test]
    async fn test_fetch_one_hits_item_url() {
        let client = client(FakeBackend::new().with_body(r#"{"id": "a b"}"#));
        let value = client.fetch_one("a b").await.unwrap();

        assert_eq!(value, json!({"id": "a b"}));
        let requests = client.backend.requests();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].url, "http://localhost:3000/products/a%20b");
    }

    #[tokio::test]
    async fn test_empty_success_body_is_decode_error() {
        let client = client(FakeBackend::new().with_body("  "));
        let result = client.put("1", &json!({})).await;
        assert!(matches!(result, Err(HttpError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_remove_ignores_body() {
        let client = client(FakeBackend::new().with_body("Deleted"));
        assert!(client.remove("1").await.is_ok());
        assert_eq!(client.backend.requests()[0].method, HttpMethod::Delete);
    }
}
