//! Port trait implementation for `CatalogClient`.
//!
//! Converts internal HTTP errors into the core error taxonomy and hands raw
//! payloads back untouched; normalization happens in the store.

use async_trait::async_trait;
use catalog_core::{ApiPortError, ApiPortResult, Product, ProductApiPort, ProductDraft, RawProduct};
use serde::Serialize;
use serde_json::Value;

use crate::client::CatalogClient;
use crate::error::HttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HttpError` to core `ApiPortError`.
fn map_error(err: HttpError) -> ApiPortError {
    match err {
        HttpError::Status { status, url, body } => match status {
            400 => ApiPortError::BadRequest {
                message: body.unwrap_or_else(|| format!("status 400 from {url}")),
            },
            404 => ApiPortError::NotFound { resource: url },
            500..=599 => ApiPortError::Server { status },
            _ => ApiPortError::Unexpected {
                status: Some(status),
                message: format!("request to {url} failed with status {status}"),
            },
        },
        HttpError::Unreachable { message } => ApiPortError::Unreachable { message },
        HttpError::Transport { message } | HttpError::Encode { message } => {
            ApiPortError::Unexpected {
                status: None,
                message,
            }
        }
        HttpError::ClientBuild { message } => ApiPortError::Configuration { message },
        HttpError::InvalidUrl(e) => ApiPortError::Configuration {
            message: e.to_string(),
        },
        HttpError::Decode { message } => ApiPortError::InvalidResponse { message },
        HttpError::JsonParse(e) => ApiPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

fn encode<T: Serialize>(payload: &T) -> Result<Value, HttpError> {
    serde_json::to_value(payload).map_err(|e| HttpError::Encode {
        message: e.to_string(),
    })
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ProductApiPort for CatalogClient<B> {
    async fn list(&self) -> ApiPortResult<Vec<RawProduct>> {
        let entries = self.fetch_all().await.map_err(map_error)?;
        Ok(entries.into_iter().map(RawProduct::new).collect())
    }

    async fn get(&self, id: &str) -> ApiPortResult<RawProduct> {
        self.fetch_one(id)
            .await
            .map(RawProduct::new)
            .map_err(map_error)
    }

    async fn create(&self, draft: &ProductDraft) -> ApiPortResult<RawProduct> {
        let payload = encode(draft).map_err(map_error)?;
        self.post(&payload)
            .await
            .map(RawProduct::new)
            .map_err(map_error)
    }

    async fn update(&self, product: &Product) -> ApiPortResult<RawProduct> {
        let payload = encode(product).map_err(map_error)?;
        self.put(&product.id, &payload)
            .await
            .map(RawProduct::new)
            .map_err(map_error)
    }

    async fn delete(&self, id: &str) -> ApiPortResult<()> {
        self.remove(id).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::http::testing::FakeBackend;
    use catalog_core::{CompatibleModel, ProductCategory};
    use serde_json::json;

    fn client(backend: FakeBackend) -> CatalogClient<FakeBackend> {
        CatalogClient::with_backend("http://localhost:3000", "products", backend)
    }

    fn status(code: u16, body: Option<&str>) -> HttpError {
        HttpError::Status {
            status: code,
            url: "http://localhost:3000/products/7".to_string(),
            body: body.map(str::to_string),
        }
    }

    #[test]
    fn test_map_error_statuses() {
        assert_eq!(
            map_error(status(400, Some("name is required"))),
            ApiPortError::BadRequest {
                message: "name is required".to_string()
            }
        );
        assert_eq!(
            map_error(status(404, None)),
            ApiPortError::NotFound {
                resource: "http://localhost:3000/products/7".to_string()
            }
        );
        assert_eq!(
            map_error(status(503, None)),
            ApiPortError::Server { status: 503 }
        );
        assert!(matches!(
            map_error(status(409, None)),
            ApiPortError::Unexpected {
                status: Some(409),
                ..
            }
        ));
    }

    #[test]
    fn test_map_error_non_status() {
        assert!(matches!(
            map_error(HttpError::Unreachable {
                message: "connection refused".to_string()
            }),
            ApiPortError::Unreachable { .. }
        ));
        assert!(matches!(
            map_error(HttpError::Decode {
                message: "empty response body".to_string()
            }),
            ApiPortError::InvalidResponse { .. }
        ));
        assert!(matches!(
            map_error(HttpError::Transport {
                message: "reset".to_string()
            }),
            ApiPortError::Unexpected { status: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_list_returns_raw_entries_untouched() {
        let client = client(FakeBackend::new().with_body(r#"[{"id": 1}, {"category": "??"}]"#));
        let entries = client.list().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_value(), &json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_create_posts_draft_in_wire_format() {
        let client = client(FakeBackend::new().with_body(r#"{"id": "9"}"#));
        let draft = ProductDraft {
            name: "Sensor".to_string(),
            category: ProductCategory::Accessories,
            price: 12.5,
            stock: 3,
            description: "Rear".to_string(),
            compatible_models: vec![CompatibleModel::Golf7],
        };

        let created = client.create(&draft).await.unwrap();
        assert_eq!(created.as_value()["id"], "9");

        let request = &client.backend.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:3000/products");
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["category"], "Accesorios");
        assert_eq!(body["compatibleModels"], json!(["Golf VII"]));
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_update_puts_full_record_at_item_url() {
        let client = client(FakeBackend::new().with_body(r#"{"id": "4", "stock": 1}"#));
        let product = ProductDraft {
            name: "Cable".to_string(),
            ..ProductDraft::default()
        }
        .with_id("4");

        client.update(&product).await.unwrap();

        let request = &client.backend.requests()[0];
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "http://localhost:3000/products/4");
        assert_eq!(request.body.as_ref().unwrap()["id"], "4");
    }

    #[tokio::test]
    async fn test_server_fault_maps_to_server_error() {
        let client = client(FakeBackend::new().with_status(500, None));
        let err = client.get("1").await.unwrap_err();
        assert_eq!(err, ApiPortError::Server { status: 500 });
    }

    #[tokio::test]
    async fn test_delete_issues_single_request() {
        let client = client(FakeBackend::new());
        client.delete("3").await.unwrap();
        assert_eq!(client.backend.requests().len(), 1);
    }
}
