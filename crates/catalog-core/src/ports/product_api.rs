//! Product API port definition.
//!
//! This port defines the remote collection contract the record store relies
//! on. The HTTP implementation lives in `catalog-http`.

use async_trait::async_trait;

use super::ApiPortResult;
use crate::domain::{Product, ProductDraft, RawProduct};

/// Remote product collection.
///
/// Each method performs exactly one request. Responses are returned raw:
/// normalization is the caller's job, so implementations never decide what
/// a valid product looks like.
///
/// # Design Rules
///
/// - No HTTP types in signatures
/// - CRUD-only: list, get, create, update, delete
/// - No caching or retries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductApiPort: Send + Sync {
    /// `GET /products`: every product in the collection.
    async fn list(&self) -> ApiPortResult<Vec<RawProduct>>;

    /// `GET /products/{id}`.
    ///
    /// Returns `Err(ApiPortError::NotFound)` if the product doesn't exist.
    async fn get(&self, id: &str) -> ApiPortResult<RawProduct>;

    /// `POST /products`: returns the created payload, including its assigned id.
    async fn create(&self, draft: &ProductDraft) -> ApiPortResult<RawProduct>;

    /// `PUT /products/{id}` with the full record.
    async fn update(&self, product: &Product) -> ApiPortResult<RawProduct>;

    /// `DELETE /products/{id}`.
    async fn delete(&self, id: &str) -> ApiPortResult<()>;
}
