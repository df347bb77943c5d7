//! The record store: single source of truth for fetched and mutated products.
//!
//! State lives in a `watch` channel. Every mutation is a `send_modify` closure
//! that runs to completion without awaiting, so each settlement applies its
//! whole read-modify-write before any other code observes the state.
//!
//! Per-call state machine:
//!
//! ```text
//! idle ──call──▶ loading ──ok──▶ idle
//!                        └─err─▶ idle + error
//! ```
//!
//! The status is flat. When calls overlap, whichever settles last decides
//! what `status()` reports.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::status::{Operation, OperationStatus};
use crate::domain::{Product, ProductDraft, RawProduct, normalize};
use crate::ports::{ApiPortError, ProductApiPort};

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of everything the store owns.
///
/// Receivers from [`RecordStore::subscribe`] see a new value after every
/// change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    products: HashMap<String, Product>,
    selected: Option<Product>,
    status: OperationStatus,
}

impl StoreState {
    /// Cached products, in no particular order.
    pub fn products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Look up a cached product.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The product last fetched or viewed by id.
    pub const fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub const fn status(&self) -> &OperationStatus {
        &self.status
    }

    /// Insert or overwrite a product, keeping the selection in step.
    fn put(&mut self, product: Product) {
        if self.selected.as_ref().is_some_and(|s| s.id == product.id) {
            self.selected = Some(product.clone());
        }
        self.products.insert(product.id.clone(), product);
    }

    fn refresh_selection(&mut self) {
        let refreshed = self
            .selected
            .as_ref()
            .and_then(|s| self.products.get(&s.id))
            .cloned();
        if refreshed.is_some() {
            self.selected = refreshed;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Result of [`RecordStore::get_by_id`].
#[derive(Debug)]
pub enum Lookup {
    /// The product was cached; no request was made.
    Cached(Product),
    /// The product was not cached; a background fetch is running.
    Fetching(PendingFetch),
    /// The product was not cached and no runtime was available to fetch it.
    /// Nothing was requested and the status is unchanged.
    Unscheduled,
}

impl Lookup {
    /// The cached product, or `None` when a fetch was scheduled.
    pub const fn cached(&self) -> Option<&Product> {
        match self {
            Self::Cached(product) => Some(product),
            Self::Fetching(_) | Self::Unscheduled => None,
        }
    }

    pub fn into_cached(self) -> Option<Product> {
        match self {
            Self::Cached(product) => Some(product),
            Self::Fetching(_) | Self::Unscheduled => None,
        }
    }

    /// Wait for the product: immediate when cached, otherwise the fetch result.
    pub async fn resolve(self) -> Option<Product> {
        match self {
            Self::Cached(product) => Some(product),
            Self::Fetching(pending) => pending.settled().await,
            Self::Unscheduled => None,
        }
    }
}

/// Handle to a background fetch started by [`RecordStore::get_by_id`].
///
/// Dropping the handle does not cancel the fetch.
#[derive(Debug)]
pub struct PendingFetch {
    handle: JoinHandle<Option<Product>>,
}

impl PendingFetch {
    /// Wait until the fetch has settled and its reconciliation is visible.
    ///
    /// Returns the fetched product, or `None` if the fetch failed.
    pub async fn settled(self) -> Option<Product> {
        self.handle.await.ok().flatten()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordStore
// ─────────────────────────────────────────────────────────────────────────────

/// Owner of the product cache, the selection, and the operation status.
///
/// The only component that talks to the [`ProductApiPort`] or writes cached
/// state. Clones share the same state.
#[derive(Clone)]
pub struct RecordStore {
    api: Arc<dyn ProductApiPort>,
    state: Arc<watch::Sender<StoreState>>,
    runtime: Option<Handle>,
}

impl RecordStore {
    /// Create a store with an empty cache, no selection, and idle status.
    ///
    /// When called inside a Tokio runtime, background fetches are spawned on
    /// that runtime even if `get_by_id` is later called from outside it.
    pub fn new(api: Arc<dyn ProductApiPort>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            api,
            state: Arc::new(state),
            runtime: Handle::try_current().ok(),
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Cached products, in no particular order.
    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products()
    }

    pub fn selected(&self) -> Option<Product> {
        self.state.borrow().selected.clone()
    }

    pub fn status(&self) -> OperationStatus {
        self.state.borrow().status.clone()
    }

    /// Reset the error message. Loading flag and cache are left alone.
    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| s.status.error.take().is_some());
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replace the cache with the full remote collection.
    ///
    /// Returns `true` if the cache was refreshed. On failure the previous
    /// cache is kept and the error is reported through `status()`.
    pub async fn list(&self) -> bool {
        self.begin(Operation::List, None);
        match self.api.list().await {
            Ok(raws) => {
                let mut fresh = HashMap::with_capacity(raws.len());
                for product in raws.iter().map(normalize) {
                    if product.id.is_empty() {
                        tracing::warn!(name = %product.name, "Skipping listed product without id");
                        continue;
                    }
                    fresh.insert(product.id.clone(), product);
                }
                let count = fresh.len();
                self.settle(|s| {
                    s.products = fresh;
                    s.refresh_selection();
                });
                tracing::debug!(count, "Product list refreshed");
                true
            }
            Err(err) => {
                self.fail(Operation::List, None, &err);
                false
            }
        }
    }

    /// Look up a product by id.
    ///
    /// A cached product is selected and returned without any request. An
    /// uncached one yields [`Lookup::Fetching`] right away while the product
    /// is fetched in the background; on success it is cached and selected, on
    /// failure the selection is left as it was.
    ///
    /// The fetch runs on the runtime captured by [`RecordStore::new`], or the
    /// caller's runtime. With neither, the miss yields [`Lookup::Unscheduled`].
    pub fn get_by_id(&self, id: &str) -> Lookup {
        let mut hit = None;
        self.state.send_if_modified(|s| {
            let Some(product) = s.products.get(id).cloned() else {
                return false;
            };
            let changed = s.selected.as_ref() != Some(&product);
            s.selected = Some(product.clone());
            hit = Some(product);
            changed
        });
        if let Some(product) = hit {
            tracing::debug!(id, "Product served from cache");
            return Lookup::Cached(product);
        }

        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            tracing::warn!(id, "No Tokio runtime available, product fetch not scheduled");
            return Lookup::Unscheduled;
        };

        self.begin(Operation::Get, Some(id));
        let store = self.clone();
        let id = id.to_string();
        let handle = runtime.spawn(async move { store.fetch(&id).await });
        Lookup::Fetching(PendingFetch { handle })
    }

    /// Submit a new product. Returns the created product as cached.
    pub async fn create(&self, draft: &ProductDraft) -> Option<Product> {
        self.begin(Operation::Create, None);
        let result = self.api.create(draft).await.and_then(|raw| {
            let product = normalize(&raw);
            if product.id.is_empty() {
                return Err(ApiPortError::InvalidResponse {
                    message: "created product has no id".to_string(),
                });
            }
            Ok(product)
        });
        match result {
            Ok(product) => {
                self.settle(|s| s.put(product.clone()));
                tracing::debug!(id = %product.id, "Product created");
                Some(product)
            }
            Err(err) => {
                self.fail(Operation::Create, None, &err);
                None
            }
        }
    }

    /// Replace an existing product. The server's response is what gets cached.
    pub async fn update(&self, product: &Product) -> Option<Product> {
        self.begin(Operation::Update, Some(&product.id));
        match self.api.update(product).await {
            Ok(raw) => {
                let updated = keyed(&raw, &product.id);
                self.settle(|s| s.put(updated.clone()));
                tracing::debug!(id = %updated.id, "Product updated");
                Some(updated)
            }
            Err(err) => {
                self.fail(Operation::Update, Some(&product.id), &err);
                None
            }
        }
    }

    /// Delete a product. Returns `true` if it was removed.
    pub async fn delete(&self, id: &str) -> bool {
        self.begin(Operation::Delete, Some(id));
        match self.api.delete(id).await {
            Ok(()) => {
                self.settle(|s| {
                    s.products.remove(id);
                    if s.selected.as_ref().is_some_and(|p| p.id == id) {
                        s.selected = None;
                    }
                });
                tracing::debug!(id, "Product deleted");
                true
            }
            Err(err) => {
                self.fail(Operation::Delete, Some(id), &err);
                false
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn fetch(&self, id: &str) -> Option<Product> {
        match self.api.get(id).await {
            Ok(raw) => {
                let product = keyed(&raw, id);
                self.settle(|s| {
                    s.selected = Some(product.clone());
                    s.products.insert(product.id.clone(), product.clone());
                });
                tracing::debug!(id, "Product fetched");
                Some(product)
            }
            Err(err) => {
                self.fail(Operation::Get, Some(id), &err);
                None
            }
        }
    }

    fn begin(&self, operation: Operation, id: Option<&str>) {
        tracing::debug!(%operation, id, "Catalog request issued");
        self.state.send_modify(|s| s.status = OperationStatus::loading());
    }

    fn settle(&self, reconcile: impl FnOnce(&mut StoreState)) {
        self.state.send_modify(|s| {
            reconcile(s);
            s.status.loading = false;
        });
    }

    fn fail(&self, operation: Operation, id: Option<&str>, err: &ApiPortError) {
        tracing::warn!(%operation, id, error = %err, "Catalog request failed");
        let message = err.status_message();
        self.state
            .send_modify(|s| s.status = OperationStatus::failed(message));
    }
}

/// Normalize a single-product response, falling back to the requested id.
fn keyed(raw: &RawProduct, requested_id: &str) -> Product {
    let mut product = normalize(raw);
    if product.id.is_empty() {
        product.id = requested_id.to_string();
    }
    product
}
