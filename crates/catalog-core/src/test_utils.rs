//! Test fixtures for catalog consumers.
//!
//! Available to this crate's unit tests and, through the `test-utils`
//! feature, to other crates' tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::domain::{CompatibleModel, Product, ProductCategory, ProductDraft, RawProduct};
use crate::ports::{ApiPortError, ApiPortResult, ProductApiPort};
use crate::store::Operation;

// ─────────────────────────────────────────────────────────────────────────────
// ProductBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// Fluent builder for test products with sensible defaults.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            product: Product {
                id: "1".to_string(),
                name: "Default Product".to_string(),
                category: ProductCategory::Electronics,
                price: 100.0,
                stock: 10,
                description: "Default description".to_string(),
                compatible_models: Vec::new(),
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.product.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product.name = name.into();
        self
    }

    pub const fn with_category(mut self, category: ProductCategory) -> Self {
        self.product.category = category;
        self
    }

    pub const fn with_price(mut self, price: f64) -> Self {
        self.product.price = price;
        self
    }

    pub const fn with_stock(mut self, stock: u64) -> Self {
        self.product.stock = stock;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.product.description = description.into();
        self
    }

    pub fn with_compatible_models(mut self, models: Vec<CompatibleModel>) -> Self {
        self.product.compatible_models = models;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }

    /// Build a draft (id dropped).
    pub fn build_draft(self) -> ProductDraft {
        self.product.to_draft()
    }

    pub fn a_default_product() -> Product {
        Self::new().build()
    }

    /// Products with ids `"1"..="count"` and names `"Product N"`.
    pub fn a_product_list(count: usize) -> Vec<Product> {
        (1..=count)
            .map(|i| {
                Self::new()
                    .with_id(i.to_string())
                    .with_name(format!("Product {i}"))
                    .build()
            })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FakeProductApi
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeState {
    // Insertion-ordered so `list` is deterministic.
    products: Vec<(String, RawProduct)>,
    next_id: u64,
    calls: HashMap<Operation, usize>,
    failures: HashMap<Operation, VecDeque<ApiPortError>>,
    responses: HashMap<Operation, VecDeque<RawProduct>>,
    gates: HashMap<Operation, Arc<Semaphore>>,
}

impl FakeState {
    fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|(key, _)| key == id)
    }
}

/// In-memory stand-in for the remote product collection.
///
/// Behaves like a conventional REST collection with numeric id assignment,
/// counts calls per operation, and supports injected failures, canned
/// responses, and paused operations.
#[derive(Default)]
pub struct FakeProductApi {
    state: Mutex<FakeState>,
}

/// Holds back every call of one operation until released.
#[derive(Clone)]
pub struct Gate {
    permits: Arc<Semaphore>,
}

impl Gate {
    /// Let one paused call proceed.
    pub fn release(&self) {
        self.permits.add_permits(1);
    }
}

impl FakeProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backing collection.
    pub fn with_products(self, products: impl IntoIterator<Item = Product>) -> Self {
        {
            let mut state = self.lock();
            for product in products {
                if let Ok(n) = product.id.parse::<u64>() {
                    state.next_id = state.next_id.max(n);
                }
                let id = product.id.clone();
                state.products.push((id, RawProduct::from(&product)));
            }
        }
        self
    }

    /// Seed a raw, possibly malformed, payload under `id`.
    pub fn with_raw(self, id: impl Into<String>, raw: RawProduct) -> Self {
        self.lock().products.push((id.into(), raw));
        self
    }

    /// Make the next call of `operation` fail with `error`.
    pub fn fail_next(&self, operation: Operation, error: ApiPortError) {
        self.lock()
            .failures
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// Make the next successful call of `operation` return `raw` verbatim.
    ///
    /// Only meaningful for `get`, `create` and `update`.
    pub fn respond_next(&self, operation: Operation, raw: RawProduct) {
        self.lock()
            .responses
            .entry(operation)
            .or_default()
            .push_back(raw);
    }

    /// Pause every call of `operation` until the returned gate is released.
    pub fn pause(&self, operation: Operation) -> Gate {
        let permits = Arc::new(Semaphore::new(0));
        self.lock().gates.insert(operation, Arc::clone(&permits));
        Gate { permits }
    }

    /// Number of calls received for `operation`.
    pub fn calls(&self, operation: Operation) -> usize {
        self.lock().calls.get(&operation).copied().unwrap_or(0)
    }

    /// Number of calls received across all operations.
    pub fn total_calls(&self) -> usize {
        self.lock().calls.values().sum()
    }

    /// Whether the backing collection holds `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().position(id).is_some()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn enter(&self, operation: Operation) -> ApiPortResult<Option<RawProduct>> {
        let gate = {
            let mut state = self.lock();
            *state.calls.entry(operation).or_default() += 1;
            state.gates.get(&operation).cloned()
        };
        if let Some(permits) = gate {
            if let Ok(permit) = permits.acquire().await {
                permit.forget();
            }
        }

        let mut state = self.lock();
        if let Some(error) = state
            .failures
            .get_mut(&operation)
            .and_then(VecDeque::pop_front)
        {
            return Err(error);
        }
        Ok(state
            .responses
            .get_mut(&operation)
            .and_then(VecDeque::pop_front))
    }
}

fn not_found(id: &str) -> ApiPortError {
    ApiPortError::NotFound {
        resource: format!("products/{id}"),
    }
}

#[async_trait]
impl ProductApiPort for FakeProductApi {
    async fn list(&self) -> ApiPortResult<Vec<RawProduct>> {
        self.enter(Operation::List).await?;
        Ok(self
            .lock()
            .products
            .iter()
            .map(|(_, raw)| raw.clone())
            .collect())
    }

    async fn get(&self, id: &str) -> ApiPortResult<RawProduct> {
        if let Some(canned) = self.enter(Operation::Get).await? {
            return Ok(canned);
        }
        let state = self.lock();
        state
            .position(id)
            .map(|i| state.products[i].1.clone())
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, draft: &ProductDraft) -> ApiPortResult<RawProduct> {
        if let Some(canned) = self.enter(Operation::Create).await? {
            return Ok(canned);
        }
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id.to_string();
        let raw = RawProduct::from(&draft.clone().with_id(id.clone()));
        state.products.push((id, raw.clone()));
        Ok(raw)
    }

    async fn update(&self, product: &Product) -> ApiPortResult<RawProduct> {
        let canned = self.enter(Operation::Update).await?;
        let mut state = self.lock();
        let index = state.position(&product.id).ok_or_else(|| not_found(&product.id))?;
        let raw = canned.unwrap_or_else(|| RawProduct::from(product));
        state.products[index].1 = raw.clone();
        Ok(raw)
    }

    async fn delete(&self, id: &str) -> ApiPortResult<()> {
        self.enter(Operation::Delete).await?;
        let mut state = self.lock();
        let index = state.position(id).ok_or_else(|| not_found(id))?;
        state.products.remove(index);
        Ok(())
    }
}
