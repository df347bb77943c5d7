//! Public configuration for the catalog HTTP client.

use std::time::Duration;

/// Configuration for [`DefaultCatalogClient`](crate::DefaultCatalogClient).
///
/// # Example
///
/// ```
/// use catalog_http::CatalogClientConfig;
/// use std::time::Duration;
///
/// let config = CatalogClientConfig::new()
///     .with_base_url("http://catalog.internal:8080")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Server root, e.g. `http://localhost:3000`
    pub(crate) base_url: String,
    /// Collection path segment appended to the base URL
    pub(crate) resource: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout, connect included
    pub(crate) timeout: Duration,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            resource: "products".to_string(),
            user_agent: concat!("catalog-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CatalogClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server root.
    ///
    /// Defaults to `http://localhost:3000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the collection path segment. Defaults to `products`.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
