//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI: the HTTP client from `catalog-http` is built here and handed to a
//! fresh `RecordStore`. Handlers receive the composed [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use catalog_core::{ProductApiPort, RecordStore};
use catalog_http::{CatalogClientConfig, DefaultCatalogClient};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root URL of the catalog server.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Take the connection settings from parsed arguments (flags or env).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }

    fn client_config(&self) -> CatalogClientConfig {
        CatalogClientConfig::new()
            .with_base_url(self.api_url.as_str())
            .with_timeout(self.timeout)
            .with_user_agent(concat!("catalog-cli/", env!("CARGO_PKG_VERSION")))
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    store: RecordStore,
}

impl CliContext {
    /// Compose a context over any port implementation.
    pub fn with_api(api: Arc<dyn ProductApiPort>) -> Self {
        Self {
            store: RecordStore::new(api),
        }
    }

    pub const fn store(&self) -> &RecordStore {
        &self.store
    }
}

/// Bootstrap the CLI application.
///
/// Fails with [`CliError::Config`] when the HTTP client cannot be built from
/// `config` (bad URL, TLS backend unavailable).
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    if config.timeout.is_zero() {
        return Err(CliError::Config("timeout must be at least one second".into()));
    }

    let client = DefaultCatalogClient::new(&config.client_config())
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!(api_url = %config.api_url, timeout = ?config.timeout, "Catalog client ready");

    Ok(CliContext::with_api(Arc::new(client)))
}
