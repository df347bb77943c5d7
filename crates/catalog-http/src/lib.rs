#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultCatalogClient is used through the ProductApiPort trait, not its
// generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod endpoint;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCatalogClient;

// Configuration
pub use config::CatalogClientConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
