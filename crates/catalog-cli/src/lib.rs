//! Command-line front end for the product catalog.
//!
//! `main.rs` is the composition root: it parses arguments, wires a
//! [`RecordStore`](catalog_core::RecordStore) over the HTTP client in
//! [`bootstrap`], and dispatches to [`handlers`]. Handlers talk to the store
//! only.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by main.rs only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
