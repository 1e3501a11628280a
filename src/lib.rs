//! qcex - terminal explorer for block indexing APIs
//!
//! Reads chain status, blocks, transactions and address histories from an
//! indexer HTTP API and renders them in the terminal.

pub mod api;
pub mod app;
pub mod config;
pub mod fetch;
pub mod route;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use app::{App, Load, Screen};
pub use config::Config;
pub use route::Route;
