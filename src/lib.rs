//! Storage API - Product inventory service.
//!
//! A thin layered REST service over a single `products` table:
//! HTTP handler -> service -> repository -> relational store.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Product entity and the partial-update merge rule
//! - **services**: Existence checks, merge-on-update, error translation
//! - **infra**: Database connection, migrations, repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewProduct, Product, ProductPatch};
pub use errors::{AppError, AppResult};
