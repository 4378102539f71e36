//! Beer Stock - REST service for beer stock management.
//!
//! Registers beers with a unique name and a stock capacity, and keeps each
//! beer's quantity within `[0, max]` across increments and decrements.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Beer entity, stock rules and domain errors
//! - **services**: Stock use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors, OpenAPI and routes
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

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Beer, BeerType, NewBeer, StockError};
pub use errors::{AppError, AppResult};
