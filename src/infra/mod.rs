//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and repositories.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{BeerRepository, BeerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockBeerRepository;
