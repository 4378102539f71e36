//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod beer_repository;
pub(crate) mod entities;

pub use beer_repository::{BeerRepository, BeerStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use beer_repository::MockBeerRepository;
