//! Domain layer - Core business entities and value objects.
//!
//! Contains pure business logic with no infrastructure dependencies.

mod beer;
mod error;

pub use beer::{Beer, BeerResponse, BeerType, NewBeer};
pub use error::{BeerKey, StockBound, StockError, StockResult};
