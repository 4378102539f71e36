//! Domain-level errors.
//!
//! These errors represent stock rule violations. They are independent of
//! infrastructure concerns (HTTP, database) and are translated at the API
//! boundary.

use std::fmt;

use thiserror::Error;

/// Key a beer was looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerKey {
    Id(i32),
    Name(String),
}

impl fmt::Display for BeerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeerKey::Id(id) => write!(f, "id {}", id),
            BeerKey::Name(name) => write!(f, "name {}", name),
        }
    }
}

/// Stock bound an adjustment would have crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBound {
    Max(i32),
    Min(i32),
}

impl fmt::Display for StockBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockBound::Max(max) => write!(f, "max stock capacity is {}", max),
            StockBound::Min(min) => write!(f, "min stock is {}", min),
        }
    }
}

/// Business rule violations raised by the stock service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    /// Creation attempted with a name already registered
    #[error("Beer with name {0} already registered in the system")]
    AlreadyExists(String),

    /// Referenced beer does not exist
    #[error("Beer with {0} not found in the system")]
    NotFound(BeerKey),

    /// Adjustment would move quantity outside `[0, max]`
    #[error("Beer with id {id} cannot have stock {attempted}: {bound}")]
    StockExceeded {
        id: i32,
        attempted: i64,
        bound: StockBound,
    },
}

impl StockError {
    pub fn not_found_id(id: i32) -> Self {
        StockError::NotFound(BeerKey::Id(id))
    }

    pub fn not_found_name(name: impl Into<String>) -> Self {
        StockError::NotFound(BeerKey::Name(name.into()))
    }
}

/// Result type alias for domain operations
pub type StockResult<T> = Result<T, StockError>;
