//! Shared helpers for integration tests.

use std::sync::Arc;

use sea_orm::ConnectOptions;

use beer_stock::domain::{BeerType, NewBeer};
use beer_stock::infra::Database;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn setup_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    Arc::new(
        Database::connect_with(options)
            .await
            .expect("in-memory database should start"),
    )
}

#[allow(dead_code)]
pub fn lager(quantity: i32, max: i32) -> NewBeer {
    NewBeer {
        name: "Lager".to_string(),
        brand: "X".to_string(),
        max,
        quantity,
        beer_type: BeerType::Lager,
    }
}
