//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{BeerStore, Database};
use crate::services::{BeerManager, BeerService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Beer stock service
    pub beer_service: Arc<dyn BeerService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM store and stock service onto a database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(BeerStore::new(database.get_connection()));
        let beer_service = Arc::new(BeerManager::new(repo));

        Self::new(beer_service, database)
    }

    /// Create application state with a manually injected service.
    pub fn new(beer_service: Arc<dyn BeerService>, database: Arc<Database>) -> Self {
        Self {
            beer_service,
            database,
        }
    }
}
