//! Beer stock service - Enforces stock business rules.
//!
//! Names are unique at creation and quantities stay within `[0, max]`.
//! Every adjustment is validated against the freshly loaded beer before
//! anything is written.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MAX_STOCK_UPDATE_ATTEMPTS;
use crate::domain::{Beer, NewBeer, StockError, StockResult};
use crate::errors::{AppError, AppResult};
use crate::infra::BeerRepository;

/// Beer service trait for dependency injection.
#[async_trait]
pub trait BeerService: Send + Sync {
    /// Register a new beer with a unique name
    async fn create_beer(&self, beer: NewBeer) -> AppResult<Beer>;

    /// Get beer by exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Beer>;

    /// List all beers
    async fn list_all(&self) -> AppResult<Vec<Beer>>;

    /// Delete an existing beer
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    /// Add to stock without exceeding the beer's max
    async fn increment(&self, id: i32, quantity: u32) -> AppResult<Beer>;

    /// Remove from stock without going below zero
    async fn decrement(&self, id: i32, quantity: u32) -> AppResult<Beer>;
}

/// Concrete implementation of BeerService using repository.
pub struct BeerManager {
    repo: Arc<dyn BeerRepository>,
}

impl BeerManager {
    /// Create new beer service instance with repository
    pub fn new(repo: Arc<dyn BeerRepository>) -> Self {
        Self { repo }
    }

    async fn find_existing(&self, id: i32) -> AppResult<Beer> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| StockError::not_found_id(id).into())
    }

    /// Load, compute the candidate quantity, then compare-and-set it.
    ///
    /// A lost race re-reads the beer and re-validates, so a concurrent
    /// change can never push the stored quantity outside its bounds.
    async fn adjust_stock(
        &self,
        id: i32,
        apply: impl Fn(&Beer) -> StockResult<i32> + Send + Sync,
    ) -> AppResult<Beer> {
        for attempt in 1..=MAX_STOCK_UPDATE_ATTEMPTS {
            let mut beer = self.find_existing(id).await?;

            let quantity = apply(&beer).inspect_err(|e| {
                tracing::warn!(beer_id = id, "Stock adjustment rejected: {}", e);
            })?;

            if self.repo.update_quantity(id, beer.quantity, quantity).await? {
                beer.quantity = quantity;
                return Ok(beer);
            }

            tracing::debug!(beer_id = id, attempt, "Stock changed concurrently, retrying");
        }

        Err(AppError::conflict(format!(
            "Stock of beer with id {} kept changing, try again",
            id
        )))
    }
}

#[async_trait]
impl BeerService for BeerManager {
    async fn create_beer(&self, beer: NewBeer) -> AppResult<Beer> {
        beer.validate()?;

        if self.repo.find_by_name(&beer.name).await?.is_some() {
            return Err(StockError::AlreadyExists(beer.name).into());
        }

        let created = self.repo.save(beer).await?;
        tracing::info!(beer_id = created.id, name = %created.name, "Beer registered");
        Ok(created)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Beer> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| StockError::not_found_name(name).into())
    }

    async fn list_all(&self) -> AppResult<Vec<Beer>> {
        self.repo.find_all().await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.find_existing(id).await?;
        self.repo.delete_by_id(id).await?;
        tracing::info!(beer_id = id, "Beer deleted");
        Ok(())
    }

    async fn increment(&self, id: i32, quantity: u32) -> AppResult<Beer> {
        self.adjust_stock(id, |beer| beer.checked_increment(quantity))
            .await
    }

    async fn decrement(&self, id: i32, quantity: u32) -> AppResult<Beer> {
        self.adjust_stock(id, |beer| beer.checked_decrement(quantity))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::{BeerKey, BeerType, StockBound};
    use crate::infra::MockBeerRepository;

    const INVALID_BEER_ID: i32 = 999;

    fn create_test_beer(quantity: i32, max: i32) -> Beer {
        Beer {
            id: 1,
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max,
            quantity,
            beer_type: BeerType::Lager,
        }
    }

    fn new_beer(name: &str) -> NewBeer {
        NewBeer {
            name: name.to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    fn service(repo: MockBeerRepository) -> BeerManager {
        BeerManager::new(Arc::new(repo))
    }

    fn repo_returning(beer: Beer) -> MockBeerRepository {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_id()
            .with(eq(beer.id))
            .returning(move |_| Ok(Some(beer.clone())));
        repo
    }

    #[tokio::test]
    async fn test_create_beer_success() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_name()
            .withf(|name| name == "Brahma")
            .returning(|_| Ok(None));
        repo.expect_save().times(1).returning(|beer| {
            Ok(Beer {
                id: 1,
                name: beer.name,
                brand: beer.brand,
                max: beer.max,
                quantity: beer.quantity,
                beer_type: beer.beer_type,
            })
        });

        let created = service(repo).create_beer(new_beer("Brahma")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Brahma");
        assert_eq!(created.quantity, 10);
    }

    #[tokio::test]
    async fn test_create_beer_over_capacity_is_rejected() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_name().never();
        repo.expect_save().never();

        let mut beer = new_beer("Brahma");
        beer.max = 50;
        beer.quantity = 60;

        let result = service(repo).create_beer(beer).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_beer_without_capacity_is_rejected() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_name().never();
        repo.expect_save().never();

        let mut beer = new_beer("Brahma");
        beer.max = 0;
        beer.quantity = 0;

        let result = service(repo).create_beer(beer).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_beer_already_registered() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Ok(Some(create_test_beer(10, 50))));
        repo.expect_save().never();

        let result = service(repo).create_beer(new_beer("Brahma")).await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::AlreadyExists(ref name))) if name == "Brahma"
        ));
    }

    #[tokio::test]
    async fn test_find_by_name_success() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Ok(Some(create_test_beer(10, 50))));

        let found = service(repo).find_by_name("Brahma").await.unwrap();

        assert_eq!(found, create_test_beer(10, 50));
    }

    #[tokio::test]
    async fn test_find_by_name_not_found() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));

        let result = service(repo).find_by_name("Unknown").await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::NotFound(BeerKey::Name(ref name)))) if name == "Unknown"
        ));
    }

    #[tokio::test]
    async fn test_list_all_returns_beers() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![create_test_beer(10, 50)]));

        let beers = service(repo).list_all().await.unwrap();

        assert_eq!(beers.len(), 1);
        assert_eq!(beers[0].name, "Brahma");
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let beers = service(repo).list_all().await.unwrap();

        assert!(beers.is_empty());
    }

    #[tokio::test]
    async fn test_delete_existing_beer() {
        let mut repo = repo_returning(create_test_beer(10, 50));
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete_by_id(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_beer() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete_by_id().never();

        let result = service(repo).delete_by_id(INVALID_BEER_ID).await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::NotFound(BeerKey::Id(INVALID_BEER_ID))))
        ));
    }

    #[tokio::test]
    async fn test_increment_increases_stock() {
        let mut repo = repo_returning(create_test_beer(10, 50));
        repo.expect_update_quantity()
            .with(eq(1), eq(10), eq(20))
            .times(1)
            .returning(|_, _, _| Ok(true));

        let beer = service(repo).increment(1, 10).await.unwrap();

        assert_eq!(beer.quantity, 20);
    }

    #[tokio::test]
    async fn test_increment_to_exactly_max() {
        let mut repo = repo_returning(create_test_beer(10, 50));
        repo.expect_update_quantity()
            .with(eq(1), eq(10), eq(50))
            .returning(|_, _, _| Ok(true));

        let beer = service(repo).increment(1, 40).await.unwrap();

        assert_eq!(beer.quantity, 50);
    }

    #[tokio::test]
    async fn test_increment_beyond_max_is_rejected_without_writing() {
        let mut repo = repo_returning(create_test_beer(10, 50));
        repo.expect_update_quantity().never();

        let result = service(repo).increment(1, 45).await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::StockExceeded {
                id: 1,
                attempted: 55,
                bound: StockBound::Max(50),
            }))
        ));
    }

    #[tokio::test]
    async fn test_increment_missing_beer() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).increment(INVALID_BEER_ID, 10).await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::NotFound(BeerKey::Id(INVALID_BEER_ID))))
        ));
    }

    #[tokio::test]
    async fn test_decrement_decreases_stock() {
        let mut repo = repo_returning(create_test_beer(10, 50));
        repo.expect_update_quantity()
            .with(eq(1), eq(10), eq(5))
            .returning(|_, _, _| Ok(true));

        let beer = service(repo).decrement(1, 5).await.unwrap();

        assert_eq!(beer.quantity, 5);
    }

    #[tokio::test]
    async fn test_decrement_to_empty_stock() {
        let mut repo = repo_returning(create_test_beer(10, 50));
        repo.expect_update_quantity()
            .with(eq(1), eq(10), eq(0))
            .returning(|_, _, _| Ok(true));

        let beer = service(repo).decrement(1, 10).await.unwrap();

        assert_eq!(beer.quantity, 0);
    }

    #[tokio::test]
    async fn test_decrement_below_zero_is_rejected_without_writing() {
        let mut repo = repo_returning(create_test_beer(0, 50));
        repo.expect_update_quantity().never();

        let result = service(repo).decrement(1, 1).await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::StockExceeded {
                id: 1,
                attempted: -1,
                bound: StockBound::Min(0),
            }))
        ));
    }

    #[tokio::test]
    async fn test_decrement_missing_beer() {
        let mut repo = MockBeerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).decrement(INVALID_BEER_ID, 5).await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::NotFound(BeerKey::Id(INVALID_BEER_ID))))
        ));
    }

    #[tokio::test]
    async fn test_lost_race_revalidates_against_fresh_stock() {
        // First read sees 10, but another writer moves stock to 45 before our write.
        let mut repo = MockBeerRepository::new();
        let mut reads = vec![create_test_beer(45, 50), create_test_beer(10, 50)];
        repo.expect_find_by_id()
            .times(2)
            .returning(move |_| Ok(reads.pop()));
        repo.expect_update_quantity()
            .with(eq(1), eq(10), eq(20))
            .times(1)
            .returning(|_, _, _| Ok(false));

        let result = service(repo).increment(1, 10).await;

        assert!(matches!(
            result,
            Err(AppError::Stock(StockError::StockExceeded { attempted: 55, .. }))
        ));
    }

    #[tokio::test]
    async fn test_persistent_contention_gives_up_with_conflict() {
        let mut repo = repo_returning(create_test_beer(10, 50));
        repo.expect_update_quantity()
            .times(MAX_STOCK_UPDATE_ATTEMPTS as usize)
            .returning(|_, _, _| Ok(false));

        let result = service(repo).increment(1, 10).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
