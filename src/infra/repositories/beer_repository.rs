//! Beer repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

use super::entities::beer::{self, ActiveModel, Entity as BeerEntity};
use crate::domain::{Beer, NewBeer, StockError};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Beer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Find beer by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Beer>>;

    /// Find beer by exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Beer>>;

    /// Insert a new beer and return it with its generated ID
    async fn save(&self, beer: NewBeer) -> AppResult<Beer>;

    /// Set quantity only if it still equals `expected`.
    ///
    /// Returns `false` when no row matched (changed or deleted meanwhile).
    async fn update_quantity(&self, id: i32, expected: i32, quantity: i32) -> AppResult<bool>;

    /// Delete beer by ID
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    /// List all beers
    async fn find_all(&self) -> AppResult<Vec<Beer>>;
}

/// SeaORM-backed implementation of BeerRepository
pub struct BeerStore {
    db: DatabaseConnection,
}

impl BeerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BeerRepository for BeerStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Beer>> {
        BeerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Beer::try_from)
            .transpose()
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Beer>> {
        BeerEntity::find()
            .filter(beer::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .map(Beer::try_from)
            .transpose()
    }

    async fn save(&self, beer: NewBeer) -> AppResult<Beer> {
        let name = beer.name.clone();
        let model = ActiveModel::from(beer)
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                // A concurrent create slipped in after the service's lookup
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::from(StockError::AlreadyExists(name))
                }
                _ => AppError::from(e),
            })?;

        Beer::try_from(model)
    }

    async fn update_quantity(&self, id: i32, expected: i32, quantity: i32) -> AppResult<bool> {
        let result = BeerEntity::update_many()
            .col_expr(beer::Column::Quantity, Expr::value(quantity))
            .filter(beer::Column::Id.eq(id))
            .filter(beer::Column::Quantity.eq(expected))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        BeerEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Beer>> {
        BeerEntity::find()
            .order_by_asc(beer::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Beer::try_from)
            .collect()
    }
}
