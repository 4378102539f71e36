//! Beer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::{Beer, BeerType, NewBeer};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    #[sea_orm(column_name = "type")]
    pub beer_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Beer {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let beer_type = model.beer_type.parse::<BeerType>().map_err(AppError::internal)?;

        Ok(Beer {
            id: model.id,
            name: model.name,
            brand: model.brand,
            max: model.max,
            quantity: model.quantity,
            beer_type,
        })
    }
}

/// Build an insertable model; the id is assigned by the database
impl From<NewBeer> for ActiveModel {
    fn from(beer: NewBeer) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(beer.name),
            brand: Set(beer.brand),
            max: Set(beer.max),
            quantity: Set(beer.quantity),
            beer_type: Set(beer.beer_type.to_string()),
        }
    }
}
