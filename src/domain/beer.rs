//! Beer domain entity and related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{StockBound, StockError, StockResult};
use crate::config::{MAX_BEER_TEXT_LENGTH, MAX_STOCK_CAPACITY};
use crate::errors::{AppError, AppResult};

/// Beer categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    /// Tag stored in the database and used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerType::Lager => "LAGER",
            BeerType::Malzbier => "MALZBIER",
            BeerType::Witbier => "WITBIER",
            BeerType::Weiss => "WEISS",
            BeerType::Ale => "ALE",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "STOUT",
        }
    }
}

impl fmt::Display for BeerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAGER" => Ok(BeerType::Lager),
            "MALZBIER" => Ok(BeerType::Malzbier),
            "WITBIER" => Ok(BeerType::Witbier),
            "WEISS" => Ok(BeerType::Weiss),
            "ALE" => Ok(BeerType::Ale),
            "IPA" => Ok(BeerType::Ipa),
            "STOUT" => Ok(BeerType::Stout),
            other => Err(format!("Unknown beer type: {}", other)),
        }
    }
}

/// Beer domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

impl Beer {
    /// Quantity after adding `amount`, rejected if it would exceed `max`.
    pub fn checked_increment(&self, amount: u32) -> StockResult<i32> {
        let attempted = i64::from(self.quantity) + i64::from(amount);
        if attempted > i64::from(self.max) {
            return Err(StockError::StockExceeded {
                id: self.id,
                attempted,
                bound: StockBound::Max(self.max),
            });
        }
        Ok(attempted as i32)
    }

    /// Quantity after removing `amount`, rejected if it would drop below zero.
    pub fn checked_decrement(&self, amount: u32) -> StockResult<i32> {
        let attempted = i64::from(self.quantity) - i64::from(amount);
        if attempted < 0 {
            return Err(StockError::StockExceeded {
                id: self.id,
                attempted,
                bound: StockBound::Min(0),
            });
        }
        Ok(attempted as i32)
    }
}

/// Data needed to register a beer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeer {
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

impl NewBeer {
    /// Check the field limits and `0 <= quantity <= max` before persisting.
    pub fn validate(&self) -> AppResult<()> {
        check_text("Name", &self.name)?;
        check_text("Brand", &self.brand)?;

        if !(1..=MAX_STOCK_CAPACITY).contains(&self.max) {
            return Err(AppError::validation(format!(
                "Max must be between 1 and {}",
                MAX_STOCK_CAPACITY
            )));
        }
        if self.quantity < 0 {
            return Err(AppError::validation("Quantity cannot be negative"));
        }
        if self.quantity > self.max {
            return Err(AppError::validation("Quantity cannot exceed max"));
        }

        Ok(())
    }
}

fn check_text(field: &str, value: &str) -> AppResult<()> {
    let len = value.chars().count();
    if len == 0 || len > MAX_BEER_TEXT_LENGTH {
        return Err(AppError::validation(format!(
            "{} must have 1 to {} characters",
            field, MAX_BEER_TEXT_LENGTH
        )));
    }
    Ok(())
}

/// Beer representation returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BeerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Brahma")]
    pub name: String,
    #[schema(example = "Ambev")]
    pub brand: String,
    #[schema(example = 50)]
    pub max: i32,
    #[schema(example = 10)]
    pub quantity: i32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(quantity: i32, max: i32) -> Beer {
        Beer {
            id: 1,
            name: "Lager".to_string(),
            brand: "X".to_string(),
            max,
            quantity,
            beer_type: BeerType::Lager,
        }
    }

    #[test]
    fn test_increment_up_to_max_is_allowed() {
        assert_eq!(beer(10, 50).checked_increment(40), Ok(50));
    }

    #[test]
    fn test_increment_past_max_is_rejected() {
        let err = beer(10, 50).checked_increment(45).unwrap_err();
        assert_eq!(
            err,
            StockError::StockExceeded {
                id: 1,
                attempted: 55,
                bound: StockBound::Max(50),
            }
        );
    }

    #[test]
    fn test_decrement_to_zero_is_allowed() {
        assert_eq!(beer(10, 50).checked_decrement(10), Ok(0));
    }

    #[test]
    fn test_decrement_below_zero_is_rejected() {
        let err = beer(0, 50).checked_decrement(1).unwrap_err();
        assert_eq!(
            err,
            StockError::StockExceeded {
                id: 1,
                attempted: -1,
                bound: StockBound::Min(0),
            }
        );
    }

    #[test]
    fn test_huge_amount_does_not_overflow() {
        assert!(beer(i32::MAX, i32::MAX).checked_increment(u32::MAX).is_err());
        assert!(beer(0, 50).checked_decrement(u32::MAX).is_err());
    }

    #[test]
    fn test_beer_type_round_trips_through_tag() {
        for tag in ["LAGER", "MALZBIER", "WITBIER", "WEISS", "ALE", "IPA", "STOUT"] {
            let parsed: BeerType = tag.parse().unwrap();
            assert_eq!(parsed.as_str(), tag);
        }
        assert!("PILSEN".parse::<BeerType>().is_err());
    }

    fn new_beer(quantity: i32, max: i32) -> NewBeer {
        NewBeer {
            name: "Lager".to_string(),
            brand: "X".to_string(),
            max,
            quantity,
            beer_type: BeerType::Lager,
        }
    }

    #[test]
    fn test_new_beer_within_bounds_is_valid() {
        assert!(new_beer(0, 1).validate().is_ok());
        assert!(new_beer(150, 200).validate().is_ok());
        assert!(new_beer(500, 500).validate().is_ok());
    }

    #[test]
    fn test_new_beer_quantity_above_max_is_invalid() {
        let err = new_beer(60, 50).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Quantity cannot exceed max"));
    }

    #[test]
    fn test_new_beer_negative_quantity_is_invalid() {
        assert!(matches!(new_beer(-1, 50).validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_beer_capacity_out_of_range_is_invalid() {
        assert!(matches!(new_beer(0, 0).validate(), Err(AppError::Validation(_))));
        assert!(matches!(new_beer(0, -5).validate(), Err(AppError::Validation(_))));
        assert!(matches!(new_beer(0, 501).validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_beer_text_length_is_checked() {
        let mut beer = new_beer(10, 50);
        beer.name = String::new();
        assert!(beer.validate().is_err());

        let mut beer = new_beer(10, 50);
        beer.brand = "b".repeat(201);
        assert!(beer.validate().is_err());

        let mut beer = new_beer(10, 50);
        beer.name = "ç".repeat(200);
        assert!(beer.validate().is_ok());
    }

    #[test]
    fn test_response_serializes_type_field() {
        let json = serde_json::to_value(BeerResponse::from(beer(10, 50))).unwrap();
        assert_eq!(json["type"], "LAGER");
        assert_eq!(json["quantity"], 10);
    }
}
