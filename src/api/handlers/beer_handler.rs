//! Beer stock handlers.

use std::borrow::Cow;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::{BeerResponse, BeerType, NewBeer};
use crate::errors::AppResult;

/// Beer registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_stock_bounds"))]
pub struct CreateBeerRequest {
    /// Unique beer name
    #[validate(length(min = 1, max = 200, message = "Name must have 1 to 200 characters"))]
    #[schema(example = "Brahma")]
    pub name: String,
    /// Brewery or brand
    #[validate(length(min = 1, max = 200, message = "Brand must have 1 to 200 characters"))]
    #[schema(example = "Ambev")]
    pub brand: String,
    /// Stock capacity
    #[validate(range(min = 1, max = 500, message = "Max must be between 1 and 500"))]
    #[schema(example = 50, minimum = 1, maximum = 500)]
    pub max: i32,
    /// Initial stock (not above `max`)
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 10, minimum = 0)]
    pub quantity: i32,
    /// Beer category
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

/// Initial quantity may not exceed the declared capacity
fn validate_stock_bounds(request: &CreateBeerRequest) -> Result<(), ValidationError> {
    if request.quantity > request.max {
        let mut error = ValidationError::new("quantity_exceeds_max");
        error.message = Some(Cow::from("Quantity cannot exceed max"));
        return Err(error);
    }
    Ok(())
}

impl From<CreateBeerRequest> for NewBeer {
    fn from(request: CreateBeerRequest) -> Self {
        NewBeer {
            name: request.name,
            brand: request.brand,
            max: request.max,
            quantity: request.quantity,
            beer_type: request.beer_type,
        }
    }
}

/// Stock adjustment request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuantityRequest {
    /// Amount to add or remove
    #[validate(range(min = 1, max = 100, message = "Quantity must be between 1 and 100"))]
    #[schema(example = 10, minimum = 1, maximum = 100)]
    pub quantity: u32,
}

/// Create beer routes
pub fn beer_routes() -> Router<AppState> {
    // Name lookups and id-keyed deletes share one path segment
    Router::new()
        .route("/", get(list_beers).post(create_beer))
        .route("/:id", get(find_by_name).delete(delete_by_id))
        .route("/:id/increment", patch(increment))
        .route("/:id/decrement", patch(decrement))
}

/// Register a new beer
#[utoipa::path(
    post,
    path = "/api/v1/beers",
    tag = "Beers",
    request_body = CreateBeerRequest,
    responses(
        (status = 201, description = "Beer successfully created", body = BeerResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "Beer name already registered")
    )
)]
pub async fn create_beer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBeerRequest>,
) -> AppResult<(StatusCode, Json<BeerResponse>)> {
    let beer = state.beer_service.create_beer(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(BeerResponse::from(beer))))
}

/// Find beer by name
#[utoipa::path(
    get,
    path = "/api/v1/beers/{name}",
    tag = "Beers",
    params(
        ("name" = String, Path, description = "Exact beer name")
    ),
    responses(
        (status = 200, description = "Beer found", body = BeerResponse),
        (status = 404, description = "Beer not found")
    )
)]
pub async fn find_by_name(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> AppResult<Json<BeerResponse>> {
    let beer = state.beer_service.find_by_name(&name).await?;
    Ok(Json(BeerResponse::from(beer)))
}

/// List all beers
#[utoipa::path(
    get,
    path = "/api/v1/beers",
    tag = "Beers",
    responses(
        (status = 200, description = "List of all registered beers", body = Vec<BeerResponse>)
    )
)]
pub async fn list_beers(State(state): State<AppState>) -> AppResult<Json<Vec<BeerResponse>>> {
    let beers = state.beer_service.list_all().await?;
    Ok(Json(beers.into_iter().map(BeerResponse::from).collect()))
}

/// Delete beer by ID
#[utoipa::path(
    delete,
    path = "/api/v1/beers/{id}",
    tag = "Beers",
    params(
        ("id" = i32, Path, description = "Beer ID")
    ),
    responses(
        (status = 204, description = "Beer successfully deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Beer not found")
    )
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<StatusCode> {
    state.beer_service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Increment beer stock
#[utoipa::path(
    patch,
    path = "/api/v1/beers/{id}/increment",
    tag = "Beers",
    params(
        ("id" = i32, Path, description = "Beer ID")
    ),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Stock incremented", body = BeerResponse),
        (status = 400, description = "Stock would exceed max or invalid quantity"),
        (status = 404, description = "Beer not found"),
        (status = 409, description = "Stock changed concurrently")
    )
)]
pub async fn increment(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(payload): ValidatedJson<QuantityRequest>,
) -> AppResult<Json<BeerResponse>> {
    let beer = state.beer_service.increment(id, payload.quantity).await?;
    Ok(Json(BeerResponse::from(beer)))
}

/// Decrement beer stock
#[utoipa::path(
    patch,
    path = "/api/v1/beers/{id}/decrement",
    tag = "Beers",
    params(
        ("id" = i32, Path, description = "Beer ID")
    ),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Stock decremented", body = BeerResponse),
        (status = 400, description = "Stock would go below zero or invalid quantity"),
        (status = 404, description = "Beer not found"),
        (status = 409, description = "Stock changed concurrently")
    )
)]
pub async fn decrement(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(payload): ValidatedJson<QuantityRequest>,
) -> AppResult<Json<BeerResponse>> {
    let beer = state.beer_service.decrement(id, payload.quantity).await?;
    Ok(Json(BeerResponse::from(beer)))
}
