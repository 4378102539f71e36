//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::beer_handler;
use crate::domain::{BeerResponse, BeerType};

/// OpenAPI documentation for the Beer Stock API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beer Stock API",
        version = "1.0.0",
        description = "REST API for beer stock management",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        beer_handler::create_beer,
        beer_handler::list_beers,
        beer_handler::find_by_name,
        beer_handler::delete_by_id,
        beer_handler::increment,
        beer_handler::decrement,
    ),
    components(
        schemas(
            BeerType,
            BeerResponse,
            beer_handler::CreateBeerRequest,
            beer_handler::QuantityRequest,
        )
    ),
    tags(
        (name = "Beers", description = "Beer stock management operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_stock_paths() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Beer Stock API");
        assert!(doc.paths.paths.contains_key("/api/v1/beers"));
        assert!(doc.paths.paths.contains_key("/api/v1/beers/{id}/increment"));
        assert!(doc.paths.paths.contains_key("/api/v1/beers/{id}/decrement"));
    }
}
