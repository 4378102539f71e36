//! HTTP request handlers.

pub mod beer_handler;

pub use beer_handler::beer_routes;
