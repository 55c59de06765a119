//! Route definitions for Pricing domain API

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{estimates, parameters};
use super::middleware::PricingState;

/// Create cost parameter routes
fn parameter_routes() -> Router<PricingState> {
    Router::new()
        .route("/v1/parameters", get(parameters::get_parameters))
        .route("/v1/parameters/{id}", put(parameters::update_parameters))
}

/// Create estimate routes
fn estimate_routes() -> Router<PricingState> {
    Router::new().route("/v1/estimates", post(estimates::create_estimate))
}

/// Create all Pricing domain API routes
pub fn routes() -> Router<PricingState> {
    Router::new()
        .merge(parameter_routes())
        .merge(estimate_routes())
}
