//! Route definitions for Catalog domain API

use axum::{routing::get, Router};

use super::handlers::materials;
use super::middleware::CatalogState;

/// Create all Catalog domain API routes
pub fn routes() -> Router<CatalogState> {
    Router::new()
        .route("/v1/paper-types", get(materials::list_paper_types))
        .route("/v1/cover-types", get(materials::list_cover_types))
}
