//! Route definitions for Projects domain API

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};

use super::handlers::projects;
use super::middleware::ProjectsState;

/// Create all Projects domain API routes
pub fn routes() -> Router<ProjectsState> {
    Router::new()
        .route(
            "/v1/projects",
            get(projects::list_projects)
                .post(projects::create_project)
                .layer(DefaultBodyLimit::max(projects::MAX_FORM_BYTES)),
        )
        .route("/v1/projects/{id}", delete(projects::delete_project))
}
