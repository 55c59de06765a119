//! Projects domain: saved book projects, the estimator and projects screens

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::browser::{BrowserEvent, ProjectsScreen, ProjectsView};
pub use domain::entities::{CoverUpload, NewProject, Project, ProjectSummary};
pub use domain::estimator::{
    CoverFile, DraftField, EstimatorEvent, EstimatorScreen, EstimatorView, References, Submission,
};

// Re-export repository types
pub use repository::{ProjectRepository, ProjectsRepositories};

// Re-export API types
pub use api::routes;
pub use api::ProjectsState;
