//! Catalog domain: paper types and cover types

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{find_material, CoverType, Material, PaperType};

// Re-export repository types
pub use repository::{CatalogRepositories, CoverTypeRepository, PaperTypeRepository};

// Re-export API types
pub use api::routes;
pub use api::CatalogState;
