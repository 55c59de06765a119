//! Projects domain state

use std::sync::Arc;

use crate::ProjectsRepositories;
use pressrun_catalog::CatalogRepositories;
use pressrun_pricing::PricingRepositories;
use pressrun_storage::StorageService;

/// Application state for the Projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub repos: ProjectsRepositories,
    pub catalog: CatalogRepositories,
    pub pricing: PricingRepositories,
    pub storage: Arc<dyn StorageService>,
}
