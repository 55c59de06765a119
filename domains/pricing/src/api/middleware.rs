//! Pricing domain state

use crate::PricingRepositories;
use pressrun_catalog::CatalogRepositories;

/// Application state for the Pricing domain
#[derive(Clone)]
pub struct PricingState {
    pub repos: PricingRepositories,
    pub catalog: CatalogRepositories,
}
