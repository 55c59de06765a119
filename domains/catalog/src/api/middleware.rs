//! Catalog domain state

use crate::CatalogRepositories;

/// Application state for the Catalog domain
#[derive(Clone)]
pub struct CatalogState {
    pub repos: CatalogRepositories,
}
