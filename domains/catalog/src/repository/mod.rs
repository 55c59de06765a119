//! Repository implementations for the Catalog domain

pub mod cover_types;
pub mod paper_types;

use sqlx::PgPool;

pub use cover_types::CoverTypeRepository;
pub use paper_types::PaperTypeRepository;

/// Combined repository access for the Catalog domain
#[derive(Clone)]
pub struct CatalogRepositories {
    pub paper_types: PaperTypeRepository,
    pub cover_types: CoverTypeRepository,
}

impl CatalogRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            paper_types: PaperTypeRepository::new(pool.clone()),
            cover_types: CoverTypeRepository::new(pool),
        }
    }
}
