//! Repository implementations for the Pricing domain

pub mod parameters;

use sqlx::PgPool;

pub use parameters::CostParametersRepository;

/// Combined repository access for the Pricing domain
#[derive(Clone)]
pub struct PricingRepositories {
    pub parameters: CostParametersRepository,
}

impl PricingRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            parameters: CostParametersRepository::new(pool),
        }
    }
}
