//! Pricing domain: cost parameters, cost formula, estimates

pub mod api;
pub mod domain;
pub mod quote;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{CostCoefficients, CostParameters, ParameterField};
pub use domain::estimate::{
    estimate, format_money, per_copy, sheets_per_copy, CostEstimate, EstimateError, PrintRun,
    ENERGY_KWH_PER_COPY, MARGIN_MULTIPLIER,
};
pub use domain::screen::{ParametersEvent, ParametersPhase, ParametersScreen, ParametersView};
pub use quote::{quote, QuoteRequest};

// Re-export repository types
pub use repository::{CostParametersRepository, PricingRepositories};

// Re-export API types
pub use api::routes;
pub use api::PricingState;
