//! API layer for the Pricing domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::PricingState;
pub use routes::routes;
