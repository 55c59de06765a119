//! Pricing domain layer: cost parameters, the cost formula, the parameters screen

pub mod entities;
pub mod estimate;
pub mod screen;
