//! Projects domain layer: saved projects, the estimator screen, the projects screen

pub mod browser;
pub mod entities;
pub mod estimator;
