//! Catalog domain layer: reference entities

pub mod entities;
