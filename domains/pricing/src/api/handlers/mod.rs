pub mod estimates;
pub mod parameters;
