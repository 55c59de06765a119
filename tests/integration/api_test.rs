//! API endpoint integration tests
//!
//! Every test here needs a PostgreSQL database; point `TEST_DATABASE_URL` at one.

#![allow(dead_code)]

mod catalog;
mod common;
mod estimates;
mod parameters;
mod projects;
