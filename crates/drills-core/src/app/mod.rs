//! Application layer - Use case implementations
//!
//! This module coordinates the domain layer to run the walkthrough and cross-check use cases.

pub mod array_demo;
pub mod crosscheck;
