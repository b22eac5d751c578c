//! Domain layer - Pure computational logic
//!
//! This module contains the data structures and algorithms, with no I/O.

pub mod bounded_array;
pub mod combination;
pub mod fibonacci;
pub mod numeric_error;
pub mod power;
pub mod search;
