//! drills-core - Bounded array and recursive numeric drills
//!
//! This crate provides:
//! - A fixed-capacity integer array with positional insert/delete
//! - Linear, self-organizing (transposition / move-to-front) and binary search
//! - Recursive numeric routines: power, Fibonacci and binomial coefficients,
//!   each in a naive and an efficient variant

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use domain::bounded_array::{ArrayError, BoundedArray};
pub use domain::combination::{
    CombinationMethod, combination_via_factorial, combination_via_pascal, factorial,
};
pub use domain::fibonacci::{
    FibonacciMethod, fibonacci_iterative, fibonacci_memoized, fibonacci_recursive,
};
pub use domain::numeric_error::NumericError;
pub use domain::power::{PowerMethod, power_basic, power_fast};
pub use domain::search::SearchStrategy;
