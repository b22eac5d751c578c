//! Array capacities and supported numeric input ranges

// =============================================================================
// Bounded array
// =============================================================================

/// Capacity used by the array walkthrough (matches the 10-slot demo array)
pub const DEFAULT_CAPACITY: usize = 10;

/// Search key used by the array walkthrough when none is given
pub const DEFAULT_SEARCH_KEY: i32 = 7;

// =============================================================================
// Numeric ranges
// =============================================================================

/// Largest n for which F(n) fits in a u64 (F(93) = 12,200,160,415,121,876,738)
pub const MAX_FIBONACCI_N: u32 = 93;

/// Largest n for which n! fits in a u64 (20! = 2,432,902,008,176,640,000)
pub const MAX_FACTORIAL_N: u32 = 20;

/// Largest n the naive recursive Fibonacci is run for (about 2^n calls)
pub const MAX_NAIVE_FIBONACCI_N: u32 = 35;

/// Largest n the Pascal's triangle recursion is run for (up to about 2^n calls)
pub const MAX_NAIVE_COMBINATION_N: u32 = 26;

// =============================================================================
// Cross-check defaults
// =============================================================================

/// Upper bound (inclusive) for the base in power cross-checks
pub const CROSSCHECK_MAX_BASE: u32 = 12;

/// Upper bound (inclusive) for the exponent in power cross-checks
pub const CROSSCHECK_MAX_EXPONENT: u32 = 16;

/// Upper bound (inclusive) for n in Fibonacci cross-checks.
///
/// The naive recursive variant makes O(2^n) calls, so keep this small.
pub const CROSSCHECK_MAX_FIBONACCI_N: u32 = 25;

/// Upper bound (inclusive) for n in combination cross-checks
pub const CROSSCHECK_MAX_COMBINATION_N: u32 = MAX_FACTORIAL_N;
