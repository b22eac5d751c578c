//! Fibonacci numbers
//!
//! Three ways to compute F(n) with F(0) = 0, F(1) = 1:
//! - iterative, O(n)
//! - naive recursion, O(2^n) calls
//! - memoized recursion, O(n) calls
//!
//! All variants accept `n <= MAX_FIBONACCI_N` and return `OutOfRange` above it.

use crate::constants::{MAX_FIBONACCI_N, MAX_NAIVE_FIBONACCI_N};
use crate::domain::numeric_error::NumericError;

/// Fibonacci algorithm selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FibonacciMethod {
    Iterative,
    Recursive,
    Memoized,
}

impl FibonacciMethod {
    pub const ALL: [FibonacciMethod; 3] = [
        FibonacciMethod::Iterative,
        FibonacciMethod::Recursive,
        FibonacciMethod::Memoized,
    ];

    pub fn compute(self, n: u32) -> Result<u64, NumericError> {
        match self {
            Self::Iterative => fibonacci_iterative(n),
            Self::Recursive => fibonacci_recursive(n),
            Self::Memoized => fibonacci_memoized(n),
        }
    }

    /// Whether `compute(n)` finishes in reasonable time
    ///
    /// Only the naive recursion is limited, to `n <= MAX_NAIVE_FIBONACCI_N`.
    pub fn is_tractable(self, n: u32) -> bool {
        match self {
            Self::Recursive => n <= MAX_NAIVE_FIBONACCI_N,
            Self::Iterative | Self::Memoized => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Iterative => "iteration",
            Self::Recursive => "recursion",
            Self::Memoized => "recursion using memoization",
        }
    }
}

fn check_range(n: u32) -> Result<(), NumericError> {
    if n > MAX_FIBONACCI_N {
        return Err(NumericError::OutOfRange {
            value: n as u64,
            max: MAX_FIBONACCI_N as u64,
        });
    }
    Ok(())
}

/// F(n) with a loop keeping the last two values
pub fn fibonacci_iterative(n: u32) -> Result<u64, NumericError> {
    check_range(n)?;
    if n <= 1 {
        return Ok(n as u64);
    }

    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 2..=n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// F(n) by the plain recurrence F(n) = F(n-1) + F(n-2)
///
/// Makes O(2^n) calls. Kept as the baseline the other variants are checked
/// against; anything much above n = 40 takes noticeably long.
pub fn fibonacci_recursive(n: u32) -> Result<u64, NumericError> {
    check_range(n)?;
    Ok(naive(n))
}

fn naive(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    naive(n - 2) + naive(n - 1)
}

/// F(n) by the recurrence, caching each F(k) the first time it is computed
///
/// The cache lives only for this call: it is allocated with every slot unset,
/// filled during the recursion, and dropped on return.
pub fn fibonacci_memoized(n: u32) -> Result<u64, NumericError> {
    check_range(n)?;
    let mut cache: Vec<Option<u64>> = vec![None; n as usize + 1];
    Ok(memoized(n, &mut cache))
}

fn memoized(n: u32, cache: &mut [Option<u64>]) -> u64 {
    if let Some(value) = cache[n as usize] {
        return value;
    }
    let value = if n <= 1 {
        n as u64
    } else {
        memoized(n - 2, cache) + memoized(n - 1, cache)
    };
    cache[n as usize] = Some(value);
    value
}
