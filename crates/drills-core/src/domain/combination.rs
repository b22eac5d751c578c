//! Factorial and binomial coefficients
//!
//! nCr is computed two ways:
//! - `combination_via_factorial`: n! / (r! (n-r)!), limited by n! fitting in a u64
//! - `combination_via_pascal`: C(n,r) = C(n-1,r-1) + C(n-1,r), O(2^n) calls

use crate::constants::{MAX_FACTORIAL_N, MAX_NAIVE_COMBINATION_N};
use crate::domain::numeric_error::NumericError;

/// nCr algorithm selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombinationMethod {
    Factorial,
    Pascal,
}

impl CombinationMethod {
    pub const ALL: [CombinationMethod; 2] =
        [CombinationMethod::Factorial, CombinationMethod::Pascal];

    pub fn compute(self, n: u32, r: u32) -> Result<u64, NumericError> {
        match self {
            Self::Factorial => combination_via_factorial(n, r),
            Self::Pascal => combination_via_pascal(n, r),
        }
    }

    /// Whether `compute(n, _)` finishes in reasonable time
    ///
    /// Only the Pascal recursion is limited, to `n <= MAX_NAIVE_COMBINATION_N`.
    pub fn is_tractable(self, n: u32) -> bool {
        match self {
            Self::Factorial => true,
            Self::Pascal => n <= MAX_NAIVE_COMBINATION_N,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Factorial => "factorial",
            Self::Pascal => "pascal's triangle",
        }
    }
}

/// n! by recursion, for `n <= MAX_FACTORIAL_N`
pub fn factorial(n: u32) -> Result<u64, NumericError> {
    if n > MAX_FACTORIAL_N {
        return Err(NumericError::OutOfRange {
            value: n as u64,
            max: MAX_FACTORIAL_N as u64,
        });
    }
    Ok(factorial_rec(n))
}

fn factorial_rec(n: u32) -> u64 {
    if n == 0 {
        return 1;
    }
    factorial_rec(n - 1) * n as u64
}

fn check_arguments(n: u32, r: u32) -> Result<(), NumericError> {
    if r > n {
        return Err(NumericError::InvalidCombination { n, r });
    }
    Ok(())
}

/// nCr as n! / (r! * (n-r)!)
///
/// Supported for `n <= MAX_FACTORIAL_N`; larger n returns `OutOfRange` even
/// when nCr itself would fit.
pub fn combination_via_factorial(n: u32, r: u32) -> Result<u64, NumericError> {
    check_arguments(n, r)?;
    let numerator = factorial(n)?;
    let denominator = factorial(r)?
        .checked_mul(factorial(n - r)?)
        .ok_or(NumericError::Overflow {
            operation: "combination",
        })?;
    Ok(numerator / denominator)
}

/// nCr by Pascal's triangle recurrence
///
/// Makes O(2^n) calls; use only for small n.
pub fn combination_via_pascal(n: u32, r: u32) -> Result<u64, NumericError> {
    check_arguments(n, r)?;
    pascal(n, r)
}

fn pascal(n: u32, r: u32) -> Result<u64, NumericError> {
    if r == 0 || r == n {
        return Ok(1);
    }
    pascal(n - 1, r - 1)?
        .checked_add(pascal(n - 1, r)?)
        .ok_or(NumericError::Overflow {
            operation: "combination",
        })
}
