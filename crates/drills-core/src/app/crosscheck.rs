//! Cross-check of algorithm variants
//!
//! Every numeric routine comes in at least two formulations that must agree.
//! This module enumerates input ranges, evaluates each variant and collects any
//! disagreement. With the `parallel` feature the cases are spread over rayon's
//! thread pool; otherwise they run sequentially.
//!
//! Exponential variants are skipped for inputs they cannot finish in reasonable
//! time, and combinations are only compared while n! fits in a u64.

use crate::constants::{
    CROSSCHECK_MAX_BASE, CROSSCHECK_MAX_COMBINATION_N, CROSSCHECK_MAX_EXPONENT,
    CROSSCHECK_MAX_FIBONACCI_N, MAX_FACTORIAL_N,
};
use crate::domain::combination::CombinationMethod;
use crate::domain::fibonacci::FibonacciMethod;
use crate::domain::numeric_error::NumericError;
use crate::domain::power::PowerMethod;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inclusive upper bounds of the checked input ranges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrosscheckBounds {
    pub max_base: u32,
    pub max_exponent: u32,
    pub max_fibonacci_n: u32,
    pub max_combination_n: u32,
}

impl Default for CrosscheckBounds {
    fn default() -> Self {
        Self {
            max_base: CROSSCHECK_MAX_BASE,
            max_exponent: CROSSCHECK_MAX_EXPONENT,
            max_fibonacci_n: CROSSCHECK_MAX_FIBONACCI_N,
            max_combination_n: CROSSCHECK_MAX_COMBINATION_N,
        }
    }
}

/// A disagreement between variants of the same routine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    Power {
        base: i64,
        exponent: u32,
        results: Vec<(PowerMethod, Result<i64, NumericError>)>,
    },
    Fibonacci {
        n: u32,
        results: Vec<(FibonacciMethod, Result<u64, NumericError>)>,
    },
    Combination {
        n: u32,
        r: u32,
        results: Vec<(CombinationMethod, Result<u64, NumericError>)>,
    },
}

/// Cross-check result
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrosscheckReport {
    /// Combination bound actually used (capped at `MAX_FACTORIAL_N`)
    pub combination_max_n: u32,
    pub power_cases: usize,
    pub fibonacci_cases: usize,
    pub combination_cases: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CrosscheckReport {
    pub fn total_cases(&self) -> usize {
        self.power_cases + self.fibonacci_cases + self.combination_cases
    }

    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Check every variant against the others over the given ranges
///
/// Power is checked for bases `-max_base..=max_base`, so sign handling is
/// covered too. Combination is checked for all `0 <= r <= n` with
/// `n <= min(max_combination_n, MAX_FACTORIAL_N)`; above that the factorial
/// method always returns `OutOfRange` and there is nothing to compare.
pub fn run_crosscheck(bounds: &CrosscheckBounds) -> CrosscheckReport {
    let max_base = bounds.max_base as i64;
    let combination_max_n = bounds.max_combination_n.min(MAX_FACTORIAL_N);

    let power_cases: Vec<(i64, u32)> = (-max_base..=max_base)
        .flat_map(|base| (0..=bounds.max_exponent).map(move |exponent| (base, exponent)))
        .collect();
    let fibonacci_cases: Vec<u32> = (0..=bounds.max_fibonacci_n).collect();
    let combination_cases: Vec<(u32, u32)> = (0..=combination_max_n)
        .flat_map(|n| (0..=n).map(move |r| (n, r)))
        .collect();

    let mut mismatches = Vec::new();
    mismatches.extend(collect_mismatches(&power_cases, |&(base, exponent)| {
        check_power(base, exponent)
    }));
    mismatches.extend(collect_mismatches(&fibonacci_cases, |&n| {
        check_fibonacci(n)
    }));
    mismatches.extend(collect_mismatches(&combination_cases, |&(n, r)| {
        check_combination(n, r)
    }));

    CrosscheckReport {
        combination_max_n,
        power_cases: power_cases.len(),
        fibonacci_cases: fibonacci_cases.len(),
        combination_cases: combination_cases.len(),
        mismatches,
    }
}

#[cfg(feature = "parallel")]
fn collect_mismatches<T, F>(cases: &[T], check: F) -> Vec<Mismatch>
where
    T: Sync,
    F: Fn(&T) -> Option<Mismatch> + Sync + Send,
{
    cases.par_iter().filter_map(check).collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_mismatches<T, F>(cases: &[T], check: F) -> Vec<Mismatch>
where
    F: Fn(&T) -> Option<Mismatch>,
{
    cases.iter().filter_map(check).collect()
}

fn all_equal<T: PartialEq>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

fn check_power(base: i64, exponent: u32) -> Option<Mismatch> {
    let results: Vec<_> = PowerMethod::ALL
        .into_iter()
        .map(|method| (method, method.compute(base, exponent)))
        .collect();
    let values: Vec<_> = results.iter().map(|(_, r)| r.clone()).collect();

    (!all_equal(&values)).then_some(Mismatch::Power {
        base,
        exponent,
        results,
    })
}

fn check_fibonacci(n: u32) -> Option<Mismatch> {
    let results: Vec<_> = FibonacciMethod::ALL
        .into_iter()
        .filter(|method| method.is_tractable(n))
        .map(|method| (method, method.compute(n)))
        .collect();
    let values: Vec<_> = results.iter().map(|(_, r)| r.clone()).collect();

    (!all_equal(&values)).then_some(Mismatch::Fibonacci { n, results })
}

fn check_combination(n: u32, r: u32) -> Option<Mismatch> {
    let results: Vec<_> = CombinationMethod::ALL
        .into_iter()
        .filter(|method| method.is_tractable(n))
        .map(|method| (method, method.compute(n, r)))
        .collect();
    let values: Vec<_> = results.iter().map(|(_, r)| r.clone()).collect();

    (!all_equal(&values)).then_some(Mismatch::Combination { n, r, results })
}
