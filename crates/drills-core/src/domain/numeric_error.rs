//! Errors shared by the numeric routines

use thiserror::Error;

/// Numeric routine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The result does not fit in the integer type
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
    /// Input is above the supported range
    #[error("Input out of supported range: {value} (max {max})")]
    OutOfRange { value: u64, max: u64 },
    /// nCr with r > n
    #[error("Invalid combination arguments: n = {n}, r = {r} (requires 0 <= r <= n)")]
    InvalidCombination { n: u32, r: u32 },
}
