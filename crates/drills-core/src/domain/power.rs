//! Integer exponentiation
//!
//! Two recursive formulations of `base^exponent`:
//! - `power_basic`: `b^e = b * b^(e-1)`, recursion depth e
//! - `power_fast`: exponentiation by squaring, recursion depth log2(e)
//!
//! Both use checked arithmetic and report `NumericError::Overflow` instead of wrapping.

use crate::domain::numeric_error::NumericError;

const OPERATION: &str = "power";

/// Power algorithm selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerMethod {
    Basic,
    Fast,
}

impl PowerMethod {
    pub const ALL: [PowerMethod; 2] = [PowerMethod::Basic, PowerMethod::Fast];

    pub fn compute(self, base: i64, exponent: u32) -> Result<i64, NumericError> {
        match self {
            Self::Basic => power_basic(base, exponent),
            Self::Fast => power_fast(base, exponent),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic recursion",
            Self::Fast => "fast recursion",
        }
    }
}

/// `base^exponent` by linear recursion
///
/// For `|base| >= 2` any exponent of 64 or more overflows an i64, so those
/// inputs are rejected before recursing. Bases 0, 1 and -1 never overflow and
/// are answered directly to keep the recursion depth bounded.
pub fn power_basic(base: i64, exponent: u32) -> Result<i64, NumericError> {
    match base {
        0 => return Ok(if exponent == 0 { 1 } else { 0 }),
        1 => return Ok(1),
        -1 => return Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {}
    }
    if exponent >= i64::BITS {
        return Err(NumericError::Overflow {
            operation: OPERATION,
        });
    }
    power_basic_rec(base, exponent)
}

fn power_basic_rec(base: i64, exponent: u32) -> Result<i64, NumericError> {
    if exponent == 0 {
        return Ok(1);
    }
    power_basic_rec(base, exponent - 1)?
        .checked_mul(base)
        .ok_or(NumericError::Overflow {
            operation: OPERATION,
        })
}

/// `base^exponent` by recursive squaring
///
/// `b^e = (b*b)^(e/2)` for even e, `b * (b*b)^((e-1)/2)` for odd e.
/// The square is only formed when another level of recursion needs it, so
/// `power_fast(b, 1)` succeeds even when `b*b` would overflow.
pub fn power_fast(base: i64, exponent: u32) -> Result<i64, NumericError> {
    if exponent == 0 {
        return Ok(1);
    }
    let half = exponent / 2;
    let rest = if half == 0 {
        1
    } else {
        let square = base.checked_mul(base).ok_or(NumericError::Overflow {
            operation: OPERATION,
        })?;
        power_fast(square, half)?
    };

    if exponent % 2 == 0 {
        Ok(rest)
    } else {
        base.checked_mul(rest).ok_or(NumericError::Overflow {
            operation: OPERATION,
        })
    }
}
