//! Standard math helpers

use crate::error::{PrimerError, Result};

pub fn sqrt(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(PrimerError::ValueError("math domain error".to_string()));
    }
    Ok(x.sqrt())
}

/// Smallest integer not less than `x`.
pub fn ceil(x: f64) -> Result<i64> {
    to_integral(x.ceil())
}

/// Largest integer not greater than `x`.
pub fn floor(x: f64) -> Result<i64> {
    to_integral(x.floor())
}

fn to_integral(x: f64) -> Result<i64> {
    if x.is_nan() {
        return Err(PrimerError::ValueError(
            "cannot convert float NaN to integer".to_string(),
        ));
    }
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if x.is_infinite() || x >= i64::MAX as f64 || x < i64::MIN as f64 {
        return Err(PrimerError::ValueError(format!(
            "cannot convert float {} to integer",
            x
        )));
    }
    Ok(x as i64)
}

/// Greatest common divisor; always non-negative, `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
