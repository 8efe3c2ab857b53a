//! Polynomial evaluation over GF(q).
//!
//! Shared by the encryption step and its tests.

use crate::core::modular::floor_mod;

/// Evaluates `f(x) = constant + c[0]*x + c[1]*x^2 + ... ` and reduces it mod `q`.
///
/// Uses Horner's method with a reduction after every step. The result equals the
/// exact non-negative integer sum reduced once, without overflowing for any
/// degree.
#[inline]
pub(crate) fn evaluate_polynomial(constant: i64, coefficients: &[u8], x: i64, q: i64) -> i64 {
    // f(x) = constant + x * (c[0] + x * (c[1] + ...))
    let mut acc = 0i64;
    for &c in coefficients.iter().rev() {
        acc = floor_mod((acc + c as i64) * x, q);
    }
    floor_mod(constant + acc, q)
}
