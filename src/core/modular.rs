//! Modular arithmetic over signed integers.
//!
//! All field operations in the crate reduce through [`floor_mod`], which, unlike
//! Rust's `%`, never returns a negative remainder. Multiplicative inverses come
//! from the extended Euclidean recurrence `p_i = p_{i-2} - q_{i-1} * p_{i-1}`.

/// Returns the unique `r` in `[0, m)` with `r ≡ a (mod m)`.
///
/// Works for negative `a`: one truncating remainder brings `a` into `(-m, m)` and a
/// single correction lifts it into range.
///
/// # Panics
/// Panics if `m == 0`. `m` must be positive.
#[inline]
pub fn floor_mod(a: i64, m: i64) -> i64 {
    debug_assert!(m > 0, "floor_mod: modulus must be positive");
    let r = a % m;
    if r < 0 {
        r + m
    } else {
        r
    }
}

/// Computes the multiplicative inverse of `a` modulo `m`, normalized into `[0, m)`.
///
/// `a` is reduced into `[0, m)` first, so any `i64` is accepted.
///
/// Two degenerate inputs keep their historical values rather than failing:
/// - `m == 1` returns the sentinel `2`;
/// - an `a` sharing a factor with `m` (including `a ≡ 0`) yields a value that is
///   not an inverse.
///
/// Use [`checked_inverse_mod`] when the input may be degenerate.
pub fn inverse_mod(a: i64, m: i64) -> i64 {
    if m == 1 {
        return 2;
    }

    let mut dividend = floor_mod(a, m);
    let mut modulus = m;
    // p_{i-1}, p_{i-2}
    let (mut p1, mut p0) = (1i64, 0i64);

    while dividend > 1 && modulus > 0 {
        let quotient = dividend / modulus;
        (dividend, modulus) = (modulus, dividend % modulus);
        (p1, p0) = (p0, p1 - quotient * p0);
    }

    floor_mod(p1, m)
}

/// Like [`inverse_mod`] but returns `None` when `a` has no inverse modulo `m`.
pub fn checked_inverse_mod(a: i64, m: i64) -> Option<i64> {
    if m <= 1 {
        return None;
    }
    let inverse = inverse_mod(a, m);
    if floor_mod(floor_mod(a, m) * inverse, m) == 1 {
        Some(inverse)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PRIME_FIELD;

    #[test]
    fn test_floor_mod_known_values() {
        assert_eq!(floor_mod(-7, 3), 2);
        assert_eq!(floor_mod(7, 3), 1);
        assert_eq!(floor_mod(0, 251), 0);
        assert_eq!(floor_mod(-251, 251), 0);
        assert_eq!(floor_mod(-252, 251), 250);
        assert_eq!(floor_mod(-527_000, 251), 100);
    }

    #[test]
    fn test_floor_mod_range_and_congruence() {
        for m in [1i64, 2, 3, 31, 249, 251] {
            for a in -2_000i64..2_000 {
                let r = floor_mod(a, m);
                assert!((0..m).contains(&r), "floor_mod({}, {}) = {}", a, m, r);
                assert_eq!((a - r) % m, 0);
            }
        }
    }

    #[test]
    fn test_floor_mod_extremes() {
        assert_eq!(floor_mod(i64::MIN, 251), i64::MIN.rem_euclid(251));
        assert_eq!(floor_mod(i64::MAX, 251), i64::MAX.rem_euclid(251));
        assert_eq!(floor_mod(i32::MIN as i64, 249), (i32::MIN as i64).rem_euclid(249));
    }

    #[test]
    fn test_inverse_mod_known_values() {
        assert_eq!(inverse_mod(21, 31), 3);
        assert_eq!(inverse_mod(10, 251), 226);
        assert_eq!(inverse_mod(-10, 251), 25);
        assert_eq!(inverse_mod(1, 251), 1);
        assert_eq!(inverse_mod(252, 251), 1);
    }

    #[test]
    fn test_inverse_mod_extremes() {
        for a in [i64::MIN, i64::MAX, i64::MIN + 1, i32::MIN as i64] {
            let inv = inverse_mod(a, PRIME_FIELD);
            assert!((0..PRIME_FIELD).contains(&inv));
            assert_eq!(floor_mod(floor_mod(a, PRIME_FIELD) * inv, PRIME_FIELD), 1, "inverse of {}", a);
            assert_eq!(checked_inverse_mod(a, PRIME_FIELD), Some(inv));
        }
    }

    #[test]
    fn test_inverse_mod_exhaustive_field() {
        for a in 1..PRIME_FIELD {
            let inv = inverse_mod(a, PRIME_FIELD);
            assert!((0..PRIME_FIELD).contains(&inv));
            assert_eq!(floor_mod(a * inv, PRIME_FIELD), 1, "inverse of {} failed", a);

            let neg_inv = inverse_mod(-a, PRIME_FIELD);
            assert_eq!(floor_mod(-a * neg_inv, PRIME_FIELD), 1, "inverse of -{} failed", a);
        }
    }

    #[test]
    fn test_inverse_mod_sentinel() {
        assert_eq!(inverse_mod(5, 1), 2);
        assert_eq!(inverse_mod(-5, 1), 2);
        assert_eq!(inverse_mod(0, 1), 2);
    }

    #[test]
    fn test_checked_inverse_mod() {
        assert_eq!(checked_inverse_mod(10, 251), Some(226));
        assert_eq!(checked_inverse_mod(-10, 251), Some(25));
        assert_eq!(checked_inverse_mod(0, 251), None);
        assert_eq!(checked_inverse_mod(251, 251), None);
        assert_eq!(checked_inverse_mod(4, 8), None);
        assert_eq!(checked_inverse_mod(3, 1), None);
    }
}
