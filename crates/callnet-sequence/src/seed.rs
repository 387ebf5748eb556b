//! Closed-form seeding of the generator ring.
//!
//! Slot `(i + 55) mod 55` holds `(a - b*i + c*i^3) mod 1_000_000` for
//! `i` in `-54..=0`. For negative `i` the polynomial is usually negative, so
//! the remainder is taken Euclidean-style: the stored value is always in
//! `[0, 999999]`.

use crate::MODULUS;

/// Coefficients of the seeding polynomial `a - b*i + c*i^3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedCoefficients {
    /// Constant term `a`
    pub constant: i64,
    /// Linear coefficient `b` (subtracted)
    pub linear: i64,
    /// Cubic coefficient `c`
    pub cubic: i64,
}

impl SeedCoefficients {
    /// The coefficients of the canonical call sequence.
    pub const CANONICAL: Self = Self {
        constant: 100_003,
        linear: 200_003,
        cubic: 300_007,
    };

    /// Create from raw coefficients.
    pub const fn new(constant: i64, linear: i64, cubic: i64) -> Self {
        Self {
            constant,
            linear,
            cubic,
        }
    }
}

impl Default for SeedCoefficients {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Evaluate the seeding polynomial at logical index `i`, normalized into
/// `[0, MODULUS)`.
///
/// ```
/// use callnet_sequence::{seed_value, SeedCoefficients};
///
/// assert_eq!(seed_value(0, SeedCoefficients::CANONICAL), 100_003);
/// assert_eq!(seed_value(-54, SeedCoefficients::CANONICAL), 597_917);
/// ```
pub fn seed_value(i: i64, coefficients: SeedCoefficients) -> u32 {
    // i128 keeps c*i^3 exact for any i64 coefficient over the seeding range
    let i = i128::from(i);
    let raw = i128::from(coefficients.constant) - i128::from(coefficients.linear) * i
        + i128::from(coefficients.cubic) * i * i * i;
    raw.rem_euclid(i128::from(MODULUS)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_constant_term() {
        assert_eq!(seed_value(0, SeedCoefficients::CANONICAL), 100_003);
    }

    #[test]
    fn negative_intermediate_is_normalized() {
        // 100003 + 200003*54 - 300007*54^3 = -47_229_402_083
        // truncating remainder would give -402083
        let v = seed_value(-54, SeedCoefficients::CANONICAL);
        assert_eq!(v, 597_917);
        assert!(v < MODULUS);
    }

    #[test]
    fn minus_one_wraps_to_top_of_range() {
        // 100003 + 200003 - 300007 = -1
        assert_eq!(seed_value(-1, SeedCoefficients::CANONICAL), 999_999);
    }

    #[test]
    fn whole_seed_range_in_bounds() {
        for i in -54..=0 {
            assert!(seed_value(i, SeedCoefficients::CANONICAL) < MODULUS);
        }
    }

    #[test]
    fn extreme_coefficients_do_not_overflow() {
        let coefficients = SeedCoefficients::new(i64::MIN, i64::MAX, i64::MIN);
        for i in -54..=0 {
            assert!(seed_value(i, coefficients) < MODULUS);
        }
    }
}
