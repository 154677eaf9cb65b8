// Bit length of the largest key, which bounds the number of binary radix passes.

use crate::{Error, RadixKey};

/// `1 / ln(2)` as used by the logarithmic estimator.
///
/// Truncated slightly above the exact value, so exact powers of two round up to
/// their true exponent instead of falling just short of it.
pub(crate) const INV_LN_2: f64 = 1.44269504089;

/// Number of bits needed to represent `value`, `floor(log2(value)) + 1`.
///
/// Scans a single-bit mask downwards from the highest magnitude bit of `T` and
/// reports the position of the first set bit plus one.
#[inline]
pub fn digits_of<T: RadixKey>(value: T) -> Result<u32, Error> {
    if value.is_negative() {
        return Err(Error::NonPositiveDigits { value: value.to_i64() });
    }

    (0..=T::TOP_BIT)
        .rev()
        .find(|&bit| value.has_bit(bit))
        .map(|bit| bit + 1)
        .ok_or(Error::NonPositiveDigits { value: value.to_i64() })
}

/// Logarithmic variant of [`digits_of`], using the change of base identity.
///
/// Only meant as a cross-check. It agrees with [`digits_of`] on every power of two
/// that fits in `T`, and on every value up to `2^30`.
pub fn digits_of_log<T: RadixKey>(value: T) -> Result<u32, Error> {
    if value <= T::default() {
        return Err(Error::NonPositiveDigits { value: value.to_i64() });
    }

    Ok((value.to_f64().ln() * INV_LN_2) as u32 + 1)
}

/// A value for which the two digit estimators disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitMismatch {
    pub value: i64,
    pub logarithmic: u32,
    pub bit_scan: u32,
}

/// Compare both estimators on every power of two `2^1 ..= 2^max_exponent`.
///
/// Returns the first disagreement, if any. `max_exponent` is clamped to the
/// highest magnitude bit of `i64`.
pub fn cross_check_powers_of_two(max_exponent: u32) -> Option<DigitMismatch> {
    let max_exponent = max_exponent.min(<i64 as RadixKey>::TOP_BIT);

    (1..=max_exponent).map(|exp| 1_i64 << exp).find_map(|value| {
        // both estimators accept any positive value
        let logarithmic = digits_of_log(value).ok()?;
        let bit_scan = digits_of(value).ok()?;
        (logarithmic != bit_scan).then_some(DigitMismatch {
            value,
            logarithmic,
            bit_scan,
        })
    })
}
