//! Error types for the `binary_radix_sort` crate

/// Precondition violations reported by the sorter and the digit estimator
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The sequence to sort has no elements.
    ///
    /// The pass count is derived from the largest element, which does not
    /// exist for an empty sequence.
    #[error("cannot sort an empty sequence")]
    EmptyInput,

    /// The digit estimator was asked for the bit length of zero or a negative value.
    #[error("digit count is only defined for positive values, got {value}")]
    NonPositiveDigits { value: i64 },

    /// The sequence contains a negative element.
    ///
    /// Selector bits are taken from the two's complement representation, which
    /// does not order negative values below non-negative ones. The sequence is
    /// left untouched.
    #[error("negative value {value} at index {index} cannot be sorted")]
    NegativeValue { index: usize, value: i64 },
}
