// LSB binary radix sort, one selector bit per pass.
// Every pass scatters the values into a zero bucket and a one bucket, then
// writes the zero bucket followed by the one bucket back into the input.

use crate::{digits_of, Error, RadixKey};
use tracing::{debug, trace};

/// How the sort obtains the largest value that bounds the number of passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Scan the whole input for the maximum before the first pass.
    #[default]
    PreScan,
    /// Start from the first element and raise the maximum while scattering pass 0.
    ///
    /// Later passes never look for a larger value again.
    FirstElement,
}

/// Find the largest value, rejecting the first negative one.
#[inline(never)]
fn scan_max<T: RadixKey>(values: &[T]) -> Result<T, Error> {
    values
        .iter()
        .enumerate()
        .try_fold(T::default(), |max, (index, &value)| {
            if value.is_negative() {
                Err(Error::NegativeValue {
                    index,
                    value: value.to_i64(),
                })
            } else {
                Ok(max.max(value))
            }
        })
}

/// Passes needed to sort values up to `max`. Zero needs none.
#[inline]
fn pass_count<T: RadixKey>(max: T) -> Result<u32, Error> {
    if max == T::default() {
        Ok(0)
    } else {
        digits_of(max)
    }
}

/// Scatter `values` into the bucket pair by the bit at `shift`.
///
/// `buckets` holds bucket 0 in its first half and bucket 1 in its second half.
/// Returns the fill count of each bucket. With `TRACK_MAX` every scattered value
/// is also folded into `max`.
#[inline(never)]
fn partition<const TRACK_MAX: bool, T: RadixKey>(
    values: &[T],
    buckets: &mut [T],
    shift: u32,
    max: &mut T,
) -> [usize; 2] {
    let len = values.len();
    debug_assert_eq!(buckets.len(), 2 * len);

    let mut counters = [0_usize; 2];
    values.iter().for_each(|&value| {
        let bucket = value.selector(shift);
        buckets[bucket * len + counters[bucket]] = value;
        counters[bucket] += 1;

        if TRACK_MAX && value > *max {
            *max = value;
        }
    });

    debug_assert_eq!(counters[0] + counters[1], len);
    counters
}

/// Copy bucket 0 and then bucket 1 back into `values`.
#[inline(never)]
fn recombine<T: Copy>(values: &mut [T], buckets: &[T], counters: [usize; 2]) {
    let len = values.len();
    let (zeros, ones) = values.split_at_mut(counters[0]);
    zeros.copy_from_slice(&buckets[..counters[0]]);
    ones.copy_from_slice(&buckets[len..len + counters[1]]);
}

/// Sort `values` in place and return the number of passes that ran.
fn sort_in_place<T: RadixKey>(values: &mut [T], seed: SeedStrategy) -> Result<u32, Error> {
    let len = values.len();
    let first = *values.first().ok_or(Error::EmptyInput)?;

    // also rejects negative input before anything is moved
    let true_max = scan_max(values)?;

    let (mut max, mut digits) = match seed {
        SeedStrategy::PreScan => (true_max, pass_count(true_max)?),
        // the seed is provisional, so pass 0 has to run to correct it
        SeedStrategy::FirstElement if len > 1 => (first, pass_count(first)?.max(1)),
        SeedStrategy::FirstElement => (first, pass_count(first)?),
    };

    let mut buckets = vec![T::default(); 2 * len];
    let mut pass = 0;

    while pass < digits {
        let counters = if seed == SeedStrategy::FirstElement && pass == 0 {
            let counters = partition::<true, T>(values, &mut buckets, pass, &mut max);
            let corrected = pass_count(max)?;
            if corrected > digits {
                debug!(
                    seed = first.to_i64(),
                    max = max.to_i64(),
                    digits,
                    corrected,
                    "larger maximum found in first pass"
                );
                digits = corrected;
            }
            counters
        } else {
            partition::<false, T>(values, &mut buckets, pass, &mut max)
        };

        trace!(pass, zeros = counters[0], ones = counters[1], "binary radix pass");

        // if every value landed in the same bucket the order is unchanged
        if counters[0] != 0 && counters[1] != 0 {
            recombine(values, &buckets, counters);
        }

        pass += 1;
    }

    debug!(len, max = max.to_i64(), passes = pass, ?seed, "binary radix sort finished");

    Ok(pass)
}

/// Sort `values` in place into non-decreasing order.
///
/// Returns the number of passes that ran, which is the bit length of the largest value.
pub fn sort_binary_radix<T: RadixKey>(values: &mut [T]) -> Result<u32, Error> {
    sort_in_place(values, SeedStrategy::default())
}

/// Whether every adjacent pair of `values` is in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Binds a mutable slice and sorts it in place with a binary radix sort.
///
/// ```
/// use binary_radix_sort::BinaryRadixSorter;
///
/// let mut values = [5, 3, 8, 1, 9, 2];
/// let mut sorter = BinaryRadixSorter::new(&mut values);
/// sorter.sort().unwrap();
/// assert!(sorter.is_sorted());
/// assert_eq!(sorter.values(), &[1, 2, 3, 5, 8, 9]);
/// ```
#[derive(Debug)]
pub struct BinaryRadixSorter<'a, T> {
    values: &'a mut [T],
    seed: SeedStrategy,
    passes: u32,
}

impl<'a, T: RadixKey> BinaryRadixSorter<'a, T> {
    pub fn new(values: &'a mut [T]) -> Self {
        Self::with_seed(values, SeedStrategy::default())
    }

    pub fn with_seed(values: &'a mut [T], seed: SeedStrategy) -> Self {
        Self {
            values,
            seed,
            passes: 0,
        }
    }

    /// Sort the bound slice.
    ///
    /// Fails without touching the slice if it is empty or holds a negative value.
    pub fn sort(&mut self) -> Result<(), Error> {
        self.passes = 0;
        self.passes = sort_in_place(self.values, self.seed)?;
        Ok(())
    }

    pub fn is_sorted(&self) -> bool {
        is_sorted(self.values)
    }

    pub fn values(&self) -> &[T] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn seed(&self) -> SeedStrategy {
        self.seed
    }

    /// Passes executed by the last successful [`sort`](Self::sort), zero before that.
    pub fn passes(&self) -> u32 {
        self.passes
    }
}
