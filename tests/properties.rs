use binary_radix_sort::{digits_of, digits_of_log, is_sorted, BinaryRadixSorter, Error, SeedStrategy};
use proptest::prelude::*;

fn seed_strategy() -> impl Strategy<Value = SeedStrategy> {
    prop_oneof![Just(SeedStrategy::PreScan), Just(SeedStrategy::FirstElement)]
}

proptest! {
    #[test]
    fn sort_orders_and_permutes(
        values in prop::collection::vec(0..=i32::MAX, 1..300),
        seed in seed_strategy(),
    ) {
        let mut expected = values.clone();
        expected.sort_unstable();

        let mut sorted = values.clone();
        let mut sorter = BinaryRadixSorter::with_seed(&mut sorted, seed);
        sorter.sort().unwrap();

        prop_assert!(sorter.is_sorted());
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn sort_is_idempotent(values in prop::collection::vec(0..1_000_000_i64, 1..300)) {
        let mut once = values.clone();
        BinaryRadixSorter::new(&mut once).sort().unwrap();

        let mut twice = once.clone();
        BinaryRadixSorter::new(&mut twice).sort().unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn negative_input_is_left_untouched(
        mut values in prop::collection::vec(0..1000_i16, 1..100),
        index in any::<prop::sample::Index>(),
        negative in i16::MIN..0,
    ) {
        let index = index.index(values.len());
        values[index] = negative;
        let before = values.clone();

        let mut sorter = BinaryRadixSorter::new(&mut values);
        prop_assert_eq!(
            sorter.sort(),
            Err(Error::NegativeValue { index, value: negative as i64 })
        );
        prop_assert_eq!(values, before);
    }

    #[test]
    fn estimators_agree(value in 1..=(1_i32 << 30)) {
        let expected = value.ilog2() + 1;
        prop_assert_eq!(digits_of(value), Ok(expected));
        prop_assert_eq!(digits_of_log(value), Ok(expected));
    }

    #[test]
    fn estimators_reject_non_positive(value in i64::MIN..=0) {
        prop_assert_eq!(digits_of(value), Err(Error::NonPositiveDigits { value }));
        prop_assert_eq!(digits_of_log(value), Err(Error::NonPositiveDigits { value }));
    }
}

#[test]
fn is_sorted_matches_std() {
    let cases: [&[i32]; 5] = [&[], &[7], &[1, 1, 2], &[3, 2], &[0, 5, 4, 9]];
    for case in cases {
        assert_eq!(is_sorted(case), case.is_sorted());
    }
}
