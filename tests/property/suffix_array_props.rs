//! Suffix array, inverse and LCP against the oracles.

use proptest::prelude::*;
use repmeasure::{
    build_lcp, build_suffix_array, inverse_suffix_array, validate_lcp, validate_suffix_array,
    IntArray, IntVector, InvariantError,
};

use super::body_strategy;
use super::common::text;
use super::oracles::{oracle_lcp, oracle_suffix_array};

proptest! {
    /// Property: SA-IS agrees with sorting the suffixes directly.
    #[test]
    fn prop_suffix_array_matches_oracle(body in body_strategy()) {
        let t = text(&body);
        let sa = build_suffix_array(&t);
        prop_assert_eq!(sa.to_vec(), oracle_suffix_array(t.as_bytes()));
        prop_assert_eq!(sa.get(0) as usize, t.len() - 1);
    }

    /// Property: ISA inverts SA.
    #[test]
    fn prop_inverse_is_inverse(body in body_strategy()) {
        let t = text(&body);
        let sa = build_suffix_array(&t);
        let isa = inverse_suffix_array(&sa);
        for i in 0..sa.len() {
            prop_assert_eq!(IntArray::get(&isa, IntArray::get(&sa, i)), i);
        }
    }

    /// Property: PHI LCP agrees with direct comparison.
    #[test]
    fn prop_lcp_matches_oracle(body in body_strategy()) {
        let t = text(&body);
        let sa = build_suffix_array(&t);
        let lcp = build_lcp(&t, &sa);
        prop_assert_eq!(lcp.to_vec(), oracle_lcp(t.as_bytes(), &sa.to_vec()));
    }

    /// Property: the validators accept what the builders produce.
    #[test]
    fn prop_validators_accept_built_arrays(body in body_strategy()) {
        let t = text(&body);
        let sa = build_suffix_array(&t);
        let lcp = build_lcp(&t, &sa);
        prop_assert!(validate_suffix_array(t.as_bytes(), &sa).is_ok());
        prop_assert!(validate_lcp(t.as_bytes(), &sa, &lcp).is_ok());
    }

    /// Property: swapping two SA entries is always caught.
    #[test]
    fn prop_swapped_entries_rejected(
        body in body_strategy().prop_filter("need two suffixes to swap", |b| !b.is_empty()),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let t = text(&body);
        let mut sa = build_suffix_array(&t).to_vec();
        let (i, j) = (a.index(sa.len()), b.index(sa.len()));
        prop_assume!(i != j);
        sa.swap(i, j);
        let rejected = matches!(
            validate_suffix_array(t.as_bytes(), &sa),
            Err(InvariantError::UnsortedSuffixArray { .. })
        );
        prop_assert!(rejected);
    }

    /// Property: the int_vector file format round-trips arrays of any width.
    #[test]
    fn prop_int_vector_file_round_trip(values in prop::collection::vec(0usize..1 << 40, 0..200)) {
        let v = IntVector::from_values(&values);
        let mut bytes = Vec::new();
        v.write_to(&mut bytes).unwrap();
        let back = IntVector::read_from(&mut bytes.as_slice()).unwrap();
        prop_assert_eq!(back.to_vec(), values);
        prop_assert_eq!(back.width(), v.width());
    }
}
