//! Measure kernels against the oracles.

use proptest::prelude::*;
use repmeasure::{
    alphabet_and_entropy, bwt_runs, delta, lz77_parse, lz77_phrases, lz77_phrases_stack,
    lz78_parse, lz78_phrases, substring_complexity_profile, Lz77Method, Measurer, Options,
};

use super::common::{arrays, text, EPSILON};
use super::oracles::{
    oracle_bwt_runs, oracle_delta, oracle_distinct, oracle_lz77, oracle_lz78,
};
use super::{body_strategy, small_alphabet};

proptest! {
    /// Property: both LZ77 variants produce the greedy parse.
    #[test]
    fn prop_lz77_matches_oracle(body in body_strategy()) {
        let a = arrays(&body);
        let expected = oracle_lz77(&body);
        for method in [Lz77Method::Scan, Lz77Method::Stack] {
            let got: Vec<(usize, usize)> = lz77_parse(a.text.as_bytes(), &a.sa, &a.isa, method)
                .iter()
                .map(|f| (f.start, f.len))
                .collect();
            prop_assert_eq!(&got, &expected);
        }
        prop_assert_eq!(lz77_phrases(a.text.as_bytes(), &a.sa, &a.isa), expected.len());
        prop_assert_eq!(lz77_phrases_stack(a.text.as_bytes(), &a.sa, &a.isa), expected.len());
    }

    /// Property: every non-literal factor really copies from its source.
    #[test]
    fn prop_lz77_sources_match(body in body_strategy()) {
        let a = arrays(&body);
        for f in lz77_parse(a.text.as_bytes(), &a.sa, &a.isa, Lz77Method::Stack) {
            match f.source {
                Some(j) => {
                    prop_assert!(j < f.start);
                    prop_assert_eq!(&body[j..j + f.len], &body[f.start..f.start + f.len]);
                }
                None => {
                    prop_assert_eq!(f.len, 1);
                    prop_assert!(!body[..f.start].contains(&body[f.start]));
                }
            }
        }
    }

    /// Property: the trie parser matches the set-based one.
    #[test]
    fn prop_lz78_matches_oracle(body in body_strategy()) {
        let got: Vec<(usize, usize)> = lz78_parse(&body).iter().map(|p| (p.start, p.len)).collect();
        let expected = oracle_lz78(&body);
        prop_assert_eq!(lz78_phrases(&body), expected.len());
        prop_assert_eq!(got, expected);
    }

    /// Property: δ and the full d_k profile match window counting.
    #[test]
    fn prop_delta_matches_oracle(body in body_strategy()) {
        let a = arrays(&body);
        let profile = substring_complexity_profile(&a.lcp);
        prop_assert_eq!(profile.len(), body.len());
        for (k, &d) in profile.iter().enumerate() {
            prop_assert_eq!(d, oracle_distinct(&body, k + 1));
        }
        prop_assert!((delta(&a.lcp) - oracle_delta(&body)).abs() < EPSILON);
    }

    /// Property: r matches a BWT built from the oracle suffix array.
    #[test]
    fn prop_bwt_runs_match_oracle(body in body_strategy()) {
        let a = arrays(&body);
        prop_assert_eq!(bwt_runs(a.text.as_bytes(), &a.sa), oracle_bwt_runs(a.text.as_bytes()));
    }

    /// Property: σ counts distinct bytes and H₀ stays within [0, log₂ σ].
    #[test]
    fn prop_entropy_bounds(body in body_strategy()) {
        let (sigma, h0) = alphabet_and_entropy(&body);
        let mut distinct = body.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(sigma, distinct.len());
        prop_assert!(h0 >= 0.0);
        if sigma > 0 {
            prop_assert!(h0 <= (sigma as f64).log2() + EPSILON);
        }
    }

    /// Property: δ never decreases when the text is extended.
    #[test]
    fn prop_delta_monotone_under_extension(body in small_alphabet(3, 60), extra in small_alphabet(3, 10)) {
        let before = delta(&arrays(&body).lcp);
        let extended = [body.as_slice(), extra.as_slice()].concat();
        let after = delta(&arrays(&extended).lcp);
        prop_assert!(after + EPSILON >= before);
    }

    /// Property: a prefix run measures exactly the prefix.
    #[test]
    fn prop_prefix_equals_truncated_text(body in small_alphabet(4, 60), cut in 1usize..60) {
        let cut = cut.min(body.len().max(1));
        let truncated = &body[..cut.min(body.len())];
        let whole = Measurer::new(Options::default()).run_text("t", &text(truncated)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t");
        std::fs::write(&path, &body).unwrap();
        let mut prefixed = Measurer::new(Options {
            prefix: Some(cut as u64),
            ..Options::default()
        })
        .run(&path)
        .unwrap();
        prefixed.file = "t".to_string();
        prop_assert_eq!(prefixed, whole);
    }
}
