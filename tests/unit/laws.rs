//! Closed-form laws on structured text families.

use repmeasure::{
    alphabet_and_entropy, bwt_runs, delta, lz77_phrases, lz77_phrases_stack, lz78_phrases,
};

use super::common::{arrays, fibonacci_word, unary, EPSILON};

/// ⌈(√(8n+1) − 1) / 2⌉: how many of the phrases a, aa, aaa, ... cover n bytes.
fn triangular_phrases(n: usize) -> usize {
    let mut k = 0;
    while k * (k + 1) / 2 < n {
        k += 1;
    }
    k
}

#[test]
fn test_unary_texts() {
    for n in 1..=60 {
        let body = unary(n);
        let a = arrays(&body);
        let (sigma, h0) = alphabet_and_entropy(&body);
        assert_eq!(sigma, 1);
        assert_eq!(h0, 0.0);
        assert_eq!(lz78_phrases(&body), triangular_phrases(n), "z78 of a^{}", n);
        // One literal, then one self-overlapping copy of everything else
        let expected_z77 = if n == 1 { 1 } else { 2 };
        assert_eq!(lz77_phrases(a.text.as_bytes(), &a.sa, &a.isa), expected_z77);
        assert_eq!(lz77_phrases_stack(a.text.as_bytes(), &a.sa, &a.isa), expected_z77);
        assert!((delta(&a.lcp) - 1.0).abs() < EPSILON);
        // BWT of a^n$ is a^n followed by $: one boundary
        assert_eq!(bwt_runs(a.text.as_bytes(), &a.sa), 1);
    }
}

#[test]
fn test_distinct_bytes() {
    let body: Vec<u8> = (1..=200u8).collect();
    let a = arrays(&body);
    let n = body.len();
    assert_eq!(alphabet_and_entropy(&body).0, n);
    assert_eq!(lz78_phrases(&body), n);
    assert_eq!(lz77_phrases(a.text.as_bytes(), &a.sa, &a.isa), n);
    assert!((delta(&a.lcp) - n as f64).abs() < EPSILON);
}

#[test]
fn test_permutation_keeps_sigma_and_entropy() {
    let body = b"the quick brown fox jumps over the lazy dog".to_vec();
    let mut reversed = body.clone();
    reversed.reverse();
    let mut sorted = body.clone();
    sorted.sort_unstable();

    let (sigma, h0) = alphabet_and_entropy(&body);
    for permuted in [reversed, sorted] {
        let (s, h) = alphabet_and_entropy(&permuted);
        assert_eq!(s, sigma);
        assert!((h - h0).abs() < EPSILON);
    }
}

#[test]
fn test_fibonacci_words_are_compressible() {
    // Fibonacci words have at most k + 1 distinct factors of length k
    let body = fibonacci_word(987);
    let a = arrays(&body);
    let z77 = lz77_phrases(a.text.as_bytes(), &a.sa, &a.isa);
    let z78 = lz78_phrases(&body);

    assert!(z77 < 20, "z77 = {}", z77);
    assert!(z78 > z77);
    assert!((delta(&a.lcp) - 2.0).abs() < EPSILON);
}
