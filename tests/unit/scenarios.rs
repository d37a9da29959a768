//! Worked examples, computed by hand.

use repmeasure::{Measurer, Options, Report};

use super::common::{text, EPSILON};

fn measure(body: &[u8]) -> Report {
    Measurer::new(Options::default())
        .run_text("t", &text(body))
        .unwrap()
}

fn assert_close(actual: f64, expected: f64, field: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{}: expected {}, got {}",
        field,
        expected,
        actual
    );
}

#[test]
fn test_single_byte() {
    let report = measure(b"a");
    assert_eq!(
        report.to_string(),
        "RESULT file=t n=1 sigma=1 h0=0.000000 r=1 z78=1 z77=1 delta=1.000000"
    );
}

#[test]
fn test_two_distinct_bytes() {
    let report = measure(b"ab");
    assert_eq!(
        report.to_string(),
        "RESULT file=t n=2 sigma=2 h0=1.000000 r=1 z78=2 z77=2 delta=2.000000"
    );
}

#[test]
fn test_two_equal_bytes() {
    // z78: "a" then a trailing "a" flushed from inside the trie
    // z77: literal "a", then "a" copied from position 0
    let report = measure(b"aa");
    assert_eq!((report.n, report.sigma), (2, 1));
    assert_close(report.h0, 0.0, "h0");
    assert_eq!(report.z78, 2);
    assert_eq!(report.z77, 2);
    assert_close(report.delta, 1.0, "delta");
}

#[test]
fn test_abab() {
    let report = measure(b"abab");
    assert_eq!((report.n, report.sigma), (4, 2));
    assert_close(report.h0, 1.0, "h0");
    assert_eq!(report.z78, 3);
    assert_eq!(report.z77, 3);
    assert_close(report.delta, 2.0, "delta");
}

#[test]
fn test_mississippi() {
    // m:1 i:4 s:4 p:2
    let n = 11.0f64;
    let h0 = [1.0f64, 4.0, 4.0, 2.0]
        .iter()
        .map(|c| (c / n) * (n / c).log2())
        .sum::<f64>();

    let report = measure(b"mississippi");
    assert_eq!((report.n, report.sigma), (11, 4));
    assert_close(report.h0, h0, "h0");
    // m | i | s | si | ss | ip | p | i
    assert_eq!(report.z78, 8);
    // m | i | s | s | issi | p | p | i
    assert_eq!(report.z77, 8);
    assert_eq!(report.r, 7);
}

#[test]
fn test_banana() {
    let report = measure(b"banana");
    assert_eq!((report.n, report.sigma), (6, 3));
    assert_eq!(report.z78, 5);
    assert_eq!(report.z77, 4);
    assert_eq!(report.r, 3);
    // d_1 = 3 (b, a, n) is the maximum
    assert_close(report.delta, 3.0, "delta");
}

#[test]
fn test_trailing_zero_is_the_sentinel() {
    assert_eq!(measure(b"banana\0"), measure(b"banana"));
}

#[test]
fn test_empty_input() {
    assert_eq!(
        measure(b"").to_string(),
        "RESULT file=t n=0 sigma=0 h0=0.000000 r=0 z78=0 z77=0 delta=0.000000"
    );
}
