//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations straight from the definitions.
//! They are slow (quadratic or worse) and serve as ground truth for the
//! linear-time kernels.

use std::collections::HashSet;

/// Sort all suffix start positions of `text` by comparing whole suffixes.
pub fn oracle_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..text.len()).collect();
    positions.sort_by(|&i, &j| text[i..].cmp(&text[j..]));
    positions
}

/// Common prefix of each adjacent pair, compared byte by byte.
pub fn oracle_lcp(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; sa.len()];
    for i in 1..sa.len() {
        lcp[i] = text[sa[i - 1]..]
            .iter()
            .zip(&text[sa[i]..])
            .take_while(|(a, b)| a == b)
            .count();
    }
    lcp
}

/// Greedy LZ77: at each position take the longest prefix that also starts
/// at some earlier position (overlap allowed), or one literal byte.
pub fn oracle_lz77(body: &[u8]) -> Vec<(usize, usize)> {
    let mut phrases = Vec::new();
    let mut i = 0;
    while i < body.len() {
        let longest = (0..i)
            .map(|j| {
                body[i..]
                    .iter()
                    .zip(&body[j..])
                    .take_while(|(a, b)| a == b)
                    .count()
            })
            .max()
            .unwrap_or(0);
        let len = longest.max(1);
        phrases.push((i, len));
        i += len;
    }
    phrases
}

/// LZ78 with a set of phrase strings: extend while the current string is a
/// known phrase.
pub fn oracle_lz78(body: &[u8]) -> Vec<(usize, usize)> {
    let mut dictionary: HashSet<&[u8]> = HashSet::new();
    let mut phrases = Vec::new();
    let mut start = 0;
    let mut end = 0;
    while end < body.len() {
        end += 1;
        if !dictionary.contains(&body[start..end]) {
            dictionary.insert(&body[start..end]);
            phrases.push((start, end - start));
            start = end;
        }
    }
    if start < body.len() {
        phrases.push((start, body.len() - start));
    }
    phrases
}

/// Number of distinct length-k windows of `body`.
pub fn oracle_distinct(body: &[u8], k: usize) -> usize {
    body.windows(k).collect::<HashSet<_>>().len()
}

/// max over k of d_k / k, by enumerating every window.
pub fn oracle_delta(body: &[u8]) -> f64 {
    (1..=body.len())
        .map(|k| oracle_distinct(body, k) as f64 / k as f64)
        .fold(0.0, f64::max)
}

/// BWT built from the oracle suffix array, then boundaries counted with the
/// rule "skip the boundary right after the sentinel".
pub fn oracle_bwt_runs(text: &[u8]) -> usize {
    let n = text.len();
    let bwt: Vec<u8> = oracle_suffix_array(text)
        .into_iter()
        .map(|j| text[(j + n - 1) % n])
        .collect();
    bwt.windows(2)
        .filter(|w| w[0] != 0 && w[0] != w[1])
        .count()
}
