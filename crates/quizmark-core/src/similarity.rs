//! Bigram-overlap (Dice) string similarity.
//!
//! similarity = 2 * |shared bigrams| / (|bigrams(a)| + |bigrams(b)|)
//!
//! Bigrams are pairs of adjacent Unicode scalar values and are compared as a
//! multiset, so each occurrence in one string pairs with at most one
//! occurrence in the other. No normalization happens here.

use std::collections::HashMap;

/// Compare two strings, returning a similarity in `[0, 1]`.
///
/// Strings shorter than two characters have no bigrams and fall back to
/// exact equality. Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_bigrams = bigram_counts(a);
    let b_bigrams = bigram_counts(b);
    let a_total: usize = a_bigrams.values().sum();
    let b_total: usize = b_bigrams.values().sum();

    if a_total == 0 || b_total == 0 {
        return 0.0;
    }

    let shared: usize = a_bigrams
        .iter()
        .map(|(bigram, &count)| count.min(b_bigrams.get(bigram).copied().unwrap_or(0)))
        .sum();

    (2 * shared) as f64 / (a_total + b_total) as f64
}

fn bigram_counts(s: &str) -> HashMap<(char, char), usize> {
    let mut counts = HashMap::new();
    let mut chars = s.chars();
    let Some(mut prev) = chars.next() else {
        return counts;
    };
    for c in chars {
        *counts.entry((prev, c)).or_insert(0) += 1;
        prev = c;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "ab",
        "night",
        "nacht",
        "guerra de corea",
        "guerra del golfo pérsico",
        "aaaa",
        "aa",
        "ñandú",
    ];

    #[test]
    fn identical_strings_score_one() {
        for s in SAMPLES {
            assert_eq!(similarity(s, s), 1.0, "similarity({s:?}, {s:?})");
        }
    }

    #[test]
    fn symmetric_and_bounded() {
        for a in SAMPLES {
            for b in SAMPLES {
                let ab = similarity(a, b);
                assert_eq!(ab, similarity(b, a), "asymmetric for {a:?} / {b:?}");
                assert!((0.0..=1.0).contains(&ab), "out of range for {a:?} / {b:?}: {ab}");
            }
        }
    }

    #[test]
    fn classic_dice_example() {
        // ni ig gh ht vs na ac ch ht: one shared bigram out of 4 + 4
        assert!((similarity("night", "nacht") - 0.25).abs() < 1e-12);
    }

    #[test]
    fn short_strings_use_exact_equality() {
        assert_eq!(similarity("a", "a"), 1.0);
        assert_eq!(similarity("a", "b"), 0.0);
        assert_eq!(similarity("a", "ab"), 0.0);
        assert_eq!(similarity("", "ab"), 0.0);
    }

    #[test]
    fn empty_strings_are_identical() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn repeated_bigrams_are_not_reused() {
        // "aaaa" has three "aa" bigrams, "aa" has one: 2 * 1 / (3 + 1)
        assert!((similarity("aaaa", "aa") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn accented_characters_are_literal() {
        // "pé" and "ér" have no counterpart, and the extra "er" only pairs once
        let score = similarity("guerra del golfo persico", "guerra del golfo pérsico");
        assert!((score - 42.0 / 46.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn case_is_significant() {
        assert_eq!(similarity("AB", "ab"), 0.0);
    }
}
