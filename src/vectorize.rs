//! Text → sparse term-count vector over a fitted vocabulary.
//!
//! Reproduces the training-time CountVectorizer behavior: lowercase word
//! tokens of two or more characters, word n-grams over the token stream,
//! counts mapped onto the fixed vocabulary. Out-of-vocabulary terms are
//! dropped; the vocabulary never grows at request time.

use crate::artifacts::VectorizerArtifact;
use std::collections::HashMap;

/// Tokenize into word tokens: maximal runs of alphanumeric or `_` chars.
/// Single-character tokens are dropped, matching the training-time token
/// pattern.
pub(crate) fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if lowercase {
                current.extend(ch.to_lowercase());
            } else {
                current.push(ch);
            }
            current_chars += 1;
        } else {
            if current_chars >= 2 {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            current_chars = 0;
        }
    }
    if current_chars >= 2 {
        tokens.push(current);
    }

    tokens
}

/// Generate word n-grams and count occurrences.
pub(crate) fn ngram_counts(tokens: &[String], lo: usize, hi: usize) -> HashMap<String, u32> {
    let mut ngrams = HashMap::new();

    for n in lo..=hi {
        if n > tokens.len() {
            continue;
        }
        for window in tokens.windows(n) {
            let gram = window.join(" ");
            *ngrams.entry(gram).or_insert(0) += 1;
        }
    }

    ngrams
}

/// Vectorize one message: sparse `(vocabulary column, count)` pairs.
/// An empty or all-out-of-vocabulary message yields an empty vector —
/// never an error.
pub fn count_vector(artifact: &VectorizerArtifact, text: &str) -> Vec<(usize, u32)> {
    let tokens = tokenize(text, artifact.lowercase);
    let [lo, hi] = artifact.ngram_range;
    let ngrams = ngram_counts(&tokens, lo, hi);

    let mut counts: Vec<(usize, u32)> = ngrams
        .into_iter()
        .filter_map(|(gram, count)| {
            artifact.vocabulary.get(&gram).map(|&idx| {
                let count = if artifact.binary { 1 } else { count };
                (idx, count)
            })
        })
        .collect();
    counts.sort_unstable_by_key(|&(idx, _)| idx);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(vocab: &[&str], ngram_range: [usize; 2], binary: bool) -> VectorizerArtifact {
        VectorizerArtifact {
            vocabulary: vocab
                .iter()
                .enumerate()
                .map(|(i, t)| (t.to_string(), i))
                .collect(),
            ngram_range,
            lowercase: true,
            binary,
        }
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Claim your FREE prize now!", true);
        assert_eq!(tokens, vec!["claim", "your", "free", "prize", "now"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = tokenize("a win b", true);
        assert_eq!(tokens, vec!["win"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        let tokens = tokenize("call 0800_555 now", true);
        assert_eq!(tokens, vec!["call", "0800_555", "now"]);
    }

    #[test]
    fn test_tokenize_no_lowercase() {
        let tokens = tokenize("FREE Money", false);
        assert_eq!(tokens, vec!["FREE", "Money"]);
    }

    #[test]
    fn test_ngram_counts() {
        let tokens: Vec<String> = ["free", "money", "now"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let ng = ngram_counts(&tokens, 1, 2);
        assert_eq!(ng.get("free"), Some(&1));
        assert_eq!(ng.get("free money"), Some(&1));
        assert_eq!(ng.get("money now"), Some(&1));
        assert_eq!(ng.get("free money now"), None); // only up to bigrams
    }

    #[test]
    fn test_count_vector_repeated_terms() {
        let a = artifact(&["free", "money"], [1, 1], false);
        let counts = count_vector(&a, "free free money");
        assert_eq!(counts, vec![(0, 2), (1, 1)]);
    }

    #[test]
    fn test_count_vector_binary_clamps() {
        let a = artifact(&["free", "money"], [1, 1], true);
        let counts = count_vector(&a, "free free money");
        assert_eq!(counts, vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_count_vector_ignores_unknown_terms() {
        let a = artifact(&["free"], [1, 1], false);
        let counts = count_vector(&a, "totally unknown words free");
        assert_eq!(counts, vec![(0, 1)]);
    }

    #[test]
    fn test_count_vector_empty_input() {
        let a = artifact(&["free"], [1, 1], false);
        assert!(count_vector(&a, "").is_empty());
        assert!(count_vector(&a, "   \t\n").is_empty());
    }
}
