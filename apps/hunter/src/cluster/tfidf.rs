//! TF-IDF vectorization over posting descriptions.
//!
//! Tokenization here is richer than the relevance scorer's on purpose:
//! clustering quality depends on it, while the scorer's whitespace split is
//! a preserved behavioral contract. Lowercase, split on non-alphanumeric,
//! drop single-character tokens and English stop words.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
        "it", "no", "not", "of", "on", "or", "our", "such", "that", "the", "their", "then",
        "there", "these", "they", "this", "to", "was", "we", "will", "with", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Tokenize text: lowercase, split on non-alphanumeric, remove stop words
/// and single-character tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() > 1 && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Builds L2-normalized TF-IDF vectors for the documents.
///
/// The vocabulary is the sorted union of all document terms, so vector
/// layout (and everything downstream) is deterministic for a fixed input.
/// IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`.
pub fn vectorize(documents: &[String]) -> Vec<Vec<f64>> {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

    let mut vocabulary: Vec<&str> = tokenized
        .iter()
        .flat_map(|tokens| tokens.iter().map(String::as_str))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    vocabulary.sort_unstable();
    let term_index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (*term, i))
        .collect();

    let n = documents.len() as f64;
    let mut document_frequency = vec![0u32; vocabulary.len()];
    for tokens in &tokenized {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            document_frequency[term_index[term]] += 1;
        }
    }
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    tokenized
        .iter()
        .map(|tokens| {
            let mut vector = vec![0.0; vocabulary.len()];
            if tokens.is_empty() {
                return vector;
            }
            for token in tokens {
                vector[term_index[token.as_str()]] += 1.0;
            }
            let len = tokens.len() as f64;
            for (value, idf) in vector.iter_mut().zip(&idf) {
                *value = (*value / len) * idf;
            }
            let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in &mut vector {
                    *value /= norm;
                }
            }
            vector
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(
            tokenize("Rust, Tokio/async systems!"),
            vec!["rust", "tokio", "async", "systems"]
        );
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_single_chars() {
        assert_eq!(tokenize("the A of rust"), vec!["rust"]);
    }

    #[test]
    fn test_vectorize_vectors_are_unit_length() {
        let documents = vec![
            "rust systems programming".to_string(),
            "pastry baking kitchen".to_string(),
        ];
        let vectors = vectorize(&documents);
        for vector in &vectors {
            let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_vectorize_empty_document_is_zero_vector() {
        let documents = vec!["rust tokio".to_string(), String::new()];
        let vectors = vectorize(&documents);
        assert!(vectors[1].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_vectorize_shared_terms_share_dimensions() {
        let documents = vec!["rust backend".to_string(), "rust frontend".to_string()];
        let vectors = vectorize(&documents);
        // "backend", "frontend", "rust" sorted: rust is index 2
        assert!(vectors[0][2] > 0.0);
        assert!(vectors[1][2] > 0.0);
    }

    #[test]
    fn test_vectorize_is_deterministic() {
        let documents = vec![
            "rust systems".to_string(),
            "python data".to_string(),
            "rust tooling".to_string(),
        ];
        assert_eq!(vectorize(&documents), vectorize(&documents));
    }
}
