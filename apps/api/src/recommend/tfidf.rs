//! TF-IDF vector space over a small in-memory corpus.
//!
//! Weights are raw term counts scaled by smoothed IDF,
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, and every vector is
//! L2-normalized, so cosine similarity reduces to a dot product.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::tokenizer::tokenize;

/// Sparse, L2-normalized document vector: `(term index, weight)` pairs
/// sorted by term index. Empty when the text has no in-vocabulary terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector(Vec<(usize, f64)>);

impl SparseVector {
    #[cfg(test)]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Cosine similarity between two normalized vectors. Zero vectors score 0.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.0.len() && j < other.0.len() {
            let (ti, wi) = self.0[i];
            let (tj, wj) = other.0[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        // Float drift can push identical vectors a hair above 1.
        dot.clamp(0.0, 1.0)
    }
}

/// A vocabulary plus IDF weights fitted on a corpus.
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Fits the model and returns it together with the corpus vectors,
    /// one per document in input order.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_frequencies: Vec<usize> = Vec::new();

        // Indices follow first occurrence, so fitting is deterministic.
        for terms in &tokenized {
            let mut seen: HashSet<&String> = HashSet::new();
            for term in terms.iter().filter(|t| seen.insert(*t)) {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(term.clone()).or_insert(next_index);
                if index == doc_frequencies.len() {
                    doc_frequencies.push(0);
                }
                doc_frequencies[index] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = doc_frequencies
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let model = TfIdfModel { vocabulary, idf };
        let vectors = tokenized.iter().map(|terms| model.vectorize(terms)).collect();
        (model, vectors)
    }

    /// Vectorizes unseen text against the fitted vocabulary. Terms outside
    /// the vocabulary carry no weight.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&tokenize(text))
    }

    #[cfg(test)]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn vectorize(&self, terms: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();

        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weights {
                *w /= norm;
            }
        }

        SparseVector(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_corpus_has_empty_vocabulary() {
        let (model, vectors) = TfIdfModel::fit_transform::<&str>(&[]);
        assert_eq!(model.vocabulary_size(), 0);
        assert!(vectors.is_empty());
        assert!(model.transform("rust").is_zero());
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let (_, vectors) = TfIdfModel::fit_transform(&["rust rust tokio", "python django"]);
        for v in &vectors {
            assert_close(v.cosine(v), 1.0);
        }
    }

    #[test]
    fn test_smoothed_idf_weights() {
        // python: df=2 -> idf 1.0; sql: df=1 -> idf ln(3/2)+1
        let (_, vectors) = TfIdfModel::fit_transform(&["python,sql", "python,java"]);
        let sql_idf = (3.0_f64 / 2.0).ln() + 1.0;
        let norm = (1.0 + sql_idf * sql_idf).sqrt();
        let python_only = SparseVector(vec![(0, 1.0)]);
        let python_index_weight = vectors[0].cosine(&python_only);
        // python is the first term seen in document 0.
        assert_close(python_index_weight, 1.0 / norm);
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let (model, _) = TfIdfModel::fit_transform(&["rust tokio", "python django"]);
        assert!(model.transform("haskell cobol").is_zero());
        assert!(!model.transform("rust haskell").is_zero());
    }

    #[test]
    fn test_cosine_of_disjoint_documents_is_zero() {
        let (_, vectors) = TfIdfModel::fit_transform(&["rust tokio", "python django"]);
        assert_close(vectors[0].cosine(&vectors[1]), 0.0);
    }

    #[test]
    fn test_zero_vector_cosine_is_zero() {
        let (_, vectors) = TfIdfModel::fit_transform(&["the and of", "rust"]);
        assert!(vectors[0].is_zero());
        assert_close(vectors[0].cosine(&vectors[1]), 0.0);
        assert_close(vectors[0].cosine(&vectors[0]), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let (_, vectors) =
            TfIdfModel::fit_transform(&["rust async tokio", "rust web axum", "go web"]);
        assert_close(vectors[0].cosine(&vectors[1]), vectors[1].cosine(&vectors[0]));
        assert!(vectors[0].cosine(&vectors[1]) > 0.0);
    }
}
