//! TF-IDF vector space with cosine similarity.
//!
//! Weighting: raw term count × smoothed IDF `ln((1 + n) / (1 + df)) + 1`,
//! then L2 normalisation per document. Tokens are lowercased runs of
//! alphanumeric or `_` characters, at least two characters long, with
//! English stop words removed.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::errors::AppError;
use crate::ranking::ranker::RelevanceScorer;
use crate::ranking::stop_words::is_stop_word;

/// Sparse document vector: `(term index, weight)` pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Learns vocabulary and IDF weights from `corpus`.
    pub fn fit(corpus: &[&str]) -> Result<Self, AppError> {
        if corpus.is_empty() {
            return Err(AppError::EmptyCorpus);
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for doc in corpus {
            let mut seen = HashSet::new();
            for term in tokenize(doc) {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                if seen.insert(idx) {
                    doc_freq[idx] += 1;
                }
            }
        }

        let n = corpus.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Ok(Self { vocabulary, idf })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    /// L2-normalised TF-IDF vector. Terms outside the vocabulary are ignored;
    /// a document with no known terms yields an empty (zero) vector.
    pub fn transform(&self, doc: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in tokenize(doc) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in vector.iter_mut() {
                *w /= norm;
            }
        }
        vector
    }
}

/// Dot product of two L2-normalised sparse vectors. Zero vectors score 0.0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|t| !is_stop_word(t))
        .collect()
}

/// Default scorer: fits one model over the query followed by every document.
pub struct TfIdfScorer;

impl RelevanceScorer for TfIdfScorer {
    fn score(&self, query: &str, documents: &[&str]) -> Result<Vec<f64>, AppError> {
        let mut corpus = Vec::with_capacity(documents.len() + 1);
        corpus.push(query);
        corpus.extend_from_slice(documents);

        let model = TfIdfModel::fit(&corpus)?;
        let query_vec = model.transform(query);

        Ok(documents
            .iter()
            .map(|doc| cosine_similarity(&query_vec, &model.transform(doc)))
            .collect())
    }
}
