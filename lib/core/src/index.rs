//! TF-IDF corpus index over the reference catalog
//!
//! Built once from the full catalog, then shared read-only across queries.
//! Each item's normalized name is tokenized into unigrams and bigrams and
//! weighted with smoothed TF-IDF; document vectors are L2-normalized so that
//! the dot product of two vectors is their cosine similarity.

use crate::catalog::ReferenceItem;
use crate::error::{Error, Result};
use crate::normalize::ngrams;
use ahash::AHashMap;

/// Immutable TF-IDF index over the reference catalog.
///
/// The vocabulary is fixed at build time and all item vectors are expressed
/// against it, so vectors are directly comparable. Read-only after
/// construction; safe to share across threads without locks.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    items: Vec<ReferenceItem>,
    // term -> vocabulary id, ids assigned in sorted term order
    vocab: AHashMap<String, usize>,
    // vocabulary id -> smoothed inverse document frequency
    idf: Vec<f32>,
    // item position -> sparse unit vector, sorted by vocabulary id
    vectors: Vec<Vec<(usize, f32)>>,
}

impl CorpusIndex {
    /// Build an index from catalog items, preserving their order.
    ///
    /// IDF uses the smoothed form `ln((1 + n) / (1 + df)) + 1`: a term found
    /// in every document bottoms out at 1.0 while a term confined to few
    /// documents scores higher, and no weight is ever negative. Per-document
    /// weights are `tf * idf`, L2-normalized.
    ///
    /// # Errors
    /// [`Error::EmptyCorpus`] when `items` is empty, [`Error::NoVocabulary`]
    /// when tokenization yields no term from any item.
    pub fn build(items: Vec<ReferenceItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        // Term counts per document, and document frequency per term
        let mut doc_counts: Vec<AHashMap<String, u32>> = Vec::with_capacity(items.len());
        let mut dfs: AHashMap<String, u32> = AHashMap::new();

        for item in &items {
            let mut counts: AHashMap<String, u32> = AHashMap::new();
            for term in ngrams(&item.normalized_name) {
                *counts.entry(term).or_insert(0) += 1;
            }
            for term in counts.keys() {
                *dfs.entry(term.clone()).or_insert(0) += 1;
            }
            doc_counts.push(counts);
        }

        if dfs.is_empty() {
            return Err(Error::NoVocabulary);
        }

        // Stable vocabulary ids: sorted term order
        let mut terms: Vec<&String> = dfs.keys().collect();
        terms.sort();
        let vocab: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(id, term)| ((*term).clone(), id))
            .collect();

        let n_docs = items.len() as f32;
        let mut idf = vec![0.0f32; vocab.len()];
        for (term, df) in &dfs {
            if let Some(&id) = vocab.get(term) {
                idf[id] = ((1.0 + n_docs) / (1.0 + *df as f32)).ln() + 1.0;
            }
        }

        let vectors = doc_counts
            .into_iter()
            .map(|counts| {
                let mut vector: Vec<(usize, f32)> = counts
                    .into_iter()
                    .filter_map(|(term, tf)| {
                        vocab.get(&term).map(|&id| (id, tf as f32 * idf[id]))
                    })
                    .collect();
                vector.sort_by_key(|(id, _)| *id);
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        Ok(Self {
            items,
            vocab,
            idf,
            vectors,
        })
    }

    /// Number of indexed items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct unigram and bigram terms in the vocabulary.
    #[inline]
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Catalog item at `position`.
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    #[must_use]
    pub fn item(&self, position: usize) -> &ReferenceItem {
        &self.items[position]
    }

    /// All catalog items in original order.
    #[must_use]
    pub fn items(&self) -> &[ReferenceItem] {
        &self.items
    }

    /// The item's sparse unit vector, sorted by vocabulary id.
    #[must_use]
    pub fn item_vector(&self, position: usize) -> &[(usize, f32)] {
        &self.vectors[position]
    }

    /// Vocabulary id of a term, if indexed.
    pub(crate) fn term_id(&self, term: &str) -> Option<usize> {
        self.vocab.get(term).copied()
    }

    /// IDF weight for a vocabulary id.
    pub(crate) fn idf(&self, term_id: usize) -> f32 {
        self.idf[term_id]
    }
}

/// Scale a sparse vector to unit L2 norm. A zero vector is left untouched.
pub(crate) fn l2_normalize(vector: &mut [(usize, f32)]) {
    let norm: f32 = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
}
