//! Vector Index - exact cosine top-K over an in-memory fragment list
//!
//! Linear scan: every stored fragment is scored against the query and the
//! scores are sorted. O(N log N) per query, fine for the small corpora this
//! index is meant for. A bounded heap would give O(N log K) with identical
//! output.

use serde::{Deserialize, Serialize};

use super::similarity::{cosine_similarity, ScoredItem};

/// A chunk of source text with its embedding. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Fragment {
    pub fn new(text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            text: text.into(),
            embedding,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub score: f32,
}

/// In-memory fragment store answering cosine top-K queries
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    fragments: Vec<Fragment>,
}

impl VectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Embedding dimensions are not checked.
    pub fn add(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Return the `k` fragments most similar to `query`, best first.
    ///
    /// Returns `min(k, len)` fragments; nothing when `k == 0` or the index
    /// is empty. Ties keep insertion order. Fragments whose similarity is
    /// non-finite (zero-norm or non-finite vectors) rank after all others.
    pub fn retrieve_top_k(&self, query: &[f32], k: usize) -> Vec<&Fragment> {
        self.ranked(query, k)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }

    /// Same ranking as [`retrieve_top_k`](Self::retrieve_top_k), with scores
    pub fn search(&self, query: &[f32], k: usize) -> Vec<SearchResult> {
        self.ranked(query, k)
            .into_iter()
            .map(|scored| SearchResult {
                text: scored.item.text.clone(),
                score: scored.score,
            })
            .collect()
    }

    fn ranked(&self, query: &[f32], k: usize) -> Vec<ScoredItem<&Fragment>> {
        if k == 0 || self.fragments.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredItem<&Fragment>> = self
            .fragments
            .iter()
            .map(|fragment| ScoredItem::new(fragment, cosine_similarity(query, &fragment.embedding)))
            .collect();

        // Stable: equal scores stay in insertion order
        scored.sort_by(|a, b| b.cmp(a));
        scored.truncate(k);
        scored
    }

    /// Number of stored fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Stored fragments in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }
}

impl Extend<Fragment> for VectorIndex {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        self.fragments.extend(iter);
    }
}

impl FromIterator<Fragment> for VectorIndex {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
