//! Similarity scoring for the vector index
//!
//! Cosine similarity over the paired prefix of two vectors, plus the
//! ranking order used to sort scored fragments.

use std::cmp::Ordering;

/// Number of element pairs two vectors are compared over.
#[inline]
fn paired_len(a: &[f32], b: &[f32]) -> usize {
    a.len().min(b.len())
}

/// Dot product over the paired prefix of `a` and `b`.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    let n = paired_len(a, b);
    let mut dot = 0.0;
    let mut i = 0;

    // Unrolling 4
    while i + 3 < n {
        dot += a[i] * b[i] + a[i+1] * b[i+1] + a[i+2] * b[i+2] + a[i+3] * b[i+3];
        i += 4;
    }

    while i < n {
        dot += a[i] * b[i];
        i += 1;
    }

    dot
}

/// L2 norm of the whole of `v`. Slice to the paired prefix first when
/// comparing vectors of different lengths, as [`cosine_similarity`] does.
pub fn magnitude(v: &[f32]) -> f32 {
    let mut sum = 0.0;
    let n = v.len();
    let mut i = 0;

    // Unrolling 4
    while i + 3 < n {
        sum += v[i] * v[i] + v[i+1] * v[i+1] + v[i+2] * v[i+2] + v[i+3] * v[i+3];
        i += 4;
    }

    while i < n {
        sum += v[i] * v[i];
        i += 1;
    }

    sum.sqrt()
}

/// Cosine similarity of `a` and `b`.
///
/// Only the first `min(a.len(), b.len())` elements take part: the longer
/// vector is silently truncated, for the dot product and both norms.
///
/// No zero-norm guard is applied. A zero vector (or an empty one) yields
/// `0.0 / 0.0 = NaN`, and non-finite inputs propagate. Ranking treats any
/// non-finite score as undefined similarity, see [`compare_scores`].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let n = paired_len(a, b);
    let (a, b) = (&a[..n], &b[..n]);

    dot_product(a, b) / (magnitude(a) * magnitude(b))
}

/// Ascending score order with every non-finite score below every finite one.
///
/// Two non-finite scores compare equal, so NaN and infinities keep their
/// relative (insertion) order under a stable sort.
pub fn compare_scores(a: f32, b: f32) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => Ordering::Equal,
    }
}

/// An item paired with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredItem<T> {
    pub score: f32,
    pub item: T,
}

impl<T> ScoredItem<T> {
    pub fn new(item: T, score: f32) -> Self {
        Self { score, item }
    }
}

impl<T> PartialEq for ScoredItem<T> {
    fn eq(&self, other: &Self) -> bool {
        // Score only, consistent with Ord (NaN == NaN here)
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for ScoredItem<T> {}

impl<T> PartialOrd for ScoredItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScoredItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_scores(self.score, other.score)
    }
}
