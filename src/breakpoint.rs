//! Pairwise similarity and percentile breakpoint detection.
//!
//! ## Picking Boundaries
//!
//! The semantic pipeline scores every adjacent pair of sentence windows by
//! cosine similarity and places a boundary after every pair whose score is in
//! the top `100 - percentile` percent of all scores in the document.
//!
//! ```text
//! Similarities:  [0.90, 0.12, 0.71, 0.09, 0.85]
//! percentile = 80, n = 5
//!
//! rank      = ceil(0.80 * 5) = 4
//! threshold = sorted[rank - 1] = 0.85
//!
//! Boundaries: [0, 4]     <- every index with similarity >= 0.85
//! ```
//!
//! The threshold is relative to the document, so dense technical prose and
//! loose chat are treated alike even though their absolute similarity ranges
//! differ. [`detect`] works on any score series; [`distances`] is available
//! for callers that want boundaries at the largest dissimilarities instead.

use rayon::prelude::*;

use crate::{Error, Result, Sentence};

/// Indices whose score is at or above the `percentile` rank threshold.
///
/// The threshold is the sorted score at 1-based rank
/// `ceil(percentile / 100 * n)`. Ties at the threshold are all returned.
/// Indices come back in ascending order.
///
/// # Errors
///
/// Returns an error if `percentile` is not strictly between 0 and 100, or if
/// `scores` is empty.
///
/// # Example
///
/// ```rust
/// use chunkwise::breakpoint::detect;
///
/// let scores: Vec<f64> = (10..=75).step_by(5).map(f64::from).collect();
/// assert_eq!(detect(&scores, 95).unwrap(), [13]);
/// ```
pub fn detect(scores: &[f64], percentile: u8) -> Result<Vec<usize>> {
    if percentile == 0 || percentile >= 100 {
        return Err(Error::InvalidPercentile(percentile));
    }
    if scores.is_empty() {
        return Err(Error::EmptyInput("similarities"));
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    // ceil(p * n / 100) without going through floats
    let rank = (usize::from(percentile) * sorted.len()).div_ceil(100).max(1);
    let threshold = sorted[rank - 1];

    Ok(scores
        .iter()
        .enumerate()
        .filter(|(_, &score)| score >= threshold)
        .map(|(i, _)| i)
        .collect())
}

/// Cosine similarity of two vectors, accumulated in `f64`.
///
/// Returns 0.0 when either vector has zero norm.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    } else {
        0.0
    }
}

/// Cosine similarity of every adjacent pair of sentence embeddings.
///
/// Entry `i` compares sentence `i` with sentence `i + 1`. Pairs are scored in
/// parallel.
#[must_use]
pub fn similarities(sentences: &[Sentence]) -> Vec<f64> {
    sentences
        .par_windows(2)
        .map(|pair| cosine_similarity(&pair[0].embedding, &pair[1].embedding))
        .collect()
}

/// Cosine distance (`1 - similarity`) of every adjacent pair.
///
/// Not used by [`SemanticChunker`](crate::SemanticChunker); feed it to
/// [`detect`] to split at the least similar pairs instead.
#[must_use]
pub fn distances(sentences: &[Sentence]) -> Vec<f64> {
    similarities(sentences)
        .into_iter()
        .map(|similarity| 1.0 - similarity)
        .collect()
}
