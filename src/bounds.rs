//! Chunk size and overlap configuration.
//!
//! ## The Problem
//!
//! Size and overlap pull in opposite directions:
//!
//! - Size: the hard ceiling a merged chunk should respect
//! - Overlap: how much trailing context is carried into the next chunk
//!
//! An overlap that is not strictly smaller than the size can never be
//! satisfied: the next chunk would consist of nothing but carried context.
//!
//! ```text
//! size = 10, overlap = 3
//!
//! Pieces:  ["aaa", "bbb", "ccc", "ddd"]   joined with " "
//!
//! Chunk 0: "aaa bbb"
//! Chunk 1: "bbb ccc"   <- "bbb" (3 chars) carried over
//! Chunk 2: "ccc ddd"
//! ```
//!
//! `ChunkBounds` validates both numbers once, up front, so the merge code
//! never has to defend against an impossible configuration.

use std::cmp::Ordering;

use crate::{Error, Result};

/// Validated chunk size and overlap, both counted in chars.
///
/// # Examples
///
/// ```rust
/// use chunkwise::ChunkBounds;
///
/// let bounds = ChunkBounds::new(512, 64).unwrap();
/// assert_eq!(bounds.size(), 512);
/// assert_eq!(bounds.overlap(), 64);
///
/// // Overlap must be strictly smaller than size
/// assert!(ChunkBounds::new(10, 11).is_err());
/// assert!(ChunkBounds::new(0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    pub(crate) size: usize,
    pub(crate) overlap: usize,
}

impl ChunkBounds {
    /// Create bounds with the given size and overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if `size == 0` or `overlap >= size`. Values are never
    /// clamped.
    pub fn new(size: usize, overlap: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidChunkSize(size));
        }
        if overlap >= size {
            return Err(Error::OverlapExceedsSize { size, overlap });
        }
        Ok(Self { size, overlap })
    }

    /// Bounds with no overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if `size == 0`.
    pub fn no_overlap(size: usize) -> Result<Self> {
        Self::new(size, 0)
    }

    /// The maximum chunk size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The maximum amount of carried context between chunks.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// Compare a length against the size limit.
    ///
    /// Returns:
    /// - `Ordering::Less`: room left
    /// - `Ordering::Equal`: exactly at the limit
    /// - `Ordering::Greater`: over the limit
    #[must_use]
    pub fn fits(&self, len: usize) -> Ordering {
        len.cmp(&self.size)
    }

    /// Check if adding `additional` chars to `current` would exceed the size.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.size
    }
}

impl TryFrom<(usize, usize)> for ChunkBounds {
    type Error = Error;

    fn try_from((size, overlap): (usize, usize)) -> Result<Self> {
        Self::new(size, overlap)
    }
}
