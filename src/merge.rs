//! Greedy, overlap-aware merging of pieces into size-bounded chunks.
//!
//! ## How It Works
//!
//! Pieces are appended to an accumulator until the next one would push the
//! joined length over `size`. The accumulator is then flushed as a chunk and
//! shrunk from the front until what is left fits in `overlap`; that remainder
//! becomes the start of the next chunk.
//!
//! ```text
//! size = 7, overlap = 3, delimiter = " "
//!
//! Pieces:  ["aaa", "bbb", "ccc", "ddd"]
//!
//! Chunk 0: "aaa bbb"
//! Chunk 1: "bbb ccc"   <- "bbb" kept as overlap
//! Chunk 2: "ccc ddd"
//! ```
//!
//! Overlap is built from whole pieces only, never a partial piece.
//!
//! ## Shrink Policy
//!
//! Shrinking continues past `overlap` while the carried pieces plus the
//! incoming piece would still exceed `size`. Staying under the size limit
//! wins over keeping overlap:
//!
//! ```text
//! size = 8, overlap = 3
//!
//! Pieces:  ["ab", "cdefgh"]
//!
//! "ab" (2) fits the overlap, but "ab cdefgh" (9) would not fit the size.
//! Chunk 0: "ab"
//! Chunk 1: "cdefgh"
//! ```
//!
//! A single piece longer than `size` is still emitted whole and reported with
//! a `tracing` warning.

use tracing::warn;

use crate::{Chunk, ChunkBounds};

/// Merge pieces into chunks of at most `bounds.size()` chars.
///
/// Pieces are joined with `delimiter`. When `trim_whitespace` is set, each
/// chunk is trimmed and chunks that end up empty are skipped. Ids are
/// assigned sequentially from 0.
///
/// # Example
///
/// ```rust
/// use chunkwise::{merge, ChunkBounds};
///
/// let bounds = ChunkBounds::new(7, 3).unwrap();
/// let chunks = merge::merge(&["aaa", "bbb", "ccc", "ddd"], " ", bounds, true);
///
/// let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
/// assert_eq!(contents, ["aaa bbb", "bbb ccc", "ccc ddd"]);
/// ```
pub fn merge(
    pieces: &[&str],
    delimiter: &str,
    bounds: ChunkBounds,
    trim_whitespace: bool,
) -> Vec<Chunk> {
    Chunk::sequence(merge_pieces(pieces, delimiter, bounds, trim_whitespace))
}

/// Merge without numbering, so callers can splice results in document order.
pub(crate) fn merge_pieces(
    pieces: &[&str],
    delimiter: &str,
    bounds: ChunkBounds,
    trim_whitespace: bool,
) -> Vec<String> {
    let sep = delimiter.chars().count();
    let lens: Vec<usize> = pieces.iter().map(|p| p.chars().count()).collect();

    let mut chunks = Vec::new();
    // The accumulator is pieces[start..i]; `current` is its joined length.
    let mut start = 0;
    let mut current = 0;

    for (i, &len) in lens.iter().enumerate() {
        let joined = |start: usize| if start < i { sep } else { 0 };

        if start < i && bounds.would_overflow(current, len + joined(start)) {
            flush(&pieces[start..i], delimiter, current, bounds, trim_whitespace, &mut chunks);

            while start < i
                && (current > bounds.overlap()
                    || bounds.would_overflow(current, len + joined(start)))
            {
                current -= lens[start] + if start + 1 < i { sep } else { 0 };
                start += 1;
            }
        }

        current += len + joined(start);
    }

    if start < pieces.len() {
        flush(&pieces[start..], delimiter, current, bounds, trim_whitespace, &mut chunks);
    }

    chunks
}

fn flush(
    window: &[&str],
    delimiter: &str,
    len: usize,
    bounds: ChunkBounds,
    trim_whitespace: bool,
    chunks: &mut Vec<String>,
) {
    if len > bounds.size() {
        warn!(
            size = len,
            chunk_size = bounds.size(),
            "created a chunk larger than the configured size"
        );
    }

    let joined = window.join(delimiter);
    let content = if trim_whitespace {
        joined.trim().to_string()
    } else {
        joined
    };

    if !content.is_empty() {
        chunks.push(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.content.as_str()).collect()
    }

    fn bounds(size: usize, overlap: usize) -> ChunkBounds {
        ChunkBounds::new(size, overlap).unwrap()
    }

    #[test]
    fn test_merge_with_overlap() {
        let chunks = merge(&["aaa", "bbb", "ccc", "ddd"], " ", bounds(7, 3), true);
        assert_eq!(contents(&chunks), ["aaa bbb", "bbb ccc", "ccc ddd"]);
        let ids: Vec<_> = chunks.iter().map(|c| c.id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn test_merge_without_overlap() {
        let chunks = merge(&["aaa", "bbb", "ccc", "ddd"], " ", bounds(7, 0), true);
        assert_eq!(contents(&chunks), ["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_everything_fits() {
        let chunks = merge(&["a", "b", "c"], "-", bounds(100, 10), true);
        assert_eq!(contents(&chunks), ["a-b-c"]);
    }

    #[test]
    fn test_exact_fit_is_not_overflow() {
        let chunks = merge(&["abc", "def"], " ", bounds(7, 0), true);
        assert_eq!(contents(&chunks), ["abc def"]);
    }

    #[test]
    fn test_oversized_piece_emitted_whole() {
        let chunks = merge(&["short", "waytoolongpiece", "end"], " ", bounds(8, 0), true);
        assert_eq!(contents(&chunks), ["short", "waytoolongpiece", "end"]);
    }

    #[test]
    fn test_shrink_favors_size_over_overlap() {
        let chunks = merge(&["ab", "cdefgh"], " ", bounds(8, 3), true);
        assert_eq!(contents(&chunks), ["ab", "cdefgh"]);
    }

    #[test]
    fn test_char_level_overlap() {
        let pieces: Vec<&str> = "abcdefghij"
            .char_indices()
            .map(|(i, _)| &"abcdefghij"[i..=i])
            .collect();
        let chunks = merge(&pieces, "", bounds(4, 1), true);
        assert_eq!(contents(&chunks), ["abcd", "defg", "ghij"]);
    }

    #[test]
    fn test_trim_whitespace() {
        let chunks = merge(&["This is an example", " Let's go"], ".", bounds(20, 0), true);
        assert_eq!(contents(&chunks), ["This is an example", "Let's go"]);

        let chunks = merge(&["This is an example", " Let's go"], ".", bounds(20, 0), false);
        assert_eq!(contents(&chunks), ["This is an example", " Let's go"]);
    }

    #[test]
    fn test_blank_chunks_skipped_when_trimming() {
        let chunks = merge(&["a", " ", " ", " ", "b"], "", bounds(2, 0), true);
        assert_eq!(contents(&chunks), ["a", "b"]);
        assert_eq!(chunks[1].id, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge(&[], " ", bounds(10, 0), true).is_empty());
    }

    #[test]
    fn test_chunks_respect_size() {
        let words: Vec<&str> = "the quick brown fox jumps over the lazy dog again and again"
            .split(' ')
            .collect();
        for (size, overlap) in [(10, 0), (10, 4), (15, 7), (20, 19)] {
            let chunks = merge(&words, " ", bounds(size, overlap), true);
            for chunk in &chunks {
                assert!(chunk.len() <= size, "{chunk:?} exceeds {size}");
            }
        }
    }
}
