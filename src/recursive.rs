//! Recursive delimiter splitting (LangChain-style).
//!
//! Tries progressively finer delimiters until pieces fit within the size limit.
//!
//! ## The Algorithm
//!
//! Given delimiters `["\n\n", "\n", " ", ""]` and size `100`:
//!
//! ```text
//! 1. Pick the first delimiter that occurs in the text, say "\n\n"
//! 2. Split on it; pieces shorter than 100 chars are "good"
//! 3. Runs of good pieces are merged (with overlap) into chunks
//! 4. Each oversized piece is resolved again with ["\n", " ", ""]
//! 5. "" splits into chars and ends the recursion
//! ```
//!
//! Every recursive call sees a strictly shorter delimiter list, so the
//! recursion depth is bounded by the number of delimiters. A piece that is
//! still oversized once the list is exhausted is emitted whole, with a
//! `tracing` warning.
//!
//! ## Why Recursive?
//!
//! Different content types need different delimiters:
//!
//! - **Markdown**: Headings (`\n## `), paragraphs (`\n\n`), lines (`\n`)
//! - **Prose**: Paragraphs, sentences, words
//!
//! The recursive approach preserves structure at the highest level possible.
//! A paragraph boundary is better than a sentence boundary, which is better
//! than a word boundary.

use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::merge::merge_pieces;
use crate::{delimiter, Chunk, ChunkBounds, Chunker, Error, KeepDelimiter, Result};

/// Recursive delimiter chunker.
///
/// Splits text using a priority list of delimiters, trying the coarsest first.
///
/// ## Example
///
/// ```rust
/// use chunkwise::{ChunkBounds, Chunker, RecursiveChunker};
///
/// let bounds = ChunkBounds::new(10, 0).unwrap();
/// let chunker = RecursiveChunker::new(bounds, &["\n\n", " ", ""]).unwrap();
/// let chunks = chunker.split("aaaa bbbb\n\ncccc dddd eeee").unwrap();
///
/// let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
/// assert_eq!(contents, ["aaaa bbbb", "cccc dddd", "eeee"]);
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    bounds: ChunkBounds,
    delimiters: Vec<String>,
    keep_delimiter: KeepDelimiter,
    trim_whitespace: bool,
}

impl RecursiveChunker {
    /// Create a new recursive chunker.
    ///
    /// # Arguments
    ///
    /// * `bounds` - Size and overlap limits
    /// * `delimiters` - Priority list of delimiters, coarsest first
    ///
    /// # Errors
    ///
    /// Returns an error if `delimiters` is empty, or if the empty delimiter
    /// appears anywhere but last.
    pub fn new(bounds: ChunkBounds, delimiters: &[&str]) -> Result<Self> {
        if delimiters.is_empty() {
            return Err(Error::NoDelimiters);
        }
        if let Some(position) = delimiters.iter().position(|d| d.is_empty()) {
            if position + 1 != delimiters.len() {
                return Err(Error::MisplacedEmptyDelimiter {
                    position,
                    count: delimiters.len(),
                });
            }
        }

        Ok(Self {
            bounds,
            delimiters: delimiters.iter().map(|&d| d.to_string()).collect(),
            keep_delimiter: KeepDelimiter::None,
            trim_whitespace: true,
        })
    }

    /// Create a chunker with delimiters for prose.
    #[must_use]
    pub fn prose(bounds: ChunkBounds) -> Self {
        Self::with_delimiters(bounds, &["\n\n", "\n", ". ", " ", ""])
    }

    /// Create a chunker with delimiters for Markdown.
    #[must_use]
    pub fn markdown(bounds: ChunkBounds) -> Self {
        Self::with_delimiters(bounds, &["\n## ", "\n### ", "\n\n", "\n", ". ", " ", ""])
    }

    /// Keep the delimiter at the start or end of each piece.
    #[must_use]
    pub fn with_keep_delimiter(mut self, keep: KeepDelimiter) -> Self {
        self.keep_delimiter = keep;
        self
    }

    /// Whether to trim whitespace around each chunk.
    #[must_use]
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// The size and overlap limits.
    #[must_use]
    pub fn bounds(&self) -> ChunkBounds {
        self.bounds
    }

    /// The delimiters, highest priority first.
    #[must_use]
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Where delimiters go after splitting.
    #[must_use]
    pub fn keep_delimiter(&self) -> KeepDelimiter {
        self.keep_delimiter
    }

    /// Whether chunks are trimmed.
    #[must_use]
    pub fn trim_whitespace(&self) -> bool {
        self.trim_whitespace
    }

    // Presets are known-valid; skips the checks in `new`.
    fn with_delimiters(bounds: ChunkBounds, delimiters: &[&str]) -> Self {
        Self {
            bounds,
            delimiters: delimiters.iter().map(|&d| d.to_string()).collect(),
            keep_delimiter: KeepDelimiter::None,
            trim_whitespace: true,
        }
    }
}

impl Default for RecursiveChunker {
    /// Size 100, overlap 20, delimiters `["\n\n", "\n", " ", ""]`.
    fn default() -> Self {
        Self::with_delimiters(
            ChunkBounds {
                size: 100,
                overlap: 20,
            },
            &["\n\n", "\n", " ", ""],
        )
    }
}

impl Chunker for RecursiveChunker {
    fn split(&self, content: &str) -> Result<Vec<Chunk>> {
        let delimiters: Vec<&str> = self.delimiters.iter().map(String::as_str).collect();
        let chunks = resolve(
            content,
            &delimiters,
            self.bounds,
            self.keep_delimiter,
            self.trim_whitespace,
        );

        debug!(chunks = chunks.len(), "recursive split complete");

        Ok(chunks)
    }
}

/// Recursively split `content` into chunks using a priority list of delimiters.
///
/// Ids are assigned once, in document order, after the whole tree has been
/// resolved.
///
/// # Example
///
/// ```rust
/// use chunkwise::{recursive, ChunkBounds, KeepDelimiter};
///
/// let bounds = ChunkBounds::new(4, 1).unwrap();
/// let chunks = recursive::resolve("abcdefghij", &[" ", ""], bounds, KeepDelimiter::None, true);
///
/// let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
/// assert_eq!(contents, ["abcd", "defg", "ghij"]);
/// ```
pub fn resolve(
    content: &str,
    delimiters: &[&str],
    bounds: ChunkBounds,
    keep: KeepDelimiter,
    trim_whitespace: bool,
) -> Vec<Chunk> {
    let mut out = Vec::new();
    resolve_into(content, delimiters, bounds, keep, trim_whitespace, &mut out);
    Chunk::sequence(out)
}

fn resolve_into(
    content: &str,
    delimiters: &[&str],
    bounds: ChunkBounds,
    keep: KeepDelimiter,
    trim_whitespace: bool,
    out: &mut Vec<String>,
) {
    let (delimiter, remaining) = select_delimiter(content, delimiters);
    trace!(?delimiter, remaining = remaining.len(), "selected delimiter");

    let joiner = match keep {
        KeepDelimiter::None => delimiter,
        KeepDelimiter::Start | KeepDelimiter::End => "",
    };

    let mut good: Vec<&str> = Vec::new();

    for piece in delimiter::split(content, delimiter, keep) {
        if bounds.fits(piece.chars().count()) == Ordering::Less {
            good.push(piece);
            continue;
        }

        if !good.is_empty() {
            out.extend(merge_pieces(&good, joiner, bounds, trim_whitespace));
            good.clear();
        }

        if remaining.is_empty() {
            emit_whole(piece, bounds, trim_whitespace, out);
        } else {
            resolve_into(piece, remaining, bounds, keep, trim_whitespace, out);
        }
    }

    if !good.is_empty() {
        out.extend(merge_pieces(&good, joiner, bounds, trim_whitespace));
    }
}

/// Pick the first delimiter present in `content`.
///
/// Returns the delimiter and the lower-priority delimiters left for
/// children. The empty delimiter, or no match at all, means char-level
/// splitting with nothing left.
fn select_delimiter<'a, 'd>(content: &str, delimiters: &'a [&'d str]) -> (&'d str, &'a [&'d str]) {
    for (i, &delimiter) in delimiters.iter().enumerate() {
        if delimiter.is_empty() {
            return ("", &[]);
        }
        if content.contains(delimiter) {
            return (delimiter, &delimiters[i + 1..]);
        }
    }
    ("", &[])
}

fn emit_whole(piece: &str, bounds: ChunkBounds, trim_whitespace: bool, out: &mut Vec<String>) {
    let content = if trim_whitespace { piece.trim() } else { piece };
    let len = content.chars().count();

    if len > bounds.size() {
        warn!(
            size = len,
            chunk_size = bounds.size(),
            "no delimiter left to split an oversized piece"
        );
    }

    if !content.is_empty() {
        out.push(content.to_string());
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
    fn test_paragraph_then_words() {
        let chunks = resolve(
            "aaaa bbbb\n\ncccc dddd eeee",
            &["\n\n", " ", ""],
            bounds(10, 0),
            KeepDelimiter::None,
            true,
        );
        assert_eq!(
            chunks,
            vec![
                Chunk::new(0, "aaaa bbbb"),
                Chunk::new(1, "cccc dddd"),
                Chunk::new(2, "eeee"),
            ]
        );
    }

    #[test]
    fn test_char_level_fallback() {
        let chunks = resolve("abcdefghij", &[" ", ""], bounds(4, 1), KeepDelimiter::None, true);
        assert_eq!(contents(&chunks), ["abcd", "defg", "ghij"]);
    }

    #[test]
    fn test_no_matching_delimiter_falls_back_to_chars() {
        let chunks = resolve("abcdefgh", &["\n"], bounds(3, 0), KeepDelimiter::None, true);
        assert_eq!(contents(&chunks), ["abc", "def", "gh"]);
    }

    #[test]
    fn test_exhausted_delimiters_emit_whole() {
        let chunks = resolve(
            "short\nverylongline",
            &["\n"],
            bounds(5, 0),
            KeepDelimiter::None,
            true,
        );
        assert_eq!(
            chunks,
            vec![Chunk::new(0, "short"), Chunk::new(1, "verylongline")]
        );
    }

    #[test]
    fn test_keep_start_recursion() {
        let chunks = resolve(
            "Intro.\n\nSection one is long enough to split here",
            &["\n\n", " ", ""],
            bounds(20, 0),
            KeepDelimiter::Start,
            true,
        );
        assert_eq!(
            contents(&chunks),
            ["Intro.", "Section one is", "long enough to", "split here"]
        );
        let ids: Vec<_> = chunks.iter().map(|c| c.id).collect();
        assert_eq!(ids, [0, 1, 2, 3]);
    }

    #[test]
    fn test_select_delimiter_shrinks_list() {
        let delimiters = ["\n\n", "\n", " ", ""];
        let (d, rest) = select_delimiter("a b", &delimiters);
        assert_eq!(d, " ");
        assert_eq!(rest, [""]);

        let (d, rest) = select_delimiter("ab", &delimiters);
        assert_eq!(d, "");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_respects_size() {
        let chunker = RecursiveChunker::prose(bounds(20, 5));
        let text = "The quick brown fox jumps over the lazy dog.\n\nPack my box with five dozen liquor jugs.";
        let chunks = chunker.split(text).unwrap();

        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(chunk.len() <= 20, "Chunk too large: {chunk:?}");
        }
    }

    #[test]
    fn test_default_config() {
        let chunker = RecursiveChunker::default();
        assert_eq!(chunker.bounds().size(), 100);
        assert_eq!(chunker.bounds().overlap(), 20);
        assert_eq!(chunker.delimiters(), ["\n\n", "\n", " ", ""]);
        assert_eq!(chunker.keep_delimiter(), KeepDelimiter::None);
        assert!(chunker.trim_whitespace());
    }

    #[test]
    fn test_empty_text() {
        let chunker = RecursiveChunker::default();
        assert!(chunker.split("").unwrap().is_empty());
    }

    #[test]
    fn test_small_text_single_chunk() {
        let chunker = RecursiveChunker::default();
        let chunks = chunker.split("Small text.").unwrap();
        assert_eq!(chunks, vec![Chunk::new(0, "Small text.")]);
    }

    #[test]
    fn test_markdown_sections() {
        let chunker = RecursiveChunker::markdown(bounds(40, 0));
        let text = "# Title\n\nIntro.\n## Section 1\n\nContent 1.\n## Section 2\n\nContent 2.";
        let chunks = chunker.split(text).unwrap();

        assert!(chunks.len() >= 2);
        assert!(chunks.iter().any(|c| c.content.contains("Content 2.")));
    }

    #[test]
    fn test_empty_delimiters_rejected() {
        let err = RecursiveChunker::new(bounds(10, 0), &[]).unwrap_err();
        assert!(matches!(err, Error::NoDelimiters));
    }

    #[test]
    fn test_empty_delimiter_must_be_last() {
        let err = RecursiveChunker::new(bounds(10, 0), &["", " "]).unwrap_err();
        assert!(matches!(
            err,
            Error::MisplacedEmptyDelimiter {
                position: 0,
                count: 2
            }
        ));
        assert!(RecursiveChunker::new(bounds(10, 0), &["\n", ""]).is_ok());
    }
}
