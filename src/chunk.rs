//! The Chunk type: the final output unit of every strategy.

/// A piece of a document, ready to be embedded and indexed.
///
/// Ids start at 0 and increase by one across the whole document, whatever
/// strategy produced the chunks:
///
/// ```rust
/// use chunkwise::{Chunk, Chunker, FixedChunker, ChunkBounds};
///
/// let chunker = FixedChunker::new(ChunkBounds::new(20, 0).unwrap(), ".");
/// let chunks = chunker
///     .split("This is an example. Let's split on periods. Okay?")
///     .unwrap();
///
/// assert_eq!(chunks[0], Chunk::new(0, "This is an example"));
/// assert_eq!(chunks[2], Chunk::new(2, "Okay?"));
/// ```
///
/// ## Length
///
/// Lengths are counted in Unicode scalar values, the same unit the chunkers
/// use for `chunk_size` and `chunk_overlap`. A chunk of "日本" has length 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based position of this chunk in the output sequence.
    pub id: usize,
    /// The chunk text.
    pub content: String,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(id: usize, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Number the given contents sequentially from 0.
    pub(crate) fn sequence<I>(contents: I) -> Vec<Self>
    where
        I: IntoIterator<Item = String>,
    {
        contents
            .into_iter()
            .enumerate()
            .map(|(id, content)| Self { id, content })
            .collect()
    }

    /// The length of this chunk in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chunk {{ id: {}, len: {} }}", self.id, self.len())
    }
}
