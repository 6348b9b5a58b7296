//! # chunkwise
//!
//! Text chunking for retrieval-augmented generation (RAG) pipelines.
//!
//! ## The Problem
//!
//! Language models have context windows. Documents don't fit. You need to split
//! them into pieces ("chunks") small enough to embed and retrieve, but large
//! enough to preserve meaning.
//!
//! Splitting every N characters cuts words and sentences in half. Splitting on
//! structure (paragraphs, lines, sentences) respects meaning but gives pieces
//! of wildly different size. Every strategy here splits on structure first and
//! then merges pieces back up to a size limit, carrying some overlap between
//! neighbouring chunks for context continuity.
//!
//! ## Chunking Strategies
//!
//! ### Fixed Delimiter
//!
//! Split on one delimiter, then greedily merge the pieces up to the size limit.
//!
//! ```text
//! Document: "This is an example. Let's split on periods. Okay?"
//! Delimiter: ".", Size: 20, Overlap: 0
//!
//! Chunk 0: "This is an example"
//! Chunk 1: "Let's split on periods"
//! Chunk 2: "Okay?"
//! ```
//!
//! The empty delimiter splits into single chars, which gives plain
//! character-window chunking.
//!
//! **When to use**: Homogeneous content, baseline comparisons.
//! **Weakness**: One delimiter rarely fits a whole document.
//!
//! ### Recursive (LangChain-style)
//!
//! Try splitting on paragraph breaks first. If pieces are still too large,
//! split those on line breaks, then words, then characters.
//!
//! ```text
//! Delimiters: ["\n\n", "\n", " ", ""]
//!
//! 1. Split on "\n\n" (paragraphs)
//! 2. Any piece >= size? Resolve that piece with ["\n", " ", ""]
//! 3. Still too large? Resolve with [" ", ""]
//! 4. Still too large? Split on "" (characters)
//! ```
//!
//! **When to use**: General-purpose, mixed content.
//! **Weakness**: Delimiter hierarchy is heuristic, not semantic.
//!
//! ### Semantic (Embedding-Based)
//!
//! Embed each sentence together with its neighbours, compute the cosine
//! similarity between adjacent sentences, and split after every pair whose
//! similarity is in the top percentile for the document.
//!
//! ```text
//! Sentences:     [S1, S2, S3, S4, S5, S6]
//! Similarities:  [0.41, 0.97, 0.38, 0.44, 0.52]
//!                       ↑
//!              Above the 95th percentile
//!
//! Chunks: [S1, S2] | [S3, S4, S5, S6]
//! ```
//!
//! **When to use**: When topic coherence matters more than size uniformity.
//! **Weakness**: Requires an embedding model, slower, percentile is a
//! hyperparameter.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkwise::{ChunkBounds, Chunker, FixedChunker, RecursiveChunker};
//!
//! let text = "The quick brown fox jumps over the lazy dog. \
//!             Pack my box with five dozen liquor jugs.";
//!
//! // Split on spaces, 50 chars per chunk, 10 chars of overlap
//! let chunker = FixedChunker::new(ChunkBounds::new(50, 10)?, " ");
//! let chunks = chunker.split(text)?;
//! assert!(chunks.iter().all(|c| c.len() <= 50));
//!
//! // Recursive with custom delimiters
//! let chunker = RecursiveChunker::new(ChunkBounds::new(30, 0)?, &["\n\n", ". ", " ", ""])?;
//! let chunks = chunker.split(text)?;
//! assert_eq!(chunks[0].id, 0);
//! # Ok::<(), chunkwise::Error>(())
//! ```
//!
//! ## Semantic Chunking
//!
//! Bring any [`Embedder`], or enable the `fastembed` feature for a local model:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chunkwise::{Chunker, FastEmbedder, SemanticChunker};
//!
//! let chunker = SemanticChunker::with_defaults(Arc::new(FastEmbedder::new()?));
//! let chunks = chunker.split(long_document)?;
//! ```
//!
//! ## Building Blocks
//!
//! Each step of the pipelines is a public function, usable on its own:
//!
//! | Step | Function |
//! |------|----------|
//! | Delimiter splitting | [`delimiter::split`] |
//! | Greedy overlap merging | [`merge::merge`] |
//! | Recursive resolution | [`recursive::resolve`] |
//! | Sliding sentence context | [`sentence::combine`] |
//! | Percentile breakpoints | [`breakpoint::detect`] |
//! | Chunk assembly | [`assemble::assemble`] |
//!
//! ## Performance Considerations
//!
//! | Strategy | Speed | Quality | Memory |
//! |----------|-------|---------|--------|
//! | Fixed | O(n) | Low | O(n) |
//! | Recursive | O(n × k) | Medium | O(n) |
//! | Semantic | O(n × d) | High | O(n × d) |
//!
//! Where n = document length, k = number of delimiters, d = embedding
//! dimension.
//!
//! For most RAG applications, **Recursive** is the sweet spot.
//! Use **Semantic** when retrieval quality justifies the cost.
//!
//! ## Logging
//!
//! Chunkers report through [`tracing`]. A chunk that exceeds the size limit
//! because a single piece could not be split further is emitted anyway and
//! logged at `warn` level. Install a subscriber to see it.

pub mod assemble;
pub mod breakpoint;
pub mod delimiter;
pub mod merge;
pub mod recursive;
pub mod semantic;
pub mod sentence;

mod bounds;
mod chunk;
mod error;
mod fixed;
mod strategy;

pub use bounds::ChunkBounds;
pub use chunk::Chunk;
pub use delimiter::KeepDelimiter;
pub use error::{BoxError, Error, Result};
pub use fixed::FixedChunker;
pub use recursive::RecursiveChunker;
pub use semantic::{Embedder, SemanticChunker};
pub use sentence::{Sentence, SentenceSplitting};
pub use strategy::Strategy;

#[cfg(feature = "fastembed")]
pub use semantic::FastEmbedder;

/// A text chunking strategy.
///
/// All chunkers implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use chunkwise::{Chunk, ChunkBounds, Chunker, FixedChunker, RecursiveChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<Chunk> {
///     chunker.split(text).unwrap()
/// }
///
/// let fixed = FixedChunker::new(ChunkBounds::new(100, 20).unwrap(), " ");
/// let recursive = RecursiveChunker::default();
///
/// let text = "Hello world. This is a test.";
/// let chunks1 = chunk_document(&fixed, text);
/// let chunks2 = chunk_document(&recursive, text);
/// assert_eq!(chunks1, chunks2);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Chunk ids start at 0 and increase by one. Content that produces no
    /// non-blank pieces gives an empty list.
    ///
    /// # Errors
    ///
    /// Fixed and recursive splitting never fail. Semantic splitting fails on
    /// embedding errors and on documents with too few sentences.
    fn split(&self, content: &str) -> Result<Vec<Chunk>>;
}
