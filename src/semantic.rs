//! Semantic chunking using embedding similarity.
//!
//! Splits text at the points where adjacent sentences score highest on
//! embedding similarity, relative to the rest of the document.
//!
//! ## The Idea
//!
//! Every sentence is embedded together with its neighbours, and every
//! adjacent pair of windows gets a cosine similarity. The pairs in the top
//! `100 - percentile` percent become chunk boundaries: a chunk ends after the
//! first sentence of each such pair.
//!
//! ```text
//! Sentences:     [S1] [S2] [S3] [S4] [S5] [S6]
//! Similarities:     1.00 0.89 0.80 0.89 1.00
//! percentile 95:    ^^^^                ^^^^   <- threshold 1.00
//!
//! Result: Chunk 0 = [S1], Chunk 1 = [S2, S3, S4, S5], Chunk 2 = [S6]
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! split_sentences -> combine -> Embedder::embed -> similarities -> detect -> assemble
//! ```
//!
//! 1. Cut the document into sentences ([`SentenceSplitting`]).
//! 2. Give each sentence a window of neighbours ([`sentence::combine`]).
//! 3. Embed every window in a single batch call.
//! 4. Score adjacent pairs by cosine similarity, in parallel.
//! 5. Split after every pair at or above the percentile threshold.
//!
//! ## Percentile Selection
//!
//! | Percentile | Effect |
//! |------------|--------|
//! | 50 | Half of all pairs become boundaries, many small chunks |
//! | 90 | Roughly one boundary per ten sentences |
//! | 95 | Few boundaries, large chunks (default) |
//!
//! Ties at the threshold all become boundaries, so near-identical windows
//! can produce more chunks than the percentile suggests.
//!
//! ## Performance
//!
//! Semantic chunking is O(n × d) where:
//! - n = number of sentences
//! - d = embedding dimension
//!
//! The embedding call dominates; everything else is linear.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::sentence::{self, SentenceSplitting};
use crate::{assemble, breakpoint, BoxError, Chunk, Chunker, Error, Result, Sentence};

/// A text embedding backend.
///
/// `embed` returns one vector per input text, in input order. Every vector
/// has `dimension()` components, and the dimension never changes for a given
/// instance.
///
/// ```rust
/// use chunkwise::{BoxError, Embedder};
///
/// /// Embeds text by its length and vowel count.
/// struct Shape;
///
/// impl Embedder for Shape {
///     fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, BoxError> {
///         Ok(texts
///             .iter()
///             .map(|t| {
///                 let vowels = t.chars().filter(|c| "aeiou".contains(*c)).count();
///                 vec![t.len() as f32, vowels as f32]
///             })
///             .collect())
///     }
///
///     fn dimension(&self) -> usize {
///         2
///     }
/// }
/// ```
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts.
    ///
    /// # Errors
    ///
    /// Backend failures. They reach the caller of `split` unmodified, wrapped
    /// in [`Error::Embedding`].
    fn embed(&self, texts: &[&str]) -> std::result::Result<Vec<Vec<f32>>, BoxError>;

    /// Number of components in every embedding.
    fn dimension(&self) -> usize;
}

/// Embed the `combined_context` of every sentence with one batch call.
///
/// # Errors
///
/// Returns [`Error::Embedding`] if the backend fails, and rejects a response
/// with the wrong number of vectors or a vector of the wrong dimension. On
/// error no sentence is modified.
pub fn embed_sentences(embedder: &dyn Embedder, sentences: &mut [Sentence]) -> Result<()> {
    let texts: Vec<&str> = sentences
        .iter()
        .map(|s| s.combined_context.as_str())
        .collect();
    let vectors = embedder.embed(&texts).map_err(Error::Embedding)?;

    if vectors.len() != sentences.len() {
        return Err(Error::EmbeddingCountMismatch {
            expected: sentences.len(),
            actual: vectors.len(),
        });
    }

    let expected = embedder.dimension();
    if let Some((index, vector)) = vectors
        .iter()
        .enumerate()
        .find(|(_, v)| v.len() != expected)
    {
        return Err(Error::DimensionMismatch {
            index,
            expected,
            actual: vector.len(),
        });
    }

    for (sentence, vector) in sentences.iter_mut().zip(vectors) {
        sentence.embedding = vector;
    }
    Ok(())
}

/// Semantic chunker using embedding similarity between adjacent sentences.
///
/// ## Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use chunkwise::{Chunker, FastEmbedder, SemanticChunker};
///
/// // Uses fastembed's default model (BGE-small-en)
/// let embedder = Arc::new(FastEmbedder::new()?);
/// let chunker = SemanticChunker::new(embedder, 90, 1)?;
///
/// let text = "Intro to machine learning. ML is powerful. \
///             The weather today is sunny. It's warm outside.";
/// let chunks = chunker.split(text)?;
///
/// // At least one boundary: the most similar pair always qualifies
/// assert!(chunks.len() >= 2);
/// ```
#[derive(Clone)]
pub struct SemanticChunker {
    embedder: Arc<dyn Embedder>,
    percentile: u8,
    buffer_size: usize,
    splitting: SentenceSplitting,
}

impl SemanticChunker {
    /// Create a new semantic chunker.
    ///
    /// # Arguments
    ///
    /// * `embedder` - Backend that embeds sentence windows
    /// * `percentile` - Similarity percentile at or above which to split (1 to 99)
    /// * `buffer_size` - Neighbours on each side included in a sentence's window
    ///
    /// # Errors
    ///
    /// Returns an error if `percentile` is not strictly between 0 and 100, or
    /// if `buffer_size == 0`.
    pub fn new(embedder: Arc<dyn Embedder>, percentile: u8, buffer_size: usize) -> Result<Self> {
        if percentile == 0 || percentile >= 100 {
            return Err(Error::InvalidPercentile(percentile));
        }
        if buffer_size == 0 {
            return Err(Error::InvalidBufferSize(buffer_size));
        }

        Ok(Self {
            embedder,
            percentile,
            buffer_size,
            splitting: SentenceSplitting::default(),
        })
    }

    /// Percentile 95, buffer size 1, punctuation sentence rule.
    #[must_use]
    pub fn with_defaults(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            percentile: 95,
            buffer_size: 1,
            splitting: SentenceSplitting::default(),
        }
    }

    /// Set the rule used to cut the document into sentences.
    #[must_use]
    pub fn with_sentence_splitting(mut self, splitting: SentenceSplitting) -> Self {
        self.splitting = splitting;
        self
    }

    /// The split percentile.
    #[must_use]
    pub fn percentile(&self) -> u8 {
        self.percentile
    }

    /// Neighbours on each side of a sentence's window.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// The sentence rule.
    #[must_use]
    pub fn sentence_splitting(&self) -> SentenceSplitting {
        self.splitting
    }
}

impl Chunker for SemanticChunker {
    /// An empty or whitespace-only document gives no chunks instead of an
    /// error, matching the fixed and recursive chunkers. This differs from
    /// [`sentence::combine`] and [`assemble::assemble`], which reject an
    /// empty sentence list. A document with no more sentences than
    /// `buffer_size` is rejected.
    fn split(&self, content: &str) -> Result<Vec<Chunk>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let sentences = sentence::split_sentences(content, self.splitting);

        let mut sentences = sentence::combine(sentences, self.buffer_size)?;
        embed_sentences(self.embedder.as_ref(), &mut sentences)?;

        let similarities = breakpoint::similarities(&sentences);
        let boundaries = breakpoint::detect(&similarities, self.percentile)?;
        trace!(?boundaries, "semantic breakpoints");

        let chunks = assemble::assemble(&sentences, &boundaries)?;
        debug!(
            sentences = sentences.len(),
            chunks = chunks.len(),
            "semantic split complete"
        );

        Ok(chunks)
    }
}

impl std::fmt::Debug for SemanticChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticChunker")
            .field("dimension", &self.embedder.dimension())
            .field("percentile", &self.percentile)
            .field("buffer_size", &self.buffer_size)
            .field("splitting", &self.splitting)
            .finish()
    }
}

/// [`Embedder`] backed by a local fastembed model.
#[cfg(feature = "fastembed")]
pub struct FastEmbedder {
    model: fastembed::TextEmbedding,
    dimension: usize,
}

#[cfg(feature = "fastembed")]
impl FastEmbedder {
    /// Load fastembed's default model (BGE-small-en, 384 dimensions).
    ///
    /// # Errors
    ///
    /// Returns an error if the embedding model fails to load.
    pub fn new() -> Result<Self> {
        let model = fastembed::TextEmbedding::try_new(Default::default())
            .map_err(|e| Error::Embedding(e.into()))?;
        Self::from_model(model)
    }

    /// Wrap an already loaded model. The dimension is measured once here.
    ///
    /// # Errors
    ///
    /// Returns an error if embedding a sample text fails.
    pub fn from_model(model: fastembed::TextEmbedding) -> Result<Self> {
        let sample = model
            .embed(vec!["dimension check"], None)
            .map_err(|e| Error::Embedding(e.into()))?;
        let dimension = sample.first().map_or(0, Vec::len);
        Ok(Self { model, dimension })
    }
}

#[cfg(feature = "fastembed")]
impl Embedder for FastEmbedder {
    fn embed(&self, texts: &[&str]) -> std::result::Result<Vec<Vec<f32>>, BoxError> {
        Ok(self.model.embed(texts.to_vec(), None)?)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(feature = "fastembed")]
impl std::fmt::Debug for FastEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedder")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}
