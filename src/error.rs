//! Error types for chunkwise.

/// Boxed error returned by an [`Embedder`](crate::Embedder) backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during chunking.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap is not strictly smaller than the chunk size.
    #[error("chunk overlap {overlap} must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that exceeded the size.
        overlap: usize,
    },

    /// Recursive splitting was configured without any delimiter.
    #[error("delimiter list must not be empty")]
    NoDelimiters,

    /// The empty delimiter is terminal and must come last.
    #[error("empty delimiter at position {position} must be the last of {count} delimiters")]
    MisplacedEmptyDelimiter {
        /// Position of the empty delimiter in the list.
        position: usize,
        /// Number of delimiters in the list.
        count: usize,
    },

    /// Percentile outside the open interval (0, 100).
    #[error("percentile must be between 0 and 100 (exclusive), got {0}")]
    InvalidPercentile(u8),

    /// Buffer size must be > 0.
    #[error("buffer size must be > 0, got {0}")]
    InvalidBufferSize(usize),

    /// Buffer size must be smaller than the number of sentences.
    #[error("buffer size {buffer_size} must be smaller than the number of sentences ({sentences})")]
    BufferExceedsInput {
        /// The configured buffer size.
        buffer_size: usize,
        /// Number of sentences available.
        sentences: usize,
    },

    /// A required input sequence was empty.
    #[error("the list of {0} cannot be empty")]
    EmptyInput(&'static str),

    /// A boundary index is out of order or out of range.
    #[error("boundary {boundary} is out of order or out of range for {sentences} sentences")]
    InvalidBoundary {
        /// The offending boundary index.
        boundary: usize,
        /// Number of sentences being assembled.
        sentences: usize,
    },

    /// The embedder returned a different number of vectors than texts.
    #[error("embedder returned {actual} vectors for {expected} texts")]
    EmbeddingCountMismatch {
        /// Number of texts sent.
        expected: usize,
        /// Number of vectors received.
        actual: usize,
    },

    /// An embedding does not match the embedder's declared dimension.
    #[error("embedding {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        /// Index of the offending embedding.
        index: usize,
        /// Declared dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Embedding backend error, passed through unmodified.
    #[error("embedding error: {0}")]
    Embedding(#[source] BoxError),
}

/// Result type for chunkwise operations.
pub type Result<T> = std::result::Result<T, Error>;
