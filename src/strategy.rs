//! The closed set of chunking strategies.

use crate::{Chunk, Chunker, FixedChunker, RecursiveChunker, Result, SemanticChunker};

/// One of the three chunking strategies, chosen at runtime.
///
/// Each variant carries its own validated configuration; `split` dispatches to
/// it.
///
/// ```rust
/// use chunkwise::{ChunkBounds, Chunker, FixedChunker, RecursiveChunker, Strategy};
///
/// let bounds = ChunkBounds::new(20, 0).unwrap();
/// let strategies = [
///     Strategy::from(FixedChunker::new(bounds, ".")),
///     Strategy::from(RecursiveChunker::prose(bounds)),
/// ];
///
/// for strategy in &strategies {
///     let chunks = strategy.split("Short text.").unwrap();
///     assert_eq!(chunks.len(), 1, "{}", strategy.name());
/// }
/// ```
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Split on one delimiter and merge.
    Fixed(FixedChunker),
    /// Split on a priority list of delimiters.
    Recursive(RecursiveChunker),
    /// Split at embedding-similarity breakpoints.
    Semantic(SemanticChunker),
}

impl Strategy {
    /// Short lowercase name of the strategy.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::Recursive(_) => "recursive",
            Self::Semantic(_) => "semantic",
        }
    }
}

impl Chunker for Strategy {
    fn split(&self, content: &str) -> Result<Vec<Chunk>> {
        match self {
            Self::Fixed(chunker) => chunker.split(content),
            Self::Recursive(chunker) => chunker.split(content),
            Self::Semantic(chunker) => chunker.split(content),
        }
    }
}

impl From<FixedChunker> for Strategy {
    fn from(chunker: FixedChunker) -> Self {
        Self::Fixed(chunker)
    }
}

impl From<RecursiveChunker> for Strategy {
    fn from(chunker: RecursiveChunker) -> Self {
        Self::Recursive(chunker)
    }
}

impl From<SemanticChunker> for Strategy {
    fn from(chunker: SemanticChunker) -> Self {
        Self::Semantic(chunker)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{BoxError, ChunkBounds, Embedder};

    struct Constant;

    impl Embedder for Constant {
        fn embed(&self, texts: &[&str]) -> std::result::Result<Vec<Vec<f32>>, BoxError> {
            Ok(vec![vec![1.0, 0.0]; texts.len()])
        }

        fn dimension(&self) -> usize {
            2
        }
    }

    const CONTENT: &str = "This is an example. Let's split on periods. Okay?";

    #[test]
    fn test_dispatch_matches_wrapped_chunker() {
        let fixed = FixedChunker::new(ChunkBounds::new(20, 0).unwrap(), ".");
        let expected = fixed.split(CONTENT).unwrap();

        let strategy = Strategy::from(fixed);
        assert_eq!(strategy.name(), "fixed");
        assert_eq!(strategy.split(CONTENT).unwrap(), expected);
    }

    #[test]
    fn test_recursive_variant() {
        let strategy = Strategy::Recursive(RecursiveChunker::default());
        assert_eq!(strategy.name(), "recursive");
        let chunks = strategy.split(CONTENT).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, CONTENT);
    }

    #[test]
    fn test_semantic_variant() {
        let strategy = Strategy::from(SemanticChunker::with_defaults(Arc::new(Constant)));
        assert_eq!(strategy.name(), "semantic");

        // Identical embeddings: every similarity ties, so every pair is a boundary
        let chunks = strategy.split(CONTENT).unwrap();
        let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(
            contents,
            ["This is an example.", "Let's split on periods.", "Okay?"]
        );
    }

    #[test]
    fn test_usable_as_trait_object() {
        let strategy: Box<dyn Chunker> = Box::new(Strategy::from(FixedChunker::default()));
        assert_eq!(strategy.split("a b c").unwrap().len(), 1);
    }
}
