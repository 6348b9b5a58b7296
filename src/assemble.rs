//! Turning sentence boundaries into chunks.
//!
//! A boundary `b` ends a chunk after sentence `b`:
//!
//! ```text
//! Sentences:  [This] [is] [a] [test.] [We] [are] [writing] [unit] [tests.]
//! Boundaries: [2, 4, 6]
//!
//! Chunk 0: "This is a"        sentences 0..=2
//! Chunk 1: "test. We"         sentences 3..=4
//! Chunk 2: "are writing"      sentences 5..=6
//! Chunk 3: "unit tests."      sentences 7..=8
//! ```

use crate::{Chunk, Error, Result, Sentence};

/// Group sentences into chunks, closing a chunk after each boundary index.
///
/// `k` boundaries give `k + 1` chunks with ids `0..=k`. Sentence contents are
/// joined by a single space.
///
/// # Errors
///
/// Returns an error if `sentences` is empty, or if the boundaries are not
/// strictly increasing or would leave an empty final chunk
/// (`boundary >= sentences.len() - 1`).
///
/// # Example
///
/// ```rust
/// use chunkwise::{assemble, Sentence};
///
/// let sentences: Vec<_> = ["One.", "Two.", "Three."]
///     .iter()
///     .enumerate()
///     .map(|(i, s)| Sentence::new(i, *s))
///     .collect();
///
/// let chunks = assemble::assemble(&sentences, &[0]).unwrap();
/// assert_eq!(chunks[0].content, "One.");
/// assert_eq!(chunks[1].content, "Two. Three.");
///
/// let whole = assemble::assemble(&sentences, &[]).unwrap();
/// assert_eq!(whole.len(), 1);
/// ```
pub fn assemble(sentences: &[Sentence], boundaries: &[usize]) -> Result<Vec<Chunk>> {
    if sentences.is_empty() {
        return Err(Error::EmptyInput("sentences"));
    }
    validate(boundaries, sentences.len())?;

    let ends = boundaries
        .iter()
        .map(|&b| b + 1)
        .chain(std::iter::once(sentences.len()));

    let mut start = 0;
    let contents = ends.map(|end| {
        let content = join(&sentences[start..end]);
        start = end;
        content
    });

    Ok(Chunk::sequence(contents))
}

fn validate(boundaries: &[usize], sentences: usize) -> Result<()> {
    let mut previous: Option<usize> = None;
    for &boundary in boundaries {
        let ordered = previous.map_or(true, |p| boundary > p);
        if !ordered || boundary + 1 >= sentences {
            return Err(Error::InvalidBoundary {
                boundary,
                sentences,
            });
        }
        previous = Some(boundary);
    }
    Ok(())
}

fn join(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
