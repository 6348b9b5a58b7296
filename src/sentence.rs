//! Sentences and their sliding embedding context.
//!
//! ## Finding Sentences
//!
//! Sentence detection here is deliberately simple: a regular expression, not
//! a linguistic model.
//!
//! ```text
//! Punctuation: cut at whitespace that follows '.', '?' or '!'
//! LineBreak:   cut at "\n"
//! Paragraph:   cut at "\n\n"
//! ```
//!
//! "Dr. Smith went home." becomes two sentences under `Punctuation`. For
//! embedding purposes that is usually harmless, because each sentence is
//! embedded together with its neighbours.
//!
//! ## Sliding Context
//!
//! Single sentences embed poorly; "It was late." means little on its own.
//! Each sentence is therefore embedded as a window of `2 * buffer_size + 1`
//! neighbouring sentences, clamped at the ends of the document:
//!
//! ```text
//! buffer_size = 2
//!
//! Sentences: [This] [is] [a] [sentence] [for] [you] [mate]
//!
//! 0: "This is a"                 <- clamped on the left
//! 3: "is a sentence for you"     <- full window
//! 6: "for you mate"              <- clamped on the right
//! ```
//!
//! The window slides one sentence at a time: one piece leaves on the left,
//! one enters on the right. It is never rebuilt from scratch.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]\s+").expect("valid sentence regex (verified by tests)"));

/// A sentence tracked through semantic chunking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentence {
    /// Zero-based position in the document.
    pub index: usize,
    /// The sentence text.
    pub content: String,
    /// The sentence together with its neighbours; what actually gets embedded.
    pub combined_context: String,
    /// Embedding of `combined_context`, empty until embedded.
    pub embedding: Vec<f32>,
}

impl Sentence {
    /// Create a sentence with no context or embedding yet.
    #[must_use]
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
            ..Self::default()
        }
    }
}

/// The rule used to cut a document into sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SentenceSplitting {
    /// Whitespace following `.`, `?` or `!`. The punctuation stays with the
    /// sentence it ends.
    #[default]
    Punctuation,
    /// Every line is a sentence.
    LineBreak,
    /// Every paragraph (`"\n\n"`) is a sentence.
    Paragraph,
}

impl SentenceSplitting {
    /// Cut `content` into sentence strings. Empty pieces are dropped; all
    /// other text, including whitespace inside a sentence, is kept as is.
    pub fn split<'a>(&self, content: &'a str) -> Vec<&'a str> {
        let pieces: Vec<&str> = match self {
            Self::Punctuation => {
                let mut pieces = Vec::new();
                let mut start = 0;
                for m in SENTENCE_END.find_iter(content) {
                    // The punctuation mark is a single ASCII byte.
                    pieces.push(&content[start..=m.start()]);
                    start = m.end();
                }
                pieces.push(&content[start..]);
                pieces
            }
            Self::LineBreak => content.split('\n').collect(),
            Self::Paragraph => content.split("\n\n").collect(),
        };

        pieces.into_iter().filter(|p| !p.is_empty()).collect()
    }
}

/// Split `content` into indexed sentences.
///
/// # Example
///
/// ```rust
/// use chunkwise::sentence::{split_sentences, SentenceSplitting};
///
/// let sentences = split_sentences("Hi there. How are you? Fine!", SentenceSplitting::Punctuation);
/// let contents: Vec<_> = sentences.iter().map(|s| s.content.as_str()).collect();
/// assert_eq!(contents, ["Hi there.", "How are you?", "Fine!"]);
/// assert_eq!(sentences[2].index, 2);
/// ```
pub fn split_sentences(content: &str, rule: SentenceSplitting) -> Vec<Sentence> {
    rule.split(content)
        .into_iter()
        .enumerate()
        .map(|(index, s)| Sentence::new(index, s))
        .collect()
}

/// Populate `combined_context` with a window of neighbouring sentences.
///
/// Sentence `i` gets sentences `i - buffer_size ..= i + buffer_size`, clamped
/// to the document, joined by single spaces.
///
/// # Errors
///
/// Returns an error if `sentences` is empty, if `buffer_size == 0`, or if
/// `buffer_size` is not smaller than the number of sentences.
///
/// # Example
///
/// ```rust
/// use chunkwise::sentence::{combine, Sentence};
///
/// let sentences = ["This", "is", "a", "sentence", "for", "you", "mate"]
///     .iter()
///     .enumerate()
///     .map(|(i, s)| Sentence::new(i, *s))
///     .collect();
///
/// let combined = combine(sentences, 2).unwrap();
/// assert_eq!(combined[0].combined_context, "This is a");
/// assert_eq!(combined[3].combined_context, "is a sentence for you");
/// assert_eq!(combined[6].combined_context, "for you mate");
/// ```
pub fn combine(mut sentences: Vec<Sentence>, buffer_size: usize) -> Result<Vec<Sentence>> {
    if sentences.is_empty() {
        return Err(Error::EmptyInput("sentences"));
    }
    if buffer_size == 0 {
        return Err(Error::InvalidBufferSize(buffer_size));
    }
    let n = sentences.len();
    if buffer_size >= n {
        return Err(Error::BufferExceedsInput {
            buffer_size,
            sentences: n,
        });
    }

    let mut window = Window::with_capacity(2 * buffer_size + 1);
    for sentence in &sentences[..=buffer_size] {
        window.push(&sentence.content);
    }

    for i in 0..n {
        sentences[i].combined_context = window.text.clone();

        if i >= buffer_size {
            window.pop_front();
        }
        if let Some(next) = sentences.get(i + buffer_size + 1) {
            window.push(&next.content);
        }
    }

    Ok(sentences)
}

/// Space-joined text plus the byte width of each piece in it.
struct Window {
    text: String,
    widths: VecDeque<usize>,
}

impl Window {
    fn with_capacity(pieces: usize) -> Self {
        Self {
            text: String::new(),
            widths: VecDeque::with_capacity(pieces),
        }
    }

    fn push(&mut self, piece: &str) {
        if !self.widths.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(piece);
        self.widths.push_back(piece.len());
    }

    fn pop_front(&mut self) {
        let Some(width) = self.widths.pop_front() else {
            return;
        };
        if self.widths.is_empty() {
            self.text.clear();
        } else {
            self.text.drain(..=width);
        }
    }
}
