//! Boundary-preserving delimiter splitting.
//!
//! The first step of both the fixed and the recursive strategy: cut a string
//! into pieces on a literal delimiter, deciding where the delimiter goes.
//!
//! ```text
//! content   = "one. two. three"
//! delimiter = "."
//!
//! None  -> ["one", " two", " three"]
//! Start -> ["one", ". two", ". three"]
//! End   -> ["one.", " two.", " three"]
//! ```
//!
//! With `Start` and `End` nothing is lost or duplicated: concatenating the
//! pieces gives back the input, minus any blank pieces that were dropped.
//!
//! The empty delimiter is special: it yields one piece per char, blanks
//! included, and is the terminal fallback of recursive splitting.

/// Where a delimiter ends up after splitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeepDelimiter {
    /// Drop the delimiter.
    #[default]
    None,
    /// Attach the delimiter to the start of the following piece.
    Start,
    /// Attach the delimiter to the end of the preceding piece.
    End,
}

/// Split `content` on a literal `delimiter`.
///
/// Pieces borrow from `content`. Blank pieces (empty or whitespace-only) are
/// dropped, so a leading or trailing delimiter never produces an empty piece.
///
/// # Example
///
/// ```rust
/// use chunkwise::{delimiter, KeepDelimiter};
///
/// let text = "This is the text I would like to chunk up";
/// let pieces = delimiter::split(text, "ch", KeepDelimiter::Start);
/// assert_eq!(pieces, ["This is the text I would like to ", "chunk up"]);
///
/// let pieces = delimiter::split("abc", "", KeepDelimiter::None);
/// assert_eq!(pieces, ["a", "b", "c"]);
/// ```
pub fn split<'a>(content: &'a str, delimiter: &str, keep: KeepDelimiter) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return chars(content);
    }

    let pieces = match keep {
        KeepDelimiter::None => content.split(delimiter).collect(),
        KeepDelimiter::Start => cut_at(content, content.match_indices(delimiter).map(|(i, _)| i)),
        KeepDelimiter::End => cut_at(
            content,
            content.match_indices(delimiter).map(|(i, m)| i + m.len()),
        ),
    };

    pieces.into_iter().filter(|p| !is_blank(p)).collect()
}

/// One piece per char.
fn chars(content: &str) -> Vec<&str> {
    content
        .char_indices()
        .map(|(i, c)| &content[i..i + c.len_utf8()])
        .collect()
}

/// Cut `content` at the given ascending byte offsets.
fn cut_at<'a>(content: &'a str, cuts: impl Iterator<Item = usize>) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for cut in cuts {
        pieces.push(&content[start..cut]);
        start = cut;
    }
    pieces.push(&content[start..]);

    pieces
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
