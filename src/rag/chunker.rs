//! Word-boundary Chunker
//!
//! Greedy packing of whitespace-separated words into fragments of at most
//! `max_len` characters. Words are never split: a single word longer than
//! `max_len` becomes its own oversized fragment.
//!
//! Lengths are counted in extended grapheme clusters of the joined fragment,
//! not in bytes. ASCII text chunks exactly as a byte budget would; non-ASCII
//! text packs more words per fragment than a byte-length budget allows.

use unicode_segmentation::UnicodeSegmentation;

/// Default fragment length, in characters
pub const DEFAULT_MAX_LEN: usize = 300;

/// Chunker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    /// Maximum fragment length. `0` puts every word in its own fragment.
    max_len: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Chunker {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Split `text` into fragments, preserving word order.
    ///
    /// Whitespace runs (spaces, tabs, newlines) collapse to single spaces and
    /// leading/trailing whitespace is dropped, so joining the result with
    /// `" "` gives back the whitespace-normalized input.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words = text.split_whitespace();

        if self.max_len == 0 {
            return words.map(str::to_string).collect();
        }

        let mut chunks = Vec::new();
        let mut buf = String::new();

        for word in words {
            if buf.is_empty() {
                buf.push_str(word);
                continue;
            }

            // Budget on the joined text; grapheme counts of the parts need not add up
            let kept = buf.len();
            buf.push(' ');
            buf.push_str(word);

            if text_len(&buf) > self.max_len {
                buf.truncate(kept);
                chunks.push(std::mem::take(&mut buf));
                buf.push_str(word);
            }
        }

        if !buf.is_empty() {
            chunks.push(buf);
        }

        chunks
    }
}

/// Split `text` into fragments of at most `max_len` characters.
///
/// Shorthand for `Chunker::new(max_len).chunk(text)`.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<String> {
    Chunker::new(max_len).chunk(text)
}

/// Length of a fragment in the unit the chunker budgets with
pub fn text_len(text: &str) -> usize {
    text.graphemes(true).count()
}
