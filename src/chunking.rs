use std::iter::FusedIterator;

/// Largest slice of document text sent to the model in one prompt
pub const MAX_CONTEXT_CHARS: usize = 120_000;

/// Lazily splits text into contiguous slices of at most `max_chars` characters
///
/// Slices never overlap and never split a code point, so concatenating
/// everything the iterator yields reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    max_chars: usize,
}

/// Split `text` into fixed-size chunks, in order
///
/// # Panics
///
/// Panics if `max_chars` is zero.
pub fn chunk_text(text: &str, max_chars: usize) -> Chunks<'_> {
    assert!(max_chars != 0, "chunk size must be non-zero");
    Chunks {
        rest: text,
        max_chars,
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        // Byte offset of the first character past the limit, if there is one
        let end = self
            .rest
            .char_indices()
            .nth(self.max_chars)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

impl FusedIterator for Chunks<'_> {}
