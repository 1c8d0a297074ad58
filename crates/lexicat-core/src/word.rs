use std::fmt;
use std::io::BufRead;

use crate::error::{LexicatError, Result};

/// Upper bound, in bytes, for a single `read_token` call. Input past the
/// bound is consumed but dropped silently.
pub const MAX_TOKEN_LEN: usize = 256;

/// An owned word: the atomic text value used throughout the crate.
///
/// A `Word` exclusively owns its buffer. Cloning deep-copies it, and moving
/// one out of a structure with [`std::mem::take`] leaves a valid empty word
/// behind. Ordering is byte-wise lexicographic, the same ordering
/// [`WordList::insert_sorted`](crate::WordList::insert_sorted) maintains.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create the empty word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the contents from another word or raw text, releasing the
    /// current buffer.
    pub fn replace(&mut self, source: impl Into<Word>) {
        self.text = source.into().text;
    }

    /// Concatenate with a single space between the operands.
    pub fn concat(&self, other: &Word) -> Word {
        self.concat_with(other, " ")
    }

    /// Return `self + delimiter + other` as a new word. Neither operand is
    /// mutated.
    pub fn concat_with(&self, other: &Word, delimiter: &str) -> Word {
        let mut text = String::with_capacity(self.text.len() + delimiter.len() + other.text.len());
        text.push_str(&self.text);
        text.push_str(delimiter);
        text.push_str(&other.text);
        Word { text }
    }

    /// Explicit "is lexicographically less" query.
    pub fn is_less(&self, other: &Word) -> bool {
        self < other
    }

    /// Character at the zero-based position `index`.
    pub fn at(&self, index: usize) -> Result<char> {
        self.text
            .chars()
            .nth(index)
            .ok_or(LexicatError::OutOfRange {
                index,
                len: self.text.chars().count(),
            })
    }

    /// First character, if any. Used by the starts-with queries.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Replace the contents with the next whitespace-delimited token from
    /// `reader`, bounded to [`MAX_TOKEN_LEN`] bytes. Returns `Ok(false)` when
    /// the input is exhausted before any token starts; the word is left
    /// unchanged in that case.
    pub fn read_token<R: BufRead>(&mut self, reader: &mut R) -> Result<bool> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            let (done, consumed) = {
                let buf = reader.fill_buf()?;
                if buf.is_empty() {
                    (true, 0)
                } else {
                    let mut consumed = 0;
                    let mut done = false;
                    for &byte in buf {
                        consumed += 1;
                        if byte.is_ascii_whitespace() {
                            if !token.is_empty() {
                                done = true;
                                break;
                            }
                        } else if token.len() < MAX_TOKEN_LEN {
                            token.push(byte);
                        }
                    }
                    (done, consumed)
                }
            };
            reader.consume(consumed);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(false);
        }
        self.text = String::from_utf8_lossy(&token).into_owned();
        Ok(true)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Word { text: text.to_string() }
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Word { text }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
