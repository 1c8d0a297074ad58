use std::fmt;
use std::io::{self, Write};

use crate::error::{LexicatError, Result};
use crate::word::Word;

/// Default wrap count for [`WordList::write_wrapped`].
pub const DEFAULT_WORDS_PER_LINE: usize = 5;

#[derive(Debug, Clone)]
struct Node {
    word: Word,
    next: Option<usize>,
    prev: Option<usize>,
}

/// A doubly-linked list of [`Word`]s kept in ascending lexicographic order
/// when populated through [`insert_sorted`](WordList::insert_sorted).
///
/// Nodes live in a slot arena and link to each other by index, so removal
/// splices in O(1) once a node is located and freed slots are recycled
/// through a free list. `push_front`/`push_back` insert without regard to
/// order; callers mixing them with sorted lookups do so knowingly.
///
/// Moving a list out of a structure is `std::mem::take`, which leaves a
/// valid empty list behind.
#[derive(Debug, Default)]
pub struct WordList {
    slots: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl WordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First word, or `Err(EmptyList)`.
    pub fn front(&self) -> Result<&Word> {
        match self.head {
            Some(idx) => Ok(&self.slots[idx].word),
            None => Err(LexicatError::EmptyList),
        }
    }

    /// Last word, or `Err(EmptyList)`.
    pub fn back(&self) -> Result<&Word> {
        match self.tail {
            Some(idx) => Ok(&self.slots[idx].word),
            None => Err(LexicatError::EmptyList),
        }
    }

    /// Prepend without regard to order. O(1).
    pub fn push_front(&mut self, word: Word) {
        let idx = self.alloc(Node {
            word,
            next: self.head,
            prev: None,
        });
        match self.head {
            Some(old) => self.slots[old].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Append without regard to order. O(1).
    pub fn push_back(&mut self, word: Word) {
        let idx = self.alloc(Node {
            word,
            next: None,
            prev: self.tail,
        });
        match self.tail {
            Some(old) => self.slots[old].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Remove and return the first word, or `Err(EmptyList)`.
    pub fn pop_front(&mut self) -> Result<Word> {
        match self.head {
            Some(idx) => Ok(self.unlink(idx)),
            None => Err(LexicatError::EmptyList),
        }
    }

    /// Remove and return the last word, or `Err(EmptyList)`.
    pub fn pop_back(&mut self) -> Result<Word> {
        match self.tail {
            Some(idx) => Ok(self.unlink(idx)),
            None => Err(LexicatError::EmptyList),
        }
    }

    /// Insert `word` keeping the list in non-decreasing order.
    ///
    /// Front and back ties take the O(1) push paths; interior inserts scan
    /// forward for the first node not less than `word` and splice before it,
    /// so interior ties land after existing equal words.
    pub fn insert_sorted(&mut self, word: Word) {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => {
                self.push_front(word);
                return;
            }
        };
        if word <= self.slots[head].word {
            self.push_front(word);
            return;
        }
        if word >= self.slots[tail].word {
            self.push_back(word);
            return;
        }

        // Interior: stop at the last node strictly less than `word`.
        let mut cur = head;
        while let Some(next) = self.slots[cur].next {
            if self.slots[next].word < word {
                cur = next;
            } else {
                break;
            }
        }
        let next = self.slots[cur].next;
        let idx = self.alloc(Node {
            word,
            next,
            prev: Some(cur),
        });
        if let Some(next) = next {
            self.slots[next].prev = Some(idx);
        }
        self.slots[cur].next = Some(idx);
        self.len += 1;
    }

    /// Unlink the first node equal to `word`. Returns whether a match was
    /// found; absence is not an error.
    pub fn remove(&mut self, word: &Word) -> bool {
        match self.find(word) {
            Some(idx) => {
                self.unlink(idx);
                true
            }
            None => false,
        }
    }

    /// Whether any node equals `word`.
    pub fn lookup(&self, word: &Word) -> bool {
        self.find(word).is_some()
    }

    /// Word at the zero-based `index`, by linear traversal.
    pub fn fetch(&self, index: usize) -> Result<&Word> {
        if index >= self.len {
            return Err(LexicatError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let mut cur = self.head;
        for _ in 0..index {
            cur = cur.and_then(|idx| self.slots[idx].next);
        }
        match cur {
            Some(idx) => Ok(&self.slots[idx].word),
            None => Err(LexicatError::OutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Iterate the words in traversal order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.head,
        }
    }

    /// Render every word followed by a single space, breaking the line after
    /// each full group of `words_per_line` words and after a trailing partial
    /// group.
    pub fn write_wrapped<W: Write>(&self, sink: &mut W, words_per_line: usize) -> io::Result<()> {
        let per_line = words_per_line.max(1);
        let mut count = 0;
        for word in self.iter() {
            write!(sink, "{} ", word)?;
            count += 1;
            if count % per_line == 0 {
                writeln!(sink)?;
            }
        }
        if count % per_line != 0 {
            writeln!(sink)?;
        }
        Ok(())
    }

    fn find(&self, word: &Word) -> Option<usize> {
        let mut cur = self.head;
        while let Some(idx) = cur {
            if self.slots[idx].word == *word {
                return Some(idx);
            }
            cur = self.slots[idx].next;
        }
        None
    }

    /// Splice the node out, recycle its slot, and return its word.
    fn unlink(&mut self, idx: usize) -> Word {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        match prev {
            Some(prev) => self.slots[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.free.push(idx);
        let node = &mut self.slots[idx];
        node.next = None;
        node.prev = None;
        std::mem::take(&mut node.word)
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = node;
                idx
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }
}

impl Clone for WordList {
    /// Deep copy, node by node in traversal order. The copy shares nothing
    /// with the original and its arena is compact.
    fn clone(&self) -> Self {
        let mut list = WordList::new();
        for word in self.iter() {
            list.push_back(word.clone());
        }
        list
    }
}

impl PartialEq for WordList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for WordList {}

impl fmt::Display for WordList {
    /// Words joined by single spaces, no line breaks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut list = WordList::new();
        for word in iter {
            list.insert_sorted(word);
        }
        list
    }
}

pub struct Iter<'a> {
    list: &'a WordList,
    cur: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Word;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cur?;
        self.cur = self.list.slots[idx].next;
        Some(&self.list.slots[idx].word)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
