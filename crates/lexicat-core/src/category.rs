use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{LexicatError, Result};
use crate::list::WordList;
use crate::word::Word;

/// A named grouping of words kept in sorted order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Category {
    name: Word,
    words: WordList,
}

impl Category {
    /// Create an empty category with the given name.
    pub fn new(name: impl Into<Word>) -> Self {
        Self {
            name: name.into(),
            words: WordList::new(),
        }
    }

    pub fn name(&self) -> &Word {
        &self.name
    }

    /// Rename the category. Contents are unaffected.
    pub fn set_name(&mut self, name: impl Into<Word>) {
        self.name = name.into();
    }

    /// Number of words in the category.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Insert a word in sorted position.
    pub fn insert(&mut self, word: Word) {
        self.words.insert_sorted(word);
    }

    /// Remove the first occurrence of `word`. Returns whether it was present.
    pub fn remove(&mut self, word: &Word) -> bool {
        self.words.remove(word)
    }

    /// Whether the category contains `word`.
    pub fn contains(&self, word: &Word) -> bool {
        self.words.lookup(word)
    }

    /// Drop every word, front first.
    pub fn clear(&mut self) {
        while self.words.pop_front().is_ok() {}
    }

    /// Words whose first character matches `letter`, case-insensitively, in
    /// traversal order.
    pub fn words_starting_with(&self, letter: char) -> Vec<&Word> {
        let target = letter.to_ascii_lowercase();
        self.words
            .iter()
            .filter(|word| {
                word.first_char()
                    .map(|c| c.to_ascii_lowercase() == target)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Render the word list wrapped at `words_per_line`.
    pub fn write_words<W: Write>(&self, sink: &mut W, words_per_line: usize) -> io::Result<()> {
        self.words.write_wrapped(sink, words_per_line)
    }

    /// Insert every whitespace-delimited token from `reader`, sorted.
    /// Returns the number of words inserted.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: &mut R) -> Result<usize> {
        let mut count = 0;
        let mut word = Word::new();
        while word.read_token(reader)? {
            self.insert(std::mem::take(&mut word));
            count += 1;
        }
        Ok(count)
    }

    /// Load whitespace-delimited words from a text file.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| LexicatError::CatalogOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_reader(&mut BufReader::new(file))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Category: {}", self.name)?;
        writeln!(f, "Words: {}", self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fruits() -> Category {
        let mut cat = Category::new("fruits");
        for word in ["banana", "apple", "cherry"] {
            cat.insert(Word::from(word));
        }
        cat
    }

    #[test]
    fn test_insert_keeps_order() {
        let cat = fruits();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.words().to_string(), "apple banana cherry");
    }

    #[test]
    fn test_rename_keeps_contents() {
        let mut cat = fruits();
        cat.set_name("snacks");
        assert_eq!(cat.name(), &Word::from("snacks"));
        assert_eq!(cat.len(), 3);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut cat = fruits();
        let apple = Word::from("apple");
        assert!(cat.contains(&apple));
        assert!(cat.remove(&apple));
        assert!(!cat.contains(&apple));
        assert!(!cat.remove(&apple));
    }

    #[test]
    fn test_clear() {
        let mut cat = fruits();
        cat.clear();
        assert!(cat.is_empty());
        assert_eq!(cat.len(), 0);
    }

    #[test]
    fn test_words_starting_with_is_case_insensitive() {
        let mut cat = Category::new("mixed");
        for word in ["apple", "banana", "Blueberry"] {
            cat.insert(Word::from(word));
        }
        let matched: Vec<_> = cat
            .words_starting_with('b')
            .into_iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(matched, ["Blueberry", "banana"]);
        assert!(cat.words_starting_with('z').is_empty());
    }

    #[test]
    fn test_load_from_reader_inserts_sorted() {
        let mut cat = Category::new("fruits");
        let mut input = Cursor::new("pear apple\nmango  apple");
        assert_eq!(cat.load_from_reader(&mut input).unwrap(), 4);
        assert_eq!(cat.words().to_string(), "apple apple mango pear");
    }

    #[test]
    fn test_load_from_missing_file() {
        let mut cat = Category::new("fruits");
        let err = cat
            .load_from_file(Path::new("/nonexistent/words.txt"))
            .unwrap_err();
        assert!(matches!(err, LexicatError::CatalogOpen { .. }));
    }

    #[test]
    fn test_display() {
        let cat = fruits();
        assert_eq!(
            cat.to_string(),
            "Category: fruits\nWords: apple banana cherry\n"
        );
    }
}
