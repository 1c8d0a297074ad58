use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::category::Category;
use crate::error::{LexicatError, Result};
use crate::word::Word;

/// Marker prefix for a category line in the bulk import format.
pub const CATEGORY_MARKER: char = '#';

const MIN_CAPACITY: usize = 1;

/// The top-level growable collection of categories.
///
/// Capacity follows an explicit doubling/halving schedule rather than the
/// allocator's default growth: it doubles when an append would overflow and
/// halves after a removal leaves the collection less than half full, with a
/// floor of 1 slot. Category names need not be unique; every name lookup
/// returns the first match.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    capacity: usize,
}

impl Catalog {
    /// Create an empty catalog with one allocated slot.
    pub fn new() -> Self {
        Self {
            categories: Vec::with_capacity(MIN_CAPACITY),
            capacity: MIN_CAPACITY,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Allocated slots under the doubling/halving schedule.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    /// Append a category, doubling capacity when full.
    pub fn add(&mut self, category: Category) {
        if self.categories.len() == self.capacity {
            self.capacity *= 2;
            self.categories
                .reserve_exact(self.capacity - self.categories.len());
        }
        self.categories.push(category);
    }

    /// Remove the first category named `name`, shifting later entries left.
    /// Halves capacity when the removal leaves the collection less than half
    /// full. Returns whether a match was found.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(pos) = self.position(name) else {
            return false;
        };
        self.categories.remove(pos);
        if self.categories.len() < self.capacity / 2 && self.capacity > MIN_CAPACITY {
            self.capacity /= 2;
            self.categories.shrink_to(self.capacity);
        }
        true
    }

    /// Clear the word list of the first category named `name` in place.
    /// Returns whether a match was found.
    pub fn clear_words(&mut self, name: &str) -> bool {
        match self.find_mut(name) {
            Some(category) => {
                category.clear();
                true
            }
            None => false,
        }
    }

    /// First category named `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|cat| cat.name().as_str() == name)
    }

    /// Mutable access to the first category named `name`, for further
    /// operations.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|cat| cat.name().as_str() == name)
    }

    /// Names of every category containing `word`. An empty result means the
    /// word was found nowhere.
    pub fn search(&self, word: &Word) -> Vec<&Word> {
        self.categories
            .iter()
            .filter(|cat| cat.contains(word))
            .map(|cat| cat.name())
            .collect()
    }

    /// Render each category's case-insensitive first-letter matches, one
    /// line per category.
    pub fn write_words_starting_with<W: Write>(&self, sink: &mut W, letter: char) -> io::Result<()> {
        for category in &self.categories {
            for word in category.words_starting_with(letter) {
                write!(sink, "{} ", word)?;
            }
            writeln!(sink)?;
        }
        Ok(())
    }

    /// Render every category's name and words. Reports an empty collection
    /// and, per category, an empty word list.
    pub fn write_catalog<W: Write>(&self, sink: &mut W, words_per_line: usize) -> io::Result<()> {
        if self.categories.is_empty() {
            writeln!(sink, "No categories available.")?;
            return Ok(());
        }
        for category in &self.categories {
            writeln!(sink, "Category: {}", category.name())?;
            writeln!(sink, "Listing all words in that category:")?;
            if category.is_empty() {
                writeln!(sink, " empty.")?;
            }
            category.write_words(sink, words_per_line)?;
            writeln!(sink)?;
        }
        Ok(())
    }

    /// Bulk import from a line-oriented source.
    ///
    /// A line starting with [`CATEGORY_MARKER`] opens a category named by the
    /// rest of the line and finalizes the previous one; any other non-blank
    /// line is split on whitespace into words for the open category. Blank
    /// lines are skipped, as are word lines seen before any marker. Returns
    /// the number of categories added.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: &mut R) -> Result<usize> {
        let mut open: Option<Category> = None;
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(name) = line.strip_prefix(CATEGORY_MARKER) {
                if let Some(category) = open.take() {
                    self.add(category);
                    added += 1;
                }
                open = Some(Category::new(name));
            } else if let Some(category) = open.as_mut() {
                for token in line.split_whitespace() {
                    category.insert(Word::from(token));
                }
            }
        }
        if let Some(category) = open {
            self.add(category);
            added += 1;
        }
        Ok(added)
    }

    /// Bulk import from a text file.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| LexicatError::CatalogOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_reader(&mut BufReader::new(file))
    }

    /// Write the catalog back out in the import format: a marker line per
    /// category followed by one word per line.
    pub fn write_export<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for category in &self.categories {
            writeln!(sink, "{}{}", CATEGORY_MARKER, category.name())?;
            for word in category.words() {
                writeln!(sink, "{}", word)?;
            }
        }
        Ok(())
    }

    /// Persist the catalog to `path` in the import format.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| LexicatError::CatalogOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_export(&mut file)?;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|cat| cat.name().as_str() == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use tempfile::tempdir;

    fn named(name: &str) -> Category {
        Category::new(name)
    }

    #[test]
    fn test_capacity_doubles_on_growth() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.capacity(), 1);

        let mut seen = Vec::new();
        for i in 0..5 {
            catalog.add(named(&format!("cat{i}")));
            seen.push(catalog.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8]);
        assert_eq!(catalog.len(), 5);
        assert!(catalog.capacity() >= 5);
    }

    #[test]
    fn test_capacity_halves_on_shrink() {
        let mut catalog = Catalog::new();
        for i in 0..5 {
            catalog.add(named(&format!("cat{i}")));
        }
        assert_eq!(catalog.capacity(), 8);

        // 4 and 3 of 8 are not below half; 3 of 8 is
        assert!(catalog.remove("cat4"));
        assert_eq!(catalog.capacity(), 8);
        assert!(catalog.remove("cat3"));
        assert_eq!(catalog.capacity(), 4);
        assert!(catalog.remove("cat2"));
        assert_eq!(catalog.capacity(), 4);
        assert!(catalog.remove("cat1"));
        assert_eq!(catalog.capacity(), 2);
        assert!(catalog.remove("cat0"));
        assert_eq!(catalog.capacity(), 1);
    }

    #[test]
    fn test_remove_shifts_left_and_reports_missing() {
        let mut catalog = Catalog::new();
        for name in ["a", "b", "c"] {
            catalog.add(named(name));
        }
        assert!(catalog.remove("b"));
        let names: Vec<_> = catalog.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, ["a", "c"]);
        assert!(!catalog.remove("missing"));
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut catalog = Catalog::new();
        let mut first = named("dup");
        first.insert(Word::from("one"));
        catalog.add(first);
        catalog.add(named("dup"));

        let found = catalog.find("dup").unwrap();
        assert_eq!(found.len(), 1);
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_clear_words() {
        let mut catalog = Catalog::new();
        let mut cat = named("fruits");
        cat.insert(Word::from("apple"));
        catalog.add(cat);

        assert!(catalog.clear_words("fruits"));
        assert!(catalog.find("fruits").unwrap().is_empty());
        assert!(!catalog.clear_words("missing"));
    }

    #[test]
    fn test_search_reports_every_match() {
        let mut catalog = Catalog::new();
        for name in ["fruits", "snacks", "veg"] {
            let mut cat = named(name);
            if name != "veg" {
                cat.insert(Word::from("apple"));
            }
            catalog.add(cat);
        }
        let hits: Vec<_> = catalog
            .search(&Word::from("apple"))
            .into_iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(hits, ["fruits", "snacks"]);
        assert!(catalog.search(&Word::from("durian")).is_empty());
    }

    #[test]
    fn test_import_scenario() {
        let mut catalog = Catalog::new();
        let mut input = Cursor::new("#fruits\napple\nbanana\n#veg\ncarrot\n");
        assert_eq!(catalog.load_from_reader(&mut input).unwrap(), 2);

        let fruits = catalog.find("fruits").unwrap();
        assert_eq!(fruits.words().to_string(), "apple banana");
        let veg = catalog.find("veg").unwrap();
        assert_eq!(veg.words().to_string(), "carrot");
    }

    #[test]
    fn test_import_skips_blanks_and_premature_words() {
        let mut catalog = Catalog::new();
        let mut input = Cursor::new("stray words\n\n#fruits\n\napple pear\n");
        assert_eq!(catalog.load_from_reader(&mut input).unwrap(), 1);

        let fruits = catalog.find("fruits").unwrap();
        assert_eq!(fruits.words().to_string(), "apple pear");
        assert!(catalog.search(&Word::from("stray")).is_empty());
    }

    #[test]
    fn test_import_finalizes_open_category_at_eof() {
        let mut catalog = Catalog::new();
        let mut input = Cursor::new("#lonely");
        assert_eq!(catalog.load_from_reader(&mut input).unwrap(), 1);
        assert!(catalog.find("lonely").unwrap().is_empty());
    }

    #[test]
    fn test_write_catalog_empty_collection() {
        let catalog = Catalog::new();
        let mut out = Vec::new();
        catalog.write_catalog(&mut out, 5).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No categories available.\n");
    }

    #[test]
    fn test_write_catalog_notes_empty_category() {
        let mut catalog = Catalog::new();
        let mut fruits = named("fruits");
        fruits.insert(Word::from("apple"));
        catalog.add(fruits);
        catalog.add(named("bare"));

        let mut out = Vec::new();
        catalog.write_catalog(&mut out, 5).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Category: fruits\nListing all words in that category:\napple \n"));
        assert!(text.contains("Category: bare\nListing all words in that category:\n empty.\n"));
    }

    #[test]
    fn test_words_starting_with_across_categories() {
        let mut catalog = Catalog::new();
        let mut fruits = named("fruits");
        for word in ["apple", "banana", "Blueberry"] {
            fruits.insert(Word::from(word));
        }
        let mut veg = named("veg");
        veg.insert(Word::from("beet"));
        catalog.add(fruits);
        catalog.add(veg);

        let mut out = Vec::new();
        catalog.write_words_starting_with(&mut out, 'B').unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Blueberry banana \nbeet \n");
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.txt");

        let mut catalog = Catalog::new();
        let mut input = Cursor::new("#fruits\nbanana apple\n#veg\ncarrot\n");
        catalog.load_from_reader(&mut input).unwrap();
        catalog.save_to_file(&path).unwrap();

        let mut reloaded = Catalog::new();
        assert_eq!(reloaded.load_from_file(&path).unwrap(), 2);
        assert_eq!(
            reloaded.find("fruits").unwrap().words().to_string(),
            "apple banana"
        );
        assert_eq!(reloaded.find("veg").unwrap().words().to_string(), "carrot");
    }

    #[test]
    fn test_load_missing_file() {
        let mut catalog = Catalog::new();
        let err = catalog
            .load_from_file(Path::new("/nonexistent/catalog.txt"))
            .unwrap_err();
        assert!(matches!(err, LexicatError::CatalogOpen { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
