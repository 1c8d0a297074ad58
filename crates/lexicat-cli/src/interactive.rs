//! Interactive two-level menu over a catalog: a top-level catalog menu and a
//! per-category submenu reached through "modify".

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use lexicat_core::{Catalog, Category, LexicatError, Result, Word};

/// Run the catalog menu until the user exits. Mutations happen in memory;
/// the caller decides whether to persist the catalog afterwards.
pub fn run(catalog: &mut Catalog, words_per_line: usize) -> Result<()> {
    loop {
        println!("============================");
        println!("{}", "Word Vocabulary Center".cyan().bold());
        println!("============================");
        println!("1. Print all categories");
        println!("2. Add a new category");
        println!("3. Remove a category");
        println!("4. Clear a category");
        println!("5. Modify a category");
        println!("6. Search all categories for a specific word");
        println!("7. Show all the words starting with a given letter");
        println!("8. Load from a text file");
        println!("0. Exit");
        println!("============================");

        let Some(choice) = prompt("Enter Your Choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let stdout = io::stdout();
                catalog.write_catalog(&mut stdout.lock(), words_per_line)?;
            }
            "2" => loop {
                let Some(name) = prompt("Enter the name of the new category (or 'exit' to stop): ")?
                else {
                    break;
                };
                if name == "exit" || name.is_empty() {
                    break;
                }
                catalog.add(Category::new(name.as_str()));
            },
            "3" => {
                let Some(name) = prompt("Enter the name of the category to remove: ")? else {
                    break;
                };
                if !catalog.remove(&name) {
                    println!("Category not found.");
                }
            }
            "4" => {
                let Some(name) = prompt("Enter the name of the category to clear: ")? else {
                    break;
                };
                if !catalog.clear_words(&name) {
                    println!("Category not found.");
                }
            }
            "5" => {
                let Some(name) = prompt("Enter the name of the category to modify: ")? else {
                    break;
                };
                match catalog.find_mut(&name) {
                    Some(category) => run_category(category, words_per_line)?,
                    None => println!("Category not found."),
                }
            }
            "6" => {
                let Some(word) = prompt("Enter the word to search for: ")? else {
                    break;
                };
                let hits = catalog.search(&Word::from(word.as_str()));
                if hits.is_empty() {
                    println!("Word not found in any category.");
                } else {
                    for name in hits {
                        println!("Found in category: {}", name);
                    }
                }
            }
            "7" => {
                let Some(letter) = prompt_letter("Enter the first letter of the words to show: ")?
                else {
                    break;
                };
                let stdout = io::stdout();
                catalog.write_words_starting_with(&mut stdout.lock(), letter)?;
            }
            "8" => {
                let Some(file) = prompt("Enter the name of the file to load: ")? else {
                    break;
                };
                match catalog.load_from_file(Path::new(&file)) {
                    Ok(added) => println!("Loaded {} category(ies).", added),
                    Err(e @ LexicatError::CatalogOpen { .. }) => println!("{}", e),
                    Err(e) => return Err(e),
                }
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
    println!("Goodbye!");
    Ok(())
}

/// Per-category submenu, mirroring the catalog menu one level down.
fn run_category(category: &mut Category, words_per_line: usize) -> Result<()> {
    loop {
        println!("===========================");
        println!("Word Category: {}", category.name().to_string().cyan().bold());
        println!("===========================");
        println!("1. Print all the words in this category");
        println!("2. Insert a new word into this category");
        println!("3. Remove a given word from this category");
        println!("4. Empty this category");
        println!("5. Modify the category name");
        println!("6. Search for a specific word in this category");
        println!("7. Show all the words starting with a given letter");
        println!("8. Load from a text file");
        println!("0. Exit");
        println!("===========================");

        let Some(choice) = prompt("Enter Your Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let stdout = io::stdout();
                category.write_words(&mut stdout.lock(), words_per_line)?;
            }
            "2" => loop {
                let Some(word) = prompt("Enter a word (or 'exit' to stop): ")? else {
                    break;
                };
                if word == "exit" || word.is_empty() {
                    break;
                }
                category.insert(Word::from(word.as_str()));
            },
            "3" => {
                let Some(word) = prompt("Enter a word to remove: ")? else {
                    return Ok(());
                };
                if !category.remove(&Word::from(word.as_str())) {
                    println!("Word not found in the category.");
                }
            }
            "4" => category.clear(),
            "5" => {
                let Some(name) = prompt("Enter a new category name: ")? else {
                    return Ok(());
                };
                category.set_name(name.as_str());
            }
            "6" => {
                let Some(word) = prompt("Enter a word to search for: ")? else {
                    return Ok(());
                };
                if category.contains(&Word::from(word.as_str())) {
                    println!("Word found in the category.");
                } else {
                    println!("Word not found in the category.");
                }
            }
            "7" => {
                let Some(letter) = prompt_letter("Enter the starting letter: ")? else {
                    return Ok(());
                };
                for word in category.words_starting_with(letter) {
                    print!("{} ", word);
                }
                println!();
            }
            "8" => {
                let Some(file) = prompt("Enter the filename to load from: ")? else {
                    return Ok(());
                };
                match category.load_from_file(Path::new(&file)) {
                    Ok(count) => println!("Loaded {} word(s).", count),
                    Err(e @ LexicatError::CatalogOpen { .. }) => println!("{}", e),
                    Err(e) => return Err(e),
                }
            }
            "0" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Read one trimmed line. `None` means end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_letter(label: &str) -> Result<Option<char>> {
    loop {
        let Some(answer) = prompt(label)? else {
            return Ok(None);
        };
        if let Some(letter) = answer.chars().next() {
            return Ok(Some(letter));
        }
    }
}
