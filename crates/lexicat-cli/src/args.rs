use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "lexicat")]
#[command(about = "Word category management from the command line")]
#[command(version)]
pub struct Cli {
    /// Base directory (default: ~/.lexicat)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Catalog file (default: from config, then <base-dir>/catalog.txt)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Words per line when rendering (default: from config, then 5)
    #[arg(long, global = true)]
    pub words_per_line: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every category and its words
    Show,

    /// Print the words of one category
    Words {
        /// Category name
        category: String,
    },

    /// Add an empty category
    Add {
        /// Category name
        name: String,
    },

    /// Remove a category
    Remove {
        /// Category name
        name: String,
    },

    /// Empty a category's word list
    Clear {
        /// Category name
        name: String,
    },

    /// Insert words into a category, keeping sorted order
    AddWord {
        /// Category name
        category: String,

        /// Words to insert
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove a word from a category
    RemoveWord {
        /// Category name
        category: String,

        /// Word to remove
        word: String,
    },

    /// List every category containing a word
    Search {
        /// Word to look for
        word: String,
    },

    /// Show words starting with a letter, per category (case-insensitive)
    StartsWith {
        /// First letter to match
        letter: char,
    },

    /// Bulk-import categories and words from a '#'-marker text file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Run the interactive menu
    Interactive,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write the default config file if none exists
    Init,

    /// Show the current configuration
    Show,
}
