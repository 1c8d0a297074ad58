use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use lexicat_core::{Catalog, Category, Config, Result, Word};

mod args;
mod interactive;

use args::{Cli, Commands, ConfigAction, Shell};

const CATALOG_FILE: &str = "catalog.txt";

fn main() -> ExitCode {
    let cli = Cli::parse();
    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(command) => dispatch(command, &base_dir, cli.catalog, cli.words_per_line),
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn dispatch(
    command: Commands,
    base_dir: &Path,
    catalog_flag: Option<PathBuf>,
    words_per_line_flag: Option<usize>,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let words_per_line = words_per_line_flag.unwrap_or(config.display.words_per_line);
    let catalog_path = catalog_flag
        .or(config.catalog.file)
        .unwrap_or_else(|| base_dir.join(CATALOG_FILE));
    let mut catalog = load_catalog(&catalog_path)?;

    match command {
        Commands::Show => {
            let stdout = io::stdout();
            catalog.write_catalog(&mut stdout.lock(), words_per_line)?;
        }
        Commands::Words { category } => match catalog.find(&category) {
            Some(cat) => {
                if cat.is_empty() {
                    println!("(empty)");
                } else {
                    let stdout = io::stdout();
                    cat.write_words(&mut stdout.lock(), words_per_line)?;
                }
            }
            None => println!("Category not found."),
        },
        Commands::Add { name } => {
            catalog.add(Category::new(name.as_str()));
            save_catalog(&catalog, &catalog_path)?;
            println!("{} {}", "Added:".green(), name.cyan().bold());
        }
        Commands::Remove { name } => {
            if catalog.remove(&name) {
                save_catalog(&catalog, &catalog_path)?;
                println!("{} {}", "Removed:".red(), name.cyan().bold());
            } else {
                println!("Category not found.");
            }
        }
        Commands::Clear { name } => {
            if catalog.clear_words(&name) {
                save_catalog(&catalog, &catalog_path)?;
                println!("{} {}", "Cleared:".yellow(), name.cyan().bold());
            } else {
                println!("Category not found.");
            }
        }
        Commands::AddWord { category, words } => {
            let count = words.len();
            let inserted = match catalog.find_mut(&category) {
                Some(cat) => {
                    for word in words {
                        cat.insert(Word::from(word));
                    }
                    true
                }
                None => false,
            };
            if inserted {
                save_catalog(&catalog, &catalog_path)?;
                println!(
                    "{} {} word(s) into {}",
                    "Inserted:".green(),
                    count,
                    category.cyan().bold()
                );
            } else {
                println!("Category not found.");
            }
        }
        Commands::RemoveWord { category, word } => {
            let target = Word::from(word.as_str());
            let removed = catalog.find_mut(&category).map(|cat| cat.remove(&target));
            match removed {
                Some(true) => {
                    save_catalog(&catalog, &catalog_path)?;
                    println!("{} {}", "Removed:".red(), word);
                }
                Some(false) => println!("Word not found in the category."),
                None => println!("Category not found."),
            }
        }
        Commands::Search { word } => {
            let hits = catalog.search(&Word::from(word.as_str()));
            if hits.is_empty() {
                println!("Word not found in any category.");
            } else {
                for name in hits {
                    println!("Found in category: {}", name.to_string().cyan().bold());
                }
            }
        }
        Commands::StartsWith { letter } => {
            let stdout = io::stdout();
            catalog.write_words_starting_with(&mut stdout.lock(), letter)?;
        }
        Commands::Import { file } => {
            let added = catalog.load_from_file(&file)?;
            save_catalog(&catalog, &catalog_path)?;
            println!(
                "{} {} category(ies) from {}",
                "Imported:".green(),
                added,
                file.display()
            );
        }
        Commands::Interactive => {
            interactive::run(&mut catalog, words_per_line)?;
            save_catalog(&catalog, &catalog_path)?;
        }
        // routed before the catalog is loaded
        Commands::Config { .. } | Commands::Completions { .. } => {}
    }

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Init => {
            if Config::init(base_dir)? {
                println!(
                    "{} {}",
                    "Created:".green(),
                    Config::config_path(base_dir).display()
                );
            } else {
                println!(
                    "Config already exists: {}",
                    Config::config_path(base_dir).display()
                );
            }
        }
        ConfigAction::Show => {
            let config = Config::load(base_dir)?;
            println!("Config: {}", Config::config_path(base_dir).display());
            println!("  words_per_line: {}", config.display.words_per_line);
            match config.catalog.file {
                Some(file) => println!("  catalog file: {}", file.display()),
                None => println!("  catalog file: (default)"),
            }
        }
    }
    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "lexicat", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("LEXICAT_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".lexicat"))
        .unwrap_or_else(|| PathBuf::from(".lexicat"))
}

/// A missing catalog file starts the session empty; an unreadable one is an
/// error.
fn load_catalog(path: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    if path.exists() {
        catalog.load_from_file(path)?;
    }
    Ok(catalog)
}

fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    catalog.save_to_file(path)
}
