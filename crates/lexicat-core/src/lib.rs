pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod list;
pub mod word;

pub use catalog::{Catalog, CATEGORY_MARKER};
pub use category::Category;
pub use config::{CatalogConfig, Config, DisplayConfig};
pub use error::{LexicatError, Result};
pub use list::{WordList, DEFAULT_WORDS_PER_LINE};
pub use word::{Word, MAX_TOKEN_LEN};
