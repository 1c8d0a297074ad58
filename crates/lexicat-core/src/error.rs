use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexicatError {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("word list is empty")]
    EmptyList,

    #[error("failed to open catalog source: {path}")]
    CatalogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LexicatError>;

impl LexicatError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OutOfRange { .. } => 2,
            Self::EmptyList => 3,
            Self::CatalogOpen { .. } => 4,
            _ => 1,
        }
    }
}
