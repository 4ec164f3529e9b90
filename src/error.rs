use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmissionsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open workbook: {path}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("Worksheet '{sheet}' not found in {path}")]
    SheetNotFound { sheet: String, path: PathBuf },

    #[error("Expected column not found after normalization: {column}")]
    MissingColumn { column: String },

    #[error("Palette has no color for stack key '{key}'")]
    PaletteMissingKey { key: String },

    #[error("Duplicate stack segment for group '{group}', key '{key}'")]
    DuplicateStack { group: String, key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EmissionsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
