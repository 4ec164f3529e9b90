use std::path::{Path, PathBuf};

use crate::error::{EmissionsError, Result};

use super::Config;

/// Config file looked for in the working directory.
pub const CONFIG_FILE_NAME: &str = "ghg-charts.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// built-in defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads configuration from the filesystem.
///
/// Search order: `ghg-charts.toml` in the current directory, then
/// built-in defaults.
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        if let Some(local_path) = self.local_config_path()
            && self.fs.exists(&local_path)
        {
            return self.load_from_path(&local_path);
        }

        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self.fs.read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        validate(&config)?;
        Ok(config)
    }
}

/// Validate semantic correctness of a parsed config.
///
/// # Errors
/// Returns a descriptive [`EmissionsError::Config`] for the first
/// problem found.
pub fn validate(config: &Config) -> Result<()> {
    if config.input.file_name.is_empty() {
        return Err(EmissionsError::Config(
            "input.file_name cannot be empty".to_string(),
        ));
    }

    if config.input.sheet_name.is_empty() {
        return Err(EmissionsError::Config(
            "input.sheet_name cannot be empty".to_string(),
        ));
    }

    if config.input.emissions_column.is_empty() {
        return Err(EmissionsError::Config(
            "input.emissions_column cannot be empty".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for (i, sector) in config.sectors.iter().enumerate() {
        if sector.name.is_empty() {
            return Err(EmissionsError::Config(format!(
                "sectors[{i}].name cannot be empty"
            )));
        }
        if sector.codes.is_empty() {
            return Err(EmissionsError::Config(format!(
                "sectors[{i}] ('{}') must list at least one sub-sector code",
                sector.name
            )));
        }
        if !seen.insert(sector.name.as_str()) {
            return Err(EmissionsError::Config(format!(
                "duplicate sector name '{}'",
                sector.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
