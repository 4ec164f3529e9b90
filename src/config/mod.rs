mod loader;
mod model;

pub use loader::{
    CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem, validate,
};
pub use model::{
    Config, CountryConfig, InputConfig, PathsConfig, SectorConfig, SummaryConfig,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.paths.data_dir.to_str(), Some("data"));
        assert_eq!(config.paths.results_dir.to_str(), Some("results"));
        assert!(!config.sectors.is_empty());
    }

    #[test]
    fn config_file_name_is_stable() {
        // File names are part of the CLI contract.
        assert_eq!(CONFIG_FILE_NAME, "ghg-charts.toml");
    }
}
