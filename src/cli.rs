use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ghg-charts")]
#[command(author, version, about = "Render greenhouse-gas emissions spreadsheets as bar charts")]
#[command(long_about = "Reads a national greenhouse-gas emissions workbook and renders \
    overall, per-gas and per-sector bar charts as SVG files.\n\n\
    Exit codes:\n  \
    0 - All charts rendered\n  \
    1 - Some charts failed to render\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the workbook and render every configured chart
    Run(RunArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the input workbook (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory to write charts into (overrides config)
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Input workbook file name (overrides config)
    #[arg(long)]
    pub input: Option<String>,

    /// Worksheet name (overrides config)
    #[arg(long)]
    pub sheet: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(short, long, default_value = "ghg-charts.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Check a configuration file for errors
    Validate {
        /// Path to the configuration file
        config: PathBuf,
    },
    /// Print the effective configuration
    Show {
        /// Path to the configuration file (defaults to discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
