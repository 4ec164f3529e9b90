use std::fs;
use std::path::Path;

use clap::Parser;

use ghg_charts::cli::{Cli, Commands, ConfigAction, ConfigArgs, InitArgs, RunArgs};
use ghg_charts::config::{Config, ConfigLoader, FileConfigLoader, validate};
use ghg_charts::pipeline;
use ghg_charts::{EXIT_CHART_FAILURE, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Run(args) => run_charts(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_charts(args: &RunArgs, cli: &Cli) -> i32 {
    match run_charts_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_charts_impl(args: &RunArgs, cli: &Cli) -> ghg_charts::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Run the pipeline
    let summary = pipeline::run(&config, cli.quiet)?;

    // 4. Report results
    if !cli.quiet {
        println!("Rendered {} chart(s)", summary.written.len());
        if cli.verbose > 0 {
            for path in &summary.written {
                println!("  {}", path.display());
            }
        }
    }

    for failure in &summary.failures {
        eprintln!("Failed: {}: {}", failure.description, failure.error);
    }

    if summary.has_failures() {
        Ok(EXIT_CHART_FAILURE)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> ghg_charts::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(data_dir) = &args.data_dir {
        config.paths.data_dir.clone_from(data_dir);
    }

    if let Some(results_dir) = &args.results_dir {
        config.paths.results_dir.clone_from(results_dir);
    }

    if let Some(input) = &args.input {
        config.input.file_name.clone_from(input);
    }

    if let Some(sheet) = &args.sheet {
        config.input.sheet_name.clone_from(sheet);
    }
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> ghg_charts::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ghg_charts::EmissionsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# ghg-charts configuration file

[paths]
# Directory containing the input workbook
data_dir = "data"

# Directory charts are written into
results_dir = "results"

[input]
# Workbook and worksheet to read
file_name = "GHG_proxy_2022.xlsx"
sheet_name = "EEA proxy dataset (plus)"

# Emissions column header (kilotonnes), matched after normalization
emissions_column = "emissions_-_eea_[kt]"

# Reporting year, used in titles and file names
year = 2022

[countries]
# Legacy-to-ISO country code remappings
[countries.code_mappings]
EL = "GR"

[summary]
# Sentinel values marking summary (total) rows
gas_scope = "Total"
crf_code = "Total_net"

# Sector charts: name, sub-sector CRF codes, palette
# Palettes: deep, tab10, dark2, set1, set2, set3, paired, accent
# [[sectors]]
# name = "Energy"
# codes = ["1.A.1", "1.A.2", "1.A.3", "1.A.4", "1.A.5", "1.B", "1.C"]
# palette = "set1"
"#
    .to_string()
}

fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> ghg_charts::Result<()> {
    if !config_path.exists() {
        return Err(ghg_charts::EmissionsError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> ghg_charts::Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[paths]\n");
    let _ = writeln!(output, "  data_dir = {:?}", config.paths.data_dir);
    let _ = writeln!(output, "  results_dir = {:?}", config.paths.results_dir);

    output.push_str("\n[input]\n");
    let _ = writeln!(output, "  file_name = \"{}\"", config.input.file_name);
    let _ = writeln!(output, "  sheet_name = \"{}\"", config.input.sheet_name);
    let _ = writeln!(
        output,
        "  emissions_column = \"{}\"",
        config.input.emissions_column
    );
    let _ = writeln!(output, "  year = {}", config.input.year);

    output.push_str("\n[countries]\n");
    let _ = writeln!(output, "  excludes = {:?}", config.countries.excludes);
    for (from, to) in &config.countries.code_mappings {
        let _ = writeln!(output, "  code_mappings.{from} = \"{to}\"");
    }

    output.push_str("\n[summary]\n");
    let _ = writeln!(output, "  gas_scope = \"{}\"", config.summary.gas_scope);
    let _ = writeln!(output, "  crf_code = \"{}\"", config.summary.crf_code);

    for sector in &config.sectors {
        output.push_str("\n[[sectors]]\n");
        let _ = writeln!(output, "  name = \"{}\"", sector.name);
        let _ = writeln!(output, "  codes = {:?}", sector.codes);
        let _ = writeln!(output, "  palette = {:?}", sector.palette);
    }

    output
}
