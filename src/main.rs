mod adapters;
mod application;
mod bloat_analysis;
mod cli;
mod config;
mod ports;
mod shared;

use std::collections::HashSet;
use std::path::Path;
use std::process;
use std::str::FromStr;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileWriter, StdoutPresenter};
use adapters::outbound::pacman::PacmanClient;
use application::dto::RankRequest;
use application::use_cases::RankPackagesUseCase;
use bloat_analysis::domain::PackageName;
use cli::{Args, OutputFormat};
use config::ConfigFile;
use ports::outbound::ReportPresenter;
use shared::error::ExitCode;
use shared::Result;

const DEFAULT_LIMIT: usize = 10;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let settings = resolve_settings(&args, &config)?;

    // Create adapters (Dependency Injection)
    let package_query = PacmanClient::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = RankPackagesUseCase::new(package_query, progress_reporter);

    let request = RankRequest::new(
        settings.limit,
        settings.recursive,
        settings.ignore,
        settings.chain_depth,
    );
    let report = use_case.execute(request).await?;

    let formatter = settings.format.create_formatter();
    let formatted_output = formatter.format(&report)?;

    let presenter: Box<dyn ReportPresenter> = if let Some(output_path) = args.output {
        Box::new(FileWriter::new(output_path.into()))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Load configuration from an explicit path, or auto-discover it in the
/// current directory. An explicit path that cannot be read is an error;
/// a missing discovered config is not.
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(ref path) = args.config {
        return config::load_config_from_path(Path::new(path));
    }
    Ok(config::discover_config(Path::new("."))?.unwrap_or_default())
}

/// Effective settings after merging CLI arguments over config file values.
struct Settings {
    limit: usize,
    recursive: bool,
    chain_depth: usize,
    format: OutputFormat,
    ignore: HashSet<PackageName>,
}

/// CLI arguments take precedence over config file values, which take
/// precedence over built-in defaults.
fn resolve_settings(args: &Args, config: &ConfigFile) -> Result<Settings> {
    let limit = args.number.or(config.number).unwrap_or(DEFAULT_LIMIT);
    let recursive = args.recursive || config.recursive.unwrap_or(false);
    let chain_depth = args.chain.or(config.chain).unwrap_or(0);

    let format = match args.format {
        Some(f) => f,
        None => match config.format.as_deref() {
            Some(s) => OutputFormat::from_str(s).map_err(|e| anyhow::anyhow!(e))?,
            None => OutputFormat::Text,
        },
    };

    let ignore_names: &[String] = if args.ignore.is_empty() {
        config.ignore.as_deref().unwrap_or(&[])
    } else {
        &args.ignore
    };
    let ignore = ignore_names
        .iter()
        .map(PackageName::new)
        .collect::<Result<HashSet<_>>>()?;

    Ok(Settings {
        limit,
        recursive,
        chain_depth,
        format,
        ignore,
    })
}
