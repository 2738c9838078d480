use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Rank installed pacman packages by the weight of their dependency closure
#[derive(Parser, Debug)]
#[command(name = "pacweight")]
#[command(version)]
#[command(
    about = "Rank installed pacman packages by how many other packages they pull in",
    long_about = None
)]
pub struct Args {
    /// Max number of packages to show
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Rank by transitive closure size instead of direct dependency count
    #[arg(long)]
    pub recursive: bool,

    /// Package names to ignore in the calculation (repeatable)
    #[arg(short, long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Number of heaviest-chain hops to print per entry (0 disables)
    #[arg(long, value_name = "DEPTH")]
    pub chain: Option<usize>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Explicit config file path (default: ./pacweight.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
