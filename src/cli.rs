use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "osaa-longhaul")]
#[command(about = "OSAA playoff long-haul travel and turnaround burden analysis", long_about = None)]
pub struct Cli {
    /// Config file path (defaults to config/default and config/local)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where matchups come from. Bracket JSON is the default.
///
/// Shared by `report`, `analyze` and `serve`.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Bracket JSON data file to load
    #[arg(long, default_value = "bracket_data.json")]
    pub json: String,

    /// Use the built-in sample data set
    #[arg(long, conflicts_with_all = ["scrape", "text"])]
    pub sample: bool,

    /// Scrape live brackets from the OSAA site
    #[arg(long, conflicts_with = "text")]
    pub scrape: bool,

    /// Raw bracket text dump to parse
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate games and write the CSV, HTML and summary files
    Report {
        #[command(flatten)]
        source: SourceArgs,
        /// CSV output file
        #[arg(long)]
        csv: Option<String>,
        /// HTML output file
        #[arg(long)]
        html: Option<String>,
        /// Turnaround summary JSON output file
        #[arg(long)]
        summary: Option<String>,
    },
    /// Print the turnaround burden analysis
    Analyze {
        #[command(flatten)]
        source: SourceArgs,
        /// Summary JSON output file
        #[arg(long)]
        out: Option<String>,
        /// Number of worst cases to show
        #[arg(long)]
        top: Option<usize>,
    },
    /// Convert a raw bracket text dump to bracket JSON
    Parse {
        /// Raw bracket text file
        input: String,
        /// Output JSON file
        #[arg(long, default_value = "parsed_brackets.json")]
        out: String,
    },
    /// Serve the report and a JSON API over HTTP
    Serve {
        #[command(flatten)]
        source: SourceArgs,
        /// Bind address
        #[arg(long)]
        host: Option<String>,
        /// Bind port
        #[arg(long)]
        port: Option<u16>,
    },
}
