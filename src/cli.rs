use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cvemap")]
#[command(about = "CVE fixed-report aggregator for release-range inventories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate CVE inventories and generate the fixed reports
    Report {
        /// Input root containing the release-range directories
        #[arg(default_value = "input")]
        path: PathBuf,

        /// Directory the report files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "files")]
        format: OutputFormat,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Write the text/HTML report files plus chain summaries
    Files,
    /// Dump the aggregation model as JSON to stdout
    Json,
}
