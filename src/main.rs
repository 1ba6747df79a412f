use anyhow::Result;
use clap::Parser;
use cvemap::cli::{Cli, Commands};
use cvemap::commands::{run_report, ReportConfig};
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            path,
            output_dir,
            format,
            verbosity,
        } => {
            init_logger(verbosity);
            run_report(ReportConfig {
                input: path,
                output_dir,
                format,
            })
        }
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG still wins over the -v flags when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
