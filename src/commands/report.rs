//! The `report` command: scan the input tree, aggregate, render.

use crate::cli::OutputFormat;
use crate::core::RangeCollection;
use crate::io::walker::InputScanner;
use crate::io::writers::{ChainSummaryWriter, HtmlReportWriter, JsonWriter, TextReportWriter};
use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::path::{Path, PathBuf};

pub struct ReportConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

pub fn run_report(config: ReportConfig) -> Result<()> {
    let collection = InputScanner::new(config.input.clone())
        .scan()
        .with_context(|| format!("failed to scan {}", config.input.display()))?;

    for (index, range) in collection.ranges.iter().enumerate() {
        info!(
            "[{index}] source: {} target: {}",
            range.reference_release, range.target_release
        );
    }

    match config.format {
        OutputFormat::Json => {
            JsonWriter::new(std::io::stdout().lock()).write_collection(&collection)?;
        }
        OutputFormat::Files => {
            write_report_files(&collection, &config.output_dir)?;
            print_summary(&collection);
        }
    }

    Ok(())
}

fn write_report_files(collection: &RangeCollection, output_dir: &Path) -> Result<()> {
    crate::io::ensure_dir(output_dir)?;

    for range in &collection.ranges {
        let mut buffer = Vec::new();
        TextReportWriter::new(&mut buffer).write_report(range)?;
        write_output(
            &output_dir.join(format!("CVE-fixed-{}.txt", range.file_stem())),
            &buffer,
        )?;

        let mut buffer = Vec::new();
        HtmlReportWriter::new(&mut buffer).write_report(range)?;
        write_output(
            &output_dir.join(format!("CVE-fixed-{}.html", range.file_stem())),
            &buffer,
        )?;
    }

    for chain in collection.chains() {
        info!(
            "generating chain summary for spans {} to {}",
            chain.start, chain.end
        );
        let mut buffer = Vec::new();
        ChainSummaryWriter::new(&mut buffer).write_summary(&chain, &collection.ranges)?;
        write_output(
            &output_dir.join(format!("Summary-from-{}.html", chain.file_stem())),
            &buffer,
        )?;
    }

    Ok(())
}

fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("File \"{}\" generated", path.display());
    Ok(())
}

fn print_summary(collection: &RangeCollection) {
    if collection.is_empty() {
        println!("{}", "No release-range directories found".yellow());
        return;
    }

    let total = collection.grand_total();
    println!();
    println!("{}", "Summary:".bold());
    println!("  Ranges: {}", collection.ranges.len());
    println!("  Critical: {}", total.critical.to_string().red());
    println!("  High:     {}", total.high.to_string().yellow());
    println!("  Medium:   {}", total.medium);
    println!("  Low:      {}", total.low.to_string().green());
}
