//! Command-line interface for picard-parser.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Print the module, arguments, metrics and histogram of a report
//! - **get**: Print a single metric value from a report
//!
//! ## Usage
//!
//! ```text
//! # Show everything in a report
//! picard-parser parse sample.insert_size_metrics
//!
//! # Only the histogram, as TSV
//! picard-parser parse sample.insert_size_metrics --section histogram --format tsv
//!
//! # JSON output for scripting
//! picard-parser parse sample.alignment_summary_metrics.gz --format json
//!
//! # Read from stdin
//! cat sample.dup_metrics | picard-parser get - PERCENT_DUPLICATION
//! ```

use std::io::{self, Read};
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::report::PicardReport;
use crate::parsing::picard::ReportSource;

pub mod get;
pub mod parse;

#[derive(Parser)]
#[command(name = "picard-parser")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Extract arguments, metrics and histograms from Picard reports")]
#[command(
    long_about = "picard-parser reads the text metrics reports written by Picard tools.\n\nIt understands CollectInsertSizeMetrics, MarkDuplicates, MeanQualityByCycle and CollectAlignmentSummaryMetrics output and reports:\n- The Picard module that produced the file\n- The arguments it was run with\n- The METRICS CLASS table\n- The HISTOGRAM table"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a Picard report and print its sections
    Parse(parse::ParseArgs),

    /// Print a single metric value from a Picard report
    Get(get::GetArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a report from a path, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a Picard report.
pub fn load_report(input: &Path) -> anyhow::Result<PicardReport> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        let source = ReportSource::from_options(None, Some(buffer.as_str()))?;
        return Ok(PicardReport::parse(source)?);
    }

    Ok(PicardReport::from_path(input)?)
}
