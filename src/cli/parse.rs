use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_report, OutputFormat};
use crate::core::report::PicardReport;

#[derive(Args)]
pub struct ParseArgs {
    /// Picard report (plain or .gz). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Only print this section
    #[arg(long, value_enum)]
    pub section: Option<Section>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Arguments,
    Metrics,
    Histogram,
}

impl Section {
    fn name(self) -> &'static str {
        match self {
            Self::Arguments => "arguments",
            Self::Metrics => "metrics",
            Self::Histogram => "histogram",
        }
    }

    fn is_present(self, report: &PicardReport) -> bool {
        match self {
            Self::Arguments => report.arguments.is_some(),
            Self::Metrics => report.metrics.is_some(),
            Self::Histogram => report.histogram.is_some(),
        }
    }
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be parsed, or if `--section` names a
/// section the report's module does not write.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = load_report(&args.input)?;

    if verbose {
        eprintln!(
            "Parsed {} report ({}) from {}",
            report.module_name,
            report.variant,
            args.input.display()
        );
    }

    if let Some(section) = args.section {
        if !section.is_present(&report) {
            anyhow::bail!(
                "{} reports have no {} section",
                report.module_name,
                section.name()
            );
        }
    }

    match format {
        OutputFormat::Text => print_text_report(&report, args.section),
        OutputFormat::Json => print_json_report(&report, args.section)?,
        OutputFormat::Tsv => print_tsv_report(&report, args.section),
    }

    Ok(())
}

fn wants(filter: Option<Section>, section: Section) -> bool {
    filter.map_or(true, |s| s == section)
}

fn print_text_report(report: &PicardReport, filter: Option<Section>) {
    if filter.is_none() {
        println!("Picard Report");
        println!("{}", "=".repeat(60));
        println!("\nModule: {}", report.module_name);
        println!("Variant: {}", report.variant);
    }

    if wants(filter, Section::Arguments) {
        println!("\nArguments:");
        match &report.arguments {
            Some(arguments) => {
                for (name, value) in arguments {
                    println!("  {name} = {value}");
                }
            }
            None => println!("  (not written by this module)"),
        }
    }

    if wants(filter, Section::Metrics) {
        println!("\nMetrics:");
        match &report.metrics {
            Some(metrics) => {
                let width = metrics.keys().map(String::len).max().unwrap_or(0);
                for (name, value) in metrics {
                    println!("  {name:<width$}  {value}");
                }
            }
            None => println!("  (not written by this module)"),
        }
    }

    if wants(filter, Section::Histogram) {
        match &report.histogram {
            Some(histogram) => {
                println!("\nHistogram ({} bins, total {}):", histogram.len(), histogram.total());
                for (bin, value) in histogram.iter() {
                    println!("  {bin}\t{value}");
                }
            }
            None => {
                println!("\nHistogram:");
                println!("  (not written by this module)");
            }
        }
    }
}

fn print_json_report(report: &PicardReport, filter: Option<Section>) -> anyhow::Result<()> {
    let output = match filter {
        None => serde_json::to_value(report)?,
        Some(Section::Arguments) => serde_json::to_value(&report.arguments)?,
        Some(Section::Metrics) => serde_json::to_value(&report.metrics)?,
        Some(Section::Histogram) => serde_json::to_value(&report.histogram)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Long-format TSV: one `section, key, value` row per entry
fn print_tsv_report(report: &PicardReport, filter: Option<Section>) {
    println!("section\tkey\tvalue");

    if filter.is_none() {
        println!("module\tmodule_name\t{}", report.module_name);
    }

    if wants(filter, Section::Arguments) {
        if let Some(arguments) = &report.arguments {
            for (name, value) in arguments {
                println!("argument\t{name}\t{value}");
            }
        }
    }

    if wants(filter, Section::Metrics) {
        if let Some(metrics) = &report.metrics {
            for (name, value) in metrics {
                println!("metric\t{name}\t{value}");
            }
        }
    }

    if wants(filter, Section::Histogram) {
        if let Some(histogram) = &report.histogram {
            for (bin, value) in histogram.iter() {
                println!("histogram\t{bin}\t{value}");
            }
        }
    }
}
