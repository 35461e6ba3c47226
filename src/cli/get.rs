use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_report, OutputFormat};

#[derive(Args)]
pub struct GetArgs {
    /// Picard report (plain or .gz). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Metric column name, e.g. MEAN_INSERT_SIZE
    #[arg(required = true)]
    pub metric: String,
}

/// Execute get subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be parsed, has no metrics section,
/// or has no column with the requested name.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GetArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = load_report(&args.input)?;

    let metrics = report
        .metrics
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("{} reports have no metrics section", report.module_name))?;

    if verbose {
        eprintln!(
            "Looking up {} among {} metrics from {}",
            args.metric,
            metrics.len(),
            report.module_name
        );
    }

    let value = metrics.get(&args.metric).ok_or_else(|| {
        anyhow::anyhow!(
            "Metric '{}' not found in {} report",
            args.metric,
            report.module_name
        )
    })?;

    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "module_name": report.module_name,
                "metric": args.metric,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("metric\tvalue");
            println!("{}\t{value}", args.metric);
        }
    }

    Ok(())
}
