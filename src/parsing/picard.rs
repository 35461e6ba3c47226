//! Parser for Picard metrics reports.
//!
//! A report looks like:
//!
//! ```text
//! ## htsjdk.samtools.metrics.StringHeader
//! # picard.analysis.CollectInsertSizeMetrics INPUT=a.bam OUTPUT=a.out
//! ## htsjdk.samtools.metrics.StringHeader
//! # Started on: ...
//!
//! ## METRICS CLASS	picard.analysis.InsertSizeMetrics
//! MEDIAN_INSERT_SIZE	MODE_INSERT_SIZE
//! 79	80
//!
//! ## HISTOGRAM	java.lang.Integer
//! insert_size	All_Reads.fr_count
//! 28	4
//! 29	1
//! ```
//!
//! The first line is ignored. The second names the producing module and, for
//! most modules, its `NAME=VALUE` arguments. The metrics and histogram tables
//! follow their keyword lines. Which sections are read depends only on the
//! module (see [`ReportVariant::sections`]).

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::core::report::{Histogram, PicardReport};
use crate::core::types::{Numeric, ReportVariant};
use crate::parsing::lines::LineCursor;
use crate::utils::validation::{
    check_bin_limit, exceeds_report_limit, is_gzip_path, MAX_REPORT_BYTES,
};

/// Keyword on the line that precedes the metrics table
pub const METRICS_KEYWORD: &str = "METRICS CLASS";

/// Keyword on the line that precedes the histogram table
pub const HISTOGRAM_KEYWORD: &str = "HISTOGRAM";

static MODULE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"picard\.[A-Za-z0-9_]+\.[A-Za-z0-9_]+").expect("module name pattern is valid")
});

static ARGUMENTS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+=.*").expect("arguments pattern is valid"));

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed report header: {0}")]
    MalformedHeader(String),

    #[error("Failed to find {0} section in input")]
    SectionNotFound(&'static str),

    #[error("Malformed histogram row on line {line}: expected two numeric values, found '{row}'")]
    MalformedHistogramRow { line: usize, row: String },

    #[error("Report too large: {0} bytes exceeds maximum allowed ({MAX_REPORT_BYTES})")]
    TooLarge(u64),

    #[error("Too many histogram bins: {0} exceeds maximum allowed")]
    TooManyBins(usize),
}

/// Where a report comes from
#[derive(Debug, Clone, Copy)]
pub enum ReportSource<'a> {
    /// A report file on disk, gzip-compressed if it ends in `.gz`
    Path(&'a Path),
    /// The full text of a report
    Content(&'a str),
}

impl<'a> ReportSource<'a> {
    /// Build a source from an optional path and optional content.
    ///
    /// Exactly one must be given; empty content counts as not given.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidInput` if both or neither are supplied.
    pub fn from_options(
        path: Option<&'a Path>,
        content: Option<&'a str>,
    ) -> Result<Self, ParseError> {
        match (path, content.filter(|c| !c.is_empty())) {
            (Some(path), None) => Ok(Self::Path(path)),
            (None, Some(content)) => Ok(Self::Content(content)),
            (Some(_), Some(_)) => Err(ParseError::InvalidInput(
                "a report path and report content are mutually exclusive".to_string(),
            )),
            (None, None) => Err(ParseError::InvalidInput(
                "a report path or report content is required".to_string(),
            )),
        }
    }
}

/// Parse a report from either source
///
/// # Errors
///
/// Returns `ParseError::Io` if a file cannot be read, `ParseError::TooLarge`
/// if the input exceeds the size limit, or one of the format errors if the
/// text is not a supported Picard report.
pub fn parse_report(source: ReportSource<'_>) -> Result<PicardReport, ParseError> {
    match source {
        ReportSource::Path(path) => parse_report_file(path),
        ReportSource::Content(content) => {
            if exceeds_report_limit(content.len() as u64) {
                return Err(ParseError::TooLarge(content.len() as u64));
            }
            parse_report_text(content)
        }
    }
}

/// Parse a report file, decompressing it first if it ends in `.gz`
///
/// # Errors
///
/// See [`parse_report`].
pub fn parse_report_file(path: &Path) -> Result<PicardReport, ParseError> {
    let content = read_report_file(path)?;
    debug!(path = %path.display(), bytes = content.len(), "Read report file");
    parse_report_text(&content)
}

/// Read a whole report into memory. The file handle is closed on return.
fn read_report_file(path: &Path) -> Result<String, ParseError> {
    let mut file = std::fs::File::open(path)?;
    let mut content = String::new();

    if is_gzip_path(path) {
        // Decompressed size is unknown up front; read one byte past the limit to detect overflow
        GzDecoder::new(file)
            .take(MAX_REPORT_BYTES + 1)
            .read_to_string(&mut content)?;
        if exceeds_report_limit(content.len() as u64) {
            return Err(ParseError::TooLarge(content.len() as u64));
        }
    } else {
        let len = file.metadata()?.len();
        if exceeds_report_limit(len) {
            return Err(ParseError::TooLarge(len));
        }
        file.read_to_string(&mut content)?;
    }

    Ok(content)
}

/// Parse the text of a report
///
/// # Errors
///
/// Returns `ParseError::MalformedHeader` if the module line is missing or
/// malformed, `ParseError::SectionNotFound` if a required section is missing
/// or empty, `ParseError::MalformedHistogramRow` if a histogram row is not two
/// numbers, or `ParseError::TooManyBins` if the histogram exceeds the limit.
pub fn parse_report_text(text: &str) -> Result<PicardReport, ParseError> {
    let mut cursor = LineCursor::new(text);

    // Line 1 is a banner
    cursor.next_line();
    let header = cursor.next_line().ok_or_else(|| {
        ParseError::MalformedHeader("report has fewer than two lines".to_string())
    })?;

    let module_name = find_module_name(header)?;
    let variant = ReportVariant::from_module_name(module_name);
    let sections = variant.sections();
    debug!(module = module_name, %variant, "Resolved report variant");

    let arguments = if sections.arguments {
        Some(collect_arguments(header)?)
    } else {
        None
    };

    let metrics = if sections.metrics {
        Some(collect_metrics(&mut cursor)?)
    } else {
        None
    };

    let histogram = if sections.histogram {
        Some(collect_histogram(&mut cursor)?)
    } else {
        None
    };

    debug!(
        arguments = arguments.as_ref().map_or(0, BTreeMap::len),
        metrics = metrics.as_ref().map_or(0, IndexMap::len),
        bins = histogram.as_ref().map_or(0, Histogram::len),
        "Parsed report sections"
    );

    Ok(PicardReport {
        module_name: module_name.to_string(),
        variant,
        arguments,
        metrics,
        histogram,
    })
}

/// Find the `picard.<package>.<Module>` token on the module line
fn find_module_name(line: &str) -> Result<&str, ParseError> {
    MODULE_NAME_PATTERN
        .find(line)
        .map(|m| m.as_str())
        .ok_or_else(|| {
            ParseError::MalformedHeader(format!("no Picard module name found in '{}'", line.trim()))
        })
}

/// Collect `NAME=VALUE` arguments from the module line.
///
/// Everything from the first `NAME=` onward is split on whitespace and each
/// token on its first `=`. Repeated names keep the last value.
fn collect_arguments(line: &str) -> Result<BTreeMap<String, String>, ParseError> {
    let run = ARGUMENTS_PATTERN.find(line).ok_or_else(|| {
        ParseError::MalformedHeader("no NAME=VALUE arguments found on module line".to_string())
    })?;

    let mut arguments = BTreeMap::new();
    for token in run.as_str().split_whitespace() {
        let (name, value) = token.split_once('=').ok_or_else(|| {
            ParseError::MalformedHeader(format!(
                "argument '{token}' is not of the form NAME=VALUE"
            ))
        })?;
        arguments.insert(name.to_string(), value.to_string());
    }

    Ok(arguments)
}

/// Read the metrics table: one tab-separated row of names, one of values
fn collect_metrics(cursor: &mut LineCursor<'_>) -> Result<IndexMap<String, String>, ParseError> {
    if !cursor.skip_past(METRICS_KEYWORD) {
        return Err(ParseError::SectionNotFound(METRICS_KEYWORD));
    }

    let names = next_non_blank(cursor).ok_or(ParseError::SectionNotFound(METRICS_KEYWORD))?;
    let names_line = cursor.line_number();
    let values = next_non_blank(cursor).ok_or(ParseError::SectionNotFound(METRICS_KEYWORD))?;

    let names: Vec<&str> = names.split('\t').collect();
    let values: Vec<&str> = values.split('\t').collect();

    if names.len() != values.len() {
        return Err(ParseError::MalformedHeader(format!(
            "metrics header on line {names_line} has {} columns but the value row has {}",
            names.len(),
            values.len()
        )));
    }

    Ok(names
        .into_iter()
        .zip(values)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect())
}

/// Next line if it has any content; a blank or missing line yields `None`
fn next_non_blank<'a>(cursor: &mut LineCursor<'a>) -> Option<&'a str> {
    cursor.next_line().filter(|line| !line.trim().is_empty())
}

/// Read the histogram table up to the first blank line or end of input
fn collect_histogram(cursor: &mut LineCursor<'_>) -> Result<Histogram, ParseError> {
    if !cursor.skip_past(HISTOGRAM_KEYWORD) {
        return Err(ParseError::SectionNotFound(HISTOGRAM_KEYWORD));
    }

    // Column header
    cursor.next_line();

    let mut histogram = Histogram::new();
    while let Some(line) = cursor.next_line() {
        let row = line.trim();
        if row.is_empty() {
            break;
        }

        let (bin, value) = parse_histogram_row(row).ok_or_else(|| {
            ParseError::MalformedHistogramRow {
                line: cursor.line_number(),
                row: row.to_string(),
            }
        })?;

        // Check bin limit for DOS protection
        if check_bin_limit(histogram.len()).is_some() {
            return Err(ParseError::TooManyBins(histogram.len()));
        }

        histogram.insert(bin, value);
    }

    if histogram.is_empty() {
        return Err(ParseError::SectionNotFound(HISTOGRAM_KEYWORD));
    }

    Ok(histogram)
}

/// Split a row into exactly two numeric tokens
fn parse_histogram_row(row: &str) -> Option<(Numeric, Numeric)> {
    let mut fields = row.split_whitespace();
    let bin = Numeric::classify(fields.next()?)?;
    let value = Numeric::classify(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    Some((bin, value))
}
