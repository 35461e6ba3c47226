use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::core::types::{Numeric, ReportVariant};
use crate::parsing::picard::{self, ParseError, ReportSource};

/// Ordered histogram of `(bin, value)` pairs in the order they appear in the report.
///
/// Re-inserting an existing bin replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    bins: IndexMap<Numeric, Numeric>,
}

impl Histogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bin, returning the value it replaced (if any)
    pub fn insert(&mut self, bin: Numeric, value: Numeric) -> Option<Numeric> {
        self.bins.insert(bin, value)
    }

    #[must_use]
    pub fn get(&self, bin: &Numeric) -> Option<Numeric> {
        self.bins.get(bin).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Numeric, Numeric)> + '_ {
        self.bins.iter().map(|(bin, value)| (*bin, *value))
    }

    pub fn bins(&self) -> impl Iterator<Item = Numeric> + '_ {
        self.bins.keys().copied()
    }

    /// Sum of all bin values
    #[must_use]
    pub fn total(&self) -> f64 {
        self.bins.values().map(|v| v.as_f64()).sum()
    }
}

impl FromIterator<(Numeric, Numeric)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (Numeric, Numeric)>>(iter: I) -> Self {
        Self {
            bins: iter.into_iter().collect(),
        }
    }
}

#[derive(Serialize)]
struct HistogramBin {
    bin: Numeric,
    value: Numeric,
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.bins.len()))?;
        for (bin, value) in self.iter() {
            seq.serialize_element(&HistogramBin { bin, value })?;
        }
        seq.end()
    }
}

/// A fully parsed Picard report.
///
/// Sections that do not exist for the report's variant are `None`; a section
/// that exists is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PicardReport {
    /// Module that produced the report, e.g. `picard.analysis.CollectInsertSizeMetrics`
    pub module_name: String,

    /// Report shape resolved from the module name.
    ///
    /// The parser always derives this from `module_name`; reports built by
    /// hand should keep the two in step, along with which sections are `Some`.
    pub variant: ReportVariant,

    /// Command-line arguments from the module line
    pub arguments: Option<BTreeMap<String, String>>,

    /// Metric names to values, in column order
    pub metrics: Option<IndexMap<String, String>>,

    /// Histogram bins to values, in row order
    pub histogram: Option<Histogram>,
}

impl PicardReport {
    /// Parse a report from a file path or from in-memory content.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the source cannot be read or is not a
    /// supported Picard report.
    pub fn parse(source: ReportSource<'_>) -> Result<Self, ParseError> {
        picard::parse_report(source)
    }

    /// Parse a report file (plain text or gzip-compressed)
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the file cannot be read or is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        picard::parse_report_file(path.as_ref())
    }

    /// Parse a report from its text content
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidInput` if the content is empty, or another
    /// [`ParseError`] if it is malformed.
    pub fn from_text(content: &str) -> Result<Self, ParseError> {
        picard::parse_report(ReportSource::from_options(None, Some(content))?)
    }

    /// Look up a single metric value by column name
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&str> {
        self.metrics.as_ref()?.get(name).map(String::as_str)
    }

    /// Look up a single argument value by name
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.as_ref()?.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_preserves_row_order() {
        let mut histogram = Histogram::new();
        histogram.insert(Numeric::Integer(30), Numeric::Integer(3));
        histogram.insert(Numeric::Integer(28), Numeric::Integer(4));
        histogram.insert(Numeric::Integer(29), Numeric::Integer(1));

        let bins: Vec<Numeric> = histogram.bins().collect();
        assert_eq!(
            bins,
            vec![
                Numeric::Integer(30),
                Numeric::Integer(28),
                Numeric::Integer(29)
            ]
        );
    }

    #[test]
    fn test_histogram_duplicate_bin_overwrites_in_place() {
        let mut histogram = Histogram::new();
        histogram.insert(Numeric::Integer(28), Numeric::Integer(4));
        histogram.insert(Numeric::Integer(29), Numeric::Integer(1));
        let replaced = histogram.insert(Numeric::Integer(28), Numeric::Integer(9));

        assert_eq!(replaced, Some(Numeric::Integer(4)));
        assert_eq!(histogram.len(), 2);
        assert_eq!(
            histogram.iter().next(),
            Some((Numeric::Integer(28), Numeric::Integer(9)))
        );
    }

    #[test]
    fn test_histogram_total() {
        let histogram: Histogram = [
            (Numeric::Integer(1), Numeric::Integer(2)),
            (Numeric::Integer(2), Numeric::Float(0.5)),
        ]
        .into_iter()
        .collect();
        assert!((histogram.total() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_histogram_serializes_as_ordered_pairs() {
        let histogram: Histogram = [
            (Numeric::Integer(29), Numeric::Integer(1)),
            (Numeric::Float(28.5), Numeric::Float(4.0)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&histogram).unwrap();
        assert_eq!(json, r#"[{"bin":29,"value":1},{"bin":28.5,"value":4.0}]"#);
    }

    #[test]
    fn test_from_text_empty_is_invalid_input() {
        let err = PicardReport::from_text("").unwrap_err();
        assert!(matches!(err, ParseError::InvalidInput(_)), "{err:?}");
    }

    #[test]
    fn test_lookups_on_absent_sections() {
        let report = PicardReport {
            module_name: "picard.analysis.CollectAlignmentSummaryMetrics".to_string(),
            variant: ReportVariant::AlignmentSummary,
            arguments: None,
            metrics: Some(IndexMap::from([(
                "CATEGORY".to_string(),
                "PAIR".to_string(),
            )])),
            histogram: None,
        };

        assert_eq!(report.metric("CATEGORY"), Some("PAIR"));
        assert_eq!(report.metric("MISSING"), None);
        assert_eq!(report.argument("INPUT"), None);
    }
}
