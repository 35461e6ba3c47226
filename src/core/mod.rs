//! Core data types for parsed Picard reports.
//!
//! - [`PicardReport`]: module name, arguments, metrics and histogram of one report
//! - [`Histogram`]: ordered `(bin, value)` pairs
//! - [`ReportVariant`]: which Picard module shape a report has
//! - [`Numeric`]: an integer-or-float histogram token
//!
//! ## Sections by variant
//!
//! | Variant | Arguments | Metrics | Histogram |
//! |---------|-----------|---------|-----------|
//! | `CollectAlignmentSummaryMetrics` | - | yes | - |
//! | `MeanQualityByCycle` | yes | - | yes |
//! | anything else (`CollectInsertSizeMetrics`, `MarkDuplicates`, ...) | yes | yes | yes |
//!
//! [`PicardReport`]: report::PicardReport
//! [`Histogram`]: report::Histogram
//! [`ReportVariant`]: types::ReportVariant
//! [`Numeric`]: types::Numeric

pub mod report;
pub mod types;
