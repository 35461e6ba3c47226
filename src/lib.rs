//! # picard-parser
//!
//! A library for reading the text metrics reports written by Picard tools.
//!
//! Picard reports share a loose layout: a banner line, a line naming the module
//! and its `NAME=VALUE` arguments, a `METRICS CLASS` table and a `HISTOGRAM`
//! table. Not every module writes every section, so `picard-parser` decides
//! from the module name which sections to expect and returns them as typed,
//! ordered collections.
//!
//! ## Supported modules
//!
//! - **`CollectInsertSizeMetrics`**, **`MarkDuplicates`** and other modules:
//!   arguments, metrics and histogram
//! - **`CollectAlignmentSummaryMetrics`**: metrics only
//! - **`MeanQualityByCycle`**: arguments and histogram
//!
//! ## Example
//!
//! ```rust
//! use picard_parser::{Numeric, PicardReport};
//!
//! let text = concat!(
//!     "## htsjdk.samtools.metrics.StringHeader\n",
//!     "# picard.analysis.CollectInsertSizeMetrics INPUT=a.bam OUTPUT=a.out\n",
//!     "\n",
//!     "## METRICS CLASS\tpicard.analysis.InsertSizeMetrics\n",
//!     "MEDIAN_INSERT_SIZE\tPAIR_ORIENTATION\n",
//!     "79\tFR\n",
//!     "\n",
//!     "## HISTOGRAM\tjava.lang.Integer\n",
//!     "insert_size\tAll_Reads.fr_count\n",
//!     "28\t4\n",
//!     "29\t1\n",
//! );
//!
//! let report = PicardReport::from_text(text).unwrap();
//! assert_eq!(report.module_name, "picard.analysis.CollectInsertSizeMetrics");
//! assert_eq!(report.argument("INPUT"), Some("a.bam"));
//! assert_eq!(report.metric("MEDIAN_INSERT_SIZE"), Some("79"));
//!
//! let histogram = report.histogram.unwrap();
//! assert_eq!(histogram.get(&Numeric::Integer(28)), Some(Numeric::Integer(4)));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Report, histogram and variant types
//! - [`parsing`]: The report parser and line cursor
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input limits

pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::report::{Histogram, PicardReport};
pub use crate::core::types::{Numeric, ReportVariant};
pub use crate::parsing::picard::{ParseError, ReportSource};
