//! Parsers for Picard metrics reports.
//!
//! - [`picard`]: the report parser and its [`ParseError`](picard::ParseError)
//! - [`lines`]: the forward-only line cursor the parser walks
//!
//! ## Example
//!
//! ```rust,no_run
//! use picard_parser::parsing::picard::{parse_report, ReportSource};
//! use std::path::Path;
//!
//! // Parse from a report file
//! let report = parse_report(ReportSource::Path(Path::new("sample.insert_size_metrics"))).unwrap();
//!
//! // Or from report text already in memory
//! let text = std::fs::read_to_string("sample.insert_size_metrics").unwrap();
//! let report = parse_report(ReportSource::Content(&text)).unwrap();
//! ```
//!
//! ## Recognised sections
//!
//! | Keyword | Contents |
//! |---------|----------|
//! | line 2 | `picard.<package>.<Module>` followed by `NAME=VALUE` arguments |
//! | `METRICS CLASS` | tab-separated names row, then values row |
//! | `HISTOGRAM` | header row, then `<bin> <value>` rows up to a blank line |

pub mod lines;
pub mod picard;
