//! Centralized input limits.

/// Largest report accepted, in bytes (after decompression)
pub const MAX_REPORT_BYTES: u64 = 256 * 1024 * 1024;

/// Maximum number of histogram bins in a single report
pub const MAX_HISTOGRAM_BINS: usize = 10_000_000;

/// Check if adding another histogram bin would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new bin.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_bin_limit(count: usize) -> Option<String> {
    if count >= MAX_HISTOGRAM_BINS {
        Some(format!(
            "Too many histogram bins: adding another would exceed maximum of {MAX_HISTOGRAM_BINS}"
        ))
    } else {
        None
    }
}

/// Check a report's size in bytes against [`MAX_REPORT_BYTES`]
#[must_use]
pub fn exceeds_report_limit(len: u64) -> bool {
    len > MAX_REPORT_BYTES
}

/// Whether a path names a gzip-compressed report
#[must_use]
pub fn is_gzip_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}
