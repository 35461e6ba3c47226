//! Forward-only cursor over the lines of a report.

/// Walks the lines of an in-memory report front to back.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Line numbers are 1-based and
/// refer to the most recently consumed line.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            position: 0,
        }
    }

    /// Consume and return the next line, or `None` at end of input
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.position).copied()?;
        self.position += 1;
        Some(line)
    }

    /// Consume lines up to and including the first one containing `keyword`.
    ///
    /// Returns `false` if the input ends first, leaving the cursor exhausted.
    pub fn skip_past(&mut self, keyword: &str) -> bool {
        while let Some(line) = self.next_line() {
            if line.contains(keyword) {
                return true;
            }
        }
        false
    }

    /// 1-based number of the last consumed line (0 before any reads)
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.position
    }

    #[cfg(test)]
    fn is_exhausted(&self) -> bool {
        self.position >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_strips_terminators() {
        let mut cursor = LineCursor::new("first\r\nsecond\nthird");
        assert_eq!(cursor.next_line(), Some("first"));
        assert_eq!(cursor.next_line(), Some("second"));
        assert_eq!(cursor.next_line(), Some("third"));
        assert_eq!(cursor.next_line(), None);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_skip_past_consumes_keyword_line() {
        let mut cursor = LineCursor::new("a\nb\n## METRICS CLASS\tfoo\nnames\n");
        assert!(cursor.skip_past("METRICS CLASS"));
        assert_eq!(cursor.line_number(), 3);
        assert_eq!(cursor.next_line(), Some("names"));
    }

    #[test]
    fn test_skip_past_missing_keyword() {
        let mut cursor = LineCursor::new("a\nb\nc\n");
        assert!(!cursor.skip_past("HISTOGRAM"));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = LineCursor::new("");
        assert_eq!(cursor.line_number(), 0);
        assert_eq!(cursor.next_line(), None);
    }
}
