//! The failing-line report produced by a scan.

use std::fmt;

/// One line that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based global line number.
    pub number: u64,

    /// The line text as read (terminator stripped, otherwise untrimmed).
    pub text: String,

    /// The reason the check gave.
    pub reason: String,
}

/// Ordered collection of the lines that failed a scan.
///
/// Failures are appended strictly in scan order, so line numbers are always
/// ascending. A scan that finds failures still completes normally; the report
/// is data, not an error.
///
/// `Display` renders the bracketed list of failing line numbers the way the
/// CLI prints it: `[3, 47, 48]`, or `[]` for a clean scan.
#[derive(Debug, Clone, Default)]
pub struct Report {
    failures: Vec<LineFailure>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure. Numbers must be appended in ascending order;
    /// the scanner processes lines strictly in order, so this holds by
    /// construction.
    pub(crate) fn record(&mut self, failure: LineFailure) {
        debug_assert!(
            self.failures.last().is_none_or(|f| f.number < failure.number),
            "failures must be recorded in ascending line order"
        );
        self.failures.push(failure);
    }

    /// Returns the recorded failures in ascending line order.
    pub fn failures(&self) -> &[LineFailure] {
        &self.failures
    }

    /// Returns the failing line numbers in ascending order.
    pub fn line_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.failures.iter().map(|f| f.number)
    }

    /// Returns the number of failing lines.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if no line failed.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns true if no line failed. Alias for readability at call sites
    /// that treat the report as a verdict.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", failure.number)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(number: u64) -> LineFailure {
        LineFailure {
            number,
            text: format!("line {}", number),
            reason: "bad".into(),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert!(report.is_clean());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "[]");
    }

    #[test]
    fn test_display_lists_numbers() {
        let mut report = Report::new();
        report.record(failure(3));
        report.record(failure(47));
        report.record(failure(48));
        assert_eq!(report.to_string(), "[3, 47, 48]");
    }

    #[test]
    fn test_line_numbers_ascending() {
        let mut report = Report::new();
        for n in [1, 5, 9] {
            report.record(failure(n));
        }
        let numbers: Vec<_> = report.line_numbers().collect();
        assert_eq!(numbers, vec![1, 5, 9]);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }
}
