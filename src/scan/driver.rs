//! The scan driver - consumes chunks, numbers lines, applies the check.

use std::io::{Read, Write};

use log::trace;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::reader::ChunkReader;
use crate::scan::check::{LineCheck, Outcome};
use crate::scan::report::{LineFailure, Report};

/// Per-scan mutable state, owned by the driver and threaded through the
/// chunk loop. Chunk boundaries never reset or skip the counter.
#[derive(Debug, Default)]
struct ScanState {
    /// Number of lines seen so far; the current line's number once
    /// incremented.
    line_number: u64,
    report: Report,
}

/// Drives a full scan: chunked reading, global line numbering, and the
/// per-line check.
///
/// The scanner consumes [`Chunk`]s from a [`ChunkReader`], splits them back
/// into lines, assigns each line a 1-based global number, and hands the
/// trimmed text to the configured [`LineCheck`]. Lines the check rejects are
/// echoed to the diagnostic stream as they are found and collected into the
/// final [`Report`].
///
/// Validation failures never abort the scan; only I/O errors do.
///
/// # Example
///
/// ```
/// use linescan::{Outcome, Scanner};
/// use std::io::Cursor;
///
/// let check = |line: &str| {
///     if line.is_empty() {
///         Outcome::Skipped
///     } else if line.contains(' ') {
///         Outcome::Valid
///     } else {
///         Outcome::Invalid("expected at least two fields".into())
///     }
/// };
///
/// let scanner = Scanner::new(check);
/// let mut diag = Vec::new();
/// let report = scanner.scan(Cursor::new("a b\n\ngarbage\n"), &mut diag)?;
///
/// let failing: Vec<_> = report.line_numbers().collect();
/// assert_eq!(failing, vec![3]);
/// # Ok::<(), linescan::ScanError>(())
/// ```
///
/// [`Chunk`]: crate::Chunk
#[derive(Debug, Clone)]
pub struct Scanner<C> {
    check: C,
    config: ScanConfig,
}

impl<C: LineCheck> Scanner<C> {
    /// Creates a scanner with the default [`ScanConfig`].
    pub fn new(check: C) -> Self {
        Self::with_config(check, ScanConfig::default())
    }

    /// Creates a scanner with an explicit configuration.
    pub fn with_config(check: C, config: ScanConfig) -> Self {
        Self { check, config }
    }

    /// Returns the configuration used by this scanner.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans the source to exhaustion and returns the failing-line report.
    ///
    /// Every invalid line's text is written to `diag` the moment it is found,
    /// before the scan continues. Line numbers are global across the whole
    /// source: chunking is invisible to numbering.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the source fails mid-read or `diag`
    /// cannot be written. No report is produced in that case.
    pub fn scan<R: Read, W: Write>(&self, source: R, diag: &mut W) -> Result<Report, ScanError> {
        let mut reader = ChunkReader::new(source, self.config);
        let mut state = ScanState::default();

        loop {
            let chunk = reader.next_chunk()?;
            for line in chunk.lines() {
                state.line_number += 1;

                // The original bytes are what gets reported; the check only
                // ever sees the trimmed text.
                let text = String::from_utf8_lossy(line);
                if let Outcome::Invalid(reason) = self.check.check(text.trim()) {
                    writeln!(diag, "{}", text)?;
                    state.report.record(LineFailure {
                        number: state.line_number,
                        text: text.into_owned(),
                        reason,
                    });
                }
            }
            trace!("chunk processed, {} lines so far", state.line_number);

            if chunk.is_final() {
                break;
            }
        }

        Ok(state.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_tabs(line: &str) -> Outcome {
        if line.is_empty() {
            Outcome::Skipped
        } else if line.contains('\t') {
            Outcome::Invalid("tab found".into())
        } else {
            Outcome::Valid
        }
    }

    fn scan_str(input: &str) -> Report {
        let scanner = Scanner::new(no_tabs);
        scanner
            .scan(Cursor::new(input.to_string()), &mut Vec::new())
            .unwrap()
    }

    #[test]
    fn test_clean_input() {
        let report = scan_str("one\ntwo\nthree\n");
        assert!(report.is_clean());
    }

    #[test]
    fn test_invalid_lines_numbered() {
        let report = scan_str("ok\nbad\there\nok\nbad\tagain\n");
        let numbers: Vec<_> = report.line_numbers().collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_blank_lines_are_skipped_not_reported() {
        let report = scan_str("ok\n\n   \nok\n");
        assert!(report.is_clean(), "whitespace-only lines must be skipped");
    }

    #[test]
    fn test_blank_lines_still_advance_numbering() {
        let report = scan_str("ok\n\nbad\tline\n");
        let numbers: Vec<_> = report.line_numbers().collect();
        assert_eq!(numbers, vec![3]);
    }

    #[test]
    fn test_diag_stream_echoes_invalid_lines() {
        let scanner = Scanner::new(no_tabs);
        let mut diag = Vec::new();
        scanner
            .scan(Cursor::new("ok\nbad\tone\n".to_string()), &mut diag)
            .unwrap();
        assert_eq!(String::from_utf8(diag).unwrap(), "bad\tone\n");
    }

    #[test]
    fn test_report_keeps_untrimmed_text() {
        let scanner = Scanner::new(no_tabs);
        let report = scanner
            .scan(Cursor::new("  bad\tpadded  \n".to_string()), &mut Vec::new())
            .unwrap();
        assert_eq!(report.failures()[0].text, "  bad\tpadded  ");
    }

    #[test]
    fn test_numbering_spans_chunk_boundaries() {
        // 2 lines per chunk; the counter must not reset or skip at the seam.
        let config = ScanConfig::new(1024, 2).unwrap();
        let scanner = Scanner::with_config(no_tabs, config);
        let input = "a\nb\nc\nd\nbad\tline\n";
        let report = scanner
            .scan(Cursor::new(input.to_string()), &mut Vec::new())
            .unwrap();
        let numbers: Vec<_> = report.line_numbers().collect();
        assert_eq!(numbers, vec![5]);
    }

    #[test]
    fn test_unterminated_final_line_is_checked() {
        let report = scan_str("ok\nbad\ttail");
        let numbers: Vec<_> = report.line_numbers().collect();
        assert_eq!(numbers, vec![2]);
    }

    #[test]
    fn test_empty_input_is_clean() {
        let report = scan_str("");
        assert!(report.is_clean());
    }

    #[test]
    fn test_read_error_aborts_without_report() {
        struct FailAfter {
            data: Vec<u8>,
            pos: usize,
        }
        impl Read for FailAfter {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.pos >= self.data.len() {
                    return Err(std::io::Error::other("source went away"));
                }
                let n = buf.len().min(self.data.len() - self.pos);
                buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
                self.pos += n;
                Ok(n)
            }
        }

        let source = FailAfter {
            data: b"1\n2\n3\n".to_vec(),
            pos: 0,
        };
        let scanner = Scanner::new(no_tabs);
        let err = scanner.scan(source, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}
