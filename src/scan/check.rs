//! The per-line validation seam.

/// Result of checking a single trimmed line.
///
/// `Skipped` is a first-class variant, not a failure: a line the check deems
/// intentionally empty must never show up in the failing-line report. Keeping
/// it separate from [`Outcome::Invalid`] is what makes that guarantee hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line is well-formed.
    Valid,

    /// The line is intentionally empty or otherwise not subject to
    /// validation (e.g. blank lines, comments).
    Skipped,

    /// The line failed validation, with a human-readable reason.
    Invalid(String),
}

impl Outcome {
    /// Returns true for [`Outcome::Invalid`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }
}

/// A per-line check invoked by the scanner.
///
/// The scanner hands each line to the check with surrounding whitespace
/// already trimmed. Checks look at one line at a time and carry no scan
/// state; numbering and reporting belong to the [`Scanner`].
///
/// Closures work directly:
///
/// ```
/// use linescan::{LineCheck, Outcome};
///
/// let max_len = |line: &str| {
///     if line.len() > 80 {
///         Outcome::Invalid(format!("line is {} chars, max 80", line.len()))
///     } else if line.is_empty() {
///         Outcome::Skipped
///     } else {
///         Outcome::Valid
///     }
/// };
///
/// assert_eq!(max_len.check(""), Outcome::Skipped);
/// assert_eq!(max_len.check("ok"), Outcome::Valid);
/// ```
///
/// [`Scanner`]: crate::Scanner
pub trait LineCheck {
    /// Checks one trimmed line.
    fn check(&self, line: &str) -> Outcome;
}

impl<F> LineCheck for F
where
    F: Fn(&str) -> Outcome,
{
    fn check(&self, line: &str) -> Outcome {
        self(line)
    }
}
