//! A stock per-line check for N-Triples / N-Quads shaped data.
//!
//! [`NtriplesCheck`] validates one line of line-oriented RDF at the token
//! level: subject, predicate, object, optional graph label, terminating
//! period. Blank lines and `#` comments are [`Outcome::Skipped`]. It does not
//! resolve IRIs, expand escapes, or check datatypes; the point is to catch
//! structurally broken lines in bulk exports, not to be a full parser.
//!
//! # Example
//!
//! ```
//! use linescan::{LineCheck, NtriplesCheck, Outcome};
//!
//! let check = NtriplesCheck;
//! assert_eq!(check.check("<a> <b> <c> ."), Outcome::Valid);
//! assert_eq!(check.check(""), Outcome::Skipped);
//! assert!(check.check("garbage").is_invalid());
//! ```

use crate::scan::{LineCheck, Outcome};

/// Token-level line check for N-Triples / N-Quads data.
///
/// Accepted terms:
/// - IRI references: `<...>` (non-empty)
/// - Blank node labels: `_:label`
/// - Literals (object position only): `"..."` with optional `@lang` or
///   `^^<datatype>` suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct NtriplesCheck;

impl LineCheck for NtriplesCheck {
    fn check(&self, line: &str) -> Outcome {
        if line.is_empty() || line.starts_with('#') {
            return Outcome::Skipped;
        }

        let Some(body) = line.strip_suffix('.') else {
            return Outcome::Invalid("missing terminating '.'".into());
        };

        let terms = match split_terms(body.trim_end()) {
            Ok(terms) => terms,
            Err(reason) => return Outcome::Invalid(reason),
        };

        if terms.len() < 3 || terms.len() > 4 {
            return Outcome::Invalid(format!(
                "expected 3 terms (or 4 with graph label), found {}",
                terms.len()
            ));
        }

        if !is_iri(terms[0]) && !is_blank(terms[0]) {
            return Outcome::Invalid(format!("invalid subject: '{}'", terms[0]));
        }
        if !is_iri(terms[1]) {
            return Outcome::Invalid(format!("invalid predicate: '{}'", terms[1]));
        }
        if !is_iri(terms[2]) && !is_blank(terms[2]) && !is_literal(terms[2]) {
            return Outcome::Invalid(format!("invalid object: '{}'", terms[2]));
        }
        if let Some(graph) = terms.get(3) {
            if !is_iri(graph) && !is_blank(graph) {
                return Outcome::Invalid(format!("invalid graph label: '{}'", graph));
            }
        }

        Outcome::Valid
    }
}

/// Splits a line body into whitespace-separated terms, keeping quoted
/// literals (and their `@lang`/`^^<iri>` suffixes) intact.
fn split_terms(body: &str) -> Result<Vec<&str>, String> {
    let bytes = body.as_bytes();
    let mut terms = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        if bytes[i] == b'"' {
            // Scan past the closing quote, honoring backslash escapes.
            i += 1;
            let mut closed = false;
            while i < bytes.len() {
                match bytes[i] {
                    b'\\' => i += 2,
                    b'"' => {
                        i += 1;
                        closed = true;
                        break;
                    }
                    _ => i += 1,
                }
            }
            if !closed {
                return Err("unterminated literal".into());
            }
        }
        // Rest of the term runs to the next whitespace.
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        terms.push(&body[start..i]);
    }

    Ok(terms)
}

fn is_iri(term: &str) -> bool {
    term.len() > 2
        && term.starts_with('<')
        && term.ends_with('>')
        && !term[1..term.len() - 1].contains(['<', '>', '"'])
}

fn is_blank(term: &str) -> bool {
    term.strip_prefix("_:").is_some_and(|label| !label.is_empty())
}

fn is_literal(term: &str) -> bool {
    let Some(rest) = term.strip_prefix('"') else {
        return false;
    };
    // Find the closing quote (escapes already validated by split_terms).
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => break,
            _ => i += 1,
        }
    }
    if i >= bytes.len() {
        return false;
    }

    match &rest[i + 1..] {
        "" => true,
        suffix => {
            if let Some(lang) = suffix.strip_prefix('@') {
                !lang.is_empty()
                    && lang
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-')
            } else if let Some(datatype) = suffix.strip_prefix("^^") {
                is_iri(datatype)
            } else {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(line: &str) -> Outcome {
        NtriplesCheck.check(line)
    }

    #[test]
    fn test_simple_triple() {
        assert_eq!(check("<a> <b> <c> ."), Outcome::Valid);
    }

    #[test]
    fn test_quad_with_graph_label() {
        assert_eq!(check("<a> <b> <c> <g> ."), Outcome::Valid);
    }

    #[test]
    fn test_blank_nodes() {
        assert_eq!(check("_:s <p> _:o ."), Outcome::Valid);
    }

    #[test]
    fn test_literal_object() {
        assert_eq!(check("<a> <b> \"hello world\" ."), Outcome::Valid);
        assert_eq!(check("<a> <b> \"bonjour\"@fr ."), Outcome::Valid);
        assert_eq!(
            check("<a> <b> \"42\"^^<http://www.w3.org/2001/XMLSchema#int> ."),
            Outcome::Valid
        );
    }

    #[test]
    fn test_literal_with_escaped_quote() {
        assert_eq!(check(r#"<a> <b> "say \"hi\"" ."#), Outcome::Valid);
    }

    #[test]
    fn test_empty_and_comment_are_skipped() {
        assert_eq!(check(""), Outcome::Skipped);
        assert_eq!(check("# a comment"), Outcome::Skipped);
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(check("garbage").is_invalid());
        assert!(check("not an rdf line .").is_invalid());
    }

    #[test]
    fn test_missing_period() {
        let outcome = check("<a> <b> <c>");
        assert_eq!(
            outcome,
            Outcome::Invalid("missing terminating '.'".into())
        );
    }

    #[test]
    fn test_wrong_term_count() {
        assert!(check("<a> <b> .").is_invalid());
        assert!(check("<a> <b> <c> <d> <e> .").is_invalid());
    }

    #[test]
    fn test_bad_subject_and_predicate() {
        assert!(check("a <b> <c> .").is_invalid());
        assert!(check("<a> _:b <c> .").is_invalid());
    }

    #[test]
    fn test_literal_in_subject_position_rejected() {
        assert!(check("\"s\" <p> <o> .").is_invalid());
    }

    #[test]
    fn test_unterminated_literal() {
        assert_eq!(
            check("<a> <b> \"oops ."),
            Outcome::Invalid("unterminated literal".into())
        );
    }

    #[test]
    fn test_bad_language_tag() {
        assert!(check("<a> <b> \"x\"@ .").is_invalid());
        assert!(check("<a> <b> \"x\"@fr! .").is_invalid());
    }
}
