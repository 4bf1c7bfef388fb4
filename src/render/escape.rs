//! String escaping for generated snippets.
//!
//! Escaping is driven by a [`SyntaxDescriptor`]: backslashes are doubled,
//! the target's delimiter is escaped, and for single-line string literals
//! embedded newlines become literal `\n` sequences. Trimming, when
//! requested, always happens before escaping; trimming escaped content
//! would corrupt escape sequences at the boundary.

use crate::render::syntax::SyntaxDescriptor;

/// Escape `input` for embedding in a target string literal.
pub fn escape(input: &str, syntax: &SyntaxDescriptor, trim: bool) -> String {
    let input = if trim { input.trim() } else { input };
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '\\' {
            out.push_str("\\\\");
            continue;
        }
        if ch == syntax.quote {
            out.push('\\');
            out.push(ch);
            continue;
        }
        if syntax.single_line_strings {
            match ch {
                '\n' => {
                    out.push_str("\\n");
                    continue;
                }
                '\r' => {
                    out.push_str("\\r");
                    continue;
                }
                _ => {}
            }
        }
        if let Some((_, replacement)) = syntax.extra_escapes.iter().find(|(c, _)| *c == ch) {
            out.push_str(replacement);
            continue;
        }
        out.push(ch);
    }
    out
}

/// Escape an optional value; absent input escapes to the empty string
/// rather than failing.
pub fn escape_opt(input: Option<&str>, syntax: &SyntaxDescriptor, trim: bool) -> String {
    input.map(|s| escape(s, syntax, trim)).unwrap_or_default()
}

/// Percent-encode a string for use inside an `application/x-www-form-urlencoded`
/// payload. The output is delimiter-safe for every target syntax.
pub fn percent_encode(input: &str) -> String {
    url::form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOUBLE_QUOTED: SyntaxDescriptor = SyntaxDescriptor::new('"', true);
    const SINGLE_QUOTED: SyntaxDescriptor = SyntaxDescriptor::new('\'', true);
    const MULTI_LINE: SyntaxDescriptor = SyntaxDescriptor::new('"', false);

    #[test]
    fn test_backslashes_doubled_and_delimiter_escaped() {
        assert_eq!(
            escape(r#"a "quoted" \path"#, &DOUBLE_QUOTED, false),
            r#"a \"quoted\" \\path"#
        );
        // The other delimiter is untouched
        assert_eq!(
            escape(r#"it's "fine""#, &SINGLE_QUOTED, false),
            r#"it\'s "fine""#
        );
    }

    #[test]
    fn test_newlines_become_literal_sequences_in_single_line_strings() {
        assert_eq!(escape("a\nb\r\nc", &DOUBLE_QUOTED, false), "a\\nb\\r\\nc");
        assert_eq!(escape("a\nb", &MULTI_LINE, false), "a\nb");
    }

    #[test]
    fn test_trim_happens_before_escaping() {
        assert_eq!(escape("  spaced  ", &DOUBLE_QUOTED, true), "spaced");
        assert_eq!(escape("  spaced  ", &DOUBLE_QUOTED, false), "  spaced  ");
        // Trailing whitespace inside an escaped newline survives trimming
        assert_eq!(escape(" a\nb ", &DOUBLE_QUOTED, true), "a\\nb");
    }

    #[test]
    fn test_extra_escapes_applied_after_standard_rules() {
        const BACKTICKED: SyntaxDescriptor =
            SyntaxDescriptor::new('"', true).with_extra_escapes(&[('`', "\\`")]);
        assert_eq!(escape("a `tick`", &BACKTICKED, false), "a \\`tick\\`");
    }

    #[test]
    fn test_absent_input_escapes_to_empty_string() {
        assert_eq!(escape_opt(None, &DOUBLE_QUOTED, true), "");
        assert_eq!(escape_opt(Some("x"), &DOUBLE_QUOTED, false), "x");
    }

    #[test]
    fn test_percent_encode_is_quote_safe() {
        let encoded = percent_encode(r#"a "b" & c'd"#);
        assert!(!encoded.contains('"'));
        assert!(!encoded.contains('\''));
        assert!(!encoded.contains('&'));
        assert_eq!(percent_encode("hello world"), "hello+world");
    }
}
