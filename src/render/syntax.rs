//! Per-target syntax descriptors.
//!
//! Each concrete target supplies one [`SyntaxDescriptor`] instead of
//! reimplementing escaping and body dispatch: the descriptor captures the
//! string-delimiter character, whether string literals are single-line
//! (forcing embedded newlines into `\n` sequences), and any extra
//! character replacements the target syntax needs.

/// How a target language writes string literals
#[derive(Debug, Clone, Copy)]
pub struct SyntaxDescriptor {
    /// The string delimiter to escape inside literals
    pub quote: char,
    /// Whether literals are single-line, turning raw newlines into `\n`
    pub single_line_strings: bool,
    /// Extra character replacements applied after the standard rules
    pub extra_escapes: &'static [(char, &'static str)],
}

impl SyntaxDescriptor {
    pub const fn new(quote: char, single_line_strings: bool) -> Self {
        Self {
            quote,
            single_line_strings,
            extra_escapes: &[],
        }
    }

    pub const fn with_extra_escapes(mut self, extra: &'static [(char, &'static str)]) -> Self {
        self.extra_escapes = extra;
        self
    }
}
