//! Option schema, sanitization, and the typed options renderers consume

pub mod sanitize;
pub mod schema;

pub use sanitize::{bool_option, integer_option, sanitize_options, string_option};
pub use schema::{OptionKind, OptionSpec};

use serde_json::Value;

/// Indentation character for generated snippets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentType {
    Tab,
    #[default]
    Space,
}

impl IndentType {
    fn from_option(value: &str) -> Self {
        if value.eq_ignore_ascii_case("tab") {
            IndentType::Tab
        } else {
            IndentType::Space
        }
    }

    fn unit(self) -> char {
        match self {
            IndentType::Tab => '\t',
            IndentType::Space => ' ',
        }
    }
}

/// Resolved conversion options.
///
/// Renderers consume these compile-time-checked fields rather than string
/// ids; a field whose id is absent from the renderer's schema keeps its
/// default here.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub indent_type: IndentType,
    pub indent_count: u64,
    /// Milliseconds; 0 means no timeout
    pub request_timeout: u64,
    pub follow_redirect: bool,
    pub trim_request_body: bool,
    pub include_boilerplate: bool,
    pub multi_line: bool,
    pub long_format: bool,
    pub line_continuation: String,
    pub silent: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent_type: IndentType::Space,
            indent_count: 4,
            request_timeout: 0,
            follow_redirect: true,
            trim_request_body: false,
            include_boilerplate: true,
            multi_line: true,
            long_format: true,
            line_continuation: "\\".to_string(),
            silent: false,
        }
    }
}

impl ConvertOptions {
    /// Sanitize user options against a renderer's schema and map them onto
    /// typed fields.
    pub fn resolve(schema: &[OptionSpec], user: &Value) -> Self {
        let map = sanitize_options(user, schema);
        let defaults = Self::default();
        Self {
            indent_type: IndentType::from_option(&string_option(&map, "indentType", "Space")),
            indent_count: integer_option(&map, "indentCount", defaults.indent_count),
            request_timeout: integer_option(&map, "requestTimeout", defaults.request_timeout),
            follow_redirect: bool_option(&map, "followRedirect", defaults.follow_redirect),
            trim_request_body: bool_option(&map, "trimRequestBody", defaults.trim_request_body),
            include_boilerplate: bool_option(
                &map,
                "includeBoilerplate",
                defaults.include_boilerplate,
            ),
            multi_line: bool_option(&map, "multiLine", defaults.multi_line),
            long_format: bool_option(&map, "longFormat", defaults.long_format),
            line_continuation: string_option(
                &map,
                "lineContinuationCharacter",
                &defaults.line_continuation,
            ),
            silent: bool_option(&map, "silent", defaults.silent),
        }
    }

    /// One level of indentation as a string
    pub fn indent(&self) -> String {
        std::iter::repeat_n(self.indent_type.unit(), self.indent_count as usize).collect()
    }

    /// Width in characters used when pretty-printing embedded JSON
    pub fn json_indent_width(&self) -> usize {
        match self.indent_type {
            IndentType::Tab => 1,
            IndentType::Space => self.indent_count as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Vec<OptionSpec> {
        vec![
            OptionSpec::enumerated("indentType", "Indent type", &["Tab", "Space"], "Space", ""),
            OptionSpec::positive_integer("indentCount", "Indent count", 2, ""),
            OptionSpec::positive_integer("requestTimeout", "Request timeout", 0, ""),
            OptionSpec::boolean("followRedirect", "Follow redirect", true, ""),
            OptionSpec::boolean("trimRequestBody", "Trim request body", false, ""),
        ]
    }

    #[test]
    fn test_resolve_uses_schema_defaults_for_invalid_input() {
        let options =
            ConvertOptions::resolve(&schema(), &json!({"indentCount": -5, "unknownOpt": "x"}));
        assert_eq!(options.indent_count, 2);
        assert_eq!(options.indent_type, IndentType::Space);
        assert!(options.follow_redirect);
    }

    #[test]
    fn test_resolve_keeps_valid_values() {
        let options = ConvertOptions::resolve(
            &schema(),
            &json!({
                "indentType": "Tab",
                "indentCount": 1,
                "requestTimeout": 5000,
                "trimRequestBody": true
            }),
        );
        assert_eq!(options.indent_type, IndentType::Tab);
        assert_eq!(options.indent(), "\t");
        assert_eq!(options.request_timeout, 5000);
        assert!(options.trim_request_body);
    }

    #[test]
    fn test_ids_absent_from_schema_keep_struct_defaults() {
        // The schema above declares no curl-style options at all.
        let options = ConvertOptions::resolve(&schema(), &json!({"multiLine": false}));
        assert!(options.multi_line);
        assert_eq!(options.line_continuation, "\\");
    }

    #[test]
    fn test_indent_string() {
        let options = ConvertOptions::resolve(&schema(), &json!({"indentCount": 3}));
        assert_eq!(options.indent(), "   ");
        assert_eq!(options.json_indent_width(), 3);
    }
}
