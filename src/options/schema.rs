//! Option schema declarations for snippet renderers.
//!
//! Each renderer publishes a list of [`OptionSpec`] entries describing the
//! options it recognizes. The ids use the wire spelling shared across the
//! renderer corpus (`indentType`, `requestTimeout`, ...), so option objects
//! written for one renderer degrade gracefully for another.

use serde::Serialize;
use serde_json::Value;

/// Declared type of an option value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKind {
    Boolean,
    PositiveInteger,
    Enum,
    /// Open extension point: values pass through unvalidated
    String,
}

/// A single recognized option
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSpec {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_options: Option<Vec<String>>,
    pub description: String,
}

impl OptionSpec {
    pub fn boolean(id: &str, name: &str, default: bool, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: OptionKind::Boolean,
            default: Value::Bool(default),
            available_options: None,
            description: description.to_string(),
        }
    }

    pub fn positive_integer(id: &str, name: &str, default: u64, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: OptionKind::PositiveInteger,
            default: Value::from(default),
            available_options: None,
            description: description.to_string(),
        }
    }

    pub fn enumerated(
        id: &str,
        name: &str,
        available: &[&str],
        default: &str,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: OptionKind::Enum,
            default: Value::from(default),
            available_options: Some(available.iter().map(|s| s.to_string()).collect()),
            description: description.to_string(),
        }
    }

    pub fn string(id: &str, name: &str, default: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: OptionKind::String,
            default: Value::from(default),
            available_options: None,
            description: description.to_string(),
        }
    }

    /// Whether a user-supplied value is valid for this option
    pub fn accepts(&self, value: &Value) -> bool {
        match self.kind {
            OptionKind::Boolean => value.is_boolean(),
            OptionKind::PositiveInteger => value.as_f64().is_some_and(|n| n >= 0.0),
            OptionKind::Enum => value.as_str().is_some_and(|s| {
                self.available_options
                    .as_ref()
                    .is_some_and(|opts| opts.iter().any(|o| o == s))
            }),
            OptionKind::String => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolean_accepts_only_booleans() {
        let spec = OptionSpec::boolean("followRedirect", "Follow redirect", true, "");
        assert!(spec.accepts(&json!(false)));
        assert!(!spec.accepts(&json!("true")));
        assert!(!spec.accepts(&json!(1)));
        assert!(!spec.accepts(&json!(null)));
    }

    #[test]
    fn test_positive_integer_accepts_non_negative_numbers() {
        let spec = OptionSpec::positive_integer("requestTimeout", "Request timeout", 0, "");
        assert!(spec.accepts(&json!(0)));
        assert!(spec.accepts(&json!(5000)));
        assert!(spec.accepts(&json!(2.5)));
        assert!(!spec.accepts(&json!(-5)));
        assert!(!spec.accepts(&json!("5")));
    }

    #[test]
    fn test_enum_accepts_only_members() {
        let spec = OptionSpec::enumerated("indentType", "Indent type", &["Tab", "Space"], "Space", "");
        assert!(spec.accepts(&json!("Tab")));
        assert!(!spec.accepts(&json!("tab")));
        assert!(!spec.accepts(&json!("Newline")));
        assert!(!spec.accepts(&json!(4)));
    }

    #[test]
    fn test_string_passes_anything_through() {
        let spec = OptionSpec::string("customPrefix", "Custom prefix", "", "");
        assert!(spec.accepts(&json!("x")));
        assert!(spec.accepts(&json!(42)));
        assert!(spec.accepts(&json!({"nested": true})));
    }

    #[test]
    fn test_spec_serializes_with_wire_field_names() {
        let spec = OptionSpec::enumerated(
            "indentType",
            "Indent type",
            &["Tab", "Space"],
            "Space",
            "Indentation character",
        );
        let json = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(json["id"], "indentType");
        assert_eq!(json["type"], "enum");
        assert_eq!(json["availableOptions"], json!(["Tab", "Space"]));
        assert_eq!(json["default"], "Space");
    }
}
