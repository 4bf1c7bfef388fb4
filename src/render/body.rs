//! Body-mode dispatch.
//!
//! [`render_body`] turns a normalized body plus content type into a
//! [`BodyFragment`], the escaped, target-syntax-ready pieces a renderer
//! assembles into its snippet. Every strategy is total: malformed JSON and
//! missing payloads fall back to safe defaults instead of erroring, and no
//! strategy ever touches the filesystem.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::options::ConvertOptions;
use crate::render::escape::{escape, escape_opt, percent_encode};
use crate::render::syntax::SyntaxDescriptor;
use crate::request::{BodyDescriptor, FormParamKind, PLACEHOLDER_FILE_PATH};

/// Placeholder text rendered for `file` mode bodies; the engine never reads
/// the actual file at snippet-generation time.
pub const FILE_CONTENTS_PLACEHOLDER: &str = "<file contents here>";

/// A file entry of a formdata body, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFile {
    pub key: String,
    pub src: String,
    pub content_type: String,
}

/// An escaped body fragment, one variant per serialization strategy
#[derive(Debug, Clone, PartialEq)]
pub enum BodyFragment {
    /// Escaped literal; canonicalized first when the content type is JSON
    Raw(String),
    UrlEncoded {
        /// Enabled pairs, escaped for the target syntax
        pairs: Vec<(String, String)>,
        /// The same pairs percent-encoded and joined with `&`
        encoded: String,
    },
    FormData {
        text: Vec<(String, String)>,
        files: Vec<FormFile>,
    },
    /// One `{query, variables}` JSON object, escaped
    GraphQl(String),
    /// Whole-body file upload; `src` is the declared path, never read.
    /// Most targets substitute the contents placeholder, a few reference
    /// the path directly.
    FilePlaceholder { src: String },
    /// No body descriptor; renderers emit their mode-appropriate empty
    /// construct so generated code stays structurally complete
    Empty,
}

/// Dispatch a normalized body to its serialization strategy.
pub fn render_body(
    body: Option<&BodyDescriptor>,
    content_type: Option<&str>,
    syntax: &SyntaxDescriptor,
    options: &ConvertOptions,
) -> BodyFragment {
    let trim = options.trim_request_body;
    match body {
        None => BodyFragment::Empty,
        Some(BodyDescriptor::Raw { raw }) => {
            let text = if trim { raw.trim() } else { raw.as_str() };
            if is_json_content_type(content_type) {
                if let Some(canonical) = canonicalize_json(text, options.json_indent_width()) {
                    return BodyFragment::Raw(escape(&canonical, syntax, false));
                }
            }
            BodyFragment::Raw(escape(text, syntax, false))
        }
        Some(BodyDescriptor::Urlencoded { urlencoded }) => {
            let enabled: Vec<_> = urlencoded.iter().filter(|p| !p.disabled).collect();
            let pairs = enabled
                .iter()
                .map(|p| (escape(&p.key, syntax, trim), escape(&p.value, syntax, trim)))
                .collect();
            let encoded = enabled
                .iter()
                .map(|p| {
                    let key = if trim { p.key.trim() } else { &p.key };
                    let value = if trim { p.value.trim() } else { &p.value };
                    format!("{}={}", percent_encode(key), percent_encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            BodyFragment::UrlEncoded { pairs, encoded }
        }
        Some(BodyDescriptor::Formdata { formdata }) => {
            let mut text = Vec::new();
            let mut files = Vec::new();
            for param in formdata.iter().filter(|p| !p.disabled) {
                match param.kind {
                    FormParamKind::Text => text.push((
                        escape(&param.key, syntax, trim),
                        escape_opt(param.value.as_deref(), syntax, trim),
                    )),
                    FormParamKind::File => {
                        let src = param.src_path().unwrap_or(PLACEHOLDER_FILE_PATH);
                        files.push(FormFile {
                            key: escape(&param.key, syntax, trim),
                            src: escape(src, syntax, trim),
                            content_type: param
                                .content_type
                                .clone()
                                .unwrap_or_else(|| guess_content_type(src).to_string()),
                        });
                    }
                }
            }
            BodyFragment::FormData { text, files }
        }
        Some(BodyDescriptor::Graphql { graphql }) => {
            let query = if trim {
                graphql.query.trim()
            } else {
                graphql.query.as_str()
            };
            // Absent or malformed variables degrade to an empty object
            let variables = graphql
                .variables
                .as_deref()
                .and_then(|v| serde_json::from_str::<serde_json::Value>(v).ok())
                .unwrap_or_else(|| serde_json::json!({}));
            let payload = serde_json::json!({
                "query": query,
                "variables": variables,
            });
            BodyFragment::GraphQl(escape(&payload.to_string(), syntax, false))
        }
        Some(BodyDescriptor::File { file }) => BodyFragment::FilePlaceholder {
            src: escape(
                file.src.as_deref().unwrap_or(PLACEHOLDER_FILE_PATH),
                syntax,
                trim,
            ),
        },
    }
}

static JSON_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+json$").expect("valid regex"));

/// Whether a content type carries a JSON payload. Matches `application/json`
/// and any `+json` suffixed type such as `application/vnd.api+json`.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || JSON_SUFFIX.is_match(&essence)
}

/// Parse and re-serialize a JSON body with the requested indentation.
/// Returns `None` for non-JSON input so callers can fall back to treating
/// the text as an opaque literal.
pub fn canonicalize_json(text: &str, indent_width: usize) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    let indent = " ".repeat(indent_width.max(1));
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).ok()?;
    String::from_utf8(buf).ok()
}

/// Guess a content type from a file path's extension; used for file params
/// that do not declare one.
pub fn guess_content_type(path: &str) -> &'static str {
    let extension = path
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "txt" => "text/plain",
        "csv" => "text/csv",
        "htm" | "html" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "xml" => "text/xml",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "mpeg" => "video/mpeg",
        _ => "application/octet-stream",
    }
}
