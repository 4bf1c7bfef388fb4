//! Core types for the request domain
//!
//! The shapes here follow the plain-data view of a normalized HTTP request:
//! method, URL, an ordered header list, and a body tagged by mode. These are
//! caller-owned values; the engine reads them and derives new values but
//! never mutates them in place.

use serde::{Deserialize, Serialize};

use crate::request::url::UrlParts;

/// An HTTP request description to render into a snippet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub method: String,
    pub url: UrlParts,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyDescriptor>,
}

/// A single request header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

/// Request body, tagged by mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BodyDescriptor {
    Raw {
        #[serde(default)]
        raw: String,
    },
    Urlencoded {
        #[serde(default)]
        urlencoded: Vec<UrlEncodedParam>,
    },
    Formdata {
        #[serde(default)]
        formdata: Vec<FormParam>,
    },
    Graphql { graphql: GraphqlBody },
    File { file: FileBody },
}

impl BodyDescriptor {
    /// The wire name of this body mode
    pub fn mode(&self) -> &'static str {
        match self {
            BodyDescriptor::Raw { .. } => "raw",
            BodyDescriptor::Urlencoded { .. } => "urlencoded",
            BodyDescriptor::Formdata { .. } => "formdata",
            BodyDescriptor::Graphql { .. } => "graphql",
            BodyDescriptor::File { .. } => "file",
        }
    }
}

/// A single `key=value` pair of an urlencoded body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEncodedParam {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

/// Kind of a formdata parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormParamKind {
    Text,
    File,
}

/// Source of a file-kind formdata parameter.
///
/// Request files in the wild carry a single path, an array of paths, or
/// something malformed entirely; all three deserialize here and the
/// normalizer reduces them to single paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileSource {
    Path(String),
    Paths(Vec<String>),
    Other(serde_json::Value),
}

/// A single formdata parameter
///
/// Invariant after normalization: for file params, `src` is always
/// `FileSource::Path`; multi-file array sources are expanded into separate
/// params sharing the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormParam {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: FormParamKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<FileSource>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(
        default,
        rename = "contentType",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_type: Option<String>,
}

impl FormParam {
    /// Copy of this param with `src` replaced by a single path
    pub fn with_src(&self, path: String) -> Self {
        Self {
            src: Some(FileSource::Path(path)),
            ..self.clone()
        }
    }

    /// The single source path, if this param has been normalized
    pub fn src_path(&self) -> Option<&str> {
        match &self.src {
            Some(FileSource::Path(p)) => Some(p),
            _ => None,
        }
    }
}

/// GraphQL body payload; `variables` holds JSON as a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlBody {
    #[serde(default)]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

/// File body payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl RequestDescriptor {
    /// Look up the value of the first enabled header matching `key`
    /// (case-insensitive)
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| !h.disabled && h.key.eq_ignore_ascii_case(key))
            .map(|h| h.value.as_str())
    }

    /// The enabled `Content-Type` header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}
