//! Request normalization: formdata flattening and Content-Type inference.
//!
//! [`normalize`] is an explicit immutable transform: it returns a new
//! [`NormalizedRequest`] and leaves the caller's descriptor untouched, so a
//! descriptor can be shared across concurrent conversions without cloning.

use crate::request::types::{
    BodyDescriptor, FileSource, FormParam, FormParamKind, Header, RequestDescriptor,
};
use crate::request::url::UrlParts;

/// Placeholder path substituted for empty or malformed file sources, so
/// every renderer always has a concrete string to print.
pub const PLACEHOLDER_FILE_PATH: &str = "/path/to/file";

/// A request after normalization.
///
/// Guarantees: every file-kind formdata param carries a single string `src`,
/// and a body of mode `file` or `graphql` implies an enabled `Content-Type`
/// header.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub method: String,
    pub url: UrlParts,
    pub headers: Vec<Header>,
    pub body: Option<BodyDescriptor>,
}

impl NormalizedRequest {
    /// All enabled headers, in order
    pub fn enabled_headers(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter().filter(|h| !h.disabled)
    }

    /// The enabled `Content-Type` header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| !h.disabled && h.key.eq_ignore_ascii_case("Content-Type"))
            .map(|h| h.value.as_str())
    }
}

/// Normalize a request descriptor into the shape renderers consume.
pub fn normalize(request: &RequestDescriptor) -> NormalizedRequest {
    let body = request.body.as_ref().map(|body| match body {
        BodyDescriptor::Formdata { formdata } => BodyDescriptor::Formdata {
            formdata: flatten_formdata(formdata),
        },
        other => other.clone(),
    });

    let mut headers = request.headers.clone();
    if request.content_type().is_none() {
        if let Some(inferred) = inferred_content_type(body.as_ref()) {
            headers.push(Header {
                key: "Content-Type".to_string(),
                value: inferred.to_string(),
                disabled: false,
            });
        }
    }

    NormalizedRequest {
        method: request.method.clone(),
        url: request.url.clone(),
        headers,
        body,
    }
}

/// Content type implied by the body mode when the caller supplied none.
/// Other modes get mode-specific headers from the renderer itself.
fn inferred_content_type(body: Option<&BodyDescriptor>) -> Option<&'static str> {
    match body? {
        BodyDescriptor::File { .. } => Some("text/plain"),
        BodyDescriptor::Graphql { .. } => Some("application/json"),
        _ => None,
    }
}

/// Expand multi-file formdata params into one param per file.
///
/// An array `src` of N paths becomes N params sharing key, disabled flag,
/// and content type, inserted at the original position in source order. An
/// empty array or a `src` that is neither string nor array becomes a single
/// param with [`PLACEHOLDER_FILE_PATH`]. Running this on already-flattened
/// input is a no-op.
pub fn flatten_formdata(params: &[FormParam]) -> Vec<FormParam> {
    let mut flattened = Vec::with_capacity(params.len());
    for param in params {
        if param.kind != FormParamKind::File {
            flattened.push(param.clone());
            continue;
        }
        match &param.src {
            Some(FileSource::Path(_)) => flattened.push(param.clone()),
            Some(FileSource::Paths(paths)) if !paths.is_empty() => {
                for path in paths {
                    flattened.push(param.with_src(path.clone()));
                }
            }
            _ => flattened.push(param.with_src(PLACEHOLDER_FILE_PATH.to_string())),
        }
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_param(key: &str, src: Option<FileSource>) -> FormParam {
        FormParam {
            key: key.to_string(),
            kind: FormParamKind::File,
            value: None,
            src,
            disabled: false,
            content_type: None,
        }
    }

    fn text_param(key: &str, value: &str) -> FormParam {
        FormParam {
            key: key.to_string(),
            kind: FormParamKind::Text,
            value: Some(value.to_string()),
            src: None,
            disabled: false,
            content_type: None,
        }
    }

    fn request_with_body(body: Option<BodyDescriptor>) -> RequestDescriptor {
        RequestDescriptor {
            method: "POST".to_string(),
            url: UrlParts::parse("https://example.com/upload").expect("url"),
            headers: vec![],
            body,
        }
    }

    #[test]
    fn test_multi_file_expansion_preserves_count_and_order() {
        let params = vec![
            text_param("name", "value"),
            file_param(
                "f",
                Some(FileSource::Paths(vec![
                    "/a.txt".to_string(),
                    "/b.txt".to_string(),
                    "/c.txt".to_string(),
                ])),
            ),
            text_param("after", "x"),
        ];
        let flattened = flatten_formdata(&params);
        assert_eq!(flattened.len(), 5);
        assert_eq!(flattened[0].key, "name");
        assert_eq!(flattened[1].src_path(), Some("/a.txt"));
        assert_eq!(flattened[2].src_path(), Some("/b.txt"));
        assert_eq!(flattened[3].src_path(), Some("/c.txt"));
        assert!(flattened[1..4].iter().all(|p| p.key == "f"));
        assert_eq!(flattened[4].key, "after");
    }

    #[test]
    fn test_empty_array_and_malformed_src_get_placeholder() {
        for src in [
            Some(FileSource::Paths(vec![])),
            Some(FileSource::Other(serde_json::json!({}))),
            None,
        ] {
            let flattened = flatten_formdata(&[file_param("f", src)]);
            assert_eq!(flattened.len(), 1);
            assert_eq!(flattened[0].src_path(), Some(PLACEHOLDER_FILE_PATH));
        }
    }

    #[test]
    fn test_flattening_is_idempotent() {
        let params = vec![
            file_param(
                "f",
                Some(FileSource::Paths(vec![
                    "/a.txt".to_string(),
                    "/b.txt".to_string(),
                ])),
            ),
            file_param("g", Some(FileSource::Paths(vec![]))),
            text_param("t", "v"),
        ];
        let once = flatten_formdata(&params);
        let twice = flatten_formdata(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_expansion_copies_param_attributes() {
        let mut param = file_param(
            "f",
            Some(FileSource::Paths(vec![
                "/a.txt".to_string(),
                "/b.txt".to_string(),
            ])),
        );
        param.disabled = true;
        param.content_type = Some("text/csv".to_string());

        let flattened = flatten_formdata(&[param]);
        assert_eq!(flattened.len(), 2);
        for p in &flattened {
            assert_eq!(p.key, "f");
            assert!(p.disabled);
            assert_eq!(p.content_type.as_deref(), Some("text/csv"));
        }
    }

    #[test]
    fn test_normalize_infers_content_type_for_graphql_and_file() {
        let graphql = normalize(&request_with_body(Some(BodyDescriptor::Graphql {
            graphql: crate::request::types::GraphqlBody {
                query: "{ pets }".to_string(),
                variables: None,
            },
        })));
        assert_eq!(graphql.content_type(), Some("application/json"));

        let file = normalize(&request_with_body(Some(BodyDescriptor::File {
            file: crate::request::types::FileBody { src: None },
        })));
        assert_eq!(file.content_type(), Some("text/plain"));
    }

    #[test]
    fn test_normalize_does_not_infer_for_raw_or_absent_body() {
        let raw = normalize(&request_with_body(Some(BodyDescriptor::Raw {
            raw: "hello".to_string(),
        })));
        assert_eq!(raw.content_type(), None);

        let absent = normalize(&request_with_body(None));
        assert_eq!(absent.content_type(), None);
        assert!(absent.body.is_none());
    }

    #[test]
    fn test_normalize_respects_explicit_content_type() {
        let mut request = request_with_body(Some(BodyDescriptor::Graphql {
            graphql: crate::request::types::GraphqlBody {
                query: "{ pets }".to_string(),
                variables: None,
            },
        }));
        request.headers.push(Header {
            key: "Content-Type".to_string(),
            value: "application/graphql".to_string(),
            disabled: false,
        });
        let normalized = normalize(&request);
        assert_eq!(normalized.content_type(), Some("application/graphql"));
        assert_eq!(normalized.headers.len(), 1);
    }

    #[test]
    fn test_normalize_leaves_caller_descriptor_untouched() {
        let request = request_with_body(Some(BodyDescriptor::Formdata {
            formdata: vec![file_param(
                "f",
                Some(FileSource::Paths(vec![
                    "/a.txt".to_string(),
                    "/b.txt".to_string(),
                ])),
            )],
        }));
        let normalized = normalize(&request);

        // Original still holds the array source; normalized holds two params.
        match &request.body {
            Some(BodyDescriptor::Formdata { formdata }) => {
                assert_eq!(formdata.len(), 1);
                assert!(matches!(formdata[0].src, Some(FileSource::Paths(_))));
            }
            other => panic!("unexpected body: {other:?}"),
        }
        match &normalized.body {
            Some(BodyDescriptor::Formdata { formdata }) => assert_eq!(formdata.len(), 2),
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
