//! Python `requests` snippet generator

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::Result;
use crate::options::{ConvertOptions, OptionSpec};
use crate::render::{
    BodyFragment, Codegen, FILE_CONTENTS_PLACEHOLDER, SyntaxDescriptor, escape, render_body,
};
use crate::request::{BodyDescriptor, RequestDescriptor, normalize};

const SYNTAX: SyntaxDescriptor = SyntaxDescriptor::new('"', true);

static OPTIONS: Lazy<Vec<OptionSpec>> = Lazy::new(|| {
    vec![
        OptionSpec::enumerated(
            "indentType",
            "Indent type",
            &["Tab", "Space"],
            "Space",
            "Character used for indentation",
        ),
        OptionSpec::positive_integer(
            "indentCount",
            "Indent count",
            2,
            "Number of indentation characters per level",
        ),
        OptionSpec::positive_integer(
            "requestTimeout",
            "Request timeout",
            0,
            "Time in milliseconds after which the request bails out; 0 means infinite",
        ),
        OptionSpec::boolean(
            "followRedirect",
            "Follow redirects",
            true,
            "Automatically follow HTTP redirects",
        ),
        OptionSpec::boolean(
            "trimRequestBody",
            "Trim request body fields",
            false,
            "Strip leading and trailing whitespace from body fields",
        ),
    ]
});

pub struct PythonRequestsCodegen;

impl Codegen for PythonRequestsCodegen {
    fn name(&self) -> &'static str {
        "python-requests"
    }

    fn options_schema(&self) -> &[OptionSpec] {
        &OPTIONS
    }

    fn convert(&self, request: &RequestDescriptor, options: &Value) -> Result<String> {
        let options = ConvertOptions::resolve(self.options_schema(), options);
        let request = normalize(request);
        let body = render_body(
            request.body.as_ref(),
            request.content_type(),
            &SYNTAX,
            &options,
        );
        let indent = options.indent();
        let is_formdata = matches!(request.body, Some(BodyDescriptor::Formdata { .. }));

        let mut snippet = String::from("import requests\n\n");
        snippet.push_str(&format!(
            "url = \"{}\"\n\n",
            escape(&request.url.to_string(), &SYNTAX, false)
        ));

        let mut has_files = false;
        match &body {
            BodyFragment::Raw(text) | BodyFragment::GraphQl(text) => {
                if text.is_empty() {
                    snippet.push_str("payload = {}\n");
                } else {
                    snippet.push_str(&format!("payload = \"{text}\"\n"));
                }
            }
            BodyFragment::UrlEncoded { encoded, .. } => {
                if encoded.is_empty() {
                    snippet.push_str("payload = {}\n");
                } else {
                    snippet.push_str(&format!("payload = \"{encoded}\"\n"));
                }
            }
            BodyFragment::FormData { text, files } => {
                if text.is_empty() && files.is_empty() {
                    snippet.push_str("payload = {}\nfiles = {}\n");
                } else {
                    let pairs = text
                        .iter()
                        .map(|(k, v)| format!("\"{k}\": \"{v}\""))
                        .collect::<Vec<_>>()
                        .join(", ");
                    snippet.push_str(&format!("payload = {{{pairs}}}\n"));
                    if files.is_empty() {
                        snippet.push_str("files = {}\n");
                    } else {
                        has_files = true;
                        let entries = files
                            .iter()
                            .map(|f| {
                                format!(
                                    "{indent}(\"{key}\", (\"{src}\", open(\"{src}\", \"rb\"), \"{ct}\"))",
                                    key = f.key,
                                    src = f.src,
                                    ct = f.content_type,
                                )
                            })
                            .collect::<Vec<_>>()
                            .join(",\n");
                        snippet.push_str(&format!("files = [\n{entries}\n]\n"));
                    }
                }
            }
            BodyFragment::FilePlaceholder { .. } => {
                snippet.push_str(&format!("payload = \"{FILE_CONTENTS_PLACEHOLDER}\"\n"));
            }
            BodyFragment::Empty => snippet.push_str("payload = {}\n"),
        }

        let headers: Vec<_> = request.enabled_headers().collect();
        if headers.is_empty() {
            snippet.push_str("headers = {}\n\n");
        } else {
            let entries = headers
                .iter()
                .map(|h| {
                    format!(
                        "{indent}\"{}\": \"{}\"",
                        escape(&h.key, &SYNTAX, true),
                        escape(&h.value, &SYNTAX, true),
                    )
                })
                .collect::<Vec<_>>()
                .join(",\n");
            snippet.push_str(&format!("headers = {{\n{entries}\n}}\n\n"));
        }

        snippet.push_str(&format!(
            "response = requests.request(\"{}\", url, headers=headers, data=payload",
            request.method
        ));
        if is_formdata && has_files {
            snippet.push_str(", files=files");
        }
        if options.request_timeout > 0 {
            snippet.push_str(&format!(", timeout={}", options.request_timeout));
        }
        if !options.follow_redirect {
            snippet.push_str(", allow_redirects=False");
        }
        snippet.push_str(")\n\nprint(response.text)\n");

        Ok(snippet)
    }
}
