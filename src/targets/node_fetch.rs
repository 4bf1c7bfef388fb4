//! Node.js `node-fetch` snippet generator

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::Result;
use crate::options::{ConvertOptions, OptionSpec};
use crate::render::{
    BodyFragment, Codegen, FILE_CONTENTS_PLACEHOLDER, SyntaxDescriptor, escape, render_body,
};
use crate::request::{RequestDescriptor, normalize};

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

pub struct NodeFetchCodegen;

impl Codegen for NodeFetchCodegen {
    fn name(&self) -> &'static str {
        "node-fetch"
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

        let mut snippet = String::from("const fetch = require('node-fetch');\n");

        let headers: Vec<_> = request.enabled_headers().collect();
        if !headers.is_empty() {
            snippet.push_str("const { Headers } = require('node-fetch');\n");
        }
        match &body {
            BodyFragment::UrlEncoded { .. } => {
                snippet.push_str("const { URLSearchParams } = require('url');\n");
            }
            BodyFragment::FormData { files, .. } => {
                snippet.push_str("const FormData = require('form-data');\n");
                if !files.is_empty() {
                    snippet.push_str("const fs = require('fs');\n");
                }
            }
            _ => {}
        }
        snippet.push('\n');

        if !headers.is_empty() {
            snippet.push_str("const myHeaders = new Headers();\n");
            for header in &headers {
                snippet.push_str(&format!(
                    "myHeaders.append(\"{}\", \"{}\");\n",
                    escape(&header.key, &SYNTAX, true),
                    escape(&header.value, &SYNTAX, true),
                ));
            }
            snippet.push('\n');
        }

        let mut body_var = None;
        match &body {
            BodyFragment::Raw(text) | BodyFragment::GraphQl(text) => {
                snippet.push_str(&format!("const raw = \"{text}\";\n\n"));
                body_var = Some("raw");
            }
            BodyFragment::UrlEncoded { pairs, .. } => {
                snippet.push_str("const urlencoded = new URLSearchParams();\n");
                for (key, value) in pairs {
                    snippet.push_str(&format!("urlencoded.append(\"{key}\", \"{value}\");\n"));
                }
                snippet.push('\n');
                body_var = Some("urlencoded");
            }
            BodyFragment::FormData { text, files } => {
                snippet.push_str("const formdata = new FormData();\n");
                for (key, value) in text {
                    snippet.push_str(&format!("formdata.append(\"{key}\", \"{value}\");\n"));
                }
                for file in files {
                    snippet.push_str(&format!(
                        "formdata.append(\"{}\", fs.createReadStream(\"{}\"));\n",
                        file.key, file.src,
                    ));
                }
                snippet.push('\n');
                body_var = Some("formdata");
            }
            BodyFragment::FilePlaceholder { .. } => {
                snippet.push_str(&format!("const raw = \"{FILE_CONTENTS_PLACEHOLDER}\";\n\n"));
                body_var = Some("raw");
            }
            BodyFragment::Empty => {}
        }

        snippet.push_str("const requestOptions = {\n");
        snippet.push_str(&format!("{indent}method: \"{}\",\n", request.method));
        if !headers.is_empty() {
            snippet.push_str(&format!("{indent}headers: myHeaders,\n"));
        }
        if let Some(var) = body_var {
            snippet.push_str(&format!("{indent}body: {var},\n"));
        }
        let redirect = if options.follow_redirect {
            "follow"
        } else {
            "manual"
        };
        snippet.push_str(&format!("{indent}redirect: \"{redirect}\"\n"));
        snippet.push_str("};\n\n");

        let url = escape(&request.url.to_string(), &SYNTAX, false);
        if options.request_timeout > 0 {
            // fetch has no timeout of its own; race it against a timer
            snippet.push_str("const promise = Promise.race([\n");
            snippet.push_str(&format!("{indent}fetch(\"{url}\", requestOptions)\n"));
            snippet.push_str(&format!("{indent}{indent}.then(response => response.text()),\n"));
            snippet.push_str(&format!("{indent}new Promise((resolve, reject) =>\n"));
            snippet.push_str(&format!(
                "{indent}{indent}setTimeout(() => reject(new Error(\"Timeout\")), {})\n",
                options.request_timeout
            ));
            snippet.push_str(&format!("{indent})\n"));
            snippet.push_str("]);\n\n");
            snippet.push_str("promise.then(result => console.log(result));\n");
            snippet.push_str("promise.catch(error => console.error(error));");
        } else {
            snippet.push_str(&format!("fetch(\"{url}\", requestOptions)\n"));
            snippet.push_str(&format!(
                "{indent}.then(response => response.text())\n"
            ));
            snippet.push_str(&format!("{indent}.then(result => console.log(result))\n"));
            snippet.push_str(&format!("{indent}.catch(error => console.error(error));"));
        }

        Ok(snippet)
    }
}
