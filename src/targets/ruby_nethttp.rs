//! Ruby `Net::HTTP` snippet generator

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::Result;
use crate::options::{ConvertOptions, OptionSpec};
use crate::render::{
    BodyFragment, Codegen, FILE_CONTENTS_PLACEHOLDER, SyntaxDescriptor, escape, render_body,
};
use crate::request::{RequestDescriptor, normalize};

const SYNTAX: SyntaxDescriptor = SyntaxDescriptor::new('"', true);

/// Verbs with a ready-made `Net::HTTP` request class
const SUPPORTED_METHODS: &[&str] = &[
    "GET", "POST", "HEAD", "DELETE", "PATCH", "PROPFIND", "PROPPATCH", "PUT", "OPTIONS", "COPY",
    "LOCK", "UNLOCK", "MOVE", "TRACE",
];

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
            "trimRequestBody",
            "Trim request body fields",
            false,
            "Strip leading and trailing whitespace from body fields",
        ),
    ]
});

/// `PROPFIND` becomes `Propfind`, matching the request class names
fn class_case(method: &str) -> String {
    let mut chars = method.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

pub struct RubyNetHttpCodegen;

impl Codegen for RubyNetHttpCodegen {
    fn name(&self) -> &'static str {
        "ruby-nethttp"
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

        let mut snippet = String::from("require \"uri\"\nrequire \"net/http\"\n\n");
        snippet.push_str(&format!(
            "url = URI(\"{}\")\n\n",
            escape(&request.url.to_string(), &SYNTAX, false)
        ));

        let conn = if request.url.is_secure() {
            snippet.push_str("https = Net::HTTP.new(url.host, url.port)\n");
            snippet.push_str("https.use_ssl = true\n");
            "https"
        } else {
            snippet.push_str("http = Net::HTTP.new(url.host, url.port)\n");
            "http"
        };
        if options.request_timeout > 0 {
            // read_timeout takes seconds, the option is in milliseconds
            snippet.push_str(&format!(
                "{conn}.read_timeout = {}\n",
                options.request_timeout.div_ceil(1000)
            ));
        }
        snippet.push('\n');

        let method = request.method.to_uppercase();
        if SUPPORTED_METHODS.contains(&method.as_str()) {
            snippet.push_str(&format!(
                "request = Net::HTTP::{}.new(url)\n",
                class_case(&method)
            ));
        } else {
            // Net::HTTP has no class for this verb; declare one inline.
            let indent = options.indent();
            snippet.push_str(&format!(
                "class Net::HTTP::{klass} < Net::HTTPRequest\n{indent}METHOD = \"{method}\"\n{indent}REQUEST_HAS_BODY = true\n{indent}RESPONSE_HAS_BODY = true\nend\n\n",
                klass = class_case(&method),
            ));
            snippet.push_str(&format!(
                "request = Net::HTTP::{}.new(url)\n",
                class_case(&method)
            ));
        }

        for header in request.enabled_headers() {
            snippet.push_str(&format!(
                "request[\"{}\"] = \"{}\"\n",
                escape(&header.key, &SYNTAX, true),
                escape(&header.value, &SYNTAX, true),
            ));
        }

        match &body {
            BodyFragment::Raw(text) | BodyFragment::GraphQl(text) => {
                snippet.push_str(&format!("request.body = \"{text}\"\n"));
            }
            BodyFragment::UrlEncoded { encoded, .. } => {
                snippet.push_str(&format!("request.body = \"{encoded}\"\n"));
            }
            BodyFragment::FormData { text, files } => {
                let mut entries: Vec<String> = text
                    .iter()
                    .map(|(key, value)| format!("[\"{key}\", \"{value}\"]"))
                    .collect();
                entries.extend(
                    files
                        .iter()
                        .map(|file| format!("[\"{}\", File.open(\"{}\")]", file.key, file.src)),
                );
                snippet.push_str(&format!("form_data = [{}]\n", entries.join(", ")));
                snippet.push_str("request.set_form form_data, \"multipart/form-data\"\n");
            }
            BodyFragment::FilePlaceholder { .. } => {
                snippet.push_str(&format!(
                    "request.body = \"{FILE_CONTENTS_PLACEHOLDER}\"\n"
                ));
            }
            BodyFragment::Empty => {}
        }

        snippet.push_str(&format!("\nresponse = {conn}.request(request)\n"));
        snippet.push_str("puts response.read_body");
        Ok(snippet)
    }
}
