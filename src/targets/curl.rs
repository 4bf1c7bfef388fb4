//! curl command-line snippet generator

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::Result;
use crate::options::{ConvertOptions, OptionSpec};
use crate::render::{BodyFragment, Codegen, SyntaxDescriptor, escape, render_body};
use crate::request::{RequestDescriptor, normalize};

// Double-quoted shell string; newlines are legal inside it, so literals
// stay multi-line.
const SYNTAX: SyntaxDescriptor = SyntaxDescriptor::new('"', false);

static OPTIONS: Lazy<Vec<OptionSpec>> = Lazy::new(|| {
    vec![
        OptionSpec::boolean(
            "multiLine",
            "Generate multiline snippet",
            true,
            "Split the command into multiple lines, one option per line",
        ),
        OptionSpec::boolean(
            "longFormat",
            "Use long form options",
            true,
            "Use --header instead of -H and so on for every option",
        ),
        OptionSpec::enumerated(
            "lineContinuationCharacter",
            "Line continuation character",
            &["\\", "^"],
            "\\",
            "Character used to continue a multiline command onto the next line",
        ),
        OptionSpec::boolean("silent", "Silent mode", false, "Run curl in silent mode"),
        OptionSpec::enumerated(
            "indentType",
            "Indent type",
            &["Tab", "Space"],
            "Space",
            "Character used for indenting continuation lines",
        ),
        OptionSpec::positive_integer(
            "indentCount",
            "Indent count",
            4,
            "Number of indentation characters per continuation line",
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

/// Map a short option to its long form when requested
fn form(short: &'static str, long_format: bool) -> &'static str {
    if !long_format {
        return short;
    }
    match short {
        "-s" => "--silent",
        "-L" => "--location",
        "-m" => "--max-time",
        "-I" => "--head",
        "-X" => "--request",
        "-H" => "--header",
        "-d" => "--data",
        "-F" => "--form",
        _ => short,
    }
}

pub struct CurlCodegen;

impl Codegen for CurlCodegen {
    fn name(&self) -> &'static str {
        "curl"
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
        let long = options.long_format;
        let separator = if options.multi_line {
            format!(" {}\n{}", options.line_continuation, options.indent())
        } else {
            " ".to_string()
        };

        let mut snippet = String::from("curl");
        if options.silent {
            snippet.push_str(&format!(" {}", form("-s", long)));
        }
        if options.follow_redirect {
            snippet.push_str(&format!(" {}", form("-L", long)));
        }
        if options.request_timeout > 0 {
            snippet.push_str(&format!(" {} {}", form("-m", long), options.request_timeout));
        }

        let url = escape(&request.url.to_string(), &SYNTAX, false);
        if request.method == "HEAD" {
            snippet.push_str(&format!(" {} \"{url}\"", form("-I", long)));
        } else {
            snippet.push_str(&format!(" {} {} \"{url}\"", form("-X", long), request.method));
        }

        for header in request.enabled_headers() {
            snippet.push_str(&format!(
                "{separator}{} \"{}: {}\"",
                form("-H", long),
                escape(&header.key, &SYNTAX, true),
                escape(&header.value, &SYNTAX, true),
            ));
        }

        match body {
            BodyFragment::Raw(text) | BodyFragment::GraphQl(text) => {
                snippet.push_str(&format!("{separator}{} \"{text}\"", form("-d", long)));
            }
            BodyFragment::UrlEncoded { encoded, .. } => {
                snippet.push_str(&format!("{separator}{} \"{encoded}\"", form("-d", long)));
            }
            BodyFragment::FormData { text, files } => {
                for (key, value) in text {
                    snippet.push_str(&format!(
                        "{separator}{} \"{key}={value}\"",
                        form("-F", long)
                    ));
                }
                for file in files {
                    snippet.push_str(&format!(
                        "{separator}{} \"{}=@{}\"",
                        form("-F", long),
                        file.key,
                        file.src,
                    ));
                }
            }
            BodyFragment::FilePlaceholder { src } => {
                snippet.push_str(&format!("{separator}--data-binary \"@{src}\""));
            }
            BodyFragment::Empty => {}
        }

        Ok(snippet)
    }
}
