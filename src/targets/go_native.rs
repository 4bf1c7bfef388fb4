//! Go `net/http` snippet generator

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
            "Tab",
            "Character used for indentation",
        ),
        OptionSpec::positive_integer(
            "indentCount",
            "Indent count",
            1,
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
        OptionSpec::boolean(
            "includeBoilerplate",
            "Include boilerplate",
            true,
            "Wrap the snippet in a runnable package main program",
        ),
    ]
});

pub struct GoNativeCodegen;

impl Codegen for GoNativeCodegen {
    fn name(&self) -> &'static str {
        "go-native"
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

        let mut imports = vec!["fmt", "net/http", "io"];
        let mut lines: Vec<String> = Vec::new();
        lines.push(format!(
            "url := \"{}\"",
            escape(&request.url.to_string(), &SYNTAX, false)
        ));
        lines.push(format!("method := \"{}\"", request.method));
        lines.push(String::new());

        let mut has_payload = true;
        let mut multipart_writer = false;
        match &body {
            BodyFragment::Raw(text) | BodyFragment::GraphQl(text) => {
                imports.push("strings");
                lines.push(format!("payload := strings.NewReader(\"{text}\")"));
            }
            BodyFragment::UrlEncoded { encoded, .. } => {
                imports.push("strings");
                lines.push(format!("payload := strings.NewReader(\"{encoded}\")"));
            }
            BodyFragment::FormData { text, files } => {
                imports.extend(["bytes", "mime/multipart"]);
                multipart_writer = true;
                lines.push("payload := &bytes.Buffer{}".to_string());
                lines.push("writer := multipart.NewWriter(payload)".to_string());
                for (key, value) in text {
                    lines.push(format!("_ = writer.WriteField(\"{key}\", \"{value}\")"));
                }
                if !files.is_empty() {
                    imports.extend(["os", "path/filepath"]);
                }
                for file in files {
                    lines.push(format!("file, errFile := os.Open(\"{}\")", file.src));
                    lines.push("defer file.Close()".to_string());
                    lines.push(format!(
                        "part, errFile := writer.CreateFormFile(\"{}\", filepath.Base(\"{}\"))",
                        file.key, file.src,
                    ));
                    lines.push("_, errFile = io.Copy(part, file)".to_string());
                    lines.push("if errFile != nil {".to_string());
                    lines.push(format!("{indent}fmt.Println(errFile)"));
                    lines.push(format!("{indent}return"));
                    lines.push("}".to_string());
                }
                lines.push("err := writer.Close()".to_string());
                lines.push("if err != nil {".to_string());
                lines.push(format!("{indent}fmt.Println(err)"));
                lines.push(format!("{indent}return"));
                lines.push("}".to_string());
            }
            BodyFragment::FilePlaceholder { .. } => {
                imports.push("strings");
                lines.push(format!(
                    "payload := strings.NewReader(\"{FILE_CONTENTS_PLACEHOLDER}\")"
                ));
            }
            BodyFragment::Empty => has_payload = false,
        }
        if has_payload {
            lines.push(String::new());
        }

        let mut client_fields: Vec<String> = Vec::new();
        if !options.follow_redirect {
            client_fields.push(format!(
                "CheckRedirect: func(req *http.Request, via []*http.Request) error {{\n{indent}{indent}return http.ErrUseLastResponse\n{indent}}},"
            ));
        }
        if options.request_timeout > 0 {
            imports.push("time");
            client_fields.push(format!(
                "Timeout: time.Duration({}) * time.Millisecond,",
                options.request_timeout
            ));
        }
        if client_fields.is_empty() {
            lines.push("client := &http.Client{}".to_string());
        } else {
            lines.push("client := &http.Client{".to_string());
            for field in client_fields {
                lines.push(format!("{indent}{field}"));
            }
            lines.push("}".to_string());
        }

        let payload_arg = if has_payload { "payload" } else { "nil" };
        lines.push(format!("req, err := http.NewRequest(method, url, {payload_arg})"));
        lines.push(String::new());
        lines.push("if err != nil {".to_string());
        lines.push(format!("{indent}fmt.Println(err)"));
        lines.push(format!("{indent}return"));
        lines.push("}".to_string());

        for header in request.enabled_headers() {
            lines.push(format!(
                "req.Header.Add(\"{}\", \"{}\")",
                escape(&header.key, &SYNTAX, true),
                escape(&header.value, &SYNTAX, true),
            ));
        }
        if multipart_writer {
            lines.push("req.Header.Set(\"Content-Type\", writer.FormDataContentType())".to_string());
        }
        lines.push(String::new());

        lines.push("res, err := client.Do(req)".to_string());
        lines.push("if err != nil {".to_string());
        lines.push(format!("{indent}fmt.Println(err)"));
        lines.push(format!("{indent}return"));
        lines.push("}".to_string());
        lines.push("defer res.Body.Close()".to_string());
        lines.push(String::new());
        lines.push("body, err := io.ReadAll(res.Body)".to_string());
        lines.push("if err != nil {".to_string());
        lines.push(format!("{indent}fmt.Println(err)"));
        lines.push(format!("{indent}return"));
        lines.push("}".to_string());
        lines.push("fmt.Println(string(body))".to_string());

        if !options.include_boilerplate {
            return Ok(lines.join("\n"));
        }

        imports.sort_unstable();
        imports.dedup();
        let import_block = imports
            .iter()
            .map(|i| format!("{indent}\"{i}\""))
            .collect::<Vec<_>>()
            .join("\n");
        let main_body = lines
            .iter()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{indent}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!(
            "package main\n\nimport (\n{import_block}\n)\n\nfunc main() {{\n\n{main_body}\n}}"
        ))
    }
}
