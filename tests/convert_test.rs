//! End-to-end conversion tests that drive requests through the public
//! registry exactly the way the CLI does.

use serde_json::json;
use snipgen::request::RequestDescriptor;
use snipgen::targets::{CodegenRegistry, Target};

fn convert(target: Target, request: serde_json::Value, options: serde_json::Value) -> String {
    let request: RequestDescriptor = serde_json::from_value(request).expect("request");
    CodegenRegistry::new()
        .get(target)
        .expect("codegen")
        .convert(&request, &options)
        .expect("convert")
}

#[test]
fn test_urlencoded_skips_disabled_pairs() {
    let request = json!({
        "method": "POST",
        "url": "https://postman-echo.com/post",
        "body": {
            "mode": "urlencoded",
            "urlencoded": [
                {"key": "a", "value": "b"},
                {"key": "c", "value": "d", "disabled": true}
            ]
        }
    });
    for target in [Target::Curl, Target::PythonRequests, Target::RubyNetHttp] {
        let snippet = convert(target, request.clone(), json!({}));
        assert!(snippet.contains("a=b"), "{target}: {snippet}");
        assert!(!snippet.contains("c=d"), "{target}: {snippet}");
    }
    let snippet = convert(Target::NodeFetch, request, json!({}));
    assert!(snippet.contains("urlencoded.append(\"a\", \"b\");"));
    assert!(!snippet.contains("\"c\""));
}

#[test]
fn test_raw_json_is_canonicalized() {
    let request = json!({
        "method": "POST",
        "url": "https://postman-echo.com/post",
        "headers": [{"key": "Content-Type", "value": "application/json"}],
        "body": {"mode": "raw", "raw": "{\"json\":\"Test-Test\"}"}
    });
    let snippet = convert(Target::PythonRequests, request, json!({}));
    // pretty-printed with the target's two-space indent, newlines escaped
    assert!(snippet.contains(r#"payload = "{\n  \"json\": \"Test-Test\"\n}""#));
}

#[test]
fn test_invalid_json_falls_back_to_plain_string() {
    let request = json!({
        "method": "POST",
        "url": "https://postman-echo.com/post",
        "headers": [{"key": "Content-Type", "value": "application/json"}],
        "body": {"mode": "raw", "raw": "not json"}
    });
    for target in [
        Target::Curl,
        Target::PythonRequests,
        Target::GoNative,
        Target::NodeFetch,
        Target::RubyNetHttp,
    ] {
        let snippet = convert(target, request.clone(), json!({}));
        assert!(snippet.contains("not json"), "{target}: {snippet}");
    }
}

#[test]
fn test_multi_file_formdata_expands_per_source() {
    let request = json!({
        "method": "POST",
        "url": "https://postman-echo.com/post",
        "body": {
            "mode": "formdata",
            "formdata": [
                {"key": "f", "type": "file", "src": ["/a.txt", "/b.txt"]}
            ]
        }
    });
    let snippet = convert(Target::Curl, request.clone(), json!({}));
    assert!(snippet.contains("--form \"f=@/a.txt\""), "{snippet}");
    assert!(snippet.contains("--form \"f=@/b.txt\""), "{snippet}");

    let snippet = convert(Target::NodeFetch, request, json!({}));
    assert!(snippet.contains("formdata.append(\"f\", fs.createReadStream(\"/a.txt\"));"));
    assert!(snippet.contains("formdata.append(\"f\", fs.createReadStream(\"/b.txt\"));"));
}

#[test]
fn test_missing_file_source_gets_placeholder() {
    let request = json!({
        "method": "POST",
        "url": "https://postman-echo.com/post",
        "body": {
            "mode": "formdata",
            "formdata": [{"key": "f", "type": "file", "src": []}]
        }
    });
    let snippet = convert(Target::GoNative, request, json!({}));
    assert!(snippet.contains("/path/to/file"));
}

#[test]
fn test_unknown_and_invalid_options_are_ignored() {
    let request = json!({
        "method": "GET",
        "url": "https://postman-echo.com/get"
    });
    // indentCount is invalid and must fall back to the python default of 2
    let snippet = convert(
        Target::PythonRequests,
        request,
        json!({"indentCount": -5, "unknownOpt": "x", "followRedirect": "yes"}),
    );
    assert!(snippet.contains("response = requests.request(\"GET\", url, headers=headers, data=payload)"));
}

#[test]
fn test_graphql_variables_fall_back_to_empty_object() {
    let request = json!({
        "method": "POST",
        "url": "https://postman-echo.com/graphql",
        "body": {
            "mode": "graphql",
            "graphql": {"query": "{a}", "variables": "not-json"}
        }
    });
    let snippet = convert(Target::Curl, request, json!({}));
    assert!(snippet.contains(r#"\"variables\":{}"#), "{snippet}");
    // content type inferred from the graphql mode
    assert!(snippet.contains("Content-Type: application/json"));
}

#[test]
fn test_file_body_renders_placeholder_contents() {
    let request = json!({
        "method": "POST",
        "url": "https://postman-echo.com/post",
        "body": {"mode": "file", "file": {"src": "/tmp/payload.bin"}}
    });
    let snippet = convert(Target::PythonRequests, request.clone(), json!({}));
    assert!(snippet.contains("<file contents here>"));

    // curl is the exception and points at the file itself
    let snippet = convert(Target::Curl, request, json!({}));
    assert!(snippet.contains("--data-binary \"@/tmp/payload.bin\""));
}

#[test]
fn test_curl_long_and_short_forms() {
    let request = json!({
        "method": "GET",
        "url": "https://postman-echo.com/get",
        "headers": [{"key": "Accept", "value": "application/json"}]
    });
    let long = convert(Target::Curl, request.clone(), json!({}));
    assert!(long.contains("--request GET"));
    assert!(long.contains("--header \"Accept: application/json\""));

    let short = convert(Target::Curl, request, json!({"longFormat": false}));
    assert!(short.contains("-X GET"));
    assert!(short.contains("-H \"Accept: application/json\""));
}

#[test]
fn test_every_target_handles_a_bare_get() {
    let request = json!({
        "method": "GET",
        "url": "postman-echo.com/get"
    });
    let registry = CodegenRegistry::new();
    for target in registry.supported_targets() {
        let snippet = convert(target, request.clone(), json!({}));
        // scheme-less urls pick up the http default
        assert!(
            snippet.contains("http://postman-echo.com/get"),
            "{target}: {snippet}"
        );
    }
}
