/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::{Request, Uri};
use pretty_assertions::Comparison;
use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam {
        expected: String,
    },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam {
        expected: String,
    },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader {
        expected: String,
    },
    #[error("forbidden header present: `{forbidden}`")]
    ForbiddenHeader {
        forbidden: String,
    },
    #[error("body did not match. {hint}\n{comparison}")]
    BodyDidNotMatch { comparison: String, hint: String },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    match inp {
        Ok(_) => (),
        Err(e) => {
            eprintln!("{}", e);
            panic!("Protocol test failed");
        }
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.split('=');
        QueryParam {
            key: parsed.next().unwrap(),
            value: parsed.next(),
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query().unwrap_or_default().split('&').collect()
}

pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
            });
        }
    }
    Ok(())
}

/// How a body should be compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// Json media types are deserialized and compared
    Json,
    /// XML media types are normalized and compared
    Xml,
    /// Other media types are compared literally
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/json" | "application/x-amz-json-1.0" | "application/x-amz-json-1.1" => {
                MediaType::Json
            }
            "application/xml" => MediaType::Xml,
            other => MediaType::Other(other.to_string()),
        }
    }
}

pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let body_str = std::str::from_utf8(actual_body.as_ref());
    match (media_type, body_str) {
        (MediaType::Json, Ok(actual_body)) => try_json_eq(actual_body, expected_body),
        (MediaType::Xml, Ok(actual_body)) => try_xml_equivalent(actual_body, expected_body),
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (MediaType::Xml, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "XML".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (MediaType::Other(media_type), Ok(actual_body)) => {
            if actual_body != expected_body {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: pretty_comparison(actual_body, expected_body),
                    hint: format!("media type: {}", media_type),
                })
            } else {
                Ok(())
            }
        }
        (MediaType::Other(_), Err(_)) => {
            if actual_body.as_ref() != expected_body.as_bytes() {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: format!("{:?} != {:?}", actual_body.as_ref(), expected_body),
                    hint: "body was not valid UTF-8".to_owned(),
                })
            } else {
                Ok(())
            }
        }
    }
}

#[derive(Eq, PartialEq)]
struct PrettyStr<'a>(&'a str);

impl Debug for PrettyStr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn pretty_comparison(left: &str, right: &str) -> String {
    format!(
        "{}",
        Comparison::new(&PrettyStr(left), &PrettyStr(right))
    )
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{}: {}", e, actual),
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).expect("expected value must be valid JSON");
    match assert_json_eq_no_panic(&actual_json, &expected_json) {
        Ok(()) => Ok(()),
        Err(message) => Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: pretty_comparison(
                &serde_json::to_string_pretty(&actual_json).unwrap_or_default(),
                &serde_json::to_string_pretty(&expected_json).unwrap_or_default(),
            ),
            hint: message,
        }),
    }
}

/// Compares two XML documents, ignoring insignificant whitespace, attribute order and
/// namespace prefixes
fn try_xml_equivalent(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let norm_actual = normalize_xml(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
        expected: "XML".to_owned(),
        found: format!("{}: {}", e, actual),
    })?;
    let norm_expected = normalize_xml(expected).expect("expected value must be valid XML");
    if norm_actual == norm_expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: pretty_comparison(&norm_actual, &norm_expected),
            hint: "XML documents were not equivalent".to_owned(),
        })
    }
}

fn normalize_xml(s: &str) -> Result<String, roxmltree::Error> {
    let doc = roxmltree::Document::parse(s)?;
    let mut out = String::new();
    write_normalized(doc.root_element(), 0, &mut out);
    Ok(out)
}

fn write_normalized(node: roxmltree::Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let name = match node.tag_name().namespace() {
        Some(namespace) => format!("{{{}}}{}", namespace, node.tag_name().name()),
        None => node.tag_name().name().to_string(),
    };
    let mut attributes: Vec<String> = node
        .attributes()
        .iter()
        .map(|attr| match attr.namespace() {
            Some(namespace) => format!(" {{{}}}{}={:?}", namespace, attr.name(), attr.value()),
            None => format!(" {}={:?}", attr.name(), attr.value()),
        })
        .collect();
    attributes.sort();
    out.push_str(&format!("{}<{}{}>\n", indent, name, attributes.concat()));
    for child in node.children() {
        if child.is_element() {
            write_normalized(child, depth + 1, out);
        } else if let Some(text) = child.text().filter(|text| !text.trim().is_empty()) {
            out.push_str(&format!("{}  {:?}\n", indent, text));
        }
    }
    out.push_str(&format!("{}</{}>\n", indent, name));
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, forbid_query_params, require_query_params, validate_body,
        validate_headers, validate_query_string, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        validate_query_string(&request, &["a=b"]).expect("a=b is in the query string");
        validate_query_string(&request, &["c", "a=b"])
            .expect("both params are in the query string");
        validate_query_string(&request, &["a=b", "c", "d=efg", "hello=a%20b"])
            .expect("all params are in the query string");
        validate_query_string(&request, &[]).expect("no required params should pass");

        validate_query_string(&request, &["a"]).expect_err("no parameter should match");
        validate_query_string(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_query_string(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_query_string(&request, &["hell=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["a"]).expect_err("a is a query param");
        forbid_query_params(&request, &["not_included"]).expect("query param not included");
        forbid_query_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_query_params(&request, &["c"]).expect_err("c is a query param");
    }

    #[test]
    fn test_require_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        require_query_params(&request, &["a"]).expect("a is a query param");
        require_query_params(&request, &["not_included"]).expect_err("query param not included");
        require_query_params(&request, &["a=b"]).expect_err("should be matching against keys");
        require_query_params(&request, &["c"]).expect("c is a query param");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Amz-Target", "OpsWorks_20130218.CreateLayer")
            .body(())
            .unwrap();
        forbid_headers(&request, &["X-Unrelated"]).expect("header not present");
        assert_eq!(
            forbid_headers(&request, &["x-amz-target"]),
            Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: "x-amz-target".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect("inputs matched as JSON");

        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   6 }"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect_err("bodies do not match");

        validate_body(b"{not json", expected, MediaType::Json).expect_err("invalid json");
    }

    #[test]
    fn test_validate_xml_body() {
        let expected = r#"<Root xmlns="https://example.com/"><A b="1" c="2">hello</A><B/></Root>"#;
        let actual = r#"<Root xmlns="https://example.com/">
            <A c="2" b="1">hello</A>
            <B></B>
        </Root>"#;
        validate_body(actual.as_bytes(), expected, MediaType::Xml)
            .expect("inputs are equivalent XML");

        let actual = r#"<Root><A b="1" c="2">hello</A><B/></Root>"#;
        validate_body(actual.as_bytes(), expected, MediaType::Xml)
            .expect_err("namespaces differ");

        let actual = r#"<Root xmlns="https://example.com/"><B/><A b="1" c="2">hello</A></Root>"#;
        validate_body(actual.as_bytes(), expected, MediaType::Xml)
            .expect_err("element order is significant");
    }

    #[test]
    fn test_validate_other_body() {
        validate_body(b"hello", "hello", MediaType::from("text/plain")).expect("same bytes");
        validate_body(b"hello", "world", MediaType::from("text/plain"))
            .expect_err("different bytes");
        assert_eq!(MediaType::Json, MediaType::from("application/x-amz-json-1.1"));
        assert_eq!(MediaType::Xml, MediaType::from("application/xml"));
    }
}
