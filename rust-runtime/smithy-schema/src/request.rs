/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Construction of HTTP requests from modeled inputs

use crate::codec::json::serialize_json;
use crate::codec::xml::serialize_xml;
use crate::serde::SerializeShape;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use smithy_http::body::SdkBody;
use smithy_http::label::fmt_string;
use smithy_http::operation::{BuildError, Request};
use tracing::{debug, trace};

/// The wire protocol of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// `application/x-amz-json-1.1` bodies, dispatched with `X-Amz-Target: <prefix>.<operation>`
    AwsJson11 { target_prefix: &'static str },
    /// `application/xml` bodies rooted at `root_element` in `namespace`
    RestXml {
        root_element: &'static str,
        namespace: &'static str,
    },
}

impl Protocol {
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::AwsJson11 { .. } => "application/x-amz-json-1.1",
            Protocol::RestXml { .. } => "application/xml",
        }
    }
}

/// Static description of how an operation maps onto HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationBinding {
    pub service: &'static str,
    pub operation: &'static str,
    pub method: &'static str,
    /// Request path and query, with `{Label}` or greedy `{Label+}` placeholders
    pub uri_template: &'static str,
    pub protocol: Protocol,
}

/// Builds the HTTP request for one invocation of an operation
///
/// ```rust
/// use smithy_schema::request::{OperationBinding, Protocol, RequestBuilder};
/// use smithy_schema::structure;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct DescribeGatewayInformationInput {
///     gateway_arn: Option<String>,
/// }
/// structure!(DescribeGatewayInformationInput { gateway_arn: "GatewayARN" });
///
/// static BINDING: OperationBinding = OperationBinding {
///     service: "storagegateway",
///     operation: "DescribeGatewayInformation",
///     method: "POST",
///     uri_template: "/",
///     protocol: Protocol::AwsJson11 { target_prefix: "StorageGateway_20130630" },
/// };
///
/// let input = DescribeGatewayInformationInput { gateway_arn: Some("arn:gw".to_string()) };
/// let request = RequestBuilder::new(&BINDING).build(Some(&input)).unwrap().into_parts();
/// assert_eq!(
///     request.headers()["X-Amz-Target"],
///     "StorageGateway_20130630.DescribeGatewayInformation"
/// );
/// assert_eq!(request.body().bytes(), Some(&br#"{"GatewayARN":"arn:gw"}"#[..]));
/// ```
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    binding: &'a OperationBinding,
    labels: Vec<(&'static str, Option<String>)>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(binding: &'a OperationBinding) -> Self {
        RequestBuilder {
            binding,
            labels: vec![],
        }
    }

    /// Sets the value of the `{name}` placeholder in the URI template
    pub fn label(mut self, name: &'static str, value: Option<&str>) -> Self {
        self.labels.push((name, value.map(str::to_string)));
        self
    }

    /// Serializes `input` into the request body and assembles the request
    ///
    /// A missing `input` fails before anything is serialized.
    pub fn build<T>(self, input: Option<&T>) -> Result<Request, BuildError>
    where
        T: SerializeShape + ?Sized,
    {
        let input = input.ok_or(BuildError::MissingField {
            field: "input",
            details: "a request object is required",
        })?;
        let binding = self.binding;
        let uri = self.resolve_uri()?;
        let body = match binding.protocol {
            Protocol::AwsJson11 { .. } => serialize_json(input)?,
            Protocol::RestXml {
                root_element,
                namespace,
            } => serialize_xml(root_element, Some(namespace), input)?,
        };
        let mut builder = http::Request::builder()
            .method(binding.method)
            .uri(uri)
            .header(CONTENT_TYPE, binding.protocol.content_type())
            .header(CONTENT_LENGTH, body.len());
        if let Protocol::AwsJson11 { target_prefix } = binding.protocol {
            builder = builder.header(
                "X-Amz-Target",
                format!("{}.{}", target_prefix, binding.operation),
            );
        }
        let request = builder
            .body(SdkBody::from(body))
            .map_err(|err| BuildError::Other(err.into()))?;
        debug!(
            service = binding.service,
            operation = binding.operation,
            method = %request.method(),
            uri = %request.uri(),
            content_length = ?request.body().content_length(),
            "built request"
        );
        trace!(body = ?request.body(), "request body");
        Ok(Request::new(request))
    }

    fn resolve_uri(&self) -> Result<String, BuildError> {
        let template: &'static str = self.binding.uri_template;
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let end = rest[start..]
                .find('}')
                .map(|idx| idx + start)
                .ok_or_else(|| BuildError::InvalidField {
                    field: "uri",
                    details: format!("unterminated label in `{}`", template),
                })?;
            let label = &rest[start + 1..end];
            let (name, greedy) = match label.strip_suffix('+') {
                Some(name) => (name, true),
                None => (label, false),
            };
            let value = self
                .labels
                .iter()
                .find(|(label, _)| *label == name)
                .and_then(|(_, value)| value.as_deref())
                .filter(|value| !value.is_empty())
                .ok_or(BuildError::MissingField {
                    field: name,
                    details: "cannot be empty or unset",
                })?;
            out.push_str(&fmt_string(value, greedy));
            rest = &rest[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
