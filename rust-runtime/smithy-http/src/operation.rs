/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A request ready to be dispatched, paired with the handler that parses its response
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request { inner: base }
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn into_parts(self) -> http::Request<SdkBody> {
        self.inner
    }
}

/// An error that occurs when encoding a shape into a request body
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("failed to encode the request body: {0}")]
    Encoding(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl SerializationError {
    pub fn encoding(err: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        SerializationError::Encoding(err.into())
    }
}

/// An error that occurs while constructing a request. The request is never dispatched.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid field in input: {field} (details: {details})")]
    InvalidField {
        field: &'static str,
        details: String,
    },
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("failed to serialize input: {0}")]
    SerializationError(#[from] SerializationError),
    #[error("error during request construction: {0}")]
    Other(Box<dyn Error + Send + Sync + 'static>),
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request, SerializationError};
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;

    #[test]
    fn request_exposes_http_parts() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("https://opsworks.us-east-1.amazonaws.com/"))
                .method("POST")
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request
            .http_mut()
            .headers_mut()
            .insert(CONTENT_LENGTH, http::HeaderValue::from_static("12"));

        let request = request.into_parts();
        assert_eq!(
            request.uri(),
            &Uri::from_static("https://opsworks.us-east-1.amazonaws.com/")
        );
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "12");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
    }

    #[test]
    fn operation_carries_metadata_and_handler() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let op = Operation::new(request, "handler")
            .with_metadata(Metadata::new("CreateLayer", "opsworks"));
        assert_eq!(op.metadata().map(|m| m.name()), Some("CreateLayer"));
        assert_eq!(op.metadata().map(|m| m.service()), Some("opsworks"));
        let (_, parts) = op.into_request_response();
        assert_eq!(parts.response_handler, "handler");
    }

    #[test]
    fn build_error_messages() {
        let missing = BuildError::MissingField {
            field: "input",
            details: "a request object is required",
        };
        assert_eq!(
            missing.to_string(),
            "input was missing. a request object is required"
        );
        let serialization: BuildError = SerializationError::encoding("unbalanced element").into();
        assert!(matches!(serialization, BuildError::SerializationError(_)));
        assert_eq!(
            serialization.to_string(),
            "failed to serialize input: failed to encode the request body: unbalanced element"
        );
    }
}
