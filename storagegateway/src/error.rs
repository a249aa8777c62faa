/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `DescribeGatewayInformation` operation
#[derive(std::fmt::Debug)]
pub struct DescribeGatewayInformationError {
    pub kind: DescribeGatewayInformationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeGatewayInformationErrorKind {
    InternalServerError(InternalServerError),
    InvalidGatewayRequestException(InvalidGatewayRequestException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeGatewayInformationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeGatewayInformationErrorKind::InternalServerError(_inner) => _inner.fmt(f),
            DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(_inner) => _inner.fmt(f),
            DescribeGatewayInformationErrorKind::Unhandled(_inner) => _inner.fmt(f),
        }
    }
}
impl DescribeGatewayInformationError {
    pub fn new(kind: DescribeGatewayInformationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeGatewayInformationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeGatewayInformationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeGatewayInformationErrorKind::InternalServerError(_))
    }
    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(_))
    }
}
impl std::error::Error for DescribeGatewayInformationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeGatewayInformationErrorKind::InternalServerError(_inner) => Some(_inner),
            DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(_inner) => Some(_inner),
            DescribeGatewayInformationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p>An internal server error has occurred during the request. For more information, see the error and message fields.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct InternalServerError {
    /// <p>A human-readable message describing the error that occurred.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InternalServerError {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InternalServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalServerError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServerError {}

/// <p>An exception occurred because an invalid gateway request was issued to the service. For more information, see the error and message fields.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct InvalidGatewayRequestException {
    /// <p>A human-readable message describing the error that occurred.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InvalidGatewayRequestException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidGatewayRequestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidGatewayRequestException")?;
        if let Some(inner_2) = &self.message {
            write!(f, ": {}", inner_2)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidGatewayRequestException {}

pub(crate) fn parse_describe_gateway_information_error(
    response: &http::Response<bytes::Bytes>,
) -> DescribeGatewayInformationError {
    let generic = match smithy_schema::codec::json::parse_generic_error(
        response.headers(),
        response.body(),
    ) {
        Ok(generic) => generic,
        Err(err) => return DescribeGatewayInformationError::unhandled(err),
    };
    tracing::debug!(
        status = %response.status(),
        code = ?generic.code(),
        "DescribeGatewayInformation failed"
    );
    let message = generic.message().map(str::to_string);
    let kind = match generic.code() {
        Some("InternalServerError") => {
            DescribeGatewayInformationErrorKind::InternalServerError(InternalServerError { message })
        }
        Some("InvalidGatewayRequestException") => {
            DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(InvalidGatewayRequestException { message })
        }
        _ => return DescribeGatewayInformationError::generic(generic),
    };
    DescribeGatewayInformationError::new(kind, generic)
}
