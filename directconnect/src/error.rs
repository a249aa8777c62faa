/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreatePublicVirtualInterface` operation
#[derive(std::fmt::Debug)]
pub struct CreatePublicVirtualInterfaceError {
    pub kind: CreatePublicVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreatePublicVirtualInterfaceErrorKind {
    DirectConnectClientException(DirectConnectClientException),
    DirectConnectServerException(DirectConnectServerException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreatePublicVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(_inner) => _inner.fmt(f),
            CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(_inner) => _inner.fmt(f),
            CreatePublicVirtualInterfaceErrorKind::Unhandled(_inner) => _inner.fmt(f),
        }
    }
}
impl CreatePublicVirtualInterfaceError {
    pub fn new(kind: CreatePublicVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreatePublicVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreatePublicVirtualInterfaceErrorKind::Unhandled(err.into()),
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
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
}
impl std::error::Error for CreatePublicVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(_inner) => Some(_inner),
            CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(_inner) => Some(_inner),
            CreatePublicVirtualInterfaceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p>One or more parameters are not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DirectConnectClientException {
    /// <p>This is an exception thrown when there is an issue with the input provided by the API call. For example, the name provided for a connection contains a pound sign (#). This can also occur when a valid value provided is not appropriate for the given API call. For example, a connection ID for a new interconnect was provided but no parameters for it.</p>
    pub message: std::option::Option<std::string::String>,
}
impl DirectConnectClientException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DirectConnectClientException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DirectConnectClientException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for DirectConnectClientException {}

/// <p>A server-side error occurred.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DirectConnectServerException {
    /// <p>This is an exception thrown when there is a backend issue on the server side.</p>
    pub message: std::option::Option<std::string::String>,
}
impl DirectConnectServerException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DirectConnectServerException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DirectConnectServerException")?;
        if let Some(inner_2) = &self.message {
            write!(f, ": {}", inner_2)?;
        }
        Ok(())
    }
}
impl std::error::Error for DirectConnectServerException {}

pub(crate) fn parse_create_public_virtual_interface_error(
    response: &http::Response<bytes::Bytes>,
) -> CreatePublicVirtualInterfaceError {
    let generic = match smithy_schema::codec::json::parse_generic_error(
        response.headers(),
        response.body(),
    ) {
        Ok(generic) => generic,
        Err(err) => return CreatePublicVirtualInterfaceError::unhandled(err),
    };
    tracing::debug!(
        status = %response.status(),
        code = ?generic.code(),
        "CreatePublicVirtualInterface failed"
    );
    let message = generic.message().map(str::to_string);
    let kind = match generic.code() {
        Some("DirectConnectClientException") => {
            CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(DirectConnectClientException { message })
        }
        Some("DirectConnectServerException") => {
            CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(DirectConnectServerException { message })
        }
        _ => return CreatePublicVirtualInterfaceError::generic(generic),
    };
    CreatePublicVirtualInterfaceError::new(kind, generic)
}
