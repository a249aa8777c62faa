/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreateLayer` operation
#[derive(std::fmt::Debug)]
pub struct CreateLayerError {
    pub kind: CreateLayerErrorKind,
    pub(crate) meta: smithy_types::Error,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateLayerErrorKind {
    ResourceNotFoundException(ResourceNotFoundException),
    ValidationException(ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateLayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateLayerErrorKind::ResourceNotFoundException(_inner) => _inner.fmt(f),
            CreateLayerErrorKind::ValidationException(_inner) => _inner.fmt(f),
            CreateLayerErrorKind::Unhandled(_inner) => _inner.fmt(f),
        }
    }
}
impl CreateLayerError {
    pub fn new(kind: CreateLayerErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateLayerErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateLayerErrorKind::Unhandled(err.into()),
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
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(
            &self.kind,
            CreateLayerErrorKind::ResourceNotFoundException(_)
        )
    }
    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, CreateLayerErrorKind::ValidationException(_))
    }
}
impl std::error::Error for CreateLayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateLayerErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            CreateLayerErrorKind::ValidationException(_inner) => Some(_inner),
            CreateLayerErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p>Indicates that a request was not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct ValidationException {
    /// <p>The exception message.</p>
    pub message: std::option::Option<std::string::String>,
}
impl ValidationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ValidationException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ValidationException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ValidationException {}

/// <p>Indicates that a resource was not found.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct ResourceNotFoundException {
    /// <p>The exception message.</p>
    pub message: std::option::Option<std::string::String>,
}
impl ResourceNotFoundException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceNotFoundException")?;
        if let Some(inner_2) = &self.message {
            write!(f, ": {}", inner_2)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotFoundException {}

pub(crate) fn parse_create_layer_error(response: &http::Response<bytes::Bytes>) -> CreateLayerError {
    let generic = match smithy_schema::codec::json::parse_generic_error(
        response.headers(),
        response.body(),
    ) {
        Ok(generic) => generic,
        Err(err) => return CreateLayerError::unhandled(err),
    };
    tracing::debug!(status = %response.status(), code = ?generic.code(), "CreateLayer failed");
    let message = generic.message().map(str::to_string);
    let kind = match generic.code() {
        Some("ResourceNotFoundException") => {
            CreateLayerErrorKind::ResourceNotFoundException(ResourceNotFoundException { message })
        }
        Some("ValidationException") => {
            CreateLayerErrorKind::ValidationException(ValidationException { message })
        }
        _ => return CreateLayerError::generic(generic),
    };
    CreateLayerError::new(kind, generic)
}
