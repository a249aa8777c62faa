/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreateReusableDelegationSet` operation
#[derive(std::fmt::Debug)]
pub struct CreateReusableDelegationSetError {
    pub kind: CreateReusableDelegationSetErrorKind,
    pub(crate) meta: smithy_types::Error,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateReusableDelegationSetErrorKind {
    DelegationSetAlreadyCreated(DelegationSetAlreadyCreated),
    DelegationSetAlreadyReusable(DelegationSetAlreadyReusable),
    DelegationSetNotAvailable(DelegationSetNotAvailable),
    HostedZoneNotFound(HostedZoneNotFound),
    InvalidArgument(InvalidArgument),
    InvalidInput(InvalidInput),
    LimitsExceeded(LimitsExceeded),
    /// An unexpected error, eg. invalid XML returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateReusableDelegationSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateReusableDelegationSetErrorKind::DelegationSetAlreadyCreated(_inner) => _inner.fmt(f),
            CreateReusableDelegationSetErrorKind::DelegationSetAlreadyReusable(_inner) => _inner.fmt(f),
            CreateReusableDelegationSetErrorKind::DelegationSetNotAvailable(_inner) => _inner.fmt(f),
            CreateReusableDelegationSetErrorKind::HostedZoneNotFound(_inner) => _inner.fmt(f),
            CreateReusableDelegationSetErrorKind::InvalidArgument(_inner) => _inner.fmt(f),
            CreateReusableDelegationSetErrorKind::InvalidInput(_inner) => _inner.fmt(f),
            CreateReusableDelegationSetErrorKind::LimitsExceeded(_inner) => _inner.fmt(f),
            CreateReusableDelegationSetErrorKind::Unhandled(_inner) => _inner.fmt(f),
        }
    }
}
impl CreateReusableDelegationSetError {
    pub fn new(kind: CreateReusableDelegationSetErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateReusableDelegationSetErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateReusableDelegationSetErrorKind::Unhandled(err.into()),
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
    pub fn is_delegation_set_already_created(&self) -> bool {
        matches!(&self.kind, CreateReusableDelegationSetErrorKind::DelegationSetAlreadyCreated(_))
    }
    pub fn is_delegation_set_already_reusable(&self) -> bool {
        matches!(&self.kind, CreateReusableDelegationSetErrorKind::DelegationSetAlreadyReusable(_))
    }
    pub fn is_delegation_set_not_available(&self) -> bool {
        matches!(&self.kind, CreateReusableDelegationSetErrorKind::DelegationSetNotAvailable(_))
    }
    pub fn is_hosted_zone_not_found(&self) -> bool {
        matches!(&self.kind, CreateReusableDelegationSetErrorKind::HostedZoneNotFound(_))
    }
    pub fn is_invalid_argument(&self) -> bool {
        matches!(&self.kind, CreateReusableDelegationSetErrorKind::InvalidArgument(_))
    }
    pub fn is_invalid_input(&self) -> bool {
        matches!(&self.kind, CreateReusableDelegationSetErrorKind::InvalidInput(_))
    }
    pub fn is_limits_exceeded(&self) -> bool {
        matches!(&self.kind, CreateReusableDelegationSetErrorKind::LimitsExceeded(_))
    }
}
impl std::error::Error for CreateReusableDelegationSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateReusableDelegationSetErrorKind::DelegationSetAlreadyCreated(_inner) => Some(_inner),
            CreateReusableDelegationSetErrorKind::DelegationSetAlreadyReusable(_inner) => Some(_inner),
            CreateReusableDelegationSetErrorKind::DelegationSetNotAvailable(_inner) => Some(_inner),
            CreateReusableDelegationSetErrorKind::HostedZoneNotFound(_inner) => Some(_inner),
            CreateReusableDelegationSetErrorKind::InvalidArgument(_inner) => Some(_inner),
            CreateReusableDelegationSetErrorKind::InvalidInput(_inner) => Some(_inner),
            CreateReusableDelegationSetErrorKind::LimitsExceeded(_inner) => Some(_inner),
            CreateReusableDelegationSetErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// <p>A delegation set with the same owner and caller reference combination has already been created.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DelegationSetAlreadyCreated {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl DelegationSetAlreadyCreated {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DelegationSetAlreadyCreated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DelegationSetAlreadyCreated")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for DelegationSetAlreadyCreated {}

/// <p>The specified delegation set has already been marked as reusable.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DelegationSetAlreadyReusable {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl DelegationSetAlreadyReusable {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DelegationSetAlreadyReusable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DelegationSetAlreadyReusable")?;
        if let Some(inner_2) = &self.message {
            write!(f, ": {}", inner_2)?;
        }
        Ok(())
    }
}
impl std::error::Error for DelegationSetAlreadyReusable {}

/// <p>You can create a hosted zone that has the same name as an existing hosted zone, but only with a different delegation set.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DelegationSetNotAvailable {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl DelegationSetNotAvailable {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DelegationSetNotAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DelegationSetNotAvailable")?;
        if let Some(inner_3) = &self.message {
            write!(f, ": {}", inner_3)?;
        }
        Ok(())
    }
}
impl std::error::Error for DelegationSetNotAvailable {}

/// <p>The specified HostedZone can't be found.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct HostedZoneNotFound {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl HostedZoneNotFound {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for HostedZoneNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HostedZoneNotFound")?;
        if let Some(inner_4) = &self.message {
            write!(f, ": {}", inner_4)?;
        }
        Ok(())
    }
}
impl std::error::Error for HostedZoneNotFound {}

/// <p>Parameter name is not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct InvalidArgument {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InvalidArgument {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidArgument")?;
        if let Some(inner_5) = &self.message {
            write!(f, ": {}", inner_5)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidArgument {}

/// <p>The input is not valid.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct InvalidInput {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl InvalidInput {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidInput")?;
        if let Some(inner_6) = &self.message {
            write!(f, ": {}", inner_6)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidInput {}

/// <p>This operation can't be completed either because the current account has reached the limit on reusable delegation sets that it can create or because you've reached the limit on the number of Amazon EC2 instances that you can associate with a private hosted zone.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct LimitsExceeded {
    /// <p>Descriptive message for the error response.</p>
    pub message: std::option::Option<std::string::String>,
}
impl LimitsExceeded {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for LimitsExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LimitsExceeded")?;
        if let Some(inner_7) = &self.message {
            write!(f, ": {}", inner_7)?;
        }
        Ok(())
    }
}
impl std::error::Error for LimitsExceeded {}

pub(crate) fn parse_create_reusable_delegation_set_error(
    response: &http::Response<bytes::Bytes>,
) -> CreateReusableDelegationSetError {
    let generic = match smithy_schema::codec::xml::parse_generic_error(
        response.headers(),
        response.body(),
    ) {
        Ok(generic) => generic,
        Err(err) => return CreateReusableDelegationSetError::unhandled(err),
    };
    tracing::debug!(
        status = %response.status(),
        code = ?generic.code(),
        "CreateReusableDelegationSet failed"
    );
    let message = generic.message().map(str::to_string);
    let kind = match generic.code() {
        Some("DelegationSetAlreadyCreated") => {
            CreateReusableDelegationSetErrorKind::DelegationSetAlreadyCreated(DelegationSetAlreadyCreated { message })
        }
        Some("DelegationSetAlreadyReusable") => {
            CreateReusableDelegationSetErrorKind::DelegationSetAlreadyReusable(DelegationSetAlreadyReusable { message })
        }
        Some("DelegationSetNotAvailable") => {
            CreateReusableDelegationSetErrorKind::DelegationSetNotAvailable(DelegationSetNotAvailable { message })
        }
        Some("HostedZoneNotFound") => {
            CreateReusableDelegationSetErrorKind::HostedZoneNotFound(HostedZoneNotFound { message })
        }
        Some("InvalidArgument") => {
            CreateReusableDelegationSetErrorKind::InvalidArgument(InvalidArgument { message })
        }
        Some("InvalidInput") => {
            CreateReusableDelegationSetErrorKind::InvalidInput(InvalidInput { message })
        }
        Some("LimitsExceeded") => {
            CreateReusableDelegationSetErrorKind::LimitsExceeded(LimitsExceeded { message })
        }
        _ => return CreateReusableDelegationSetError::generic(generic),
    };
    CreateReusableDelegationSetError::new(kind, generic)
}
