/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::TryFromNumberError;
use smithy_xml::decode::XmlDecodeError;
use std::borrow::Cow;
use thiserror::Error;

/// An error that occurs while reading a shape out of a response body
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] smithy_json::deserialize::Error),
    #[error("invalid XML: {0}")]
    Xml(#[from] XmlDecodeError),
    #[error("number out of range: {0}")]
    NumberOutOfRange(#[from] TryFromNumberError),
    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl DeserializeError {
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        DeserializeError::Custom(message.into())
    }
}

impl From<smithy_json::deserialize::EscapeError> for DeserializeError {
    fn from(err: smithy_json::deserialize::EscapeError) -> Self {
        DeserializeError::Json(err.into())
    }
}
