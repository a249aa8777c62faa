/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::fmt::{self, Debug, Formatter};

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests.
/// For handling responses, the type of the body will be controlled
/// by the HTTP stack.
#[derive(Clone, PartialEq, Eq)]
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    /// An empty body
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    /// The body contents, if they are held in memory
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(bytes.as_ref()),
            SdkBody::Once(None) => Some(&[][..]),
        }
    }

    /// The length of the body in bytes, when known up front
    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|bytes| bytes.len() as u64)
    }
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkBody::Once(Some(bytes)) => match std::str::from_utf8(bytes) {
                Ok(text) => f.debug_tuple("Once").field(&text).finish(),
                Err(_) => f.debug_tuple("Once").field(bytes).finish(),
            },
            SdkBody::Once(None) => f.write_str("Empty"),
        }
    }
}

impl Default for SdkBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::Once(Some(Bytes::from(s)))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}
