/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::convert::TryFrom;
use std::fmt;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an `f64`, losing precision for integers larger than 2^53.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

/// The error returned when a [`Number`] doesn't fit in the requested primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryFromNumberError {
    target: &'static str,
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "number cannot be represented as {}", self.target)
    }
}

impl std::error::Error for TryFromNumberError {}

macro_rules! to_integer {
    ($typ:ident) => {
        impl TryFrom<Number> for $typ {
            type Error = TryFromNumberError;

            fn try_from(value: Number) -> Result<Self, Self::Error> {
                let err = || TryFromNumberError {
                    target: stringify!($typ),
                };
                match value {
                    Number::PosInt(v) => $typ::try_from(v).map_err(|_| err()),
                    Number::NegInt(v) => $typ::try_from(v).map_err(|_| err()),
                    Number::Float(_) => Err(err()),
                }
            }
        }
    };
}

to_integer!(i32);
to_integer!(i64);

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::{Error, Number};
    use proptest::proptest;
    use std::convert::TryFrom;

    #[test]
    fn number_to_i32() {
        assert_eq!(Ok(5), i32::try_from(Number::PosInt(5)));
        assert_eq!(Ok(-5), i32::try_from(Number::NegInt(-5)));
        assert!(i32::try_from(Number::PosInt(u64::MAX)).is_err());
        assert!(i32::try_from(Number::NegInt(i64::MIN)).is_err());
        assert!(i32::try_from(Number::Float(1.0)).is_err());
    }

    #[test]
    fn number_to_i64() {
        assert_eq!(Ok(i64::MAX), i64::try_from(Number::PosInt(i64::MAX as u64)));
        assert!(i64::try_from(Number::PosInt(u64::MAX)).is_err());
    }

    #[test]
    fn error_display() {
        let err = Error::builder()
            .code("ValidationException")
            .message("1 validation error detected")
            .request_id("abc-123")
            .build();
        assert_eq!(
            format!("{}", err),
            "Error { code: \"ValidationException\", message: \"1 validation error detected\", request_id: \"abc-123\" }"
        );
        assert_eq!(format!("{}", Error::builder().build()), "Error");
    }

    proptest! {
        #[test]
        fn i32_round_trips(value: i32) {
            assert_eq!(Ok(value), i32::try_from(Number::from(value)));
        }
    }
}
