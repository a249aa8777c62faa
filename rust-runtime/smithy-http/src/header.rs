/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for parsing information from headers

use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseError {
    message: &'static str,
}

impl ParseError {
    fn new(message: &'static str) -> Self {
        ParseError { message }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "output failed to parse in headers: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Read exactly one or none from a headers iterator
///
/// The value is trimmed but never split on commas.
pub fn one_or_none<T: FromStr>(
    headers: &http::HeaderMap,
    key: &str,
) -> Result<Option<T>, ParseError> {
    let mut values = headers.get_all(key).iter();
    let first = match values.next() {
        Some(first) => first,
        None => return Ok(None),
    };
    if values.next().is_some() {
        return Err(ParseError::new("expected a single value but found multiple"));
    }
    let value = first
        .to_str()
        .map_err(|_| ParseError::new("header was not valid UTF-8"))?;
    T::from_str(value.trim())
        .map(Some)
        .map_err(|_| ParseError::new("failed to parse header value"))
}

#[cfg(test)]
mod test {
    use crate::header::{one_or_none, ParseError};

    #[test]
    fn one_or_none_location() {
        let response = http::Response::builder()
            .header(
                "Location",
                "https://route53.amazonaws.com/2013-04-01/delegationset/N1PA6795SAMPLE",
            )
            .header("X-Twice", "a")
            .header("X-Twice", "b")
            .body(())
            .unwrap();
        assert_eq!(
            one_or_none::<String>(response.headers(), "location").unwrap(),
            Some(
                "https://route53.amazonaws.com/2013-04-01/delegationset/N1PA6795SAMPLE"
                    .to_string()
            )
        );
        assert_eq!(
            one_or_none::<String>(response.headers(), "X-Missing").unwrap(),
            None
        );
        assert_eq!(
            one_or_none::<String>(response.headers(), "X-Twice"),
            Err(ParseError::new("expected a single value but found multiple"))
        );
    }

    #[test]
    fn one_or_none_parses_trimmed_values() {
        let response = http::Response::builder()
            .header("X-Count", " 42 ")
            .header("X-Bad", "4,2")
            .body(())
            .unwrap();
        assert_eq!(one_or_none::<u16>(response.headers(), "X-Count"), Ok(Some(42)));
        assert_eq!(
            one_or_none::<u16>(response.headers(), "X-Bad"),
            Err(ParseError::new("failed to parse header value"))
        );
    }
}
