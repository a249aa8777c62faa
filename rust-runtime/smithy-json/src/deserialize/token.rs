/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::{Error, ErrorReason};
use crate::escape::unescape_string;
use smithy_types::Number;
use std::borrow::Cow;

pub use crate::escape::Error as EscapeError;

/// A JSON string exactly as it appeared in the document, escapes included
///
/// Service responses mostly contain plain ASCII, so unescaping is deferred until a field
/// reader actually needs the value.
#[derive(Debug, PartialEq, Eq)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    pub fn new(value: &'a str) -> EscapedStr<'a> {
        EscapedStr(value)
    }

    pub fn as_escaped_str(&self) -> &'a str {
        self.0
    }

    /// Borrows when there is nothing to unescape.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, EscapeError> {
        unescape_string(self.0)
    }
}

/// Byte offset of a token in the input
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Offset(pub usize);

impl Offset {
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        Error::new(ErrorReason::Custom(msg), Some(self.0))
    }
}

/// A single token produced by [`json_token_iter`](crate::deserialize::json_token_iter)
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    StartArray { offset: Offset },
    EndArray { offset: Offset },
    ObjectKey { offset: Offset, key: EscapedStr<'a> },
    StartObject { offset: Offset },
    EndObject { offset: Offset },
    ValueBool { offset: Offset, value: bool },
    ValueNull { offset: Offset },
    ValueNumber { offset: Offset, value: Number },
    ValueString { offset: Offset, value: EscapedStr<'a> },
}

impl<'a> Token<'a> {
    pub fn offset(&self) -> Offset {
        match self {
            Token::StartArray { offset }
            | Token::EndArray { offset }
            | Token::StartObject { offset }
            | Token::EndObject { offset }
            | Token::ValueNull { offset }
            | Token::ObjectKey { offset, .. }
            | Token::ValueBool { offset, .. }
            | Token::ValueNumber { offset, .. }
            | Token::ValueString { offset, .. } => *offset,
        }
    }

    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        self.offset().error(msg)
    }
}

/// Consumes a `{` token, failing on anything else including the end of input.
pub fn expect_start_object(token: Option<Result<Token<'_>, Error>>) -> Result<(), Error> {
    const MESSAGE: &str = "expected StartObject";
    match token.transpose()? {
        Some(Token::StartObject { .. }) => Ok(()),
        Some(other) => Err(other.error(Cow::Borrowed(MESSAGE))),
        None => Err(Error::new(ErrorReason::Custom(Cow::Borrowed(MESSAGE)), None)),
    }
}

/// Reads a string or `null`. Strings come back **unescaped**.
pub fn expect_string_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<String>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueString { value, .. }) => Ok(Some(value.to_unescaped()?.into_owned())),
        _ => Err(Error::custom("expected null or string value")),
    }
}

/// Skips the next complete value, however deeply it nests.
///
/// Nesting is tracked with a counter so that a hostile document cannot exhaust the stack.
/// Bracket matching itself is enforced by the token iterator.
pub fn skip_value<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    let mut depth: usize = 0;
    loop {
        match tokens.next().transpose()? {
            Some(Token::StartObject { .. }) | Some(Token::StartArray { .. }) => depth += 1,
            Some(Token::EndObject { .. }) | Some(Token::EndArray { .. }) if depth > 0 => {
                depth -= 1
            }
            Some(Token::ObjectKey { .. }) if depth > 0 => {}
            Some(Token::ValueNull { .. })
            | Some(Token::ValueBool { .. })
            | Some(Token::ValueNumber { .. })
            | Some(Token::ValueString { .. }) => {}
            _ => return Err(Error::custom("expected value")),
        }
        if depth == 0 {
            return Ok(());
        }
    }
}
