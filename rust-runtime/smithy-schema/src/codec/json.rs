/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS JSON 1.1 bodies

use crate::codec::sanitize_error_code;
use crate::serde::{DeserializeShape, MemberVisitor, SerializeShape, ShapeReader, ShapeWriter};
use crate::DeserializeError;
use smithy_http::operation::SerializationError;
use smithy_json::deserialize::token::{expect_start_object, expect_string_or_null, skip_value};
use smithy_json::deserialize::{json_token_iter, Error, ErrorReason, JsonTokenIterator, Token};
use smithy_json::serialize::{JsonWriter, WriteError};
use smithy_types::Number;
use std::borrow::Cow;
use std::iter::Peekable;
use tracing::trace;

/// Serializes `value` into a JSON document
pub fn serialize_json<T: SerializeShape + ?Sized>(value: &T) -> Result<String, SerializationError> {
    let mut writer = JsonShapeWriter::new();
    value.serialize(&mut writer)?;
    writer.finish()
}

/// Deserializes a JSON document into `T`
///
/// An empty document yields a default value. A document that is `null` yields `None`.
pub fn deserialize_json<T: DeserializeShape>(body: &[u8]) -> Result<Option<T>, DeserializeError> {
    let mut reader = JsonShapeReader::new(body);
    let value = T::deserialize(&mut reader)?;
    reader.finish()?;
    Ok(value)
}

/// Writes shapes as JSON. Structures and maps become objects, lists become arrays.
#[derive(Debug, Default)]
pub struct JsonShapeWriter {
    writer: JsonWriter,
}

impl JsonShapeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Result<String, SerializationError> {
        self.writer.finish().map_err(SerializationError::encoding)
    }
}

fn written(result: Result<&mut JsonWriter, WriteError>) -> Result<(), SerializationError> {
    result.map(|_| ()).map_err(SerializationError::encoding)
}

impl ShapeWriter for JsonShapeWriter {
    fn begin_member(
        &mut self,
        name: &str,
        _item_name: Option<&str>,
    ) -> Result<(), SerializationError> {
        written(self.writer.key(name))
    }

    fn end_member(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn begin_struct(&mut self) -> Result<(), SerializationError> {
        written(self.writer.start_object())
    }

    fn end_struct(&mut self) -> Result<(), SerializationError> {
        written(self.writer.end_object())
    }

    fn begin_list(&mut self) -> Result<(), SerializationError> {
        written(self.writer.start_array())
    }

    fn begin_list_item(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn end_list_item(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn end_list(&mut self) -> Result<(), SerializationError> {
        written(self.writer.end_array())
    }

    fn begin_map(&mut self) -> Result<(), SerializationError> {
        written(self.writer.start_object())
    }

    fn begin_map_entry(&mut self, key: &str) -> Result<(), SerializationError> {
        written(self.writer.key(key))
    }

    fn end_map_entry(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn end_map(&mut self) -> Result<(), SerializationError> {
        written(self.writer.end_object())
    }

    fn write_string(&mut self, value: &str) -> Result<(), SerializationError> {
        written(self.writer.string(value))
    }

    fn write_boolean(&mut self, value: bool) -> Result<(), SerializationError> {
        written(self.writer.boolean(value))
    }

    fn write_number(&mut self, value: Number) -> Result<(), SerializationError> {
        written(self.writer.number(value))
    }

    fn omits_empty_lists(&self) -> bool {
        true
    }
}

/// Walks a JSON token stream, handing each object member to the shape being populated
///
/// The reader tracks the nesting depth of the value it is positioned in. Members that the shape
/// does not know are skipped in their entirety, whatever their depth.
pub struct JsonShapeReader<'a> {
    tokens: Peekable<JsonTokenIterator<'a>>,
    depth: usize,
}

impl<'a> JsonShapeReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        JsonShapeReader {
            tokens: json_token_iter(input).peekable(),
            depth: 0,
        }
    }

    /// Fails if any tokens remain after the top-level value
    pub fn finish(mut self) -> Result<(), DeserializeError> {
        match self.next_token()? {
            None => Ok(()),
            Some(token) => Err(unexpected(&token, "expected end of document")),
        }
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>, DeserializeError> {
        Ok(self.tokens.next().transpose()?)
    }
}

fn unexpected(token: &Token<'_>, expected: &'static str) -> DeserializeError {
    token.error(Cow::Borrowed(expected)).into()
}

fn unexpected_eos() -> DeserializeError {
    Error::new(ErrorReason::UnexpectedEos, None).into()
}

impl ShapeReader for JsonShapeReader<'_> {
    fn read_string(&mut self) -> Result<Option<String>, DeserializeError> {
        match self.next_token()? {
            Some(Token::ValueString { value, .. }) => Ok(Some(value.to_unescaped()?.into_owned())),
            Some(Token::ValueNull { .. }) => Ok(None),
            Some(token) => Err(unexpected(&token, "expected a string")),
            None => Err(unexpected_eos()),
        }
    }

    fn read_boolean(&mut self) -> Result<Option<bool>, DeserializeError> {
        match self.next_token()? {
            Some(Token::ValueBool { value, .. }) => Ok(Some(value)),
            Some(Token::ValueNull { .. }) => Ok(None),
            Some(token) => Err(unexpected(&token, "expected a boolean")),
            None => Err(unexpected_eos()),
        }
    }

    fn read_number(&mut self) -> Result<Option<Number>, DeserializeError> {
        match self.next_token()? {
            Some(Token::ValueNumber { value, .. }) => Ok(Some(value)),
            Some(Token::ValueNull { .. }) => Ok(None),
            Some(token) => Err(unexpected(&token, "expected a number")),
            None => Err(unexpected_eos()),
        }
    }

    fn read_struct(&mut self, visit: &mut MemberVisitor<'_>) -> Result<bool, DeserializeError> {
        match self.next_token()? {
            Some(Token::StartObject { .. }) => {}
            Some(Token::ValueNull { .. }) => return Ok(false),
            Some(token) => return Err(unexpected(&token, "expected an object")),
            // an empty document is an empty result
            None if self.depth == 0 => return Ok(true),
            None => return Err(unexpected_eos()),
        }
        self.depth += 1;
        loop {
            match self.next_token()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => {
                    let key = key.to_unescaped()?;
                    if !visit(&*key, self)? {
                        trace!(member = %key, depth = self.depth, "skipping unknown member");
                        skip_value(&mut self.tokens)?;
                    }
                }
                Some(token) => return Err(unexpected(&token, "expected an object key")),
                None => return Err(unexpected_eos()),
            }
        }
        self.depth -= 1;
        Ok(true)
    }

    fn read_list(
        &mut self,
        item: &mut dyn FnMut(&mut dyn ShapeReader) -> Result<(), DeserializeError>,
    ) -> Result<bool, DeserializeError> {
        match self.next_token()? {
            Some(Token::StartArray { .. }) => {}
            Some(Token::ValueNull { .. }) => return Ok(false),
            Some(token) => return Err(unexpected(&token, "expected an array")),
            None => return Err(unexpected_eos()),
        }
        self.depth += 1;
        loop {
            if let Some(Ok(Token::EndArray { .. })) = self.tokens.peek() {
                self.tokens.next();
                break;
            }
            item(self)?;
        }
        self.depth -= 1;
        Ok(true)
    }

    fn read_map(
        &mut self,
        entry: &mut dyn FnMut(String, &mut dyn ShapeReader) -> Result<(), DeserializeError>,
    ) -> Result<bool, DeserializeError> {
        match self.next_token()? {
            Some(Token::StartObject { .. }) => {}
            Some(Token::ValueNull { .. }) => return Ok(false),
            Some(token) => return Err(unexpected(&token, "expected an object")),
            None => return Err(unexpected_eos()),
        }
        self.depth += 1;
        loop {
            match self.next_token()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => {
                    let key = key.to_unescaped()?.into_owned();
                    entry(key, self)?;
                }
                Some(token) => return Err(unexpected(&token, "expected an object key")),
                None => return Err(unexpected_eos()),
            }
        }
        self.depth -= 1;
        Ok(true)
    }
}

/// Parses the generic error of an AWS JSON response
///
/// The code comes from the `X-Amzn-Errortype` header, or from `code` / `__type` in the body.
/// Any namespace prefix or trailing URL is removed from the code.
pub fn parse_generic_error(
    headers: &http::HeaderMap,
    body: &[u8],
) -> Result<smithy_types::Error, DeserializeError> {
    let mut code = None;
    let mut message = None;
    let mut tokens = json_token_iter(body).peekable();
    if tokens.peek().is_some() {
        expect_start_object(tokens.next())?;
        loop {
            match tokens.next().transpose()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => match &*key.to_unescaped()? {
                    "code" | "__type" => code = expect_string_or_null(tokens.next())?,
                    "message" | "Message" | "errorMessage" => {
                        message = expect_string_or_null(tokens.next())?
                    }
                    _ => skip_value(&mut tokens)?,
                },
                Some(token) => return Err(unexpected(&token, "expected an object key")),
                None => return Err(unexpected_eos()),
            }
        }
    }
    let header_code = headers
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let mut builder = smithy_types::Error::builder();
    if let Some(code) = header_code.or(code) {
        builder.code(sanitize_error_code(&code));
    }
    if let Some(message) = message {
        builder.message(message);
    }
    if let Some(request_id) = headers
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok())
    {
        builder.request_id(request_id);
    }
    Ok(builder.build())
}
