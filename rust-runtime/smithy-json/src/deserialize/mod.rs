/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::ErrorReason::*;
use smithy_types::Number;

mod error;
pub mod token;

pub use error::{Error, ErrorReason};
pub use token::{EscapeError, EscapedStr, Offset, Token};

/// Returns an Iterator of `Result<Token, Error>` over a slice of bytes.
///
/// The iterator validates structure as it goes (balanced brackets, commas, colons) but
/// leaves string values escaped until a caller asks for them. Once an error is returned,
/// the iterator is exhausted.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

/// JSON token parser as a Rust iterator
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn peek_expect(&self) -> Result<u8, Error> {
        self.peek_byte().ok_or_else(|| self.error(UnexpectedEos))
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn next_expect(&mut self) -> Result<u8, Error> {
        let byte = self.peek_expect()?;
        self.advance();
        Ok(byte)
    }

    fn error_at(&self, offset: usize, reason: ErrorReason) -> Error {
        Error::new(reason, Some(offset))
    }

    fn error(&self, reason: ErrorReason) -> Error {
        self.error_at(self.index, reason)
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.advance();
        }
    }

    fn state(&self) -> State {
        self.state_stack.last().copied().unwrap_or(State::Initial)
    }

    fn replace_state(&mut self, state: State) {
        self.state_stack.pop();
        self.state_stack.push(state);
    }

    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b'{' => {
                self.advance();
                self.state_stack.push(State::ObjectFirstKeyOrEnd);
                Ok(Token::StartObject { offset })
            }
            b'[' => {
                self.advance();
                self.state_stack.push(State::ArrayFirstValueOrEnd);
                Ok(Token::StartArray { offset })
            }
            b'"' => Ok(Token::ValueString {
                offset,
                value: EscapedStr::new(self.read_string()?),
            }),
            b'-' | b'0'..=b'9' => Ok(Token::ValueNumber {
                offset,
                value: self.read_number()?,
            }),
            b'n' => {
                self.expect_literal(b"null")?;
                Ok(Token::ValueNull { offset })
            }
            b't' => {
                self.expect_literal(b"true")?;
                Ok(Token::ValueBool {
                    offset,
                    value: true,
                })
            }
            b'f' => {
                self.expect_literal(b"false")?;
                Ok(Token::ValueBool {
                    offset,
                    value: false,
                })
            }
            byte => Err(self.error(UnexpectedToken(
                byte.into(),
                "'{', '[', '\"', 'null', 'true', 'false', <number>",
            ))),
        }
    }

    /// Reads a quoted string and returns its contents, still escaped.
    fn read_string(&mut self) -> Result<&'a str, Error> {
        let input = self.input;
        let quote = self.next_expect()?;
        debug_assert_eq!(b'"', quote);
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&input[start..self.index])
                        .map_err(|err| self.error_at(start, err.into()))?;
                    self.advance();
                    return Ok(value);
                }
                b'\\' => {
                    self.advance();
                    match self.next_expect()? {
                        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u' => {}
                        byte => {
                            return Err(self.error_at(self.index - 1, InvalidEscape(byte.into())))
                        }
                    }
                }
                byte @ 0x00..=0x1F => return Err(self.error(UnexpectedControlCharacter(byte))),
                _ => self.advance(),
            }
        }
    }

    fn read_number(&mut self) -> Result<Number, Error> {
        let input = self.input;
        let start = self.index;
        if let Some(b'-') = self.peek_byte() {
            self.advance();
        }
        while let Some(b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-') = self.peek_byte() {
            self.advance();
        }
        let text = std::str::from_utf8(&input[start..self.index])
            .map_err(|err| self.error_at(start, err.into()))?;
        let invalid = || self.error_at(start, InvalidNumber);
        if text.contains(|chr: char| matches!(chr, '.' | 'e' | 'E')) {
            return text.parse::<f64>().map(Number::Float).map_err(|_| invalid());
        }
        let integer = if text.starts_with('-') {
            text.parse::<i64>().map(Number::NegInt)
        } else {
            text.parse::<u64>().map(Number::PosInt)
        };
        // Integers outside of the 64-bit range degrade to floats
        integer.or_else(|_| text.parse::<f64>().map(Number::Float).map_err(|_| invalid()))
    }

    fn expect_literal(&mut self, expected: &'static [u8]) -> Result<(), Error> {
        let start = self.index;
        let end = start + expected.len();
        if self.input.get(start..end) != Some(expected) {
            return Err(self.error_at(
                start,
                ExpectedLiteral(String::from_utf8_lossy(expected).into()),
            ));
        }
        self.index = end;
        Ok(())
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b'"' => {}
            byte => return Err(self.error(UnexpectedToken(byte.into(), "'\"'"))),
        }
        let key = self.read_string()?;
        self.discard_whitespace();
        match self.next_expect()? {
            b':' => Ok(Token::ObjectKey {
                offset,
                key: EscapedStr::new(key),
            }),
            byte => Err(self.error_at(self.index - 1, UnexpectedToken(byte.into(), "':'"))),
        }
    }

    fn end_scope(&mut self, token: Token<'a>) -> Result<Token<'a>, Error> {
        self.advance();
        self.state_stack.pop();
        Ok(token)
    }

    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b']' => self.end_scope(Token::EndArray { offset }),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b']' => self.end_scope(Token::EndArray { offset }),
            b',' => {
                self.advance();
                self.read_value()
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "']', ','"))),
        }
    }

    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b'}' => self.end_scope(Token::EndObject { offset }),
            _ => {
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
        }
    }

    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b'}' => self.end_scope(Token::EndObject { offset }),
            b',' => {
                self.advance();
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "'}', ','"))),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, Error> {
        self.replace_state(State::ObjectNextKeyOrEnd);
        self.read_value()
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.index <= self.input.len());
        self.discard_whitespace();
        if self.index == self.input.len() {
            return match self.state() {
                State::Initial => None,
                _ => {
                    self.state_stack.truncate(1);
                    Some(Err(self.error(UnexpectedEos)))
                }
            };
        }
        let result = match self.state() {
            State::Initial => self.read_value(),
            State::ArrayFirstValueOrEnd => self.state_array_first_value_or_end(),
            State::ArrayNextValueOrEnd => self.state_array_next_value_or_end(),
            State::ObjectFirstKeyOrEnd => self.state_object_first_key_or_end(),
            State::ObjectNextKeyOrEnd => self.state_object_next_key_or_end(),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            self.index = self.input.len();
            self.state_stack.truncate(1);
        }
        Some(result)
    }
}
