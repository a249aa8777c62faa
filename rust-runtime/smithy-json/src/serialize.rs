/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::escape_string;
use smithy_types::Number;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Object,
    Array,
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    started: bool,
    /// Set after a key has been written and before its value.
    awaiting_value: bool,
}

/// Error returned when events are written out of order, such as a value in an object
/// without a preceding key, or a mismatched end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteError {
    message: &'static str,
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JSON write: {}", self.message)
    }
}

impl std::error::Error for WriteError {}

fn invalid(message: &'static str) -> WriteError {
    WriteError { message }
}

/// Streaming JSON writer that owns its output buffer.
///
/// Objects and arrays are opened and closed with explicit calls, and the writer tracks
/// where commas are needed. Values inside an object must each be preceded by [`JsonWriter::key`].
#[derive(Debug, Default)]
pub struct JsonWriter {
    json: String,
    scopes: Vec<Scope>,
    /// True once a complete top-level value has been written.
    done: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an object as the next value.
    pub fn start_object(&mut self) -> Result<&mut Self, WriteError> {
        self.before_value()?;
        self.json.push('{');
        self.scopes.push(Scope {
            kind: ScopeKind::Object,
            started: false,
            awaiting_value: false,
        });
        Ok(self)
    }

    /// Finishes the innermost object.
    pub fn end_object(&mut self) -> Result<&mut Self, WriteError> {
        self.end_scope(ScopeKind::Object)?;
        self.json.push('}');
        Ok(self)
    }

    /// Starts an array as the next value.
    pub fn start_array(&mut self) -> Result<&mut Self, WriteError> {
        self.before_value()?;
        self.json.push('[');
        self.scopes.push(Scope {
            kind: ScopeKind::Array,
            started: false,
            awaiting_value: false,
        });
        Ok(self)
    }

    /// Finishes the innermost array.
    pub fn end_array(&mut self) -> Result<&mut Self, WriteError> {
        self.end_scope(ScopeKind::Array)?;
        self.json.push(']');
        Ok(self)
    }

    /// Writes an object key. The next call must write its value.
    pub fn key(&mut self, key: &str) -> Result<&mut Self, WriteError> {
        match self.scopes.last_mut() {
            Some(scope) if scope.kind == ScopeKind::Object && !scope.awaiting_value => {
                if scope.started {
                    self.json.push(',');
                }
                scope.started = true;
                scope.awaiting_value = true;
            }
            Some(scope) if scope.kind == ScopeKind::Object => {
                return Err(invalid("key written where a value was expected"))
            }
            _ => return Err(invalid("key written outside of an object")),
        }
        append_string(&mut self.json, key);
        self.json.push(':');
        Ok(self)
    }

    /// Writes a string value.
    pub fn string(&mut self, value: &str) -> Result<&mut Self, WriteError> {
        self.before_value()?;
        append_string(&mut self.json, value);
        self.after_value();
        Ok(self)
    }

    /// Writes a boolean value.
    pub fn boolean(&mut self, value: bool) -> Result<&mut Self, WriteError> {
        self.before_value()?;
        self.json.push_str(match value {
            true => "true",
            _ => "false",
        });
        self.after_value();
        Ok(self)
    }

    /// Writes a number value.
    pub fn number(&mut self, value: Number) -> Result<&mut Self, WriteError> {
        self.before_value()?;
        append_number(&mut self.json, value);
        self.after_value();
        Ok(self)
    }

    /// Writes a null value.
    pub fn null(&mut self) -> Result<&mut Self, WriteError> {
        self.before_value()?;
        self.json.push_str("null");
        self.after_value();
        Ok(self)
    }

    /// Returns the written document. Fails if any object or array is still open.
    pub fn finish(self) -> Result<String, WriteError> {
        if !self.scopes.is_empty() {
            return Err(invalid("unterminated object or array"));
        }
        Ok(self.json)
    }

    fn before_value(&mut self) -> Result<(), WriteError> {
        match self.scopes.last_mut() {
            None if self.done => Err(invalid("more than one top-level value")),
            None => Ok(()),
            Some(scope) => match scope.kind {
                ScopeKind::Object if scope.awaiting_value => {
                    scope.awaiting_value = false;
                    Ok(())
                }
                ScopeKind::Object => Err(invalid("object value written without a key")),
                ScopeKind::Array => {
                    if scope.started {
                        self.json.push(',');
                    }
                    scope.started = true;
                    Ok(())
                }
            },
        }
    }

    fn after_value(&mut self) {
        if self.scopes.is_empty() {
            self.done = true;
        }
    }

    fn end_scope(&mut self, kind: ScopeKind) -> Result<(), WriteError> {
        let awaiting_value = match self.scopes.last() {
            Some(scope) if scope.kind == kind => scope.awaiting_value,
            _ => return Err(invalid("mismatched end of object or array")),
        };
        if awaiting_value {
            return Err(invalid("key written without a value"));
        }
        self.scopes.pop();
        self.after_value();
        Ok(())
    }
}

fn append_string(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(&escape_string(value));
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) => {
            // If the value is NaN, Infinity, or -Infinity
            if value.is_nan() || value.is_infinite() {
                json.push_str("null");
            } else {
                json.push_str(ryu::Buffer::new().format_finite(value));
            }
        }
    }
}
