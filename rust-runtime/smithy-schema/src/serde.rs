/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic interfaces between shapes and codecs.
//!
//! Shapes describe themselves to a [`ShapeWriter`] and are populated from a [`ShapeReader`].
//! Both traits are object safe so that field tables can hold plain function pointers.

use crate::{DeserializeError, Shape};
use smithy_http::operation::SerializationError;
use smithy_types::Number;
use std::collections::HashMap;
use std::convert::TryFrom;

/// Sink for the events produced while walking a shape
pub trait ShapeWriter {
    /// Starts a structure member. `item_name` is the element name of each list item when the
    /// member is a list.
    fn begin_member(&mut self, name: &str, item_name: Option<&str>)
        -> Result<(), SerializationError>;
    fn end_member(&mut self) -> Result<(), SerializationError>;

    fn begin_struct(&mut self) -> Result<(), SerializationError>;
    fn end_struct(&mut self) -> Result<(), SerializationError>;

    fn begin_list(&mut self) -> Result<(), SerializationError>;
    fn begin_list_item(&mut self) -> Result<(), SerializationError>;
    fn end_list_item(&mut self) -> Result<(), SerializationError>;
    fn end_list(&mut self) -> Result<(), SerializationError>;

    fn begin_map(&mut self) -> Result<(), SerializationError>;
    fn begin_map_entry(&mut self, key: &str) -> Result<(), SerializationError>;
    fn end_map_entry(&mut self) -> Result<(), SerializationError>;
    fn end_map(&mut self) -> Result<(), SerializationError>;

    fn write_string(&mut self, value: &str) -> Result<(), SerializationError>;
    fn write_boolean(&mut self, value: bool) -> Result<(), SerializationError>;
    fn write_number(&mut self, value: Number) -> Result<(), SerializationError>;

    /// Whether a present but empty list is left out of the output
    fn omits_empty_lists(&self) -> bool;
}

/// Callback invoked for each member of a structure. Returns `false` if the member is unknown
/// and the reader should skip its value.
pub type MemberVisitor<'v> =
    dyn FnMut(&str, &mut dyn ShapeReader) -> Result<bool, DeserializeError> + 'v;

/// Source of values while reading a shape
///
/// Every method consumes exactly one value. `Ok(None)` and `Ok(false)` signal an explicit null.
pub trait ShapeReader {
    fn read_string(&mut self) -> Result<Option<String>, DeserializeError>;
    fn read_boolean(&mut self) -> Result<Option<bool>, DeserializeError>;
    fn read_number(&mut self) -> Result<Option<Number>, DeserializeError>;

    /// Reads a structure, calling `visit` with the wire name of every member found.
    fn read_struct(&mut self, visit: &mut MemberVisitor<'_>) -> Result<bool, DeserializeError>;

    /// Reads a list, calling `item` once per item.
    fn read_list(
        &mut self,
        item: &mut dyn FnMut(&mut dyn ShapeReader) -> Result<(), DeserializeError>,
    ) -> Result<bool, DeserializeError>;

    /// Reads a map, calling `entry` with each key.
    fn read_map(
        &mut self,
        entry: &mut dyn FnMut(String, &mut dyn ShapeReader) -> Result<(), DeserializeError>,
    ) -> Result<bool, DeserializeError>;
}

pub trait SerializeShape {
    fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError>;

    #[doc(hidden)]
    fn is_empty_list(&self) -> bool {
        false
    }
}

pub trait DeserializeShape: Sized {
    /// Reads a value. Returns `None` when the value is an explicit null.
    fn deserialize(reader: &mut dyn ShapeReader) -> Result<Option<Self>, DeserializeError>;
}

/// Writes `value` as the member `name`, or nothing if it is absent
pub fn write_member<V>(
    writer: &mut dyn ShapeWriter,
    name: &str,
    item_name: Option<&str>,
    value: Option<&V>,
) -> Result<(), SerializationError>
where
    V: SerializeShape + ?Sized,
{
    let value = match value {
        Some(value) => value,
        None => return Ok(()),
    };
    if value.is_empty_list() && writer.omits_empty_lists() {
        return Ok(());
    }
    writer.begin_member(name, item_name)?;
    value.serialize(writer)?;
    writer.end_member()
}

/// Writes every member of `value` in field table order
pub fn serialize_structure<T: Shape>(
    value: &T,
    writer: &mut dyn ShapeWriter,
) -> Result<(), SerializationError> {
    writer.begin_struct()?;
    for member in T::schema().members {
        (member.serialize)(value, writer)?;
    }
    writer.end_struct()
}

/// Populates a default `T` from the members the reader finds. Unknown members are left to the
/// reader to skip.
pub fn deserialize_structure<T: Shape>(
    reader: &mut dyn ShapeReader,
) -> Result<Option<T>, DeserializeError> {
    let schema = T::schema();
    let mut out = T::default();
    let present = reader.read_struct(&mut |name, reader| match schema.member(name) {
        Some(member) => {
            (member.deserialize)(&mut out, reader)?;
            Ok(true)
        }
        None => Ok(false),
    })?;
    Ok(if present { Some(out) } else { None })
}

impl SerializeShape for String {
    fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError> {
        writer.write_string(self)
    }
}

impl SerializeShape for str {
    fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError> {
        writer.write_string(self)
    }
}

impl DeserializeShape for String {
    fn deserialize(reader: &mut dyn ShapeReader) -> Result<Option<Self>, DeserializeError> {
        reader.read_string()
    }
}

impl SerializeShape for bool {
    fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError> {
        writer.write_boolean(*self)
    }
}

impl DeserializeShape for bool {
    fn deserialize(reader: &mut dyn ShapeReader) -> Result<Option<Self>, DeserializeError> {
        reader.read_boolean()
    }
}

macro_rules! integer_shape {
    ($typ:ident) => {
        impl SerializeShape for $typ {
            fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError> {
                writer.write_number(Number::from(*self))
            }
        }

        impl DeserializeShape for $typ {
            fn deserialize(
                reader: &mut dyn ShapeReader,
            ) -> Result<Option<Self>, DeserializeError> {
                match reader.read_number()? {
                    Some(number) => Ok(Some($typ::try_from(number)?)),
                    None => Ok(None),
                }
            }
        }
    };
}

integer_shape!(i32);
integer_shape!(i64);

impl SerializeShape for f64 {
    fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError> {
        writer.write_number(Number::Float(*self))
    }
}

impl DeserializeShape for f64 {
    fn deserialize(reader: &mut dyn ShapeReader) -> Result<Option<Self>, DeserializeError> {
        Ok(reader.read_number()?.map(Number::to_f64_lossy))
    }
}

impl<T: SerializeShape> SerializeShape for Vec<T> {
    fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError> {
        writer.begin_list()?;
        for item in self {
            writer.begin_list_item()?;
            item.serialize(writer)?;
            writer.end_list_item()?;
        }
        writer.end_list()
    }

    fn is_empty_list(&self) -> bool {
        self.is_empty()
    }
}

/// Null items are dropped.
impl<T: DeserializeShape> DeserializeShape for Vec<T> {
    fn deserialize(reader: &mut dyn ShapeReader) -> Result<Option<Self>, DeserializeError> {
        let mut items = Vec::new();
        let present = reader.read_list(&mut |reader| {
            if let Some(item) = T::deserialize(reader)? {
                items.push(item);
            }
            Ok(())
        })?;
        Ok(if present { Some(items) } else { None })
    }
}

/// Entries are written in key order so that request bodies are stable.
impl<T: SerializeShape> SerializeShape for HashMap<String, T> {
    fn serialize(&self, writer: &mut dyn ShapeWriter) -> Result<(), SerializationError> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        writer.begin_map()?;
        for (key, value) in entries {
            writer.begin_map_entry(key)?;
            value.serialize(writer)?;
            writer.end_map_entry()?;
        }
        writer.end_map()
    }
}

impl<T: DeserializeShape> DeserializeShape for HashMap<String, T> {
    fn deserialize(reader: &mut dyn ShapeReader) -> Result<Option<Self>, DeserializeError> {
        let mut entries = HashMap::new();
        let present = reader.read_map(&mut |key, reader| {
            if let Some(value) = T::deserialize(reader)? {
                entries.insert(key, value);
            }
            Ok(())
        })?;
        Ok(if present { Some(entries) } else { None })
    }
}
