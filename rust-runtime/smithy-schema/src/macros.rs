/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Builds the field table of a structure and implements [`Shape`](crate::Shape),
/// [`SerializeShape`](crate::serde::SerializeShape) and
/// [`DeserializeShape`](crate::serde::DeserializeShape) for it.
///
/// Every listed field must be an `Option` of a serializable type. Members are serialized in the
/// order they are listed. Fields that are not listed are not part of the body and keep their
/// default value when deserializing. A list member can name the XML element wrapping each of its
/// items with `=> item "Name"`.
#[macro_export]
macro_rules! structure {
    (@item $item:literal) => {
        Some($item)
    };
    (@item) => {
        None
    };
    ($ty:ident { $($field:ident: $wire:literal $(=> item $item:literal)?),* $(,)? }) => {
        impl $crate::Shape for $ty {
            fn schema() -> &'static $crate::StructureSchema<$ty> {
                static SCHEMA: $crate::StructureSchema<$ty> = $crate::StructureSchema {
                    name: stringify!($ty),
                    members: &[$(
                        $crate::Member {
                            name: $wire,
                            item_name: $crate::structure!(@item $($item)?),
                            serialize: |value: &$ty, writer: &mut dyn $crate::serde::ShapeWriter| {
                                $crate::serde::write_member(
                                    writer,
                                    $wire,
                                    $crate::structure!(@item $($item)?),
                                    value.$field.as_ref(),
                                )
                            },
                            deserialize: |value: &mut $ty, reader: &mut dyn $crate::serde::ShapeReader| {
                                value.$field = $crate::serde::DeserializeShape::deserialize(reader)?;
                                Ok(())
                            },
                        }
                    ),*],
                };
                &SCHEMA
            }
        }

        impl $crate::serde::SerializeShape for $ty {
            fn serialize(
                &self,
                writer: &mut dyn $crate::serde::ShapeWriter,
            ) -> Result<(), $crate::SerializationError> {
                $crate::serde::serialize_structure(self, writer)
            }
        }

        impl $crate::serde::DeserializeShape for $ty {
            fn deserialize(
                reader: &mut dyn $crate::serde::ShapeReader,
            ) -> Result<Option<Self>, $crate::DeserializeError> {
                $crate::serde::deserialize_structure(reader)
            }
        }
    };
}

/// Declares a Smithy string enum: the known values plus `Unknown` for values this client was
/// built without.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $value:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant,)*
            Unknown(String),
        }

        impl<'a> From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match s {
                    $($value => $name::$variant,)*
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)*
                    $name::Unknown(s) => s.as_ref(),
                }
            }

            pub fn values() -> &'static [&'static str] {
                &[$($value),*]
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::serde::SerializeShape for $name {
            fn serialize(
                &self,
                writer: &mut dyn $crate::serde::ShapeWriter,
            ) -> Result<(), $crate::SerializationError> {
                $crate::serde::ShapeWriter::write_string(writer, self.as_str())
            }
        }

        impl $crate::serde::DeserializeShape for $name {
            fn deserialize(
                reader: &mut dyn $crate::serde::ShapeReader,
            ) -> Result<Option<Self>, $crate::DeserializeError> {
                Ok($crate::serde::ShapeReader::read_string(reader)?.map(|value| $name::from(value.as_str())))
            }
        }
    };
}
