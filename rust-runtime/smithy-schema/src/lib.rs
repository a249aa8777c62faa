/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Field-table driven (de)serialization of Smithy structures.
//!
//! Every modeled structure carries one `static` [`StructureSchema`]: an ordered table of
//! [`Member`]s, each naming the member on the wire and knowing how to read and write it. The
//! [`structure!`] macro builds that table from a list of `field: "WireName"` pairs. The codecs in
//! [`codec`] walk the tables, so a single implementation serves every shape of every service.
//!
//! ```rust
//! use smithy_schema::structure;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! pub struct RouteFilterPrefix {
//!     pub cidr: Option<String>,
//! }
//!
//! structure!(RouteFilterPrefix {
//!     cidr: "cidr",
//! });
//!
//! let prefix = RouteFilterPrefix { cidr: Some("10.0.0.0/24".to_string()) };
//! let json = smithy_schema::codec::json::serialize_json(&prefix).unwrap();
//! assert_eq!(json, r#"{"cidr":"10.0.0.0/24"}"#);
//! let parsed: Option<RouteFilterPrefix> =
//!     smithy_schema::codec::json::deserialize_json(json.as_bytes()).unwrap();
//! assert_eq!(parsed, Some(prefix));
//! ```

use crate::serde::{ShapeReader, ShapeWriter};
use std::fmt;

pub mod codec;
mod error;
mod macros;
pub mod request;
pub mod serde;

pub use error::DeserializeError;
pub use smithy_http::operation::SerializationError;

/// Writes one member of `T` if it is present.
pub type SerializeMemberFn<T> = fn(&T, &mut dyn ShapeWriter) -> Result<(), SerializationError>;

/// Reads the value of one member into `T`. The reader is positioned on the member's value.
pub type DeserializeMemberFn<T> = fn(&mut T, &mut dyn ShapeReader) -> Result<(), DeserializeError>;

/// A single entry in a structure's field table
pub struct Member<T> {
    /// Member name on the wire (JSON object key or XML element name)
    pub name: &'static str,
    /// For list members serialized as XML, the element name wrapping each item
    pub item_name: Option<&'static str>,
    pub serialize: SerializeMemberFn<T>,
    pub deserialize: DeserializeMemberFn<T>,
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("item_name", &self.item_name)
            .finish()
    }
}

/// The ordered field table of a structure
///
/// Members are serialized in table order. Tables are `static`, so they are built once and
/// shared across threads without synchronization.
pub struct StructureSchema<T: 'static> {
    pub name: &'static str,
    pub members: &'static [Member<T>],
}

impl<T> StructureSchema<T> {
    /// Looks up a member by its wire name
    pub fn member(&self, wire_name: &str) -> Option<&Member<T>> {
        self.members.iter().find(|member| member.name == wire_name)
    }
}

impl<T> fmt::Debug for StructureSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureSchema")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish()
    }
}

/// A structure with a field table
pub trait Shape: Default + Sized + 'static {
    fn schema() -> &'static StructureSchema<Self>;
}
