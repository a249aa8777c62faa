/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! XML encoding that rejects unbalanced elements and characters outside of the XML 1.0
//! character range

use crate::escape::{escape, find_invalid_char};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XmlEncodeError {
    #[error("the character {chr:?} is not allowed in an XML 1.0 document")]
    InvalidCharacter { chr: char },
    #[error("invalid XML element name: `{name}`")]
    InvalidName { name: String },
    #[error("unbalanced XML: {0}")]
    Unbalanced(&'static str),
}

/// Streaming XML writer
///
/// Elements are opened with [`XmlWriter::start_el`] and closed, innermost first, with
/// [`XmlWriter::end_el`]. Attributes may only be written while the most recent element is
/// still empty.
///
/// ```rust
/// use smithy_xml::encode::XmlWriter;
/// let mut writer = XmlWriter::new();
/// writer
///     .start_el("Hello")?
///     .write_ns("https://example.com", None)?
///     .data("world")?
///     .end_el()?;
/// assert_eq!(
///     writer.finish()?,
///     r#"<Hello xmlns="https://example.com">world</Hello>"#
/// );
/// # Ok::<(), smithy_xml::encode::XmlEncodeError>(())
/// ```
#[derive(Debug, Default)]
pub struct XmlWriter {
    doc: String,
    open: Vec<String>,
    start_tag_open: bool,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new element nested inside of the current one.
    pub fn start_el(&mut self, tag: &str) -> Result<&mut Self, XmlEncodeError> {
        if !is_valid_name(tag) {
            return Err(XmlEncodeError::InvalidName {
                name: tag.to_string(),
            });
        }
        if self.open.is_empty() && !self.doc.is_empty() {
            return Err(XmlEncodeError::Unbalanced("more than one root element"));
        }
        self.close_start_tag();
        self.doc.push('<');
        self.doc.push_str(tag);
        self.open.push(tag.to_string());
        self.start_tag_open = true;
        Ok(self)
    }

    /// Writes an attribute on the element most recently opened.
    pub fn write_attribute(&mut self, key: &str, value: &str) -> Result<&mut Self, XmlEncodeError> {
        if !self.start_tag_open {
            return Err(XmlEncodeError::Unbalanced(
                "attributes must be written before element content",
            ));
        }
        if !is_valid_name(key) {
            return Err(XmlEncodeError::InvalidName {
                name: key.to_string(),
            });
        }
        check_chars(value)?;
        self.doc.push(' ');
        self.doc.push_str(key);
        self.doc.push_str("=\"");
        self.doc.push_str(&escape(value));
        self.doc.push('"');
        Ok(self)
    }

    /// Declares `namespace` on the element most recently opened, as the default namespace
    /// or bound to `prefix`.
    pub fn write_ns(
        &mut self,
        namespace: &str,
        prefix: Option<&str>,
    ) -> Result<&mut Self, XmlEncodeError> {
        match prefix {
            Some(prefix) => self.write_attribute(&format!("xmlns:{}", prefix), namespace),
            None => self.write_attribute("xmlns", namespace),
        }
    }

    /// Writes escaped text inside of the current element.
    pub fn data(&mut self, data: &str) -> Result<&mut Self, XmlEncodeError> {
        if self.open.is_empty() {
            return Err(XmlEncodeError::Unbalanced("data written outside of an element"));
        }
        check_chars(data)?;
        self.close_start_tag();
        self.doc.push_str(&escape(data));
        Ok(self)
    }

    /// Closes the innermost open element.
    pub fn end_el(&mut self) -> Result<&mut Self, XmlEncodeError> {
        let tag = self
            .open
            .pop()
            .ok_or(XmlEncodeError::Unbalanced("no element to close"))?;
        self.close_start_tag();
        self.doc.push_str("</");
        self.doc.push_str(&tag);
        self.doc.push('>');
        Ok(self)
    }

    /// Returns the finished document. Fails if any element is still open.
    pub fn finish(self) -> Result<String, XmlEncodeError> {
        if !self.open.is_empty() {
            return Err(XmlEncodeError::Unbalanced("unclosed element"));
        }
        Ok(self.doc)
    }

    fn close_start_tag(&mut self) {
        if self.start_tag_open {
            self.doc.push('>');
            self.start_tag_open = false;
        }
    }
}

fn check_chars(value: &str) -> Result<(), XmlEncodeError> {
    match find_invalid_char(value) {
        Some(chr) => Err(XmlEncodeError::InvalidCharacter { chr }),
        None => Ok(()),
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|chr| chr.is_alphanumeric() || matches!(chr, '_' | ':' | '-' | '.'))
}
