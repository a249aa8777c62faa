/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! REST-XML bodies

use crate::codec::sanitize_error_code;
use crate::serde::{DeserializeShape, MemberVisitor, SerializeShape, ShapeReader, ShapeWriter};
use crate::DeserializeError;
use smithy_http::operation::SerializationError;
use smithy_types::Number;
use smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlDecodeError};
use smithy_xml::encode::{XmlEncodeError, XmlWriter};
use tracing::trace;

const DEFAULT_ITEM_NAME: &str = "member";

/// Serializes `value` as the children of a root element named `root`
pub fn serialize_xml<T: SerializeShape + ?Sized>(
    root: &str,
    namespace: Option<&str>,
    value: &T,
) -> Result<String, SerializationError> {
    let mut writer = XmlShapeWriter::new(root, namespace)?;
    value.serialize(&mut writer)?;
    writer.finish()
}

/// Deserializes a document whose root element is named `root`
///
/// A blank document yields a default value. A root element marked `nil` yields `None`.
pub fn deserialize_xml<T>(body: &[u8], root: &str) -> Result<Option<T>, DeserializeError>
where
    T: DeserializeShape + Default,
{
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Some(T::default()));
    }
    let mut doc = Document::try_from(body)?;
    let root_el = doc.root_element()?;
    if root_el.start_el().local() != root {
        return Err(DeserializeError::custom(format!(
            "invalid root, expected {} found {:?}",
            root,
            root_el.start_el()
        )));
    }
    let mut reader = XmlShapeReader::new(root_el);
    let value = T::deserialize(&mut reader)?;
    Ok(value)
}

/// Writes shapes as XML elements
///
/// Members become child elements named after the member. List items are wrapped in the
/// member's item element (`member` by default) and map entries are written as
/// `<entry><key/><value/></entry>`.
#[derive(Debug)]
pub struct XmlShapeWriter {
    writer: XmlWriter,
    pending_item_name: Option<String>,
    item_names: Vec<String>,
}

impl XmlShapeWriter {
    pub fn new(root: &str, namespace: Option<&str>) -> Result<Self, SerializationError> {
        let mut writer = XmlWriter::new();
        writer.start_el(root).map_err(SerializationError::encoding)?;
        if let Some(namespace) = namespace {
            writer
                .write_ns(namespace, None)
                .map_err(SerializationError::encoding)?;
        }
        Ok(XmlShapeWriter {
            writer,
            pending_item_name: None,
            item_names: vec![],
        })
    }

    pub fn finish(mut self) -> Result<String, SerializationError> {
        written(self.writer.end_el())?;
        self.writer.finish().map_err(SerializationError::encoding)
    }
}

fn written(result: Result<&mut XmlWriter, XmlEncodeError>) -> Result<(), SerializationError> {
    result.map(|_| ()).map_err(SerializationError::encoding)
}

fn format_number(value: Number) -> String {
    match value {
        Number::PosInt(v) => v.to_string(),
        Number::NegInt(v) => v.to_string(),
        Number::Float(v) if v.is_nan() => "NaN".to_string(),
        Number::Float(v) if v.is_infinite() && v > 0.0 => "Infinity".to_string(),
        Number::Float(v) if v.is_infinite() => "-Infinity".to_string(),
        Number::Float(v) => v.to_string(),
    }
}

impl ShapeWriter for XmlShapeWriter {
    fn begin_member(
        &mut self,
        name: &str,
        item_name: Option<&str>,
    ) -> Result<(), SerializationError> {
        self.pending_item_name = item_name.map(str::to_string);
        written(self.writer.start_el(name))
    }

    fn end_member(&mut self) -> Result<(), SerializationError> {
        written(self.writer.end_el())
    }

    fn begin_struct(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn end_struct(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn begin_list(&mut self) -> Result<(), SerializationError> {
        let item_name = self
            .pending_item_name
            .take()
            .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string());
        self.item_names.push(item_name);
        Ok(())
    }

    fn begin_list_item(&mut self) -> Result<(), SerializationError> {
        let item_name = self
            .item_names
            .last()
            .map(String::as_str)
            .unwrap_or(DEFAULT_ITEM_NAME);
        written(self.writer.start_el(item_name))
    }

    fn end_list_item(&mut self) -> Result<(), SerializationError> {
        written(self.writer.end_el())
    }

    fn end_list(&mut self) -> Result<(), SerializationError> {
        self.item_names.pop();
        Ok(())
    }

    fn begin_map(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn begin_map_entry(&mut self, key: &str) -> Result<(), SerializationError> {
        written(self.writer.start_el("entry"))?;
        written(self.writer.start_el("key"))?;
        written(self.writer.data(key))?;
        written(self.writer.end_el())?;
        written(self.writer.start_el("value"))
    }

    fn end_map_entry(&mut self) -> Result<(), SerializationError> {
        written(self.writer.end_el())?;
        written(self.writer.end_el())
    }

    fn end_map(&mut self) -> Result<(), SerializationError> {
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<(), SerializationError> {
        written(self.writer.data(value))
    }

    fn write_boolean(&mut self, value: bool) -> Result<(), SerializationError> {
        written(self.writer.data(if value { "true" } else { "false" }))
    }

    fn write_number(&mut self, value: Number) -> Result<(), SerializationError> {
        written(self.writer.data(&format_number(value)))
    }

    fn omits_empty_lists(&self) -> bool {
        false
    }
}

/// Walks the children of one element, handing each to the shape being populated
///
/// Children are matched by local name. A child that no member claims is skipped, along with
/// everything nested inside of it, when its scope is dropped.
pub struct XmlShapeReader<'inp, 'a> {
    decoder: ScopedDecoder<'inp, 'a>,
}

impl<'inp, 'a> XmlShapeReader<'inp, 'a> {
    pub fn new(decoder: ScopedDecoder<'inp, 'a>) -> Self {
        XmlShapeReader { decoder }
    }

    fn read_text(&mut self) -> Result<Option<String>, DeserializeError> {
        if self.decoder.start_el().is_nil() {
            return Ok(None);
        }
        Ok(Some(try_data(&mut self.decoder)?.into_owned()))
    }
}

fn parse_number(text: &str) -> Result<Number, DeserializeError> {
    let text = text.trim();
    if let Ok(value) = text.parse::<u64>() {
        return Ok(Number::PosInt(value));
    }
    if let Ok(value) = text.parse::<i64>() {
        return Ok(Number::NegInt(value));
    }
    match text {
        "NaN" => Ok(Number::Float(f64::NAN)),
        "Infinity" => Ok(Number::Float(f64::INFINITY)),
        "-Infinity" => Ok(Number::Float(f64::NEG_INFINITY)),
        _ => text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Number::Float)
            .ok_or_else(|| DeserializeError::custom(format!("expected a number, found `{}`", text))),
    }
}

impl ShapeReader for XmlShapeReader<'_, '_> {
    fn read_string(&mut self) -> Result<Option<String>, DeserializeError> {
        self.read_text()
    }

    fn read_boolean(&mut self) -> Result<Option<bool>, DeserializeError> {
        match self.read_text()?.as_deref().map(str::trim) {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(DeserializeError::custom(format!(
                "expected a boolean, found `{}`",
                other
            ))),
        }
    }

    fn read_number(&mut self) -> Result<Option<Number>, DeserializeError> {
        self.read_text()?.as_deref().map(parse_number).transpose()
    }

    fn read_struct(&mut self, visit: &mut MemberVisitor<'_>) -> Result<bool, DeserializeError> {
        if self.decoder.start_el().is_nil() {
            return Ok(false);
        }
        let depth = self.decoder.start_el().depth();
        while let Some(child) = self.decoder.next_tag()? {
            let name = child.start_el().local();
            if !visit(name, &mut XmlShapeReader::new(child))? {
                trace!(member = name, depth = depth + 1, "skipping unknown member");
            }
        }
        Ok(true)
    }

    fn read_list(
        &mut self,
        item: &mut dyn FnMut(&mut dyn ShapeReader) -> Result<(), DeserializeError>,
    ) -> Result<bool, DeserializeError> {
        if self.decoder.start_el().is_nil() {
            return Ok(false);
        }
        while let Some(child) = self.decoder.next_tag()? {
            item(&mut XmlShapeReader::new(child))?;
        }
        Ok(true)
    }

    fn read_map(
        &mut self,
        entry: &mut dyn FnMut(String, &mut dyn ShapeReader) -> Result<(), DeserializeError>,
    ) -> Result<bool, DeserializeError> {
        if self.decoder.start_el().is_nil() {
            return Ok(false);
        }
        while let Some(mut map_entry) = self.decoder.next_tag()? {
            if !map_entry.start_el().matches("entry") {
                continue;
            }
            let mut key = None;
            while let Some(mut part) = map_entry.next_tag()? {
                match part.start_el().local() {
                    "key" => key = Some(try_data(&mut part)?.into_owned()),
                    "value" => {
                        let key = key
                            .take()
                            .ok_or_else(|| DeserializeError::custom("map value before its key"))?;
                        entry(key, &mut XmlShapeReader::new(part))?;
                    }
                    _ => {}
                }
            }
        }
        Ok(true)
    }
}

fn read_error_fields(
    error: &mut ScopedDecoder<'_, '_>,
    builder: &mut smithy_types::Builder,
) -> Result<(), XmlDecodeError> {
    while let Some(mut tag) = error.next_tag()? {
        match tag.start_el().local() {
            "Code" => {
                builder.code(sanitize_error_code(&try_data(&mut tag)?));
            }
            "Message" => {
                builder.message(try_data(&mut tag)?);
            }
            "RequestId" => {
                builder.request_id(try_data(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parses the generic error of a REST-XML response
///
/// Both the wrapped form (`<ErrorResponse><Error>...</Error><RequestId/></ErrorResponse>`) and
/// a bare `<Error>` root are accepted. The `X-Amzn-RequestId` header is used when the body
/// carries no request id.
pub fn parse_generic_error(
    headers: &http::HeaderMap,
    body: &[u8],
) -> Result<smithy_types::Error, DeserializeError> {
    let mut builder = smithy_types::Error::builder();
    if let Some(request_id) = headers
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok())
    {
        builder.request_id(request_id);
    }
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(builder.build());
    }
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    match root.start_el().local() {
        "ErrorResponse" => {
            while let Some(mut tag) = root.next_tag()? {
                match tag.start_el().local() {
                    "Error" => read_error_fields(&mut tag, &mut builder)?,
                    "RequestId" => {
                        builder.request_id(try_data(&mut tag)?);
                    }
                    _ => {}
                }
            }
        }
        "Error" => read_error_fields(&mut root, &mut builder)?,
        other => {
            return Err(DeserializeError::custom(format!(
                "expected an error response, found <{}>",
                other
            )))
        }
    }
    Ok(builder.build())
}

#[cfg(test)]
mod test {
    use crate::codec::xml::{deserialize_xml, parse_generic_error, serialize_xml};
    use crate::{structure, DeserializeError};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use protocol_test_helpers::{assert_ok, validate_body, MediaType};
    use std::collections::HashMap;

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DelegationSet {
        pub id: Option<String>,
        pub caller_reference: Option<String>,
        pub name_servers: Option<Vec<String>>,
    }

    structure!(DelegationSet {
        id: "Id",
        caller_reference: "CallerReference",
        name_servers: "NameServers" => item "NameServer",
    });

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Response {
        pub delegation_set: Option<DelegationSet>,
        pub limit: Option<i64>,
        pub enabled: Option<bool>,
        pub labels: Option<HashMap<String, String>>,
        pub location: Option<String>,
    }

    structure!(Response {
        delegation_set: "DelegationSet",
        limit: "Limit",
        enabled: "Enabled",
        labels: "Labels",
    });

    const NS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

    #[test]
    fn serializes_members_lists_and_maps() {
        let mut labels = HashMap::new();
        labels.insert("env".to_string(), "prod".to_string());
        let response = Response {
            delegation_set: Some(DelegationSet {
                id: Some("N1PA6795SAMPLE".to_string()),
                caller_reference: None,
                name_servers: Some(vec![
                    "ns-1.awsdns-01.com".to_string(),
                    "ns-2.awsdns-02.net".to_string(),
                ]),
            }),
            limit: Some(-1),
            enabled: Some(true),
            labels: Some(labels),
            location: Some("not in the body".to_string()),
        };
        let body = serialize_xml("Response", Some(NS), &response).unwrap();
        assert_ok(validate_body(
            &body,
            r#"<Response xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
                <DelegationSet>
                    <Id>N1PA6795SAMPLE</Id>
                    <NameServers>
                        <NameServer>ns-1.awsdns-01.com</NameServer>
                        <NameServer>ns-2.awsdns-02.net</NameServer>
                    </NameServers>
                </DelegationSet>
                <Limit>-1</Limit>
                <Enabled>true</Enabled>
                <Labels><entry><key>env</key><value>prod</value></entry></Labels>
            </Response>"#,
            MediaType::Xml,
        ));
    }

    #[test]
    fn present_empty_list_keeps_its_wrapper() {
        let set = DelegationSet {
            name_servers: Some(vec![]),
            ..DelegationSet::default()
        };
        assert_eq!(
            serialize_xml("DelegationSet", None, &set).unwrap(),
            "<DelegationSet><NameServers></NameServers></DelegationSet>"
        );
    }

    #[test]
    fn invalid_characters_fail_serialization() {
        let set = DelegationSet {
            caller_reference: Some("bell\u{7}".to_string()),
            ..DelegationSet::default()
        };
        assert!(serialize_xml("DelegationSet", None, &set).is_err());
    }

    #[test]
    fn deserializes_nested_shapes_and_skips_unknown_elements() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
            <Response xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
                <Unknown><Deeply><Nested>value</Nested></Deeply></Unknown>
                <DelegationSet>
                    <Id>/delegationset/N1PA6795SAMPLE</Id>
                    <CallerReference>unique value</CallerReference>
                    <NameServers>
                        <NameServer>ns-1.awsdns-01.com</NameServer>
                        <member>ns-2.awsdns-02.net</member>
                    </NameServers>
                </DelegationSet>
                <Limit>42</Limit>
                <Enabled>false</Enabled>
                <Labels>
                    <entry><key>a</key><value>1</value></entry>
                    <entry><key>b</key><value></value></entry>
                </Labels>
            </Response>"#;
        let response: Response = deserialize_xml(body, "Response").unwrap().unwrap();
        let mut labels = HashMap::new();
        labels.insert("a".to_string(), "1".to_string());
        labels.insert("b".to_string(), "".to_string());
        assert_eq!(
            response,
            Response {
                delegation_set: Some(DelegationSet {
                    id: Some("/delegationset/N1PA6795SAMPLE".to_string()),
                    caller_reference: Some("unique value".to_string()),
                    name_servers: Some(vec![
                        "ns-1.awsdns-01.com".to_string(),
                        "ns-2.awsdns-02.net".to_string()
                    ]),
                }),
                limit: Some(42),
                enabled: Some(false),
                labels: Some(labels),
                location: None,
            }
        );
    }

    #[test]
    fn nil_elements_are_null() {
        let body = br#"<Response xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
                <DelegationSet xsi:nil="true"/>
                <Limit xsi:nil="true"></Limit>
            </Response>"#;
        let response: Response = deserialize_xml(body, "Response").unwrap().unwrap();
        assert_eq!(response, Response::default());

        let body = br#"<Response xmlns:i="http://www.w3.org/2001/XMLSchema-instance" i:nil="true"/>"#;
        assert_eq!(deserialize_xml::<Response>(body, "Response").unwrap(), None);
    }

    #[test]
    fn empty_and_mismatched_documents() {
        assert_eq!(
            deserialize_xml::<Response>(b"", "Response").unwrap(),
            Some(Response::default())
        );
        let err = deserialize_xml::<Response>(b"<Other></Other>", "Response").unwrap_err();
        assert!(matches!(err, DeserializeError::Custom(_)), "{:?}", err);
        assert!(deserialize_xml::<Response>(b"<Response><Limit>ten</Limit></Response>", "Response")
            .is_err());
        assert!(
            deserialize_xml::<Response>(b"<Response><Enabled>yes</Enabled></Response>", "Response")
                .is_err()
        );
    }

    #[test]
    fn generic_errors() {
        let body = br#"<ErrorResponse>
                <Error>
                    <Type>Sender</Type>
                    <Code>DelegationSetAlreadyCreated</Code>
                    <Message>A delegation set with the same caller reference already exists</Message>
                </Error>
                <RequestId>foo-id</RequestId>
            </ErrorResponse>"#;
        let error = parse_generic_error(&http::HeaderMap::new(), body).unwrap();
        assert_eq!(error.code(), Some("DelegationSetAlreadyCreated"));
        assert_eq!(
            error.message(),
            Some("A delegation set with the same caller reference already exists")
        );
        assert_eq!(error.request_id(), Some("foo-id"));

        let mut headers = http::HeaderMap::new();
        headers.insert("x-amzn-requestid", "header-id".parse().unwrap());
        let error =
            parse_generic_error(&headers, b"<Error><Code>InvalidInput</Code></Error>").unwrap();
        assert_eq!(error.code(), Some("InvalidInput"));
        assert_eq!(error.request_id(), Some("header-id"));

        assert!(parse_generic_error(&headers, b"<Unexpected/>").is_err());
    }

    proptest! {
        #[test]
        fn serialized_shapes_read_back(
            id in "[a-zA-Z0-9/ &<>'\"._-]{1,32}",
            caller_reference in proptest::option::of("[ -~\n\r\t\u{e9}]*"),
            name_servers in proptest::option::of(proptest::collection::vec("[a-z0-9.-]{0,16}", 1..4)),
            limit in proptest::option::of(any::<i64>()),
            enabled in proptest::option::of(any::<bool>()),
            labels in proptest::option::of(
                proptest::collection::hash_map("[a-z]{1,8}", "[ -~]*", 1..3)
            ),
        ) {
            let response = Response {
                delegation_set: Some(DelegationSet {
                    id: Some(id),
                    caller_reference,
                    name_servers,
                }),
                limit,
                enabled,
                labels,
                location: None,
            };
            let body = serialize_xml("Response", Some(NS), &response).unwrap();
            let parsed: Response = deserialize_xml(body.as_bytes(), "Response").unwrap().unwrap();
            prop_assert_eq!(parsed, response);
        }
    }
}
