/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;
use std::str::Chars;

#[derive(Debug, PartialEq, Eq)]
enum ErrorKind {
    ExpectedSurrogatePair(u16),
    InvalidEscapeCharacter(char),
    InvalidUnicodeEscape(String),
    UnexpectedEndOfString,
}

/// Error returned when a JSON string can't be unescaped.
#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::ExpectedSurrogatePair(high) => write!(
                f,
                "expected a low surrogate to follow high surrogate \\u{:04X}",
                high
            ),
            ErrorKind::InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            ErrorKind::InvalidUnicodeEscape(escape) => {
                write!(f, "invalid JSON Unicode escape: \\u{}", escape)
            }
            ErrorKind::UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl std::error::Error for Error {}

/// Escapes a string for embedding in a JSON string value.
pub fn escape_string(value: &str) -> Cow<str> {
    let bytes = value.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        match byte {
            0..=0x1F | b'"' | b'\\' => {
                return Cow::Owned(escape_string_inner(&value[0..index], &value[index..]))
            }
            _ => {}
        }
    }
    Cow::Borrowed(value)
}

fn escape_string_inner(start: &str, rest: &str) -> String {
    let mut escaped = String::with_capacity(start.len() + rest.len() + 1);
    escaped.push_str(start);
    for chr in rest.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{00}'..='\u{1F}' => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
            _ => escaped.push(chr),
        }
    }
    escaped
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, the input is returned without copying.
pub fn unescape_string(value: &str) -> Result<Cow<str>, Error> {
    match value.find('\\') {
        None => Ok(Cow::Borrowed(value)),
        Some(index) => {
            let mut unescaped = String::with_capacity(value.len());
            unescaped.push_str(&value[0..index]);
            let mut chars = value[index..].chars();
            while let Some(chr) = chars.next() {
                if chr != '\\' {
                    unescaped.push(chr);
                    continue;
                }
                match chars.next().ok_or(ErrorKind::UnexpectedEndOfString)? {
                    '"' => unescaped.push('"'),
                    '\\' => unescaped.push('\\'),
                    '/' => unescaped.push('/'),
                    'b' => unescaped.push('\u{08}'),
                    'f' => unescaped.push('\u{0C}'),
                    'n' => unescaped.push('\n'),
                    'r' => unescaped.push('\r'),
                    't' => unescaped.push('\t'),
                    'u' => unescaped.push(read_unicode_escape(&mut chars)?),
                    other => return Err(ErrorKind::InvalidEscapeCharacter(other).into()),
                }
            }
            Ok(Cow::Owned(unescaped))
        }
    }
}

/// Reads the four hex digits following `\u`, plus a trailing low surrogate escape when the
/// first code unit is a high surrogate.
fn read_unicode_escape(chars: &mut Chars) -> Result<char, Error> {
    let high = read_code_unit(chars)?;
    let codepoint = if (0xD800..0xDC00).contains(&high) {
        let (backslash, u) = (chars.next(), chars.next());
        if backslash != Some('\\') || u != Some('u') {
            return Err(ErrorKind::ExpectedSurrogatePair(high).into());
        }
        let low = read_code_unit(chars)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(ErrorKind::ExpectedSurrogatePair(high).into());
        }
        0x10000 + ((high as u32 - 0xD800) << 10) + (low as u32 - 0xDC00)
    } else {
        high as u32
    };
    std::char::from_u32(codepoint)
        .ok_or_else(|| ErrorKind::InvalidUnicodeEscape(format!("{:04X}", codepoint)).into())
}

fn read_code_unit(chars: &mut Chars) -> Result<u16, Error> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 {
        return Err(ErrorKind::UnexpectedEndOfString.into());
    }
    // `from_str_radix` alone would accept a leading `+`
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(ErrorKind::InvalidUnicodeEscape(digits).into());
    }
    u16::from_str_radix(&digits, 16).map_err(|_| ErrorKind::InvalidUnicodeEscape(digits).into())
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, Error, ErrorKind};
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(r#"\\foobar"#, escape_string(r#"\foobar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("d\u{e9}j\u{e0}\\n", escape_string("d\u{e9}j\u{e0}\n").as_ref());
    }

    #[test]
    fn unescape_borrows_when_possible() {
        assert!(matches!(unescape_string("dxcon-1"), Ok(Cow::Borrowed("dxcon-1"))));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\"quoted\"\n\t/",
            unescape_string(r#"\"quoted\"\n\t\/"#).unwrap()
        );
        assert_eq!("\u{e9}", unescape_string("\\u00e9").unwrap());
        assert_eq!("\u{1F600}", unescape_string("\\uD83D\\uDE00").unwrap());
        assert_eq!(
            Err(Error::from(ErrorKind::InvalidEscapeCharacter('x'))),
            unescape_string("\\x")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::UnexpectedEndOfString)),
            unescape_string("foo\\")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::UnexpectedEndOfString)),
            unescape_string("\\u00")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::InvalidUnicodeEscape("+123".into()))),
            unescape_string("\\u+123")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::ExpectedSurrogatePair(0xD83D))),
            unescape_string("\\uD83Dabc")
        );
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }

        #[test]
        fn unescape_reverses_escape(s in ".*") {
            assert_eq!(s.as_str(), unescape_string(&escape_string(&s)).unwrap())
        }
    }
}
