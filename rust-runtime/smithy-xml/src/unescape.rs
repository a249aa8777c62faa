/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::XmlDecodeError;
use std::borrow::Cow;

/// Unescape XML encoded characters
///
/// This function will unescape the 5 predefined entities and numeric character references
/// (decimal `&#10;` and hexadecimal `&#xA;`). Any other entity is an error.
pub(crate) fn unescape(s: &str) -> Result<Cow<str>, XmlDecodeError> {
    // no &, no need to escape anything
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut res = String::with_capacity(s.len());
    let mut sections = s.split('&');
    // push content before the first &
    if let Some(prefix) = sections.next() {
        res.push_str(prefix);
    }
    for section in sections {
        // entities look like &<somedata>;
        match section.find(';') {
            Some(idx) => {
                let entity = &section[..idx];
                match entity {
                    "lt" => res.push('<'),
                    "gt" => res.push('>'),
                    "amp" => res.push('&'),
                    "quot" => res.push('"'),
                    "apos" => res.push('\''),
                    entity => {
                        let (entity, radix) = match entity.strip_prefix("#x") {
                            Some(hex) => (hex, 16),
                            None => match entity.strip_prefix('#') {
                                Some(decimal) => (decimal, 10),
                                None => return Err(invalid_escape(entity)),
                            },
                        };
                        // `from_str_radix` alone would accept a leading `+`
                        if entity.is_empty() || !entity.chars().all(|c| c.is_digit(radix)) {
                            return Err(invalid_escape(entity));
                        }
                        let chr = u32::from_str_radix(entity, radix)
                            .ok()
                            .and_then(std::char::from_u32)
                            .ok_or_else(|| invalid_escape(entity))?;
                        res.push(chr);
                    }
                }
                res.push_str(&section[idx + 1..])
            }
            None => return Err(invalid_escape("unterminated pattern")),
        }
    }
    Ok(Cow::Owned(res))
}

fn invalid_escape(esc: &str) -> XmlDecodeError {
    XmlDecodeError::InvalidEscape {
        esc: esc.to_string(),
    }
}

#[cfg(test)]
mod test {
    use crate::unescape::unescape;
    use std::borrow::Cow;

    #[test]
    fn basic_unescape() {
        assert_eq!(
            unescape("&lt; &gt; &apos; &quot; &amp;").unwrap(),
            "< > ' \" &"
        );
        assert_eq!(
            unescape("Since a &lt; 10, a is less than 10").unwrap(),
            "Since a < 10, a is less than 10"
        );
    }

    #[test]
    fn no_need_to_escape() {
        assert_eq!(unescape("hello 🍕!").unwrap(), Cow::Borrowed("hello 🍕!"));
    }

    #[test]
    fn complex_unescape() {
        // Test cases adapted from Apache Commons StringEscapeUtilsTest.java
        assert_eq!(
            unescape("a&lt;b&gt;c&quot;d&apos;e&amp;f;;").unwrap(),
            "a<b>c\"d'e&f;;"
        );
        assert_eq!(unescape("&amp;lt;").unwrap(), "&lt;")
    }

    #[test]
    fn newline_encoding() {
        assert_eq!(unescape("&#10;").unwrap(), "\n");
        assert_eq!(unescape("&#xD;").unwrap(), "\r");
    }

    #[test]
    fn xml_eol_encoding() {
        assert_eq!(unescape("&#xA; &#xA;").unwrap(), "\n \n");
        assert_eq!(
            unescape("a&#xD;&#xA; b&#xA; c&#xD;").unwrap(),
            "a\r\n b\n c\r"
        );
    }

    #[test]
    fn invalid_escapes() {
        unescape("&lte;").expect_err("lte does not make a ↔");
        unescape("&lt").expect_err("unterminated escape sequence");
        unescape("&#Q1234;").expect_err("Q does not began a numeric sequence");
        unescape("&#3.14;").expect_err("decimal escape");
        unescape("&#xZZ;").expect_err("Z cannot be in a hex escape");
        unescape("&#xD800;").expect_err("surrogates are not characters");
        unescape("&#+10;").expect_err("signs are not digits");
        unescape("&#;").expect_err("no digits");
    }

    use proptest::prelude::*;
    proptest! {
        #[test]
        fn no_panics(s: String) {
            let unescaped = unescape(&s);
            // anything containing an entity is either rewritten or rejected
            if s.contains('&') {
                assert!(
                    matches!(unescaped, Ok(Cow::Owned(_)) | Err(_))
                );
            }
        }
    }
}
