/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;

const ESCAPES: &[char] = &['&', '\'', '\"', '<', '>', '\u{00D}', '\u{00A}'];

/// Escapes `s` for use as XML text or an attribute value.
pub(crate) fn escape(s: &str) -> Cow<str> {
    let mut remaining = s;
    if !s.contains(ESCAPES) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    while let Some(idx) = remaining.find(ESCAPES) {
        out.push_str(&remaining[..idx]);
        remaining = &remaining[idx..];
        let mut idxs = remaining.char_indices();
        let (_, chr) = match idxs.next() {
            Some(next) => next,
            None => break,
        };
        match chr {
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            // newlines are escaped so that attribute values survive whitespace normalization
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            other => out.push(other),
        }
        remaining = match idxs.next() {
            Some((idx, _)) => &remaining[idx..],
            None => "",
        };
    }
    out.push_str(remaining);
    Cow::Owned(out)
}

/// Returns the first character that can't appear in an XML 1.0 document, if any.
pub(crate) fn find_invalid_char(s: &str) -> Option<char> {
    s.chars().find(|chr| {
        !matches!(chr,
            '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}')
    })
}

#[cfg(test)]
mod test {
    use crate::escape::{escape, find_invalid_char};

    #[test]
    fn escape_basic() {
        let inp = "<helo>&\"'";
        assert_eq!(escape(inp), "&lt;helo&gt;&amp;&quot;&apos;");
    }

    #[test]
    fn escape_eol_encoding_sep() {
        let test_cases = vec![
            ("CiAK", "CiAK"),
            ("newline\n", "newline&#xA;"),
            ("carriage return\r", "carriage return&#xD;"),
            ("both\r\n", "both&#xD;&#xA;"),
        ];
        for (raw, encoded) in test_cases {
            assert_eq!(escape(raw), encoded);
        }
    }

    #[test]
    fn escape_multibyte() {
        assert_eq!(escape("d\u{e9}j\u{e0} <vu>"), "d\u{e9}j\u{e0} &lt;vu&gt;");
    }

    #[test]
    fn invalid_chars() {
        assert_eq!(find_invalid_char("ns-1.awsdns-01.org"), None);
        assert_eq!(find_invalid_char("tab\tok"), None);
        assert_eq!(find_invalid_char("bell\u{7}"), Some('\u{7}'));
        assert_eq!(find_invalid_char("\u{FFFE}"), Some('\u{FFFE}'));
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn no_panics(s: String) {
            let escaped = escape(&s);
            // ensure that the string is actually escaped
            if escaped != s {
                assert!(escaped.contains('&'));
            }
        }
    }
}
