/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol codecs: [`ShapeWriter`](crate::serde::ShapeWriter) and
//! [`ShapeReader`](crate::serde::ShapeReader) implementations for AWS JSON and REST-XML bodies.

pub mod json;
pub mod xml;

/// Trims a namespace prefix (`aws.protocoltests#`) and a trailing URL (`:http://...`) from an
/// error code.
pub(crate) fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

#[cfg(test)]
mod test {
    use super::sanitize_error_code;

    #[test]
    fn error_codes_are_sanitized() {
        assert_eq!(sanitize_error_code("ServiceException"), "ServiceException");
        assert_eq!(
            sanitize_error_code("com.amazonaws.opsworks#ResourceNotFoundException"),
            "ResourceNotFoundException"
        );
        assert_eq!(
            sanitize_error_code(
                "InvalidGatewayRequestException:http://internal.amazon.com/coral/com.amazon.storagegateway/"
            ),
            "InvalidGatewayRequestException"
        );
        assert_eq!(
            sanitize_error_code("aws.directconnect#DirectConnectClientException:http://internal.amazon.com/"),
            "DirectConnectClientException"
        );
    }
}
