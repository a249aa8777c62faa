/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseStrictResponse` parses structured data from a fully loaded HTTP response.
///
/// Reading the body off the wire is left to the caller, which keeps parsing pure and sync and
/// makes handlers easy to test: build an `http::Response<Bytes>` and call `parse`.
pub trait ParseStrictResponse {
    /// Output type of the response.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<Option<CreateLayerOutput>, CreateLayerError>`
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

#[cfg(test)]
mod test {
    use crate::response::ParseStrictResponse;
    use bytes::Bytes;
    use http::Response;

    struct StatusAndBody;

    impl ParseStrictResponse for StatusAndBody {
        type Output = (u16, usize);

        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            (response.status().as_u16(), response.body().len())
        }
    }

    #[test]
    fn parses_loaded_response() {
        let response = Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{\"LayerId\":\"layer-1\"}"))
            .unwrap();
        assert_eq!(StatusAndBody.parse(&response), (200, 21));
    }
}
