/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::request::{OperationBinding, Protocol, RequestBuilder};

static CREATE_LAYER: OperationBinding = OperationBinding {
    service: "opsworks",
    operation: "CreateLayer",
    method: "POST",
    uri_template: "/",
    protocol: Protocol::AwsJson11 {
        target_prefix: "OpsWorks_20130218",
    },
};

/// <p>Creates a layer. For more information, see
/// <a href="https://docs.aws.amazon.com/opsworks/latest/userguide/workinglayers-basics-create.html">How to Create a Layer</a>.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateLayer {
    _private: (),
}
impl CreateLayer {
    /// Creates a new builder-style object to manufacture [`CreateLayerInput`](crate::input::CreateLayerInput)
    pub fn builder() -> crate::input::create_layer_input::Builder {
        crate::input::create_layer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Serializes `input` into a request against the service's root path. The endpoint is not
    /// resolved yet.
    pub fn marshall(
        input: Option<&crate::input::CreateLayerInput>,
    ) -> Result<smithy_http::operation::Request, smithy_http::operation::BuildError> {
        RequestBuilder::new(&CREATE_LAYER).build(input)
    }
}
impl smithy_http::response::ParseStrictResponse for CreateLayer {
    type Output = std::result::Result<
        std::option::Option<crate::output::CreateLayerOutput>,
        crate::error::CreateLayerError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::parse_create_layer_error(response));
        }
        smithy_schema::codec::json::deserialize_json(response.body())
            .map_err(crate::error::CreateLayerError::unhandled)
    }
}
