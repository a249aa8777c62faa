/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::request::{OperationBinding, Protocol, RequestBuilder};

static DESCRIBE_GATEWAY_INFORMATION: OperationBinding = OperationBinding {
    service: "storagegateway",
    operation: "DescribeGatewayInformation",
    method: "POST",
    uri_template: "/",
    protocol: Protocol::AwsJson11 {
        target_prefix: "StorageGateway_20130630",
    },
};

/// <p>Returns metadata about a gateway such as its name, network interfaces, configured time
/// zone, and the state (whether the gateway is running or not). To specify which gateway to
/// describe, use the Amazon Resource Name (ARN) of the gateway in your request.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeGatewayInformation {
    _private: (),
}
impl DescribeGatewayInformation {
    /// Creates a new builder-style object to manufacture [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
    pub fn builder() -> crate::input::describe_gateway_information_input::Builder {
        crate::input::describe_gateway_information_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }

    pub fn marshall(
        input: Option<&crate::input::DescribeGatewayInformationInput>,
    ) -> Result<smithy_http::operation::Request, smithy_http::operation::BuildError> {
        RequestBuilder::new(&DESCRIBE_GATEWAY_INFORMATION).build(input)
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeGatewayInformation {
    type Output = std::result::Result<
        std::option::Option<crate::output::DescribeGatewayInformationOutput>,
        crate::error::DescribeGatewayInformationError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::parse_describe_gateway_information_error(
                response,
            ));
        }
        smithy_schema::codec::json::deserialize_json(response.body())
            .map_err(crate::error::DescribeGatewayInformationError::unhandled)
    }
}
