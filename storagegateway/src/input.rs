/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// See [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
pub mod describe_gateway_information_input {
    /// A builder for [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        gateway_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the gateway. Use the <code>ListGateways</code>
        /// operation to return a list of gateways for your account and AWS Region.</p>
        pub fn gateway_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.gateway_arn = Some(inp.into());
            self
        }
        pub fn set_gateway_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.gateway_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
        pub fn build(self) -> crate::input::DescribeGatewayInformationInput {
            crate::input::DescribeGatewayInformationInput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl DescribeGatewayInformationInput {
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeGatewayInformation>,
        smithy_http::operation::BuildError,
    > {
        let mut request = crate::operation::DescribeGatewayInformation::marshall(Some(self))?;
        aws_endpoint::apply_endpoint(&mut request, config.endpoint_resolver(), config.region())
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DescribeGatewayInformation::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DescribeGatewayInformation",
            "storagegateway",
        ));
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
    pub fn builder() -> crate::input::describe_gateway_information_input::Builder {
        crate::input::describe_gateway_information_input::Builder::default()
    }
}

/// <p>A JSON object containing the ID of the gateway.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DescribeGatewayInformationInput {
    pub gateway_arn: std::option::Option<std::string::String>,
}

structure!(DescribeGatewayInformationInput {
    gateway_arn: "GatewayARN",
});
