/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// <p>A JSON object containing the following fields:</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DescribeGatewayInformationOutput {
    /// <p>The Amazon Resource Name (ARN) of the gateway.</p>
    pub gateway_arn: std::option::Option<std::string::String>,
    /// <p>The unique identifier assigned to your gateway during activation. This ID becomes
    /// part of the gateway Amazon Resource Name (ARN), which you use as input for other
    /// operations.</p>
    pub gateway_id: std::option::Option<std::string::String>,
    /// <p>A value that indicates the time zone configured for the gateway.</p>
    pub gateway_timezone: std::option::Option<std::string::String>,
    /// <p>A value that indicates the operating state of the gateway.</p>
    pub gateway_state: std::option::Option<std::string::String>,
    /// <p>A <a>NetworkInterface</a> array that contains descriptions of the gateway network
    /// interfaces.</p>
    pub gateway_network_interfaces:
        std::option::Option<std::vec::Vec<crate::model::NetworkInterface>>,
    /// <p>The type of the gateway.</p>
    pub gateway_type: std::option::Option<std::string::String>,
    /// <p>The date on which an update to the gateway is available. This date is in the time
    /// zone of the gateway. If the gateway is not available for an update this field is not
    /// returned in the response.</p>
    pub next_update_availability_date: std::option::Option<std::string::String>,
}

structure!(DescribeGatewayInformationOutput {
    gateway_arn: "GatewayARN",
    gateway_id: "GatewayId",
    gateway_timezone: "GatewayTimezone",
    gateway_state: "GatewayState",
    gateway_network_interfaces: "GatewayNetworkInterfaces",
    gateway_type: "GatewayType",
    next_update_availability_date: "NextUpdateAvailabilityDate",
});

/// See [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
pub mod describe_gateway_information_output {
    /// A builder for [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        gateway_arn: std::option::Option<std::string::String>,
        gateway_id: std::option::Option<std::string::String>,
        gateway_timezone: std::option::Option<std::string::String>,
        gateway_state: std::option::Option<std::string::String>,
        gateway_network_interfaces:
            std::option::Option<std::vec::Vec<crate::model::NetworkInterface>>,
        gateway_type: std::option::Option<std::string::String>,
        next_update_availability_date: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.gateway_arn = Some(inp.into());
            self
        }
        pub fn gateway_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.gateway_id = Some(inp.into());
            self
        }
        pub fn gateway_timezone(mut self, inp: impl Into<std::string::String>) -> Self {
            self.gateway_timezone = Some(inp.into());
            self
        }
        pub fn gateway_state(mut self, inp: impl Into<std::string::String>) -> Self {
            self.gateway_state = Some(inp.into());
            self
        }
        pub fn gateway_network_interfaces(mut self, inp: crate::model::NetworkInterface) -> Self {
            self.gateway_network_interfaces
                .get_or_insert_with(Vec::new)
                .push(inp);
            self
        }
        pub fn set_gateway_network_interfaces(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::NetworkInterface>>,
        ) -> Self {
            self.gateway_network_interfaces = inp;
            self
        }
        pub fn gateway_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.gateway_type = Some(inp.into());
            self
        }
        pub fn next_update_availability_date(
            mut self,
            inp: impl Into<std::string::String>,
        ) -> Self {
            self.next_update_availability_date = Some(inp.into());
            self
        }
        /// Consumes the builder and constructs a [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
        pub fn build(self) -> crate::output::DescribeGatewayInformationOutput {
            crate::output::DescribeGatewayInformationOutput {
                gateway_arn: self.gateway_arn,
                gateway_id: self.gateway_id,
                gateway_timezone: self.gateway_timezone,
                gateway_state: self.gateway_state,
                gateway_network_interfaces: self.gateway_network_interfaces,
                gateway_type: self.gateway_type,
                next_update_availability_date: self.next_update_availability_date,
            }
        }
    }
}
impl DescribeGatewayInformationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
    pub fn builder() -> crate::output::describe_gateway_information_output::Builder {
        crate::output::describe_gateway_information_output::Builder::default()
    }
}
