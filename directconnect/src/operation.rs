/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::request::{OperationBinding, Protocol, RequestBuilder};

static CREATE_PUBLIC_VIRTUAL_INTERFACE: OperationBinding = OperationBinding {
    service: "directconnect",
    operation: "CreatePublicVirtualInterface",
    method: "POST",
    uri_template: "/",
    protocol: Protocol::AwsJson11 {
        target_prefix: "OvertureService",
    },
};

/// <p>Creates a public virtual interface. A virtual interface is the VLAN that transports AWS
/// Direct Connect traffic. A public virtual interface supports sending traffic to public
/// services of AWS such as Amazon S3.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreatePublicVirtualInterface {
    _private: (),
}
impl CreatePublicVirtualInterface {
    /// Creates a new builder-style object to manufacture [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_public_virtual_interface_input::Builder {
        crate::input::create_public_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Serializes `input` into a request against the service's root path
    ///
    /// Route filter prefixes are only written when there is at least one.
    pub fn marshall(
        input: Option<&crate::input::CreatePublicVirtualInterfaceInput>,
    ) -> Result<smithy_http::operation::Request, smithy_http::operation::BuildError> {
        RequestBuilder::new(&CREATE_PUBLIC_VIRTUAL_INTERFACE).build(input)
    }
}
impl smithy_http::response::ParseStrictResponse for CreatePublicVirtualInterface {
    type Output = std::result::Result<
        std::option::Option<crate::output::CreatePublicVirtualInterfaceOutput>,
        crate::error::CreatePublicVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::parse_create_public_virtual_interface_error(
                response,
            ));
        }
        smithy_schema::codec::json::deserialize_json(response.body())
            .map_err(crate::error::CreatePublicVirtualInterfaceError::unhandled)
    }
}
