/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// See [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
pub mod create_public_virtual_interface_input {
    /// A builder for [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        connection_id: std::option::Option<std::string::String>,
        new_public_virtual_interface: std::option::Option<crate::model::NewPublicVirtualInterface>,
    }
    impl Builder {
        /// <p>The ID of the connection.</p>
        pub fn connection_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(inp.into());
            self
        }
        pub fn set_connection_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.connection_id = inp;
            self
        }
        /// <p>Information about the public virtual interface.</p>
        pub fn new_public_virtual_interface(
            mut self,
            inp: crate::model::NewPublicVirtualInterface,
        ) -> Self {
            self.new_public_virtual_interface = Some(inp);
            self
        }
        pub fn set_new_public_virtual_interface(
            mut self,
            inp: std::option::Option<crate::model::NewPublicVirtualInterface>,
        ) -> Self {
            self.new_public_virtual_interface = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
        pub fn build(self) -> crate::input::CreatePublicVirtualInterfaceInput {
            crate::input::CreatePublicVirtualInterfaceInput {
                connection_id: self.connection_id,
                new_public_virtual_interface: self.new_public_virtual_interface,
            }
        }
    }
}
impl CreatePublicVirtualInterfaceInput {
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreatePublicVirtualInterface>,
        smithy_http::operation::BuildError,
    > {
        let mut request = crate::operation::CreatePublicVirtualInterface::marshall(Some(self))?;
        aws_endpoint::apply_endpoint(&mut request, config.endpoint_resolver(), config.region())
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreatePublicVirtualInterface::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "CreatePublicVirtualInterface",
            "directconnect",
        ));
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_public_virtual_interface_input::Builder {
        crate::input::create_public_virtual_interface_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct CreatePublicVirtualInterfaceInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub new_public_virtual_interface: std::option::Option<crate::model::NewPublicVirtualInterface>,
}

structure!(CreatePublicVirtualInterfaceInput {
    connection_id: "connectionId",
    new_public_virtual_interface: "newPublicVirtualInterface",
});
