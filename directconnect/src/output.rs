/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// <p>Information about a virtual interface.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct CreatePublicVirtualInterfaceOutput {
    /// <p>The ID of the AWS account that owns the virtual interface.</p>
    pub owner_account: std::option::Option<std::string::String>,
    /// <p>The ID of the virtual interface.</p>
    pub virtual_interface_id: std::option::Option<std::string::String>,
    /// <p>The location of the connection.</p>
    pub location: std::option::Option<std::string::String>,
    /// <p>The ID of the connection.</p>
    pub connection_id: std::option::Option<std::string::String>,
    /// <p>The type of virtual interface. The possible values are <code>private</code> and <code>public</code>.</p>
    pub virtual_interface_type: std::option::Option<std::string::String>,
    /// <p>The name of the virtual interface assigned by the customer network.</p>
    pub virtual_interface_name: std::option::Option<std::string::String>,
    /// <p>The ID of the VLAN.</p>
    pub vlan: std::option::Option<i32>,
    /// <p>The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.</p>
    pub asn: std::option::Option<i32>,
    /// <p>The authentication key for BGP configuration.</p>
    pub auth_key: std::option::Option<std::string::String>,
    /// <p>The IP address assigned to the Amazon interface.</p>
    pub amazon_address: std::option::Option<std::string::String>,
    /// <p>The IP address assigned to the customer interface.</p>
    pub customer_address: std::option::Option<std::string::String>,
    /// <p>The state of the virtual interface.</p>
    pub virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,
    /// <p>The customer router configuration.</p>
    pub customer_router_config: std::option::Option<std::string::String>,
    /// <p>The ID of the virtual private gateway. Applies only to private virtual interfaces.</p>
    pub virtual_gateway_id: std::option::Option<std::string::String>,
    /// <p>The routes to be advertised to the AWS network in this Region. Applies to public virtual interfaces.</p>
    pub route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
}

structure!(CreatePublicVirtualInterfaceOutput {
    owner_account: "ownerAccount",
    virtual_interface_id: "virtualInterfaceId",
    location: "location",
    connection_id: "connectionId",
    virtual_interface_type: "virtualInterfaceType",
    virtual_interface_name: "virtualInterfaceName",
    vlan: "vlan",
    asn: "asn",
    auth_key: "authKey",
    amazon_address: "amazonAddress",
    customer_address: "customerAddress",
    virtual_interface_state: "virtualInterfaceState",
    customer_router_config: "customerRouterConfig",
    virtual_gateway_id: "virtualGatewayId",
    route_filter_prefixes: "routeFilterPrefixes",
});

/// See [`CreatePublicVirtualInterfaceOutput`](crate::output::CreatePublicVirtualInterfaceOutput)
pub mod create_public_virtual_interface_output {
    /// A builder for [`CreatePublicVirtualInterfaceOutput`](crate::output::CreatePublicVirtualInterfaceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        owner_account: std::option::Option<std::string::String>,
        virtual_interface_id: std::option::Option<std::string::String>,
        location: std::option::Option<std::string::String>,
        connection_id: std::option::Option<std::string::String>,
        virtual_interface_type: std::option::Option<std::string::String>,
        virtual_interface_name: std::option::Option<std::string::String>,
        vlan: std::option::Option<i32>,
        asn: std::option::Option<i32>,
        auth_key: std::option::Option<std::string::String>,
        amazon_address: std::option::Option<std::string::String>,
        customer_address: std::option::Option<std::string::String>,
        virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,
        customer_router_config: std::option::Option<std::string::String>,
        virtual_gateway_id: std::option::Option<std::string::String>,
        route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    }
    impl Builder {
        pub fn owner_account(mut self, inp: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(inp.into());
            self
        }
        pub fn virtual_interface_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(inp.into());
            self
        }
        pub fn location(mut self, inp: impl Into<std::string::String>) -> Self {
            self.location = Some(inp.into());
            self
        }
        pub fn connection_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(inp.into());
            self
        }
        pub fn virtual_interface_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.virtual_interface_type = Some(inp.into());
            self
        }
        pub fn virtual_interface_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(inp.into());
            self
        }
        pub fn vlan(mut self, inp: i32) -> Self {
            self.vlan = Some(inp);
            self
        }
        pub fn asn(mut self, inp: i32) -> Self {
            self.asn = Some(inp);
            self
        }
        pub fn auth_key(mut self, inp: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(inp.into());
            self
        }
        pub fn amazon_address(mut self, inp: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(inp.into());
            self
        }
        pub fn customer_address(mut self, inp: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(inp.into());
            self
        }
        pub fn virtual_interface_state(mut self, inp: crate::model::VirtualInterfaceState) -> Self {
            self.virtual_interface_state = Some(inp);
            self
        }
        pub fn customer_router_config(mut self, inp: impl Into<std::string::String>) -> Self {
            self.customer_router_config = Some(inp.into());
            self
        }
        pub fn virtual_gateway_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_id = Some(inp.into());
            self
        }
        pub fn route_filter_prefixes(mut self, inp: crate::model::RouteFilterPrefix) -> Self {
            self.route_filter_prefixes.get_or_insert_with(Vec::new).push(inp);
            self
        }
        pub fn set_route_filter_prefixes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        ) -> Self {
            self.route_filter_prefixes = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreatePublicVirtualInterfaceOutput`](crate::output::CreatePublicVirtualInterfaceOutput)
        pub fn build(self) -> crate::output::CreatePublicVirtualInterfaceOutput {
            crate::output::CreatePublicVirtualInterfaceOutput {
                owner_account: self.owner_account,
                virtual_interface_id: self.virtual_interface_id,
                location: self.location,
                connection_id: self.connection_id,
                virtual_interface_type: self.virtual_interface_type,
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                virtual_interface_state: self.virtual_interface_state,
                customer_router_config: self.customer_router_config,
                virtual_gateway_id: self.virtual_gateway_id,
                route_filter_prefixes: self.route_filter_prefixes,
            }
        }
    }
}
impl CreatePublicVirtualInterfaceOutput {
    /// Creates a new builder-style object to manufacture [`CreatePublicVirtualInterfaceOutput`](crate::output::CreatePublicVirtualInterfaceOutput)
    pub fn builder() -> crate::output::create_public_virtual_interface_output::Builder {
        crate::output::create_public_virtual_interface_output::Builder::default()
    }
}
