/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{string_enum, structure};

string_enum! {
    /// <p>The state of the virtual interface.</p>
    pub enum VirtualInterfaceState {
        Available => "available",
        Confirming => "confirming",
        Deleted => "deleted",
        Deleting => "deleting",
        Down => "down",
        Pending => "pending",
        Rejected => "rejected",
        UnknownValue => "unknown",
        Verifying => "verifying",
    }
}

/// <p>Information about a route filter prefix that a customer can advertise through Border
/// Gateway Protocol (BGP) over a public virtual interface.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct RouteFilterPrefix {
    /// <p>The CIDR block for the advertised route. Separate multiple routes using commas. An
    /// IPv6 CIDR must use /64 or shorter.</p>
    pub cidr: std::option::Option<std::string::String>,
}

structure!(RouteFilterPrefix { cidr: "cidr" });

/// See [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
pub mod route_filter_prefix {
    /// A builder for [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        cidr: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn cidr(mut self, inp: impl Into<std::string::String>) -> Self {
            self.cidr = Some(inp.into());
            self
        }
        /// Consumes the builder and constructs a [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
        pub fn build(self) -> crate::model::RouteFilterPrefix {
            crate::model::RouteFilterPrefix { cidr: self.cidr }
        }
    }
}
impl RouteFilterPrefix {
    /// Creates a new builder-style object to manufacture [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
    pub fn builder() -> crate::model::route_filter_prefix::Builder {
        crate::model::route_filter_prefix::Builder::default()
    }
}

/// <p>Information about a public virtual interface.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct NewPublicVirtualInterface {
    /// <p>The name of the virtual interface assigned by the customer network. The name has a
    /// maximum of 100 characters.</p>
    pub virtual_interface_name: std::option::Option<std::string::String>,
    /// <p>The ID of the VLAN.</p>
    pub vlan: std::option::Option<i32>,
    /// <p>The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.</p>
    pub asn: std::option::Option<i32>,
    /// <p>The authentication key for BGP configuration. This string has a minimum length of 6
    /// characters and and a maximun lenth of 80 characters.</p>
    pub auth_key: std::option::Option<std::string::String>,
    /// <p>The IP address assigned to the Amazon interface.</p>
    pub amazon_address: std::option::Option<std::string::String>,
    /// <p>The IP address assigned to the customer interface.</p>
    pub customer_address: std::option::Option<std::string::String>,
    /// <p>The routes to be advertised to the AWS network in this Region. Applies to public
    /// virtual interfaces.</p>
    pub route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
}

structure!(NewPublicVirtualInterface {
    virtual_interface_name: "virtualInterfaceName",
    vlan: "vlan",
    asn: "asn",
    auth_key: "authKey",
    amazon_address: "amazonAddress",
    customer_address: "customerAddress",
    route_filter_prefixes: "routeFilterPrefixes",
});

/// See [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
pub mod new_public_virtual_interface {
    /// A builder for [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        virtual_interface_name: std::option::Option<std::string::String>,
        vlan: std::option::Option<i32>,
        asn: std::option::Option<i32>,
        auth_key: std::option::Option<std::string::String>,
        amazon_address: std::option::Option<std::string::String>,
        customer_address: std::option::Option<std::string::String>,
        route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    }
    impl Builder {
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
        pub fn route_filter_prefixes(mut self, inp: crate::model::RouteFilterPrefix) -> Self {
            self.route_filter_prefixes
                .get_or_insert_with(Vec::new)
                .push(inp);
            self
        }
        pub fn set_route_filter_prefixes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        ) -> Self {
            self.route_filter_prefixes = inp;
            self
        }
        /// Consumes the builder and constructs a [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
        pub fn build(self) -> crate::model::NewPublicVirtualInterface {
            crate::model::NewPublicVirtualInterface {
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                route_filter_prefixes: self.route_filter_prefixes,
            }
        }
    }
}
impl NewPublicVirtualInterface {
    /// Creates a new builder-style object to manufacture [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
    pub fn builder() -> crate::model::new_public_virtual_interface::Builder {
        crate::model::new_public_virtual_interface::Builder::default()
    }
}

#[cfg(test)]
mod test {
    use crate::model::VirtualInterfaceState;

    #[test]
    fn virtual_interface_states() {
        assert_eq!(
            VirtualInterfaceState::from("verifying"),
            VirtualInterfaceState::Verifying
        );
        assert_eq!(VirtualInterfaceState::UnknownValue.as_str(), "unknown");
        assert_eq!(
            VirtualInterfaceState::from("decommissioned"),
            VirtualInterfaceState::Unknown("decommissioned".to_string())
        );
    }
}
