/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// <p>Describes a gateway's network interface.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct NetworkInterface {
    /// <p>The Internet Protocol version 4 (IPv4) address of the interface.</p>
    pub ipv4_address: std::option::Option<std::string::String>,
    /// <p>The Media Access Control (MAC) address of the interface.</p>
    /// <note>
    /// <p>This is currently unsupported and will not be returned in output.</p>
    /// </note>
    pub mac_address: std::option::Option<std::string::String>,
    /// <p>The Internet Protocol version 6 (IPv6) address of the interface. <i>Currently not
    /// supported</i>.</p>
    pub ipv6_address: std::option::Option<std::string::String>,
}

structure!(NetworkInterface {
    ipv4_address: "Ipv4Address",
    mac_address: "MacAddress",
    ipv6_address: "Ipv6Address",
});

/// See [`NetworkInterface`](crate::model::NetworkInterface)
pub mod network_interface {
    /// A builder for [`NetworkInterface`](crate::model::NetworkInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ipv4_address: std::option::Option<std::string::String>,
        mac_address: std::option::Option<std::string::String>,
        ipv6_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn ipv4_address(mut self, inp: impl Into<std::string::String>) -> Self {
            self.ipv4_address = Some(inp.into());
            self
        }
        pub fn mac_address(mut self, inp: impl Into<std::string::String>) -> Self {
            self.mac_address = Some(inp.into());
            self
        }
        pub fn ipv6_address(mut self, inp: impl Into<std::string::String>) -> Self {
            self.ipv6_address = Some(inp.into());
            self
        }
        /// Consumes the builder and constructs a [`NetworkInterface`](crate::model::NetworkInterface)
        pub fn build(self) -> crate::model::NetworkInterface {
            crate::model::NetworkInterface {
                ipv4_address: self.ipv4_address,
                mac_address: self.mac_address,
                ipv6_address: self.ipv6_address,
            }
        }
    }
}
impl NetworkInterface {
    /// Creates a new builder-style object to manufacture [`NetworkInterface`](crate::model::NetworkInterface)
    pub fn builder() -> crate::model::network_interface::Builder {
        crate::model::network_interface::Builder::default()
    }
}
