/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// <p>A complex type that lists the name servers in a delegation set, as well as the
/// <code>CallerReference</code> and the <code>ID</code> for the delegation set.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct DelegationSet {
    /// <p>The ID that Amazon Route 53 assigns to a reusable delegation set.</p>
    pub id: std::option::Option<std::string::String>,
    /// <p>The value that you specified for <code>CallerReference</code> when you created the
    /// reusable delegation set.</p>
    pub caller_reference: std::option::Option<std::string::String>,
    /// <p>A complex type that contains a list of the authoritative name servers for a hosted
    /// zone or for a reusable delegation set.</p>
    pub name_servers: std::option::Option<std::vec::Vec<std::string::String>>,
}

structure!(DelegationSet {
    id: "Id",
    caller_reference: "CallerReference",
    name_servers: "NameServers" => item "NameServer",
});

/// See [`DelegationSet`](crate::model::DelegationSet)
pub mod delegation_set {
    /// A builder for [`DelegationSet`](crate::model::DelegationSet)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        id: std::option::Option<std::string::String>,
        caller_reference: std::option::Option<std::string::String>,
        name_servers: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn caller_reference(mut self, inp: impl Into<std::string::String>) -> Self {
            self.caller_reference = Some(inp.into());
            self
        }
        pub fn name_servers(mut self, inp: impl Into<std::string::String>) -> Self {
            self.name_servers.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_name_servers(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.name_servers = inp;
            self
        }
        /// Consumes the builder and constructs a [`DelegationSet`](crate::model::DelegationSet)
        pub fn build(self) -> crate::model::DelegationSet {
            crate::model::DelegationSet {
                id: self.id,
                caller_reference: self.caller_reference,
                name_servers: self.name_servers,
            }
        }
    }
}
impl DelegationSet {
    /// Creates a new builder-style object to manufacture [`DelegationSet`](crate::model::DelegationSet)
    pub fn builder() -> crate::model::delegation_set::Builder {
        crate::model::delegation_set::Builder::default()
    }
}
