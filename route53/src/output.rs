/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct CreateReusableDelegationSetOutput {
    /// <p>A complex type that contains name server information.</p>
    pub delegation_set: std::option::Option<crate::model::DelegationSet>,
    /// <p>The unique URL representing the new reusable delegation set.</p>
    ///
    /// Bound to the `Location` response header.
    pub location: std::option::Option<std::string::String>,
}

structure!(CreateReusableDelegationSetOutput {
    delegation_set: "DelegationSet",
});

/// See [`CreateReusableDelegationSetOutput`](crate::output::CreateReusableDelegationSetOutput)
pub mod create_reusable_delegation_set_output {
    /// A builder for [`CreateReusableDelegationSetOutput`](crate::output::CreateReusableDelegationSetOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        delegation_set: std::option::Option<crate::model::DelegationSet>,
        location: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn delegation_set(mut self, inp: crate::model::DelegationSet) -> Self {
            self.delegation_set = Some(inp);
            self
        }
        pub fn location(mut self, inp: impl Into<std::string::String>) -> Self {
            self.location = Some(inp.into());
            self
        }
        /// Consumes the builder and constructs a [`CreateReusableDelegationSetOutput`](crate::output::CreateReusableDelegationSetOutput)
        pub fn build(self) -> crate::output::CreateReusableDelegationSetOutput {
            crate::output::CreateReusableDelegationSetOutput {
                delegation_set: self.delegation_set,
                location: self.location,
            }
        }
    }
}
impl CreateReusableDelegationSetOutput {
    /// Creates a new builder-style object to manufacture [`CreateReusableDelegationSetOutput`](crate::output::CreateReusableDelegationSetOutput)
    pub fn builder() -> crate::output::create_reusable_delegation_set_output::Builder {
        crate::output::create_reusable_delegation_set_output::Builder::default()
    }
}
