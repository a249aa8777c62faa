/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// See [`CreateReusableDelegationSetInput`](crate::input::CreateReusableDelegationSetInput)
pub mod create_reusable_delegation_set_input {
    /// A builder for [`CreateReusableDelegationSetInput`](crate::input::CreateReusableDelegationSetInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        caller_reference: std::option::Option<std::string::String>,
        hosted_zone_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A unique string that identifies the request, and that allows you to retry failed
        /// <code>CreateReusableDelegationSet</code> requests without the risk of executing the
        /// operation twice.</p>
        pub fn caller_reference(mut self, inp: impl Into<std::string::String>) -> Self {
            self.caller_reference = Some(inp.into());
            self
        }
        /// <p>If you want to mark the delegation set for an existing hosted zone as reusable,
        /// the ID for that hosted zone.</p>
        pub fn hosted_zone_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.hosted_zone_id = Some(inp.into());
            self
        }
        /// Consumes the builder and constructs a [`CreateReusableDelegationSetInput`](crate::input::CreateReusableDelegationSetInput)
        pub fn build(self) -> crate::input::CreateReusableDelegationSetInput {
            crate::input::CreateReusableDelegationSetInput {
                caller_reference: self.caller_reference,
                hosted_zone_id: self.hosted_zone_id,
            }
        }
    }
}
impl CreateReusableDelegationSetInput {
    /// Serializes the input and creates an operation ready to be dispatched to the global
    /// Route 53 endpoint
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateReusableDelegationSet>,
        smithy_http::operation::BuildError,
    > {
        let mut request = crate::operation::CreateReusableDelegationSet::marshall(Some(self))?;
        aws_endpoint::apply_endpoint(&mut request, config.endpoint_resolver(), config.region())
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreateReusableDelegationSet::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "CreateReusableDelegationSet",
            "route53",
        ));
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`CreateReusableDelegationSetInput`](crate::input::CreateReusableDelegationSetInput)
    pub fn builder() -> crate::input::create_reusable_delegation_set_input::Builder {
        crate::input::create_reusable_delegation_set_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct CreateReusableDelegationSetInput {
    pub caller_reference: std::option::Option<std::string::String>,
    pub hosted_zone_id: std::option::Option<std::string::String>,
}

structure!(CreateReusableDelegationSetInput {
    caller_reference: "CallerReference",
    hosted_zone_id: "HostedZoneId",
});
