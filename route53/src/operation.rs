/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::request::{OperationBinding, Protocol, RequestBuilder};

static CREATE_REUSABLE_DELEGATION_SET: OperationBinding = OperationBinding {
    service: "route53",
    operation: "CreateReusableDelegationSet",
    method: "POST",
    uri_template: "/2013-04-01/delegationset",
    protocol: Protocol::RestXml {
        root_element: "CreateReusableDelegationSetRequest",
        namespace: "https://route53.amazonaws.com/doc/2013-04-01/",
    },
};

/// <p>Creates a delegation set (a group of four name servers) that can be reused by multiple
/// hosted zones that were created by the same AWS account.</p>
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateReusableDelegationSet {
    _private: (),
}
impl CreateReusableDelegationSet {
    /// Creates a new builder-style object to manufacture [`CreateReusableDelegationSetInput`](crate::input::CreateReusableDelegationSetInput)
    pub fn builder() -> crate::input::create_reusable_delegation_set_input::Builder {
        crate::input::create_reusable_delegation_set_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }

    pub fn marshall(
        input: Option<&crate::input::CreateReusableDelegationSetInput>,
    ) -> Result<smithy_http::operation::Request, smithy_http::operation::BuildError> {
        RequestBuilder::new(&CREATE_REUSABLE_DELEGATION_SET).build(input)
    }
}
impl smithy_http::response::ParseStrictResponse for CreateReusableDelegationSet {
    type Output = std::result::Result<
        std::option::Option<crate::output::CreateReusableDelegationSetOutput>,
        crate::error::CreateReusableDelegationSetError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::parse_create_reusable_delegation_set_error(
                response,
            ));
        }
        let location =
            smithy_http::header::one_or_none::<String>(response.headers(), "Location")
                .map_err(crate::error::CreateReusableDelegationSetError::unhandled)?;
        let output: Option<crate::output::CreateReusableDelegationSetOutput> =
            smithy_schema::codec::xml::deserialize_xml(
                response.body(),
                "CreateReusableDelegationSetResponse",
            )
            .map_err(crate::error::CreateReusableDelegationSetError::unhandled)?;
        Ok(output.map(|mut output| {
            output.location = location;
            output
        }))
    }
}
