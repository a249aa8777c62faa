/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{AwsEndpoint, BoxError, ResolveAwsEndpoint};
use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;

/// Endpoint metadata for the `aws` partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction.
    /// Templates without `{region}` describe a global endpoint.
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl Definition {
    /// The regional endpoint `https://<prefix>.<region>.amazonaws.com`
    pub const fn regional(uri_template: &'static str) -> Self {
        Definition {
            uri_template,
            protocol: Protocol::Https,
        }
    }

    fn is_global(&self) -> bool {
        !self.uri_template.contains("{region}")
    }
}

impl ResolveAwsEndpoint for Definition {
    fn resolve_endpoint(&self, region: Option<&Region>) -> Result<AwsEndpoint, BoxError> {
        let uri = match region {
            _ if self.is_global() => self.uri_template.to_string(),
            Some(region) => self.uri_template.replace("{region}", region.as_ref()),
            None => return Err("a region is required to resolve a regional endpoint".into()),
        };
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        Ok(AwsEndpoint::new(Endpoint::from_str(&uri)?))
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Definition, Protocol};
    use crate::ResolveAwsEndpoint;
    use aws_types::region::Region;

    #[test]
    fn global_endpoints_ignore_region() {
        let route53 = Definition {
            uri_template: "route53.amazonaws.com",
            protocol: Protocol::Https,
        };
        for region in [None, Some(Region::new("eu-west-1"))] {
            let resolved = route53.resolve_endpoint(region.as_ref()).unwrap();
            assert_eq!(resolved.endpoint().uri(), "https://route53.amazonaws.com/");
        }
    }

    #[test]
    fn regional_template() {
        let resolved = Definition::regional("storagegateway.{region}.amazonaws.com")
            .resolve_endpoint(Some(&Region::from_static("ap-south-1")))
            .unwrap();
        assert_eq!(
            resolved.endpoint().uri(),
            "https://storagegateway.ap-south-1.amazonaws.com/"
        );
    }

    #[test]
    fn invalid_region_is_an_error() {
        assert!(Definition::regional("opsworks.{region}.amazonaws.com")
            .resolve_endpoint(Some(&Region::new("not a region")))
            .is_err());
    }
}
