/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod partition;

pub use partition::endpoint::{Definition, Protocol};

use aws_types::region::Region;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::operation::Request;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to send a request to, as resolved for a region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint) -> Self {
        AwsEndpoint { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Sets the endpoint on `uri`, keeping the request's own path and query
    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri)
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`Endpoint`](smithy_http::endpoint::Endpoint) implements this
/// trait. Global services resolve to the same endpoint for every region, so the region is
/// optional.
///
/// ```rust
/// use aws_endpoint::ResolveAwsEndpoint;
/// use smithy_http::endpoint::Endpoint;
/// let endpoint = Endpoint::from_str("http://localhost:8000").expect("valid URI");
/// let resolved = endpoint.resolve_endpoint(None).expect("static endpoints always resolve");
/// assert_eq!(resolved.endpoint().uri(), "http://localhost:8000/");
/// ```
pub trait ResolveAwsEndpoint: Send + Sync + Debug {
    fn resolve_endpoint(&self, region: Option<&Region>) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for Endpoint {
    fn resolve_endpoint(&self, _region: Option<&Region>) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::new(self.clone()))
    }
}

#[derive(Debug)]
pub enum AwsEndpointError {
    NoRegion,
    EndpointResolutionError(BoxError),
    InvalidEndpoint(InvalidEndpoint),
}

impl Display for AwsEndpointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AwsEndpointError::NoRegion => write!(f, "no region was configured"),
            AwsEndpointError::EndpointResolutionError(err) => {
                write!(f, "failed to resolve the endpoint: {}", err)
            }
            AwsEndpointError::InvalidEndpoint(err) => {
                write!(f, "the resolved endpoint could not be applied: {}", err)
            }
        }
    }
}

impl Error for AwsEndpointError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointError::NoRegion => None,
            AwsEndpointError::EndpointResolutionError(err) => Some(err.as_ref()),
            AwsEndpointError::InvalidEndpoint(err) => Some(err),
        }
    }
}

/// Resolves the endpoint for `region` and applies it to the URI of `request`
pub fn apply_endpoint(
    request: &mut Request,
    resolver: &dyn ResolveAwsEndpoint,
    region: Option<&Region>,
) -> Result<(), AwsEndpointError> {
    let endpoint = resolver
        .resolve_endpoint(region)
        .map_err(AwsEndpointError::EndpointResolutionError)?;
    tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
    endpoint
        .set_endpoint(request.http_mut().uri_mut())
        .map_err(AwsEndpointError::InvalidEndpoint)
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Definition, Protocol};
    use crate::{apply_endpoint, AwsEndpointError};
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::operation;

    fn request(path: &'static str) -> operation::Request {
        operation::Request::new(
            http::Request::builder()
                .uri(Uri::from_static(path))
                .body(SdkBody::from("{}"))
                .unwrap(),
        )
    }

    #[test]
    fn regional_endpoint_updates_request() {
        let resolver = Definition {
            uri_template: "directconnect.{region}.amazonaws.com",
            protocol: Protocol::Https,
        };
        let mut req = request("/");
        apply_endpoint(&mut req, &resolver, Some(&Region::new("us-west-2"))).unwrap();
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://directconnect.us-west-2.amazonaws.com/")
        );
    }

    #[test]
    fn regional_endpoint_requires_region() {
        let resolver = Definition {
            uri_template: "opsworks.{region}.amazonaws.com",
            protocol: Protocol::Https,
        };
        let err = apply_endpoint(&mut request("/"), &resolver, None).unwrap_err();
        assert!(
            matches!(err, AwsEndpointError::EndpointResolutionError(_)),
            "{:?}",
            err
        );
    }

    #[test]
    fn endpoint_override_keeps_request_path() {
        let resolver = Endpoint::from_str("http://localhost:8000/prefix").unwrap();
        let mut req = request("/2013-04-01/delegationset");
        apply_endpoint(&mut req, &resolver, Some(&Region::new("us-east-1"))).unwrap();
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("http://localhost:8000/prefix/2013-04-01/delegationset")
        );
    }
}
