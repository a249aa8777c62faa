/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{InvalidUri, Uri};
use std::borrow::Cow;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint must have an authority")]
    EndpointMustHaveAuthority,
    #[error("endpoint must have a scheme")]
    EndpointMustHaveScheme,
    #[error("merging the endpoint produced an invalid URI")]
    InvalidUri(#[from] http::Error),
    #[error("invalid endpoint URI")]
    InvalidEndpointUri(#[from] InvalidUri),
}

/// API Endpoint
///
/// This implements an API endpoint as specified in the
/// [Smithy Endpoint Specification](https://awslabs.github.io/smithy/1.0/spec/core/endpoint-traits.html)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    /// Create a new endpoint from a URI. The URI must carry a scheme and an authority.
    pub fn new(uri: Uri) -> Result<Self, InvalidEndpoint> {
        if uri.scheme().is_none() {
            return Err(InvalidEndpoint::EndpointMustHaveScheme);
        }
        if uri.authority().is_none() {
            return Err(InvalidEndpoint::EndpointMustHaveAuthority);
        }
        Ok(Endpoint { uri })
    }

    /// Parses `uri` and creates an endpoint from it
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// let endpoint = Endpoint::from_str("http://localhost:8000").expect("valid endpoint");
    /// assert_eq!(endpoint.uri().port_u16(), Some(8000));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(uri: &str) -> Result<Self, InvalidEndpoint> {
        Self::new(uri.parse::<Uri>()?)
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`, keeping its path and query and prepending the endpoint's path
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        let authority = self
            .uri
            .authority()
            .ok_or(InvalidEndpoint::EndpointMustHaveAuthority)?
            .clone();
        let scheme = self
            .uri
            .scheme()
            .ok_or(InvalidEndpoint::EndpointMustHaveScheme)?
            .clone();
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}
