/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{Definition, ResolveAwsEndpoint};
use aws_types::region::{ProvideRegion, Region};
use std::sync::Arc;

const DEFAULT_ENDPOINT: Definition = Definition::regional("storagegateway.{region}.amazonaws.com");

/// Service configuration shared by every operation of the client
#[derive(Clone, Debug)]
pub struct Config {
    region: Option<Region>,
    endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region taken from `AWS_REGION` or `AWS_DEFAULT_REGION`
    pub fn from_env() -> Self {
        Builder::default()
            .region(aws_types::region::default_provider())
            .build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint_resolver(&self) -> &dyn ResolveAwsEndpoint {
        self.endpoint_resolver.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    /// Overrides the endpoint, for example with a static
    /// [`Endpoint`](smithy_http::endpoint::Endpoint) for local testing
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(DEFAULT_ENDPOINT)),
        }
    }
}
