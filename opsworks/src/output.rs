/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// <p>Contains the response to a <code>CreateLayer</code> request.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct CreateLayerOutput {
    /// <p>The layer ID.</p>
    pub layer_id: std::option::Option<std::string::String>,
}

structure!(CreateLayerOutput {
    layer_id: "LayerId",
});

/// See [`CreateLayerOutput`](crate::output::CreateLayerOutput)
pub mod create_layer_output {
    /// A builder for [`CreateLayerOutput`](crate::output::CreateLayerOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        layer_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn layer_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.layer_id = Some(inp.into());
            self
        }
        /// Consumes the builder and constructs a [`CreateLayerOutput`](crate::output::CreateLayerOutput)
        pub fn build(self) -> crate::output::CreateLayerOutput {
            crate::output::CreateLayerOutput {
                layer_id: self.layer_id,
            }
        }
    }
}
impl CreateLayerOutput {
    /// Creates a new builder-style object to manufacture [`CreateLayerOutput`](crate::output::CreateLayerOutput)
    pub fn builder() -> crate::output::create_layer_output::Builder {
        crate::output::create_layer_output::Builder::default()
    }
}
