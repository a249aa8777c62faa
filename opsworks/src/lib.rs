/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>AWS OpsWorks</fullname>
//!
//! AWS OpsWorks Stacks lets you manage applications and servers on Amazon EC2 and on-premises
//! computing resources. This crate covers the `CreateLayer` operation.
//!
//! ```rust
//! use opsworks::model::LayerType;
//! use opsworks::operation::CreateLayer;
//! use opsworks::{Config, Region};
//!
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let operation = CreateLayer::builder()
//!     .stack_id("f6673d70-32e6-4425-8999-265dd002fec7")
//!     .r#type(LayerType::Custom)
//!     .name("Worker")
//!     .shortname("worker")
//!     .build()
//!     .make_operation(&config)
//!     .expect("valid operation");
//! assert_eq!(
//!     operation.request().http().uri(),
//!     "https://opsworks.us-east-1.amazonaws.com/"
//! );
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use aws_types::region::Region;
pub use config::Config;
pub use error::{CreateLayerError, CreateLayerErrorKind};
pub use smithy_http::endpoint::Endpoint;
