/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Direct Connect links your internal network to an AWS Direct Connect location over a
//! standard Ethernet fiber-optic cable.
//!
//! ```rust
//! use directconnect::model::{NewPublicVirtualInterface, RouteFilterPrefix};
//! use directconnect::operation::CreatePublicVirtualInterface;
//!
//! let input = CreatePublicVirtualInterface::builder()
//!     .connection_id("dxcon-1")
//!     .new_public_virtual_interface(
//!         NewPublicVirtualInterface::builder()
//!             .route_filter_prefixes(RouteFilterPrefix::builder().cidr("10.0.0.0/24").build())
//!             .build(),
//!     )
//!     .build();
//! let request = CreatePublicVirtualInterface::marshall(Some(&input))
//!     .expect("valid input")
//!     .into_parts();
//! assert_eq!(
//!     request.body().bytes(),
//!     Some(&br#"{"connectionId":"dxcon-1","newPublicVirtualInterface":{"routeFilterPrefixes":[{"cidr":"10.0.0.0/24"}]}}"#[..])
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
pub use error::{CreatePublicVirtualInterfaceError, CreatePublicVirtualInterfaceErrorKind};
pub use smithy_http::endpoint::Endpoint;
