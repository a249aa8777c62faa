/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>AWS Storage Gateway Service</fullname>
//!
//! AWS Storage Gateway connects an on-premises software appliance with cloud-based storage.
//! This crate covers the `DescribeGatewayInformation` operation.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use aws_types::region::Region;
pub use config::Config;
pub use error::{DescribeGatewayInformationError, DescribeGatewayInformationErrorKind};
pub use smithy_http::endpoint::Endpoint;
