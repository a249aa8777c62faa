/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Route 53 is a highly available and scalable Domain Name System (DNS) web service.
//!
//! Route 53 is a global service: every region resolves to `https://route53.amazonaws.com`.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use aws_types::region::Region;
pub use config::Config;
pub use error::{CreateReusableDelegationSetError, CreateReusableDelegationSetErrorKind};
pub use smithy_http::endpoint::Endpoint;
