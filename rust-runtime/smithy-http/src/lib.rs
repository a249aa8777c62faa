/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP request and response plumbing shared by generated operations.

pub mod body;
pub mod endpoint;
pub mod header;
pub mod label;
pub mod operation;
pub mod response;
