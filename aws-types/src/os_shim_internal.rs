/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for testing code that reads the process environment

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Environment variable abstraction
///
/// Environment variables are global to a process, and, as such, are difficult to test with a
/// multi-threaded test runner like Rust's. This enables loading environment variables either
/// from the actual process environment ([`std::env::var`]) or from a hash map.
///
/// ```rust
/// use aws_types::os_shim_internal::Env;
/// let env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
/// assert_eq!(env.get("AWS_REGION").unwrap(), "eu-west-1");
/// assert!(env.get("AWS_DEFAULT_REGION").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Env(Arc<Inner>);

#[derive(Debug)]
enum Inner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Inner::Real => std::env::var(k),
            Inner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Create a fake process environment from a slice of tuples.
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        Self(Arc::new(Inner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Create a process environment that uses the real process environment
    ///
    /// Calls will be delegated to [`std::env::var`].
    pub fn real() -> Self {
        Self(Arc::new(Inner::Real))
    }
}
