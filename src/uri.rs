// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Making object-store links clickable.
//!
//! Documents indexed straight from a bucket come back with URIs like
//! `https://s3.region.amazonaws.com/bucket/path/to/key.pdf`, which a browser
//! can't open without credentials. Before rendering, such URIs are swapped
//! for signed URLs. Anything that isn't recognisably an object-store URI, or
//! that can't be signed, is left exactly as it was.

use crate::error::SignError;
use crate::types::QueryResponse;

/// Bucket and key of an object-store URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Location {
    pub bucket: String,
    pub key: String,
}

impl S3Location {
    /// Parse `scheme://host/bucket/key...` where `host` starts with `s3`.
    ///
    /// The key keeps its internal slashes. At least one key segment is
    /// required.
    pub fn parse(uri: &str) -> Option<Self> {
        let parts: Vec<&str> = uri.split('/').collect();
        if parts.len() < 5 || !parts[2].starts_with("s3") {
            return None;
        }
        Some(S3Location {
            bucket: parts[3].to_string(),
            key: parts[4..].join("/"),
        })
    }
}

/// Produces a time-limited URL for an object.
pub trait UriSigner {
    fn sign(&self, location: &S3Location) -> Result<String, SignError>;
}

/// Replace every signable result URI in `response` with a signed one.
///
/// Only the ordinary result list is rewritten. Returns how many URIs changed.
pub fn rewrite_uris(response: &mut QueryResponse, signer: &dyn UriSigner) -> usize {
    let mut rewritten = 0;
    for item in &mut response.result_items {
        let Some(uri) = item.uri.as_deref() else {
            continue;
        };
        let Some(location) = S3Location::parse(uri) else {
            continue;
        };
        match signer.sign(&location) {
            Ok(signed) => {
                item.uri = Some(signed);
                rewritten += 1;
            }
            Err(err) => {
                tracing::warn!(bucket = %location.bucket, key = %location.key, error = %err, "leaving uri unsigned");
            }
        }
    }
    rewritten
}
