// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{AssetUri, Connector, InvalidPortError, PathRule, UnsupportedSchemeError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Sanitizes a URI, resolving the connector from its scheme
pub fn sanitize_uri(uri: &AssetUri) -> Result<AssetUri, SanitizeAssetError> {
    let connector = Connector::resolve(uri)?;
    Ok(connector.sanitize_uri(uri)?)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Connector {
    /// Validates a URI against this connector's shape contract and fills in
    /// the default port when the authority omits one.
    ///
    /// Returns a new normalized value: the input is never mutated and no
    /// partially normalized value is ever produced.
    pub fn sanitize_uri(&self, uri: &AssetUri) -> Result<AssetUri, SanitizeUriError> {
        let spec = self.spec();

        if spec.requires_authority && uri.authority().is_none() {
            return Err(SanitizeUriError::MissingAuthority {
                scheme: uri.scheme().to_string(),
                expected: spec.authority_hint,
            });
        }

        // The port token is checked for every connector; the default is
        // applied only where the spec defines one
        let uri = match (uri.port()?, spec.default_port, uri.authority()) {
            (None, Some(port), Some(netloc)) => {
                let host = netloc.trim_end_matches(':');
                uri.with_authority(format!("{host}:{port}"))
            }
            _ => uri.clone(),
        };

        match spec.path {
            PathRule::Exact(count) => {
                if uri.is_path_empty_or_root() {
                    return Err(SanitizeUriError::MissingPath {
                        scheme: uri.scheme().to_string(),
                        expected: spec.path_hint,
                    });
                }
                if uri.path_segments().len() != count {
                    return Err(SanitizeUriError::WrongSegmentCount {
                        scheme: uri.scheme().to_string(),
                        expected: spec.path_hint,
                    });
                }
            }
            PathRule::NonEmpty => {
                if uri.is_path_empty_or_root() {
                    return Err(SanitizeUriError::MissingPath {
                        scheme: uri.scheme().to_string(),
                        expected: spec.path_hint,
                    });
                }
            }
            PathRule::Present => {
                if uri.path().is_empty() {
                    return Err(SanitizeUriError::MissingPath {
                        scheme: uri.scheme().to_string(),
                        expected: spec.path_hint,
                    });
                }
            }
            PathRule::Any => (),
        }

        Ok(uri)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeUriError {
    #[error("URI format {scheme}:// must contain {expected}")]
    MissingAuthority {
        scheme: String,
        expected: &'static str,
    },

    #[error("URI format {scheme}:// must contain {expected}")]
    MissingPath {
        scheme: String,
        expected: &'static str,
    },

    #[error("URI format {scheme}:// must contain {expected}")]
    WrongSegmentCount {
        scheme: String,
        expected: &'static str,
    },

    #[error(transparent)]
    InvalidPort(#[from] InvalidPortError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeAssetError {
    #[error(transparent)]
    UnsupportedScheme(#[from] UnsupportedSchemeError),

    #[error(transparent)]
    Uri(#[from] SanitizeUriError),
}
