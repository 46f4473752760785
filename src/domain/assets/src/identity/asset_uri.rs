// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;
use std::fmt::Write as _;

use super::grammar::Grammar;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A parsed asset URI in the hierarchical `scheme://authority/path` form.
///
/// The scheme is lowercased on parsing; the authority and path are kept
/// verbatim, including a port token that may not be a valid port number.
/// Asset URIs carry no query or fragment; both are dropped without
/// interpretation. Values are immutable: normalization produces new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetUri {
    scheme: String,
    netloc: String,
    path: String,
}

impl AssetUri {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The authority (`host[:port]`, possibly with a `userinfo@` prefix), or
    /// `None` when the URI has none
    pub fn authority(&self) -> Option<&str> {
        if self.netloc.is_empty() {
            None
        } else {
            Some(&self.netloc)
        }
    }

    pub fn host(&self) -> Option<&str> {
        let (_, host, _) = Grammar::split_authority(&self.netloc);
        if host.is_empty() { None } else { Some(host) }
    }

    /// The verbatim port token, if the authority carries a non-empty one
    pub fn port_token(&self) -> Option<&str> {
        let (_, _, port) = Grammar::split_authority(&self.netloc);
        port.filter(|t| !t.is_empty())
    }

    /// The port as a number. A bare or absent port token yields `Ok(None)`;
    /// a token that is not a valid port number is an error carrying the
    /// token verbatim.
    pub fn port(&self) -> Result<Option<u16>, InvalidPortError> {
        match self.port_token() {
            None => Ok(None),
            Some(token) => token.parse().map(Some).map_err(|_| InvalidPortError {
                token: token.to_string(),
            }),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_path_empty_or_root(&self) -> bool {
        self.path.is_empty() || self.path == "/"
    }

    /// Path split on `/` after the leading slash. Trailing and repeated
    /// separators produce empty segments; an empty or root-only path
    /// produces none.
    pub fn path_segments(&self) -> Vec<&str> {
        let stripped = self.path.strip_prefix('/').unwrap_or(&self.path);
        if stripped.is_empty() {
            Vec::new()
        } else {
            stripped.split('/').collect()
        }
    }

    /// Returns a copy with the authority replaced
    pub fn with_authority(&self, netloc: impl Into<String>) -> Self {
        Self {
            scheme: self.scheme.clone(),
            netloc: netloc.into(),
            path: self.path.clone(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl std::str::FromStr for AssetUri {
    type Err = ParseAssetUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Grammar::split_uri(s) {
            Some((scheme, netloc, path, _query, _fragment)) => Ok(Self {
                scheme: scheme.to_ascii_lowercase(),
                netloc: netloc.to_string(),
                path: path.to_string(),
            }),
            None => Err(ParseAssetUriError {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for AssetUri {
    type Error = ParseAssetUriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for AssetUri {
    type Error = ParseAssetUriError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<&url::Url> for AssetUri {
    fn from(url: &url::Url) -> Self {
        let mut netloc = String::new();
        if !url.username().is_empty() {
            netloc.push_str(url.username());
            netloc.push('@');
        }
        if let Some(host) = url.host_str() {
            netloc.push_str(host);
        }
        if let Some(port) = url.port() {
            write!(netloc, ":{port}").unwrap();
        }

        Self {
            scheme: url.scheme().to_string(),
            netloc,
            path: url.path().to_string(),
        }
    }
}

impl fmt::Display for AssetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.netloc, self.path)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Serde
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl serde::Serialize for AssetUri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for AssetUri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_string(AssetUriSerdeVisitor)
    }
}

struct AssetUriSerdeVisitor;

impl serde::de::Visitor<'_> for AssetUriSerdeVisitor {
    type Value = AssetUri;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an AssetUri string")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid asset URI: {value}")]
pub struct ParseAssetUriError {
    pub value: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Port could not be cast to integer value as '{token}'")]
pub struct InvalidPortError {
    pub token: String,
}
