// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AssetUri, ParseAssetUriError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opaque extra metadata attached to an asset. Keys are strings, values are
/// arbitrary JSON.
pub type AssetExtra = serde_json::Map<String, serde_json::Value>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A URI-identified external data resource.
///
/// Two assets are equal iff their URI strings and their extra metadata are
/// equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<AssetExtra>,
}

impl Asset {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            extra: None,
        }
    }

    pub fn with_extra(self, extra: AssetExtra) -> Self {
        Self {
            extra: Some(extra),
            ..self
        }
    }

    pub fn parsed_uri(&self) -> Result<AssetUri, ParseAssetUriError> {
        self.uri.parse()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}
