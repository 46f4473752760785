// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;

use crate::{
    Asset,
    AssetUri,
    Connector,
    NameRule,
    NamespaceRule,
    ParseAssetUriError,
    UnsupportedSchemeError,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Dataset identity in lineage terms.
///
/// Always recomputed from an asset URI, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineageDataset {
    pub namespace: String,
    pub name: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Connector {
    /// Computes the lineage identity of a sanitized URI.
    ///
    /// Total over that domain: never fails.
    pub fn lineage_dataset(&self, uri: &AssetUri) -> LineageDataset {
        let spec = self.spec();
        LineageDataset {
            namespace: namespace_of(spec.namespace, uri),
            name: name_of(spec.name, uri),
        }
    }
}

fn namespace_of(rule: NamespaceRule, uri: &AssetUri) -> String {
    match rule {
        NamespaceRule::Authority => {
            format!("{}://{}", uri.scheme(), uri.authority().unwrap_or_default())
        }
        NamespaceRule::AccountAuthority => {
            let netloc = uri.authority().unwrap_or_default();
            format!("{}://{}", uri.scheme(), account_authority(netloc))
        }
        NamespaceRule::PathPrefix => {
            let full = uri.path().trim_start_matches('/');
            match full.rsplit_once('/') {
                Some((prefix, _)) => format!("{}:/{}", uri.scheme(), prefix),
                None => format!("{}:/{}", uri.scheme(), full),
            }
        }
    }
}

/// `container@account.dfs.core.windows.net` → `container@account`
fn account_authority(netloc: &str) -> &str {
    match netloc.rfind('@') {
        Some(at) => match netloc[at + 1..].find('.') {
            Some(dot) => &netloc[..at + 1 + dot],
            None => netloc,
        },
        None => netloc,
    }
}

fn name_of(rule: NameRule, uri: &AssetUri) -> String {
    match rule {
        NameRule::DotJoined => uri
            .path()
            .trim_matches('/')
            .split('/')
            .collect::<Vec<_>>()
            .join("."),
        NameRule::Path => {
            let name = uri.path().trim_start_matches('/');
            if name.is_empty() {
                "/".to_string()
            } else {
                name.to_string()
            }
        }
        NameRule::LastSegment => uri
            .path()
            .trim_start_matches('/')
            .rsplit_once('/')
            .map(|(_, table)| table.to_string())
            .unwrap_or_default(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Capability for constructing the caller's lineage dataset type.
///
/// Supplied only by callers that have a lineage client linked in: deriving
/// the identity itself carries no such dependency.
pub trait LineageDatasetFactory {
    type Dataset;

    fn create_dataset(&self, identity: LineageDataset, asset: &Asset) -> Self::Dataset;
}

/// Derives the lineage identity of an asset and hands it to the factory
pub fn convert_asset<F: LineageDatasetFactory>(
    asset: &Asset,
    factory: &F,
) -> Result<F::Dataset, ConvertAssetError> {
    let uri = asset.parsed_uri()?;
    let connector = Connector::resolve(&uri)?;
    Ok(factory.create_dataset(connector.lineage_dataset(&uri), asset))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertAssetError {
    #[error(transparent)]
    InvalidUri(#[from] ParseAssetUriError),

    #[error(transparent)]
    UnsupportedScheme(#[from] UnsupportedSchemeError),
}
