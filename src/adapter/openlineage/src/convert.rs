// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dataline_assets::{
    Asset,
    ConvertAssetError,
    LineageDataset,
    LineageDatasetFactory,
    convert_asset,
};

use crate::OpenLineageDataset;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Execution context of the lineage emission.
///
/// Accepted for signature compatibility with the emission pipeline; identity
/// derivation does not consult it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineageContext;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Constructs [`OpenLineageDataset`] values from derived identities
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLineageDatasetFactory;

impl LineageDatasetFactory for OpenLineageDatasetFactory {
    type Dataset = OpenLineageDataset;

    fn create_dataset(&self, identity: LineageDataset, _asset: &Asset) -> OpenLineageDataset {
        OpenLineageDataset::new(identity.namespace, identity.name)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Translates an asset with a valid canonical URI into its OpenLineage
/// dataset identity
#[tracing::instrument(level = "debug", skip_all, fields(uri = %asset.uri))]
pub fn convert_asset_to_openlineage(
    asset: &Asset,
    _lineage_context: Option<&LineageContext>,
) -> Result<OpenLineageDataset, ConvertAssetError> {
    convert_asset(asset, &OpenLineageDatasetFactory)
}
