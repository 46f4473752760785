// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Named, typed metadata attachments on a lineage dataset
pub type DatasetFacets = serde_json::Map<String, serde_json::Value>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The `(namespace, name, facets)` tuple accepted by the lineage event
/// emission pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLineageDataset {
    pub namespace: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "DatasetFacets::is_empty")]
    pub facets: DatasetFacets,
}

impl OpenLineageDataset {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            facets: DatasetFacets::new(),
        }
    }

    pub fn with_facets(self, facets: DatasetFacets) -> Self {
        Self { facets, ..self }
    }
}
