// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Typed records for the model-listing endpoint
//!
//! Every field the endpoint may omit decodes to a default value instead
//! of failing, so a sparse record is never an error by itself.

use serde::{Deserialize, Serialize};

/// One model record returned by the listing API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    /// Raw model type as reported by the API (e.g. "Checkpoint", "LORA")
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Published versions, in the order the API returns them
    #[serde(rename = "modelVersions", default)]
    pub model_versions: Vec<ModelVersion>,
}

/// One published version of a model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelVersion {
    /// Files attached to this version
    #[serde(default)]
    pub files: Vec<ModelFile>,
}

/// One file attached to a model version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelFile {
    /// File type label (e.g. "Model", "Training Data")
    #[serde(rename = "type", default)]
    pub kind: String,

    /// File name
    #[serde(default)]
    pub name: String,
}

/// One page of the listing endpoint
///
/// Items stay raw JSON here; the fetch loop decodes them into [`Item`]
/// one at a time so a malformed element skips only itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,

    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

/// Pagination metadata attached to a listing page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Cursor URL for the following page, absent on the last page
    #[serde(rename = "nextPage", default)]
    pub next_page: Option<String>,
}
