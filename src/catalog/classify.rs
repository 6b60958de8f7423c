// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Item classification
//!
//! Maps an item's raw `type` string onto one of five fixed categories and
//! digs training-data files out of an item's version file lists.

use crate::api::schema::Item;

/// Classification bucket for a fetched model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Checkpoints,
    Embeddings,
    Lora,
    TrainingData,
    Other,
}

impl Category {
    /// Fixed category order used by the report
    pub const ALL: [Category; 5] = [
        Category::Checkpoints,
        Category::Embeddings,
        Category::Lora,
        Category::TrainingData,
        Category::Other,
    ];

    /// Classify an item by its top-level `type`, case-insensitively.
    /// Anything unrecognized, including a missing type, lands in Other.
    pub fn of(item: &Item) -> Category {
        match item.kind.to_uppercase().as_str() {
            "CHECKPOINT" => Category::Checkpoints,
            "TEXTUALINVERSION" => Category::Embeddings,
            "LORA" => Category::Lora,
            "TRAINING_DATA" => Category::TrainingData,
            _ => Category::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Checkpoints => "Checkpoints",
            Category::Embeddings => "Embeddings",
            Category::Lora => "Lora",
            Category::TrainingData => "Training_Data",
            Category::Other => "Other",
        }
    }
}

/// File type label marking a training-data file inside a version.
///
/// Naming collision: this spaced literal on *files* is distinct from the
/// `TRAINING_DATA` item type above. Both feed the Training_Data bucket,
/// through independent paths, and that is intentional.
const TRAINING_DATA_FILE_TYPE: &str = "Training Data";

/// Collect the names of all training-data files nested under an item's
/// versions, in version-then-file order. Missing versions or file lists
/// are treated as empty.
pub fn training_data_files(item: &Item) -> Vec<String> {
    let mut found = Vec::new();
    for version in &item.model_versions {
        for file in &version.files {
            if file.kind == TRAINING_DATA_FILE_TYPE {
                found.push(file.name.clone());
            }
        }
    }
    found
}
