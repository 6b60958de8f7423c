// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Aggregated classification for one fetch run

use crate::api::schema::Item;
use crate::catalog::classify::{training_data_files, Category};

/// Per-category item names accumulated while pages arrive, in arrival
/// order, plus the raw types of items that fell into Other.
///
/// Each item contributes exactly one entry to its own category; nested
/// training-data files contribute additional Training_Data entries on top,
/// so that bucket is not exclusive with the others.
#[derive(Debug, Clone, Default)]
pub struct CategorizedResult {
    checkpoints: Vec<String>,
    embeddings: Vec<String>,
    lora: Vec<String>,
    training_data: Vec<String>,
    other: Vec<String>,
    other_types: Vec<(String, String)>,
}

impl CategorizedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decoded item into the buckets
    pub fn record(&mut self, item: &Item) {
        let category = Category::of(item);
        self.bucket_mut(category).push(item.name.clone());

        self.training_data.extend(training_data_files(item));

        if category == Category::Other {
            self.other_types.push((item.name.clone(), item.kind.clone()));
        }
    }

    /// Names in a category's bucket, in arrival order
    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Checkpoints => &self.checkpoints,
            Category::Embeddings => &self.embeddings,
            Category::Lora => &self.lora,
            Category::TrainingData => &self.training_data,
            Category::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Checkpoints => &mut self.checkpoints,
            Category::Embeddings => &mut self.embeddings,
            Category::Lora => &mut self.lora,
            Category::TrainingData => &mut self.training_data,
            Category::Other => &mut self.other,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.names(category).len()
    }

    /// Total entries across all buckets, nested training-data included
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// `(name, raw type)` pairs for items classified as Other
    pub fn other_types(&self) -> &[(String, String)] {
        &self.other_types
    }
}
