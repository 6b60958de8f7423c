// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Civitai listing API
//!
//! Typed records for the model-listing endpoint and the paginated
//! fetch client that walks a user's models page by page.

pub mod client;
pub mod schema;

pub use client::ModelFetcher;
pub use schema::{Item, ListingPage, ModelFile, ModelVersion, PageMetadata};
