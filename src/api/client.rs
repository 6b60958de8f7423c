// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Paginated model fetcher
//!
//! Walks the listing endpoint page by page, following the server's
//! `nextPage` cursor, and folds every item into a [`CategorizedResult`].
//! One malformed item is logged and skipped; a failed page request ends
//! the run.

use reqwest::Client;

use crate::api::schema::{Item, ListingPage};
use crate::catalog::result::CategorizedResult;
use crate::error::{CivicatError, Result};
use crate::errorlog::ErrorLog;

const DEFAULT_BASE_URL: &str = "https://civitai.com/api/v1/models";

/// Paginated fetcher for one user's model listing
pub struct ModelFetcher {
    client: Client,
    base_url: String,
    token: String,
    username: String,
}

impl ModelFetcher {
    /// Create a fetcher against the production listing endpoint.
    /// Token and username are passed through verbatim; an empty value
    /// yields a request the server will reject as a normal fetch error.
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            username: username.into(),
        }
    }

    /// Override the listing endpoint (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn first_page_url(&self) -> String {
        format!(
            "{}?username={}&token={}&nsfw=true",
            self.base_url, self.username, self.token
        )
    }

    /// Fetch every page and categorize every item.
    ///
    /// The loop ends when a page carries no metadata or no `nextPage`
    /// cursor. Per-item decode failures go to `errors` and the loop
    /// moves on; page-level failures propagate.
    pub async fn fetch_all(&self, errors: &mut ErrorLog) -> Result<CategorizedResult> {
        let mut result = CategorizedResult::new();
        let mut next_url = Some(self.first_page_url());
        let mut page = 0usize;

        while let Some(url) = next_url.take() {
            page += 1;
            let listing = self.fetch_page(&url).await?;
            tracing::info!("Fetched page {} ({} items)", page, listing.items.len());

            for raw in listing.items {
                match serde_json::from_value::<Item>(raw.clone()) {
                    Ok(item) => result.record(&item),
                    Err(e) => {
                        errors.record(&format!("Error categorizing item: {} - {}", raw, e));
                    }
                }
            }

            next_url = match listing.metadata.and_then(|m| m.next_page) {
                None => None,
                Some(next) if next.is_empty() => None,
                Some(next) if next == url => {
                    // A cursor pointing back at the page just fetched
                    // would loop forever; stop instead.
                    tracing::warn!("Listing endpoint repeated nextPage URL; stopping");
                    None
                }
                Some(next) => Some(next),
            };
        }

        tracing::info!(
            "Fetched {} page(s), {} entries for user '{}'",
            page,
            result.total(),
            self.username
        );
        Ok(result)
    }

    async fn fetch_page(&self, url: &str) -> Result<ListingPage> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CivicatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let page = serde_json::from_str(&body)?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_url_carries_query_parameters() {
        let fetcher = ModelFetcher::new("tok", "alice");
        assert_eq!(
            fetcher.first_page_url(),
            "https://civitai.com/api/v1/models?username=alice&token=tok&nsfw=true"
        );
    }

    #[test]
    fn test_first_page_url_with_empty_credentials() {
        // Absent CLI values arrive here as empty strings and stay in the
        // URL; the server's rejection surfaces as a normal fetch error.
        let fetcher = ModelFetcher::new("", "");
        assert_eq!(
            fetcher.first_page_url(),
            "https://civitai.com/api/v1/models?username=&token=&nsfw=true"
        );
    }

    #[test]
    fn test_with_base_url_overrides_endpoint() {
        let fetcher = ModelFetcher::new("tok", "alice").with_base_url("http://127.0.0.1:8080");
        assert!(fetcher
            .first_page_url()
            .starts_with("http://127.0.0.1:8080?username=alice"));
    }
}
