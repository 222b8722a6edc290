//! Convenience presets over the four core operations.
//!
//! Each preset pre-populates a documented option combination and
//! delegates to the corresponding core operation; none adds logic or
//! failure modes of its own.

use std::collections::HashMap;
use std::fmt::Write;

use crate::cancellation::CancelToken;
use crate::client::{TavilyClient, CLIENT_SOURCE};
use crate::crawl::{CrawlOptions, CrawlResponse};
use crate::errors::TavilyError;
use crate::extract::{ExtractOptions, ExtractResponse};
use crate::map::{MapOptions, MapResponse};
use crate::search::{SearchOptions, SearchResponse};
use crate::types::{CrawlCategory, Format, SearchDepth, Topic};

impl TavilyClient {
    /// Basic search with default options.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::search`].
    pub async fn search_simple(
        &self,
        cancel: &CancelToken,
        query: impl Into<String>,
    ) -> Result<SearchResponse, TavilyError> {
        self.search(cancel, query, None).await
    }

    /// Search that also requests an AI-generated answer.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::search`].
    pub async fn search_with_answer(
        &self,
        cancel: &CancelToken,
        query: impl Into<String>,
    ) -> Result<SearchResponse, TavilyError> {
        let options = SearchOptions::new().with_answer(true).with_max_results(10);
        self.search(cancel, query, Some(options)).await
    }

    /// News-focused search over the past `days` days.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::search`].
    pub async fn search_news(
        &self,
        cancel: &CancelToken,
        query: impl Into<String>,
        days: u32,
    ) -> Result<SearchResponse, TavilyError> {
        let options = SearchOptions::new()
            .with_topic(Topic::News)
            .with_search_depth(SearchDepth::Advanced)
            .with_days(days)
            .with_max_results(15)
            .with_answer(true);
        self.search(cancel, query, Some(options)).await
    }

    /// Extracts a single URL with default options.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::extract`].
    pub async fn extract_simple(
        &self,
        cancel: &CancelToken,
        url: impl Into<String>,
    ) -> Result<ExtractResponse, TavilyError> {
        self.extract(cancel, vec![url.into()], None).await
    }

    /// Extracts content and images as markdown, at advanced depth.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::extract`].
    pub async fn extract_with_images(
        &self,
        cancel: &CancelToken,
        urls: Vec<String>,
    ) -> Result<ExtractResponse, TavilyError> {
        let options = ExtractOptions::new()
            .with_images(true)
            .with_format(Format::Markdown)
            .with_extract_depth(SearchDepth::Advanced);
        self.extract(cancel, urls, Some(options)).await
    }

    /// Crawls a website focusing on documentation pages.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::crawl`].
    pub async fn crawl_documentation(
        &self,
        cancel: &CancelToken,
        url: impl Into<String>,
        max_pages: u32,
    ) -> Result<CrawlResponse, TavilyError> {
        let options = CrawlOptions::new()
            .with_max_depth(3)
            .with_limit(max_pages)
            .with_categories(vec![CrawlCategory::Documentation, CrawlCategory::Developer])
            .with_select_paths(
                ["/docs/*", "/api/*", "/guide/*", "/tutorial/*"]
                    .map(String::from)
                    .to_vec(),
            )
            .with_format(Format::Markdown)
            .with_allow_external(false);
        self.crawl(cancel, url, Some(options)).await
    }

    /// Quick site-structure map, two levels deep.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::map`].
    pub async fn map_site(
        &self,
        cancel: &CancelToken,
        url: impl Into<String>,
    ) -> Result<MapResponse, TavilyError> {
        let options = MapOptions::new().with_max_depth(2).with_limit(100);
        self.map(cancel, url, Some(options)).await
    }

    /// Returns search results formatted as a context block for
    /// retrieval-augmented generation.
    ///
    /// # Errors
    ///
    /// As [`TavilyClient::search`].
    pub async fn get_search_context(
        &self,
        cancel: &CancelToken,
        query: impl Into<String>,
        max_tokens: u32,
    ) -> Result<String, TavilyError> {
        let query = query.into();
        let options = SearchOptions::new()
            .with_search_depth(SearchDepth::Advanced)
            .with_max_results(5)
            .with_raw_content("text")
            .with_max_tokens(max_tokens);
        let response = self.search(cancel, query.clone(), Some(options)).await?;

        let mut context = format!("Search query: {query}\n\n");
        for (index, result) in response.results.iter().enumerate() {
            let _ = write!(
                context,
                "Source {}: {}\nURL: {}\nContent: {}\n\n",
                index + 1,
                result.title,
                result.url,
                result.content
            );
        }

        Ok(context)
    }
}

/// Version information about the client.
#[must_use]
pub fn version_info() -> HashMap<String, String> {
    let mut info = HashMap::new();
    info.insert("client_name".to_string(), CLIENT_SOURCE.to_string());
    info.insert(
        "client_version".to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    info.insert("api_version".to_string(), "v1".to_string());
    info
}
