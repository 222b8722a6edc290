//! Search operation types: options, canonical payload, and response models.

use serde::{Deserialize, Serialize};

use crate::types::{
    SearchDepth, TimeRange, Toggle, Topic, DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT_SECONDS,
};

/// Optional parameters for search requests.
///
/// Unset fields resolve to the documented defaults when the request is
/// built; list and boolean fields are omitted from the payload entirely
/// when left unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Search depth. Defaults to [`SearchDepth::Basic`].
    pub search_depth: Option<SearchDepth>,
    /// Topic category. Defaults to [`Topic::General`].
    pub topic: Option<Topic>,
    /// Time range filter.
    pub time_range: Option<TimeRange>,
    /// Restrict results to the past N days (news topic).
    pub days: Option<u32>,
    /// Maximum number of results. Defaults to 5.
    pub max_results: Option<u32>,
    /// Domains to restrict results to.
    pub include_domains: Vec<String>,
    /// Domains to exclude from results.
    pub exclude_domains: Vec<String>,
    /// Request an AI-generated answer (`true`/`false` or `"basic"`/`"advanced"`).
    pub include_answer: Option<Toggle>,
    /// Include raw page content (`true`/`false` or `"text"`/`"markdown"`).
    pub include_raw_content: Option<Toggle>,
    /// Include related images in the response.
    pub include_images: Option<bool>,
    /// Include descriptions alongside images.
    pub include_image_descriptions: Option<bool>,
    /// Token budget for aggregated content.
    pub max_tokens: Option<u32>,
    /// Content chunks returned per source.
    pub chunks_per_source: Option<u32>,
    /// Two-letter country code to boost results from.
    pub country: Option<String>,
    /// Server-side timeout in seconds. Defaults to 60.
    pub timeout: Option<u32>,
}

impl SearchOptions {
    /// Creates empty search options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search depth.
    #[must_use]
    pub fn with_search_depth(mut self, depth: SearchDepth) -> Self {
        self.search_depth = Some(depth);
        self
    }

    /// Sets the topic.
    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    /// Sets the time range filter.
    #[must_use]
    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    /// Restricts results to the past N days.
    #[must_use]
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub fn with_max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Restricts results to the given domains.
    #[must_use]
    pub fn with_include_domains(mut self, domains: Vec<String>) -> Self {
        self.include_domains = domains;
        self
    }

    /// Excludes the given domains from results.
    #[must_use]
    pub fn with_exclude_domains(mut self, domains: Vec<String>) -> Self {
        self.exclude_domains = domains;
        self
    }

    /// Requests an AI-generated answer.
    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<Toggle>) -> Self {
        self.include_answer = Some(answer.into());
        self
    }

    /// Requests raw page content.
    #[must_use]
    pub fn with_raw_content(mut self, raw: impl Into<Toggle>) -> Self {
        self.include_raw_content = Some(raw.into());
        self
    }

    /// Sets whether to include images.
    #[must_use]
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = Some(include);
        self
    }

    /// Sets whether to include image descriptions.
    #[must_use]
    pub fn with_image_descriptions(mut self, include: bool) -> Self {
        self.include_image_descriptions = Some(include);
        self
    }

    /// Sets the token budget for aggregated content.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the number of content chunks per source.
    #[must_use]
    pub fn with_chunks_per_source(mut self, chunks: u32) -> Self {
        self.chunks_per_source = Some(chunks);
        self
    }

    /// Boosts results from the given country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the server-side timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Resolves the options into the canonical request payload.
    #[must_use]
    pub fn into_request(self, query: impl Into<String>) -> SearchRequest {
        SearchRequest {
            query: query.into(),
            search_depth: self.search_depth.unwrap_or_default(),
            topic: self.topic.unwrap_or_default(),
            time_range: self.time_range,
            days: self.days,
            max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            include_domains: self.include_domains,
            exclude_domains: self.exclude_domains,
            include_answer: self.include_answer,
            include_raw_content: self.include_raw_content,
            include_images: self.include_images,
            include_image_descriptions: self.include_image_descriptions,
            max_tokens: self.max_tokens,
            chunks_per_source: self.chunks_per_source,
            country: self.country,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Canonical request payload for `/search`.
///
/// Fully resolved: defaulted fields are always present, semantically
/// absent fields are dropped rather than serialized as `null`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    /// The search query.
    pub query: String,
    /// Resolved search depth.
    pub search_depth: SearchDepth,
    /// Resolved topic.
    pub topic: Topic,
    /// Time range filter, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    /// Day window, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// Resolved result cap.
    pub max_results: u32,
    /// Domain allow-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_domains: Vec<String>,
    /// Domain deny-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_domains: Vec<String>,
    /// Answer toggle, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_answer: Option<Toggle>,
    /// Raw content toggle, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_raw_content: Option<Toggle>,
    /// Image toggle, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    /// Image description toggle, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_image_descriptions: Option<bool>,
    /// Token budget, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Chunks per source, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_per_source: Option<u32>,
    /// Country boost, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Resolved server-side timeout in seconds.
    pub timeout: u32,
}

/// An image returned with search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchImage {
    /// Image URL.
    pub url: String,
    /// Description, when image descriptions were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Result URL.
    pub url: String,
    /// Relevant content snippet.
    pub content: String,
    /// Raw page content, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    /// Relevance score.
    pub score: f64,
    /// Publication date, where the source provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// Response payload for `/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// The query the server processed.
    pub query: String,
    /// AI-generated answer, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Server-side processing time in seconds.
    pub response_time: f64,
    /// Related images.
    pub images: Vec<SearchImage>,
    /// Search results, ordered by relevance.
    pub results: Vec<SearchResult>,
}
