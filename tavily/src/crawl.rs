//! Crawl operation types: options, canonical payload, and response models.

use serde::{Deserialize, Serialize};

use crate::types::{
    CrawlCategory, Format, SearchDepth, DEFAULT_LIMIT, DEFAULT_MAX_BREADTH, DEFAULT_MAX_DEPTH,
    DEFAULT_TIMEOUT_SECONDS,
};

/// Optional parameters for crawl requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlOptions {
    /// Traversal depth from the start URL. Defaults to 1.
    pub max_depth: Option<u32>,
    /// Links followed per page. Defaults to 20.
    pub max_breadth: Option<u32>,
    /// Total page limit. Defaults to 50.
    pub limit: Option<u32>,
    /// Natural-language guidance for the crawler.
    pub instructions: Option<String>,
    /// Extraction depth. Defaults to [`SearchDepth::Basic`].
    pub extract_depth: Option<SearchDepth>,
    /// URL path patterns to include.
    pub select_paths: Vec<String>,
    /// Domain patterns to include.
    pub select_domains: Vec<String>,
    /// URL path patterns to exclude.
    pub exclude_paths: Vec<String>,
    /// Domain patterns to exclude.
    pub exclude_domains: Vec<String>,
    /// Follow links to external domains.
    pub allow_external: Option<bool>,
    /// Include images found in the pages.
    pub include_images: Option<bool>,
    /// Content categories to keep.
    pub categories: Vec<CrawlCategory>,
    /// Output format. Defaults to [`Format::Text`].
    pub format: Option<Format>,
    /// Server-side timeout in seconds. Defaults to 60.
    pub timeout: Option<u32>,
}

impl CrawlOptions {
    /// Creates empty crawl options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the traversal depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Sets the per-page link breadth.
    #[must_use]
    pub fn with_max_breadth(mut self, breadth: u32) -> Self {
        self.max_breadth = Some(breadth);
        self
    }

    /// Sets the total page limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets crawler guidance.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets the extraction depth.
    #[must_use]
    pub fn with_extract_depth(mut self, depth: SearchDepth) -> Self {
        self.extract_depth = Some(depth);
        self
    }

    /// Sets the path allow-list.
    #[must_use]
    pub fn with_select_paths(mut self, paths: Vec<String>) -> Self {
        self.select_paths = paths;
        self
    }

    /// Sets the domain allow-list.
    #[must_use]
    pub fn with_select_domains(mut self, domains: Vec<String>) -> Self {
        self.select_domains = domains;
        self
    }

    /// Sets the path deny-list.
    #[must_use]
    pub fn with_exclude_paths(mut self, paths: Vec<String>) -> Self {
        self.exclude_paths = paths;
        self
    }

    /// Sets the domain deny-list.
    #[must_use]
    pub fn with_exclude_domains(mut self, domains: Vec<String>) -> Self {
        self.exclude_domains = domains;
        self
    }

    /// Sets whether external domains may be followed.
    #[must_use]
    pub fn with_allow_external(mut self, allow: bool) -> Self {
        self.allow_external = Some(allow);
        self
    }

    /// Sets whether to include images.
    #[must_use]
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = Some(include);
        self
    }

    /// Sets the content categories to keep.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<CrawlCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
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
    pub fn into_request(self, url: impl Into<String>) -> CrawlRequest {
        CrawlRequest {
            url: url.into(),
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            max_breadth: self.max_breadth.unwrap_or(DEFAULT_MAX_BREADTH),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            instructions: self.instructions,
            extract_depth: self.extract_depth.unwrap_or_default(),
            select_paths: self.select_paths,
            select_domains: self.select_domains,
            exclude_paths: self.exclude_paths,
            exclude_domains: self.exclude_domains,
            allow_external: self.allow_external,
            include_images: self.include_images,
            categories: self.categories,
            format: self.format.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Canonical request payload for `/crawl`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlRequest {
    /// The start URL.
    pub url: String,
    /// Resolved traversal depth.
    pub max_depth: u32,
    /// Resolved per-page link breadth.
    pub max_breadth: u32,
    /// Resolved total page limit.
    pub limit: u32,
    /// Crawler guidance, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Resolved extraction depth.
    pub extract_depth: SearchDepth,
    /// Path allow-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_paths: Vec<String>,
    /// Domain allow-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_domains: Vec<String>,
    /// Path deny-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_paths: Vec<String>,
    /// Domain deny-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_domains: Vec<String>,
    /// External-domain toggle, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external: Option<bool>,
    /// Image toggle, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    /// Content categories to keep.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CrawlCategory>,
    /// Resolved output format.
    pub format: Format,
    /// Resolved server-side timeout in seconds.
    pub timeout: u32,
}

/// A crawled page with content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlResult {
    /// The page URL.
    pub url: String,
    /// The page content.
    pub raw_content: String,
    /// Image URLs found on the page, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Response payload for `/crawl`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlResponse {
    /// Server-side processing time in seconds.
    pub response_time: f64,
    /// The normalized start URL.
    pub base_url: String,
    /// The crawled pages.
    pub results: Vec<CrawlResult>,
}
