//! Map operation types: options, canonical payload, and response models.
//!
//! Map discovers a site's URL structure without extracting page content,
//! so its options are the crawl options minus the extraction controls.

use serde::{Deserialize, Serialize};

use crate::types::{
    CrawlCategory, DEFAULT_LIMIT, DEFAULT_MAX_BREADTH, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECONDS,
};

/// Optional parameters for map requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapOptions {
    /// Traversal depth from the start URL. Defaults to 1.
    pub max_depth: Option<u32>,
    /// Links followed per page. Defaults to 20.
    pub max_breadth: Option<u32>,
    /// Total page limit. Defaults to 50.
    pub limit: Option<u32>,
    /// Natural-language guidance for the mapper.
    pub instructions: Option<String>,
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
    /// Content categories to keep.
    pub categories: Vec<CrawlCategory>,
    /// Server-side timeout in seconds. Defaults to 60.
    pub timeout: Option<u32>,
}

impl MapOptions {
    /// Creates empty map options.
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

    /// Sets mapper guidance.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
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

    /// Sets the content categories to keep.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<CrawlCategory>) -> Self {
        self.categories = categories;
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
    pub fn into_request(self, url: impl Into<String>) -> MapRequest {
        MapRequest {
            url: url.into(),
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            max_breadth: self.max_breadth.unwrap_or(DEFAULT_MAX_BREADTH),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            instructions: self.instructions,
            select_paths: self.select_paths,
            select_domains: self.select_domains,
            exclude_paths: self.exclude_paths,
            exclude_domains: self.exclude_domains,
            allow_external: self.allow_external,
            categories: self.categories,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Canonical request payload for `/map`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRequest {
    /// The start URL.
    pub url: String,
    /// Resolved traversal depth.
    pub max_depth: u32,
    /// Resolved per-page link breadth.
    pub max_breadth: u32,
    /// Resolved total page limit.
    pub limit: u32,
    /// Mapper guidance, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
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
    /// Content categories to keep.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CrawlCategory>,
    /// Resolved server-side timeout in seconds.
    pub timeout: u32,
}

/// Response payload for `/map`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapResponse {
    /// Server-side processing time in seconds.
    pub response_time: f64,
    /// The normalized start URL.
    pub base_url: String,
    /// The discovered URLs.
    pub results: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_substituted() {
        let request = MapOptions::new().into_request("https://e.com");

        assert_eq!(request.max_depth, 1);
        assert_eq!(request.max_breadth, 20);
        assert_eq!(request.limit, 50);
        assert_eq!(request.timeout, 60);
    }

    #[test]
    fn test_set_fields_pass_through() {
        let request = MapOptions::new()
            .with_max_depth(2)
            .with_limit(100)
            .into_request("https://e.com");

        assert_eq!(request.max_depth, 2);
        assert_eq!(request.limit, 100);
    }

    #[test]
    fn test_payload_has_no_extraction_fields() {
        let json = serde_json::to_value(MapOptions::new().into_request("https://e.com")).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("extract_depth"));
        assert!(!object.contains_key("format"));
        assert!(!object.contains_key("include_images"));
    }

    #[test]
    fn test_response_decodes() {
        let body = r#"{
            "response_time": 0.8,
            "base_url": "https://e.com",
            "results": ["https://e.com/", "https://e.com/docs"]
        }"#;

        let response: MapResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1], "https://e.com/docs");
    }
}
