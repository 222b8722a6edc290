//! Extract operation types: options, canonical payload, and response models.

use serde::{Deserialize, Serialize};

use crate::types::{Format, SearchDepth, DEFAULT_TIMEOUT_SECONDS};

/// Optional parameters for extract requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOptions {
    /// Include images found in the pages.
    pub include_images: Option<bool>,
    /// Extraction depth. Defaults to [`SearchDepth::Basic`].
    pub extract_depth: Option<SearchDepth>,
    /// Output format. Defaults to [`Format::Text`].
    pub format: Option<Format>,
    /// Server-side timeout in seconds. Defaults to 60.
    pub timeout: Option<u32>,
}

impl ExtractOptions {
    /// Creates empty extract options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to include images.
    #[must_use]
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = Some(include);
        self
    }

    /// Sets the extraction depth.
    #[must_use]
    pub fn with_extract_depth(mut self, depth: SearchDepth) -> Self {
        self.extract_depth = Some(depth);
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
    pub fn into_request(self, urls: Vec<String>) -> ExtractRequest {
        ExtractRequest {
            urls,
            include_images: self.include_images,
            extract_depth: self.extract_depth.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Canonical request payload for `/extract`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractRequest {
    /// The URLs to extract content from.
    pub urls: Vec<String>,
    /// Image toggle, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    /// Resolved extraction depth.
    pub extract_depth: SearchDepth,
    /// Resolved output format.
    pub format: Format,
    /// Resolved server-side timeout in seconds.
    pub timeout: u32,
}

/// A successful content extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractResult {
    /// The extracted URL.
    pub url: String,
    /// The extracted content.
    pub raw_content: String,
    /// Image URLs found on the page, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// A failed content extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractFailedResult {
    /// The URL that failed.
    pub url: String,
    /// The failure reason reported by the server.
    pub error: String,
}

/// Response payload for `/extract`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractResponse {
    /// Server-side processing time in seconds.
    pub response_time: f64,
    /// Successful extractions.
    pub results: Vec<ExtractResult>,
    /// Failed extractions.
    pub failed_results: Vec<ExtractFailedResult>,
}
