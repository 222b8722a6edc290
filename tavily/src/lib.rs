//! # Tavily
//!
//! A Rust client for the Tavily AI-powered search and web content
//! extraction API.
//!
//! The client wraps the four Tavily operations:
//!
//! - **Search**: web search with intelligent result aggregation
//! - **Extract**: content extraction from specific URLs
//! - **Crawl**: website crawling and content collection
//! - **Map**: website structure discovery without content extraction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tavily::prelude::*;
//!
//! let client = TavilyClient::new("tvly-your-api-key", ClientOptions::new())?;
//! let cancel = CancelToken::new();
//!
//! let result = client.search(&cancel, "Rust programming language", None).await?;
//! println!("Found {} results", result.results.len());
//! ```
//!
//! Failures are reported as [`errors::TavilyError`], which keeps classified
//! API errors, transport failures, and malformed-response contract errors
//! distinct. Classified errors expose status predicates
//! (`is_unauthorized`, `is_rate_limit`, ...) so callers never hard-code
//! HTTP numbers.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cancellation;
pub mod client;
pub mod crawl;
pub mod errors;
pub mod extract;
pub mod helpers;
pub mod map;
pub mod search;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cancellation::CancelToken;
    pub use crate::client::{ClientOptions, TavilyClient};
    pub use crate::crawl::{CrawlOptions, CrawlResponse, CrawlResult};
    pub use crate::errors::{ApiError, TavilyError};
    pub use crate::extract::{
        ExtractFailedResult, ExtractOptions, ExtractResponse, ExtractResult,
    };
    pub use crate::map::{MapOptions, MapResponse};
    pub use crate::search::{
        SearchImage, SearchOptions, SearchResponse, SearchResult,
    };
    pub use crate::types::{
        CrawlCategory, Format, SearchDepth, TimeRange, Toggle, Topic,
    };
}
