//! Shared request vocabulary and payload default constants.

use serde::{Deserialize, Serialize};

/// Default number of search results per request.
pub const DEFAULT_MAX_RESULTS: u32 = 5;
/// Default server-side timeout, in seconds, sent with every payload.
pub const DEFAULT_TIMEOUT_SECONDS: u32 = 60;
/// Default crawl/map traversal depth.
pub const DEFAULT_MAX_DEPTH: u32 = 1;
/// Default number of links followed per crawled page.
pub const DEFAULT_MAX_BREADTH: u32 = 20;
/// Default total page limit for crawl/map operations.
pub const DEFAULT_LIMIT: u32 = 50;

/// Depth level for search and extract operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Fast, lower-cost retrieval.
    #[default]
    Basic,
    /// Deeper retrieval with more thorough content processing.
    Advanced,
}

/// Topic category for search operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// General-purpose web search.
    #[default]
    General,
    /// Recent news sources.
    News,
    /// Financial sources.
    Finance,
}

/// Time range filter for search results.
///
/// The API accepts both the long and the single-letter forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Past day.
    Day,
    /// Past week.
    Week,
    /// Past month.
    Month,
    /// Past year.
    Year,
    /// Short form of [`TimeRange::Day`].
    D,
    /// Short form of [`TimeRange::Week`].
    W,
    /// Short form of [`TimeRange::Month`].
    M,
    /// Short form of [`TimeRange::Year`].
    Y,
}

/// Output format for extracted content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Plain text.
    #[default]
    Text,
    /// Markdown with preserved structure.
    Markdown,
}

/// Content categories for filtering crawl and map results.
///
/// Serialized as the exact strings the API expects, including the
/// hyphenated `E-Commerce` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrawlCategory {
    /// Documentation pages.
    Documentation,
    /// Blog pages (singular form).
    Blog,
    /// Blog pages (plural form).
    Blogs,
    /// Community pages.
    Community,
    /// About pages.
    About,
    /// Contact pages.
    Contact,
    /// Privacy policy pages.
    Privacy,
    /// Terms of service pages.
    Terms,
    /// Service status pages.
    Status,
    /// Pricing pages.
    Pricing,
    /// Enterprise pages.
    Enterprise,
    /// Careers pages.
    Careers,
    /// E-commerce pages.
    #[serde(rename = "E-Commerce")]
    ECommerce,
    /// Authentication pages.
    Authentication,
    /// Developer pages (singular form).
    Developer,
    /// Developer pages (plural form).
    Developers,
    /// Solutions pages.
    Solutions,
    /// Partner pages.
    Partners,
    /// Download pages.
    Downloads,
    /// Media pages.
    Media,
    /// Events pages.
    Events,
    /// People pages.
    People,
}

/// A flag the API accepts either as a plain boolean or as a mode string.
///
/// `include_answer` takes `true`/`false` or `"basic"`/`"advanced"`;
/// `include_raw_content` takes `true`/`false` or `"text"`/`"markdown"`.
/// Leaving the field unset (`None` at the options level) omits it from the
/// payload entirely, which is distinct from sending `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle {
    /// Plain boolean form.
    Bool(bool),
    /// Named mode form.
    Mode(String),
}

impl From<bool> for Toggle {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Toggle {
    fn from(mode: &str) -> Self {
        Self::Mode(mode.to_string())
    }
}

impl From<String> for Toggle {
    fn from(mode: String) -> Self {
        Self::Mode(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn test_search_depth_wire_strings() {
        assert_eq!(to_json(&SearchDepth::Basic), r#""basic""#);
        assert_eq!(to_json(&SearchDepth::Advanced), r#""advanced""#);
    }

    #[test]
    fn test_topic_wire_strings() {
        assert_eq!(to_json(&Topic::General), r#""general""#);
        assert_eq!(to_json(&Topic::News), r#""news""#);
        assert_eq!(to_json(&Topic::Finance), r#""finance""#);
    }

    #[test]
    fn test_time_range_short_forms() {
        assert_eq!(to_json(&TimeRange::Day), r#""day""#);
        assert_eq!(to_json(&TimeRange::D), r#""d""#);
        assert_eq!(to_json(&TimeRange::Y), r#""y""#);
    }

    #[test]
    fn test_crawl_category_wire_strings() {
        assert_eq!(to_json(&CrawlCategory::Documentation), r#""Documentation""#);
        assert_eq!(to_json(&CrawlCategory::ECommerce), r#""E-Commerce""#);
    }

    #[test]
    fn test_toggle_serializes_untagged() {
        assert_eq!(to_json(&Toggle::Bool(true)), "true");
        assert_eq!(to_json(&Toggle::Bool(false)), "false");
        assert_eq!(to_json(&Toggle::from("advanced")), r#""advanced""#);
    }

    #[test]
    fn test_toggle_from_conversions() {
        assert_eq!(Toggle::from(true), Toggle::Bool(true));
        assert_eq!(Toggle::from("text"), Toggle::Mode("text".to_string()));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SearchDepth::default(), SearchDepth::Basic);
        assert_eq!(Topic::default(), Topic::General);
        assert_eq!(Format::default(), Format::Text);
    }
}
