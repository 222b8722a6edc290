//! Error types for the Tavily client.
//!
//! Failures fall into three disjoint categories that are never merged:
//! classified API errors (the server responded with a non-success status),
//! transport failures (no classifiable response was obtained), and contract
//! errors (a success response whose body did not match the expected schema).

use thiserror::Error;

/// An error response from the Tavily API.
///
/// Carries the literal HTTP status code and the server-provided message.
/// Input-validation failures (missing credential, empty required target)
/// are synthesized with the matching status code before any network I/O,
/// so callers handle them through the same predicates as server rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code carried by the error.
    pub status: u16,
    /// Human-readable message, verbatim from the server where available.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Synthesized 401 for a client constructed without a credential.
    #[must_use]
    pub(crate) fn missing_api_key() -> Self {
        Self::new(
            401,
            "missing API key - provide via parameter or TAVILY_API_KEY environment variable",
        )
    }

    /// Whether the error is due to an invalid or missing API key (401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Whether the error is due to rate limiting (429).
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
    }

    /// Whether the error is due to access denial or usage limits.
    ///
    /// Covers 403 plus the service-specific 432/433 usage-limit variants.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self.status, 403 | 432 | 433)
    }

    /// Whether the error is due to invalid request parameters (400).
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }
}

/// The main error type for Tavily operations.
#[derive(Debug, Error)]
pub enum TavilyError {
    /// The server responded with a non-success status.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The request never completed: DNS, connection, or timeout failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call was cancelled before a response was obtained.
    #[error("request cancelled: {reason}")]
    Cancelled {
        /// The reason supplied to the cancel token.
        reason: String,
    },

    /// A success response whose body did not match the expected schema.
    ///
    /// Indicates a contract break between client and server versions, not
    /// a documented API error.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl TavilyError {
    /// Returns the classified API error, if the server produced one.
    ///
    /// A single check of this accessor distinguishes "the server responded,
    /// classify it" from "no classifiable response was obtained".
    #[must_use]
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Whether the failure occurred without any server response.
    ///
    /// Covers both network-level failures and cancellation.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Cancelled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_returned_verbatim() {
        let error = ApiError::new(429, "Rate limit exceeded");
        assert_eq!(error.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_predicates_exclusive_for_documented_codes() {
        let cases = [
            (400, [false, false, false, true]),
            (401, [true, false, false, false]),
            (403, [false, false, true, false]),
            (429, [false, true, false, false]),
            (432, [false, false, true, false]),
            (433, [false, false, true, false]),
        ];

        for (status, [unauthorized, rate_limit, forbidden, bad_request]) in cases {
            let error = ApiError::new(status, "test");
            assert_eq!(error.is_unauthorized(), unauthorized, "status {status}");
            assert_eq!(error.is_rate_limit(), rate_limit, "status {status}");
            assert_eq!(error.is_forbidden(), forbidden, "status {status}");
            assert_eq!(error.is_bad_request(), bad_request, "status {status}");
        }
    }

    #[test]
    fn test_undocumented_code_matches_no_predicate() {
        let error = ApiError::new(500, "internal error");
        assert!(!error.is_unauthorized());
        assert!(!error.is_rate_limit());
        assert!(!error.is_forbidden());
        assert!(!error.is_bad_request());
    }

    #[test]
    fn test_as_api_error() {
        let error = TavilyError::from(ApiError::new(401, "Invalid API key"));
        let api = error.as_api_error().unwrap();
        assert!(api.is_unauthorized());

        let cancelled = TavilyError::Cancelled {
            reason: "caller gave up".to_string(),
        };
        assert!(cancelled.as_api_error().is_none());
    }

    #[test]
    fn test_transport_category() {
        let cancelled = TavilyError::Cancelled {
            reason: "shutdown".to_string(),
        };
        assert!(cancelled.is_transport());

        let api = TavilyError::from(ApiError::new(400, "bad"));
        assert!(!api.is_transport());
    }

    #[test]
    fn test_malformed_response_is_distinct() {
        let decode = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = TavilyError::from(decode);
        assert!(error.as_api_error().is_none());
        assert!(!error.is_transport());
        assert!(matches!(error, TavilyError::MalformedResponse(_)));
    }
}
