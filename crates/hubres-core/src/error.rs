//! Error type returned by resolver operations.
//!
//! Every failure propagates straight to the host; nothing here is retried.

use thiserror::Error;

/// Message used when the feature flag gate is closed.
pub const DISABLED_MESSAGE: &str =
    "cannot handle resolution request, enable-hub-resolver feature flag not true";

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The hub resolver feature flag is off. Requires reconfiguration.
    #[error("{}", DISABLED_MESSAGE)]
    Disabled,

    /// A required request parameter (`name` or `version`) is absent.
    #[error("must include {0} param")]
    MissingParameter(&'static str),

    /// A request parameter is present but its value is not acceptable.
    #[error("{0}")]
    InvalidParameter(String),

    /// The request omitted a parameter and the installation has no default for it.
    #[error("default {0} was not set during installation of the hub resolver")]
    MissingDefault(&'static str),

    /// Transport-level failure talking to the hub (DNS, connect, abort, timeout).
    #[error("error requesting resource from hub: {0}")]
    Fetch(#[from] curl::Error),

    /// The hub answered with something other than 200 OK.
    #[error("requested resource '{url}' not found on hub (HTTP {status})")]
    NotFound { url: String, status: u32 },

    /// The response body is not a `{"data": {"yaml": ...}}` envelope.
    #[error("error unmarshalling json response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured URL template cannot be filled with four parameters.
    #[error("invalid hub URL template '{template}': expected 4 '%s' slots, found {found}")]
    InvalidTemplate { template: String, found: usize },
}

impl ResolveError {
    pub(crate) fn invalid_kind() -> Self {
        ResolveError::InvalidParameter("kind param must be task or pipeline".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_url() {
        let err = ResolveError::NotFound {
            url: "https://hub.example.com/v1/resource/x".to_string(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("https://hub.example.com/v1/resource/x"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn missing_default_mentions_parameter() {
        let msg = ResolveError::MissingDefault("catalog").to_string();
        assert!(msg.contains("default catalog"));
    }

    #[test]
    fn decode_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ResolveError::Decode(parse_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
