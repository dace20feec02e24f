//! Cookie store error types.
//!
//! The core store operations are infallible. These errors come from the
//! request-facing helpers that decide whether a response cookie may be
//! stored, and from URL parsing.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Request has no host")]
    MissingHost,
    #[error("Cookie domain {domain} does not domain-match host {host}")]
    DomainRejected { domain: String, host: String },
    #[error("Cookie domain {domain} is a public suffix")]
    PublicSuffix { domain: String },
}

impl CookieError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        CookieError::InvalidUrl(reason.into())
    }

    pub fn domain_rejected(domain: impl Into<String>, host: impl Into<String>) -> Self {
        CookieError::DomainRejected {
            domain: domain.into(),
            host: host.into(),
        }
    }
}

/// Result type alias for cookie operations that can fail.
pub type CookieResult<T> = Result<T, CookieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CookieError::domain_rejected(".example.com", "other.com");
        assert_eq!(
            err.to_string(),
            "Cookie domain .example.com does not domain-match host other.com"
        );
        assert_eq!(
            CookieError::invalid_url("empty host").to_string(),
            "Invalid URL: empty host"
        );
    }
}
