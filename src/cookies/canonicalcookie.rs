use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

/// A cookie as held by the store.
///
/// Attribute parsing happens before a cookie reaches this type; the store
/// treats every record as already valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    /// Empty for host-only; a leading `.` marks a wildcard domain.
    pub domain: String,
    /// Empty is stored under `/`.
    pub path: String,
    /// `None` for session cookies, which never expire on their own.
    pub expiration_time: Option<OffsetDateTime>,
}

impl CanonicalCookie {
    /// Create a session cookie with no domain and no path.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: String::new(),
            path: String::new(),
            expiration_time: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_expiration(mut self, expiration_time: OffsetDateTime) -> Self {
        self.expiration_time = Some(expiration_time);
        self
    }

    /// Build a record from a cookie the `cookie` crate has already parsed.
    ///
    /// A `Domain` attribute becomes a wildcard domain. `Max-Age` wins over
    /// `Expires` and is resolved against `now`.
    pub fn from_parsed(parsed: &cookie::Cookie<'_>, now: OffsetDateTime) -> Self {
        let domain = parsed
            .domain()
            .map(|d| d.trim_start_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .map(|d| format!(".{}", d))
            .unwrap_or_default();

        let expiration_time = match parsed.max_age() {
            // Max-Age <= 0 means "expire immediately" (RFC 6265 §5.2.2).
            // Out-of-range Max-Age clamps to the latest representable instant.
            Some(max_age) if max_age.is_positive() => Some(
                now.checked_add(max_age)
                    .unwrap_or_else(|| PrimitiveDateTime::MAX.assume_utc()),
            ),
            Some(_) => Some(OffsetDateTime::UNIX_EPOCH),
            None => parsed.expires_datetime(),
        };

        Self {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path: parsed.path().unwrap_or_default().to_string(),
            expiration_time,
        }
    }

    /// True iff an expiry is set and lies strictly before `current_time`.
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expiration_time {
            Some(expiry) => expiry < current_time,
            None => false,
        }
    }

    /// The path key this cookie is stored under.
    pub fn storage_path(&self) -> &str {
        if self.path.is_empty() {
            "/"
        } else {
            &self.path
        }
    }
}
