//! Cookie storage and matching.
//!
//! This module provides the in-memory cookie jar an HTTP client consults
//! on every request:
//!
//! - **Records**: [`CanonicalCookie`](canonicalcookie::CanonicalCookie), one stored cookie
//! - **Matching**: RFC 6265 domain and path rules in [`matching`]
//! - **Acceptance**: Public Suffix List checks for response cookies in [`psl`]
//! - **Storage**: [`CookieStore`](store::CookieStore), keyed domain → path → name
//!
//! # Storing and retrieving
//!
//! ```rust
//! use cookiejar::cookies::canonicalcookie::CanonicalCookie;
//! use cookiejar::cookies::store::CookieStore;
//! use url::Url;
//!
//! let mut jar = CookieStore::new();
//! let origin = Url::parse("https://www.example.com/login").unwrap();
//!
//! // A response cookie with Domain=example.com
//! jar.store_response_cookie(&origin, CanonicalCookie::new("sid", "abc").with_domain("example.com"))?;
//!
//! let api = Url::parse("https://api.example.com/v1").unwrap();
//! assert_eq!(jar.get(&api).len(), 1);
//! # Ok::<(), cookiejar::cookies::error::CookieError>(())
//! ```
//!
//! # Lifecycle
//!
//! | Operation | Sweeps expired | Mutates |
//! |-----------|----------------|---------|
//! | `store` / `store_all` | no | yes |
//! | `remove` / `remove_all` | no | yes |
//! | `get_all` | no | no |
//! | `get` | yes | only via the sweep |
//!
//! # References
//!
//! - Domain matching: RFC 6265 §5.1.3
//! - Path matching: RFC 6265 §5.1.4

pub mod canonicalcookie;
pub mod error;
pub mod matching;
pub mod psl;
pub mod store;
