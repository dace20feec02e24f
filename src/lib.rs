//! # cookiejar
//!
//! An in-memory cookie store for HTTP clients.
//!
//! `cookiejar` keeps the cookies a client has received, scoped by domain,
//! path and name, and hands back the ones that apply to an outgoing request.
//! Expired cookies are swept lazily on every lookup.
//!
//! ## Features
//!
//! - **Storage**: Nested domain → path → name map with last-write-wins replacement
//! - **Matching**: RFC 6265 §5.1.3 domain matching and §5.1.4 path matching
//! - **Expiry**: Full sweep before each retrieval, driven by an injectable [`Clock`](base::clock::Clock)
//! - **Acceptance**: Public Suffix List checks before a response cookie is stored
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiejar::cookies::canonicalcookie::CanonicalCookie;
//! use cookiejar::cookies::store::CookieStore;
//! use url::Url;
//!
//! let mut jar = CookieStore::new();
//! jar.store(
//!     CanonicalCookie::new("foo", "bar")
//!         .with_domain(".example.com")
//!         .with_path("/"),
//! );
//!
//! let url = Url::parse("https://www.example.com/page").unwrap();
//! let cookies = jar.get(&url);
//! assert_eq!(cookies.len(), 1);
//! assert_eq!(cookies[0].name, "foo");
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Clock abstraction shared by the store
//! - [`cookies`] - Cookie records, matching rules, and the store itself
//!
//! ## Concurrency
//!
//! [`CookieStore`](cookies::store::CookieStore) is not synchronised. Clients
//! that dispatch requests from several tasks wrap it with
//! [`CookieStore::into_shared`](cookies::store::CookieStore::into_shared).

pub mod base;
pub mod cookies;
