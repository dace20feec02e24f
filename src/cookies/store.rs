//! The cookie store.
//!
//! Cookies live in a three-level map, domain → path → name, so a
//! (domain, path, name) triple holds at most one record. Retrieval sweeps
//! expired records first and then walks every domain and path key through
//! the RFC 6265 matchers.

use crate::base::clock::{Clock, SystemClock};
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::error::{CookieError, CookieResult};
use crate::cookies::matching::{domain_matches, path_matches};
use crate::cookies::psl::check_cookie_domain;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

/// Cookies under one (domain, path), keyed by name.
pub type PathCookies = BTreeMap<String, CanonicalCookie>;

/// Cookies under one domain, keyed by path.
pub type DomainCookies = BTreeMap<String, PathCookies>;

/// Owned copy of the whole store: domain → path → name → cookie.
pub type Snapshot = BTreeMap<String, DomainCookies>;

/// A store handle for clients that share one jar across tasks.
pub type SharedCookieStore = Arc<Mutex<CookieStore>>;

/// Something a cookie lookup can be made for: a host and a path.
pub trait CookieRequest {
    /// The request host, as the URI spells it.
    fn request_host(&self) -> Option<&str>;

    /// The request path; may be empty.
    fn request_path(&self) -> &str;
}

impl CookieRequest for url::Url {
    fn request_host(&self) -> Option<&str> {
        self.host_str()
    }

    fn request_path(&self) -> &str {
        self.path()
    }
}

impl CookieRequest for http::Uri {
    fn request_host(&self) -> Option<&str> {
        self.host()
    }

    fn request_path(&self) -> &str {
        self.path()
    }
}

impl<B> CookieRequest for http::Request<B> {
    fn request_host(&self) -> Option<&str> {
        self.uri().host()
    }

    fn request_path(&self) -> &str {
        self.uri().path()
    }
}

/// Configuration options for [`CookieStore`].
#[derive(Clone)]
pub struct CookieStoreConfig {
    /// Time source for the expiry sweep and `Max-Age` resolution.
    pub clock: Arc<dyn Clock>,
}

impl Default for CookieStoreConfig {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }
}

impl std::fmt::Debug for CookieStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieStoreConfig")
            .field("clock", &"<dyn Clock>")
            .finish()
    }
}

/// In-memory cookie jar for a single client session.
///
/// Not synchronised: use [`CookieStore::into_shared`] when several tasks
/// send requests through the same jar.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    cookies: Snapshot,
    config: CookieStoreConfig,
}

impl CookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CookieStoreConfig) -> Self {
        Self {
            cookies: Snapshot::new(),
            config,
        }
    }

    /// Insert a cookie, replacing any record with the same (domain, path, name).
    pub fn store(&mut self, cookie: CanonicalCookie) {
        let path = cookie.storage_path().to_string();
        tracing::debug!(
            domain = %cookie.domain,
            path = %path,
            name = %cookie.name,
            "storing cookie"
        );
        self.cookies
            .entry(cookie.domain.clone())
            .or_default()
            .entry(path)
            .or_default()
            .insert(cookie.name.clone(), cookie);
    }

    /// Store several cookies in order; later records win on key collisions.
    pub fn store_all<I>(&mut self, cookies: I)
    where
        I: IntoIterator<Item = CanonicalCookie>,
    {
        for cookie in cookies {
            self.store(cookie);
        }
    }

    /// Delete the record at the cookie's (domain, path, name), if any.
    pub fn remove(&mut self, cookie: &CanonicalCookie) {
        let Some(paths) = self.cookies.get_mut(&cookie.domain) else {
            return;
        };
        let path = cookie.storage_path();
        let Some(names) = paths.get_mut(path) else {
            return;
        };

        if names.remove(&cookie.name).is_some() {
            tracing::debug!(
                domain = %cookie.domain,
                path = %path,
                name = %cookie.name,
                "removed cookie"
            );
        }

        if names.is_empty() {
            paths.remove(path);
        }
        if paths.is_empty() {
            self.cookies.remove(&cookie.domain);
        }
    }

    /// Clear every stored cookie.
    pub fn remove_all(&mut self) {
        tracing::debug!(count = self.len(), "clearing cookie store");
        self.cookies.clear();
    }

    /// Copy of the full domain → path → name structure.
    ///
    /// Does not sweep: expired records stay visible until the next [`get`](Self::get).
    pub fn get_all(&self) -> Snapshot {
        self.cookies.clone()
    }

    /// All unexpired cookies that apply to `request`.
    ///
    /// Results come out in domain order, then path order, then name order.
    pub fn get<R: CookieRequest + ?Sized>(&mut self, request: &R) -> Vec<CanonicalCookie> {
        let now = self.config.clock.now();
        self.clear_expired(now);

        let path = match request.request_path() {
            "" => "/",
            p => p,
        };
        let domain = request.request_host().unwrap_or_default().to_lowercase();

        let matches: Vec<CanonicalCookie> = self
            .cookies
            .iter()
            .filter(|(cookie_domain, _)| domain_matches(&domain, cookie_domain))
            .flat_map(|(_, paths)| paths.iter())
            .filter(|(cookie_path, _)| path_matches(path, cookie_path))
            .flat_map(|(_, names)| names.values().cloned())
            .collect();

        tracing::trace!(
            domain = %domain,
            path = %path,
            count = matches.len(),
            "cookie lookup"
        );
        matches
    }

    /// Parse `url` and look up cookies for it.
    pub fn get_for_url_str(&mut self, url: &str) -> CookieResult<Vec<CanonicalCookie>> {
        let url = url::Url::parse(url).map_err(|e| CookieError::invalid_url(e.to_string()))?;
        Ok(self.get(&url))
    }

    /// Store a cookie received in a response to `request`.
    ///
    /// A cookie without a domain is pinned to the request host. A cookie
    /// with a domain is stored as a wildcard domain once the host is
    /// allowed to set it.
    pub fn store_response_cookie<R: CookieRequest + ?Sized>(
        &mut self,
        request: &R,
        mut cookie: CanonicalCookie,
    ) -> CookieResult<()> {
        let host = request
            .request_host()
            .filter(|h| !h.is_empty())
            .ok_or(CookieError::MissingHost)?
            .to_lowercase();

        if cookie.domain.is_empty() {
            cookie.domain = host;
        } else {
            if let Err(e) = check_cookie_domain(&cookie.domain, &host) {
                tracing::debug!(
                    domain = %cookie.domain,
                    host = %host,
                    name = %cookie.name,
                    error = %e,
                    "rejecting response cookie"
                );
                return Err(e);
            }
            let bare = cookie.domain.trim_start_matches('.').to_lowercase();
            cookie.domain = format!(".{}", bare);
        }

        self.store(cookie);
        Ok(())
    }

    /// Store a cookie the `cookie` crate parsed out of a `Set-Cookie` header.
    ///
    /// `Max-Age` is resolved against the store's clock.
    pub fn store_parsed_cookie<R: CookieRequest + ?Sized>(
        &mut self,
        request: &R,
        parsed: &cookie::Cookie<'_>,
    ) -> CookieResult<()> {
        let cookie = CanonicalCookie::from_parsed(parsed, self.config.clock.now());
        self.store_response_cookie(request, cookie)
    }

    /// Number of stored records, expired ones included.
    pub fn len(&self) -> usize {
        self.cookies
            .values()
            .flat_map(|paths| paths.values())
            .map(|names| names.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Wrap the store for use from several tasks.
    pub fn into_shared(self) -> SharedCookieStore {
        Arc::new(Mutex::new(self))
    }

    /// Drop every record that expired strictly before `now`.
    fn clear_expired(&mut self, now: OffsetDateTime) {
        let mut removed = 0usize;

        self.cookies.retain(|_, paths| {
            paths.retain(|_, names| {
                let before = names.len();
                names.retain(|_, cookie| !cookie.is_expired(now));
                removed += before - names.len();
                !names.is_empty()
            });
            !paths.is_empty()
        });

        if removed > 0 {
            tracing::debug!(removed, "swept expired cookies");
        }
    }
}
