//! Public Suffix List (PSL) validation for cookie domain security.
//!
//! Decides whether a response cookie's domain may be stored for the host
//! that sent it. Rejects cookies set on public suffixes like `.com` or
//! `.co.uk`, and domains the host does not belong to.
//!
//! Uses Mozilla's Public Suffix List via the `psl` crate.

use crate::cookies::error::{CookieError, CookieResult};
use crate::cookies::matching::is_ip_literal;
use psl::{List, Psl};

/// Check if a domain is a public suffix (e.g., "com", "co.uk").
/// Returns true if the domain itself is a listed public suffix.
pub fn is_public_suffix(domain: &str) -> bool {
    let domain_lower = domain.to_lowercase();
    let domain_bytes = domain_lower.as_bytes();

    match List.suffix(domain_bytes) {
        // Unlisted TLDs (e.g. "localhost") fall back to the implicit "*" rule.
        Some(suffix) => suffix.is_known() && suffix.as_bytes() == domain_bytes,
        None => false,
    }
}

/// Check whether `cookie_domain` may be stored for a response from `request_host`.
///
/// An empty domain is always acceptable; the caller turns it into a
/// host-only cookie. Otherwise one leading `.` is dropped, the rest must
/// be non-empty and not a public suffix, and the host must equal it or sit under it on
/// a label boundary. IP hosts only accept their own address.
pub fn check_cookie_domain(cookie_domain: &str, request_host: &str) -> CookieResult<()> {
    if cookie_domain.is_empty() {
        return Ok(());
    }

    let domain = cookie_domain
        .strip_prefix('.')
        .unwrap_or(cookie_domain)
        .to_lowercase();
    let host = request_host.to_lowercase();

    if domain.is_empty() {
        return Err(CookieError::domain_rejected(cookie_domain, request_host));
    }

    if is_ip_literal(&host) {
        return if host == domain {
            Ok(())
        } else {
            Err(CookieError::domain_rejected(cookie_domain, request_host))
        };
    }

    if is_public_suffix(&domain) {
        return Err(CookieError::PublicSuffix { domain });
    }

    if host == domain {
        return Ok(());
    }

    if host.len() > domain.len()
        && host.ends_with(domain.as_str())
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
    {
        return Ok(());
    }

    Err(CookieError::domain_rejected(cookie_domain, request_host))
}

/// Boolean form of [`check_cookie_domain`].
pub fn is_acceptable_cookie_domain(cookie_domain: &str, request_host: &str) -> bool {
    check_cookie_domain(cookie_domain, request_host).is_ok()
}
