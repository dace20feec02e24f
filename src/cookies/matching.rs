//! RFC 6265 domain and path matching.

use std::net::{IpAddr, Ipv6Addr};

/// Check whether a request host falls under a stored cookie domain.
///
/// Implements RFC 6265 §5.1.3. An empty cookie domain matches any host.
/// Only a `.`-prefixed (wildcard) domain can match a subdomain; anything
/// else needs exact equality. `request_domain` must already be lower-cased.
///
/// <http://tools.ietf.org/html/rfc6265#section-5.1.3>
pub fn domain_matches(request_domain: &str, cookie_domain: &str) -> bool {
    if cookie_domain.is_empty() {
        return true;
    }

    let canonical = cookie_domain.strip_prefix('.').unwrap_or(cookie_domain);
    if request_domain == canonical {
        return true;
    }

    if !cookie_domain.starts_with('.') {
        return false;
    }

    if is_ip_literal(request_domain) {
        return false;
    }

    // The wildcard keeps its leading dot, so a suffix match is also a
    // label-boundary match: "evilexample.com" does not end with ".example.com".
    request_domain.ends_with(cookie_domain)
}

/// Check whether a request path falls under a cookie path.
///
/// <http://tools.ietf.org/html/rfc6265#section-5.1.4>
pub fn path_matches(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }

    if request_path.starts_with(cookie_path) {
        if cookie_path.ends_with('/') {
            return true;
        }
        return request_path.as_bytes().get(cookie_path.len()) == Some(&b'/');
    }

    false
}

/// True for IPv4 and IPv6 literals, bracketed or not.
pub fn is_ip_literal(host: &str) -> bool {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return inner.parse::<Ipv6Addr>().is_ok();
    }
    host.parse::<IpAddr>().is_ok()
}
