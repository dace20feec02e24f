use cookiejar::base::clock::FixedClock;
use cookiejar::cookies::canonicalcookie::CanonicalCookie;
use cookiejar::cookies::error::CookieError;
use cookiejar::cookies::store::{CookieStore, CookieStoreConfig};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use url::Url;

fn foo_bar(domain: &str) -> CanonicalCookie {
    CanonicalCookie::new("foo", "bar").with_domain(domain)
}

#[test]
fn test_end_to_end_wildcard() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar(".example.com").with_path("/"));

    let cookies = jar.get(&Url::parse("https://www.example.com/page").unwrap());
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name, "foo");
    assert_eq!(cookies[0].value, "bar");

    let cookies = jar.get(&Url::parse("https://other.com/").unwrap());
    assert!(cookies.is_empty());
}

#[test]
fn test_cookie_accepting() {
    // (cookie domain, request host, accepted)
    let cases = [
        (".foo.bar.example.com", "foo.bar", false),
        (".example.com", "example.com", true),
        (".example.com", "www.example.com", true),
        ("example.com", "example.com", true),
        ("example.com", "www.example.com", true),
        ("example.com", "anotherexample.com", false),
        ("anotherexample.com", "example.com", false),
        ("com", "anotherexample.com", false),
        (".com", "anotherexample.com", false),
        ("", "example.com", true),
    ];

    for (domain, host, accept) in cases {
        let mut jar = CookieStore::new();
        let request = Url::parse(&format!("http://{}/", host)).unwrap();
        let result = jar.store_response_cookie(&request, foo_bar(domain));

        assert_eq!(result.is_ok(), accept, "domain={domain:?} host={host:?}");
        if accept {
            assert_eq!(jar.get_all().len(), 1, "domain={domain:?} host={host:?}");
            // An accepted cookie is sent back to the host that set it.
            assert_eq!(jar.get(&request).len(), 1, "domain={domain:?} host={host:?}");
        } else {
            assert!(jar.get_all().is_empty(), "domain={domain:?} host={host:?}");
        }
    }
}

#[test]
fn test_rejection_reasons() {
    let mut jar = CookieStore::new();
    let request = Url::parse("http://anotherexample.com/").unwrap();

    assert_eq!(
        jar.store_response_cookie(&request, foo_bar("com")),
        Err(CookieError::PublicSuffix {
            domain: "com".to_string()
        })
    );
    assert!(matches!(
        jar.store_response_cookie(&request, foo_bar("example.com")),
        Err(CookieError::DomainRejected { .. })
    ));
}

#[test]
fn test_empty_domain_matches_any_host() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar(""));

    for host in ["https://example.com/", "https://a.b.c/", "http://127.0.0.1/"] {
        assert_eq!(jar.get(&Url::parse(host).unwrap()).len(), 1, "{host}");
    }
}

#[test]
fn test_exact_domain_does_not_match_subdomain() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar("example.com"));

    assert_eq!(jar.get(&Url::parse("https://example.com/").unwrap()).len(), 1);
    assert!(jar
        .get(&Url::parse("https://www.example.com/").unwrap())
        .is_empty());
}

#[test]
fn test_wildcard_is_suffix_not_substring() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar(".example.com"));

    assert!(jar
        .get(&Url::parse("https://evilexample.com/").unwrap())
        .is_empty());
}

#[test]
fn test_ip_hosts_never_wildcard_match() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar(".0.0.1"));
    jar.store(CanonicalCookie::new("exact", "v").with_domain("127.0.0.1"));

    let cookies = jar.get(&Url::parse("http://127.0.0.1/").unwrap());
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name, "exact");
}

#[test]
fn test_path_matching() {
    let mut jar = CookieStore::new();
    jar.store_all([
        CanonicalCookie::new("root", "v").with_domain("example.com").with_path("/"),
        CanonicalCookie::new("foo", "v").with_domain("example.com").with_path("/foo"),
        CanonicalCookie::new("foobar", "v")
            .with_domain("example.com")
            .with_path("/foobar"),
    ]);

    let uri: http::Uri = "https://example.com/foo/bar".parse().unwrap();
    let mut names: Vec<String> = jar.get(&uri).into_iter().map(|c| c.name).collect();
    names.sort();
    assert_eq!(names, vec!["foo", "root"]);
}

#[test]
fn test_expired_cookie_swept_by_get_only() {
    let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let clock = Arc::new(FixedClock::new(now));
    let mut jar = CookieStore::with_config(CookieStoreConfig {
        clock: clock.clone(),
    });

    jar.store(foo_bar("example.com").with_expiration(now - Duration::hours(1)));
    jar.store(CanonicalCookie::new("keep", "v").with_domain("example.com"));

    // getAll and store do not sweep.
    assert_eq!(jar.len(), 2);
    assert!(jar.get_all()["example.com"]["/"].contains_key("foo"));

    let cookies = jar.get(&Url::parse("https://example.com/").unwrap());
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name, "keep");
    assert!(!jar.get_all()["example.com"]["/"].contains_key("foo"));
}

#[test]
fn test_replacement_and_removal() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar(".example.com"));
    jar.store(CanonicalCookie::new("foo", "baz").with_domain(".example.com"));

    let all = jar.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[".example.com"]["/"]["foo"].value, "baz");

    jar.remove(&CanonicalCookie::new("missing", "").with_domain(".example.com"));
    assert_eq!(jar.len(), 1);

    jar.remove(&foo_bar(".example.com"));
    assert!(jar.is_empty());

    jar.store_all([foo_bar("a.com"), foo_bar("b.com"), foo_bar(".c.com")]);
    jar.remove_all();
    assert!(jar.get_all().is_empty());
}

#[test]
fn test_snapshot_is_detached() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar("example.com"));

    let mut snapshot = jar.get_all();
    snapshot.clear();
    assert_eq!(jar.len(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let mut jar = CookieStore::new();
    jar.store(foo_bar(".example.com").with_path("/app"));

    let json = serde_json::to_value(jar.get_all()).unwrap();
    assert_eq!(json[".example.com"]["/app"]["foo"]["value"], "bar");
}
