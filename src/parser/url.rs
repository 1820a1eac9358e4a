//! URL / host decomposition.
//!
//! Splits a URL, bare host or host+path into subdomain, registrable domain
//! and path segments. Suffixes come from the ICANN section of the public
//! suffix list, so `bbc.co.uk` is never mistaken for a subdomain of `co.uk`
//! while privately registered suffixes such as `blogspot.com` behave like
//! ordinary domains.
//!
//! Every component is sliced out of the lower-cased input text; nothing is
//! percent-encoded, punycoded or dot-segment resolved.

use crate::utils::error::ParseError;
use psl::Type;
use url::{Host, Url};

/// Components of a decomposed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    /// Lower-cased input
    pub normalized: String,

    /// Everything left of the registrable domain (may be empty)
    pub subdomain: String,

    /// `second_level_domain + "." + public_suffix`
    pub registrable_domain: String,

    /// Path split on `/`; `[""]` when there is no path at all
    pub path: Vec<String>,
}

impl UrlComponents {
    /// First segment after the leading slash, if any
    pub fn first_path_segment(&self) -> Option<&str> {
        self.path
            .get(1)
            .map(String::as_str)
            .filter(|segment| !segment.is_empty())
    }
}

/// Decompose a URL, bare host, or host+path string
///
/// Inputs without a scheme are treated as `http://` URLs. A host that is
/// itself a suffix, has an unknown suffix, or is an IP address is its own
/// registrable domain.
///
/// # Errors
/// * `ParseError::InvalidUrl` - input cannot be parsed or has no host
///
/// # Example
/// ```
/// use lica_payload::parser::url::parse_url;
///
/// let parts = parse_url("sports.au.yahoo.com/something/other.html?things").unwrap();
/// assert_eq!(parts.subdomain, "sports.au");
/// assert_eq!(parts.registrable_domain, "yahoo.com");
/// assert_eq!(parts.first_path_segment(), Some("something"));
/// ```
pub fn parse_url(input: &str) -> Result<UrlComponents, ParseError> {
    let normalized = input.trim().to_lowercase();

    let after_scheme = match normalized.split_once("://") {
        Some((_, rest)) => rest,
        None => normalized.as_str(),
    };

    // Validation and IP detection only; components come from the raw text
    let url = Url::parse(&format!("http://{}", after_scheme)).map_err(|e| ParseError::InvalidUrl {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    let authority_end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    let host = host_text(&after_scheme[..authority_end]);

    if host.is_empty() {
        return Err(ParseError::InvalidUrl {
            input: input.to_string(),
            reason: "missing host".to_string(),
        });
    }

    let (subdomain, registrable_domain) = match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => (String::new(), host.to_string()),
        _ => split_host(host),
    };

    Ok(UrlComponents {
        path: path_segments(&after_scheme[authority_end..]),
        subdomain,
        registrable_domain,
        normalized,
    })
}

/// Host part of an authority: no userinfo, no port, no trailing dot
fn host_text(authority: &str) -> &str {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    let host = if host_port.starts_with('[') {
        host_port
            .find(']')
            .map_or(host_port, |end| &host_port[..=end])
    } else {
        host_port
            .split_once(':')
            .map_or(host_port, |(host, _)| host)
    };

    host.trim_end_matches('.')
}

/// Split a host into `(subdomain, registrable_domain)`
fn split_host(host: &str) -> (String, String) {
    let labels: Vec<&str> = host.split('.').collect();

    // Longest ICANN suffix wins; without one the last label stands in for it
    let domain_start = match (0..labels.len()).find(|&i| is_icann_suffix(&labels[i..].join("."))) {
        Some(0) => 0,
        Some(suffix_start) => suffix_start - 1,
        None => labels.len() - 1,
    };

    (
        labels[..domain_start].join("."),
        labels[domain_start..].join("."),
    )
}

fn is_icann_suffix(candidate: &str) -> bool {
    psl::suffix(candidate.as_bytes())
        .is_some_and(|suffix| suffix.as_bytes() == candidate.as_bytes() && suffix.typ() == Some(Type::Icann))
}

/// Split the text after the host, keeping the `[""]` shape when there is no path
fn path_segments(rest: &str) -> Vec<String> {
    let path = rest
        .find(['?', '#'])
        .map_or(rest, |end| &rest[..end]);

    if path.is_empty() {
        return vec![String::new()];
    }

    path.split('/').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_part_suffix() {
        let parts = parse_url("www.bbc.co.uk").unwrap();
        assert_eq!(parts.registrable_domain, "bbc.co.uk");
        assert_eq!(parts.subdomain, "www");
    }

    #[test]
    fn test_nested_subdomain() {
        let parts = parse_url("au.movies.yahoo.com").unwrap();
        assert_eq!(parts.registrable_domain, "yahoo.com");
        assert_eq!(parts.subdomain, "au.movies");
    }

    #[test]
    fn test_bare_domain_has_no_path() {
        let parts = parse_url("yahoo.com").unwrap();
        assert_eq!(parts.subdomain, "");
        assert_eq!(parts.path, vec![String::new()]);
        assert_eq!(parts.first_path_segment(), None);

        let query_only = parse_url("yahoo.com?q=1").unwrap();
        assert_eq!(query_only.path, vec![String::new()]);
    }

    #[test]
    fn test_full_url_is_lowercased() {
        let parts = parse_url("HTTP://Sports.Yahoo.CO.UK/Football/scores.html?x=1#top").unwrap();
        assert_eq!(parts.normalized, "http://sports.yahoo.co.uk/football/scores.html?x=1#top");
        assert_eq!(parts.subdomain, "sports");
        assert_eq!(parts.registrable_domain, "yahoo.co.uk");
        assert_eq!(parts.path, vec!["", "football", "scores.html"]);
    }

    #[test]
    fn test_trailing_slash_has_empty_first_segment() {
        let parts = parse_url("espn.com/").unwrap();
        assert_eq!(parts.path, vec!["", ""]);
        assert_eq!(parts.first_path_segment(), None);
    }

    #[test]
    fn test_private_suffixes_are_ordinary_domains() {
        let parts = parse_url("news.blogspot.com").unwrap();
        assert_eq!(parts.registrable_domain, "blogspot.com");
        assert_eq!(parts.subdomain, "news");

        let parts = parse_url("github.io/music").unwrap();
        assert_eq!(parts.registrable_domain, "github.io");
        assert_eq!(parts.subdomain, "");
        assert_eq!(parts.first_path_segment(), Some("music"));
    }

    #[test]
    fn test_bare_suffix_and_unknown_hosts_are_their_own_domain() {
        let parts = parse_url("co.uk").unwrap();
        assert_eq!(parts.registrable_domain, "co.uk");
        assert_eq!(parts.subdomain, "");

        let parts = parse_url("localhost").unwrap();
        assert_eq!(parts.registrable_domain, "localhost");
        assert_eq!(parts.subdomain, "");
    }

    #[test]
    fn test_ip_host() {
        let parts = parse_url("192.168.1.1/admin").unwrap();
        assert_eq!(parts.registrable_domain, "192.168.1.1");
        assert_eq!(parts.subdomain, "");
        assert_eq!(parts.first_path_segment(), Some("admin"));
    }

    #[test]
    fn test_port_and_userinfo_are_not_part_of_host() {
        let parts = parse_url("http://user@www.espn.com:8080/nfl").unwrap();
        assert_eq!(parts.subdomain, "www");
        assert_eq!(parts.registrable_domain, "espn.com");
        assert_eq!(parts.first_path_segment(), Some("nfl"));
    }

    #[test]
    fn test_path_keeps_raw_text() {
        let parts = parse_url("bücher.de/Café").unwrap();
        assert_eq!(parts.registrable_domain, "bücher.de");
        assert_eq!(parts.path, vec!["", "café"]);

        let parts = parse_url("example.com/my page/x").unwrap();
        assert_eq!(parts.path, vec!["", "my page", "x"]);

        let parts = parse_url("example.com/a/../b").unwrap();
        assert_eq!(parts.path, vec!["", "a", "..", "b"]);
        assert_eq!(parts.first_path_segment(), Some("a"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(parse_url("").is_err());
    }
}
