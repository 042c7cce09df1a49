//! URL decomposition.
//!
//! This module breaks a raw URL string into the components the feature rules
//! inspect: scheme, network location, path, registrable domain, subdomain,
//! explicit port, and the dot count of the full string.
//!
//! Parsing is deliberately lenient. The rules must be evaluable for any
//! input, so missing or unrecognizable components become empty/default
//! fields instead of errors. The single hard failure is an explicit port
//! component that is not a valid port number; callers convert that into the
//! full fallback vector rather than surfacing it.

use psl::{List, Psl};

use crate::error_handling::ParseError;

/// Components of a URL, derived once per extraction call.
///
/// All fields are derivable from the raw string without network access.
/// `netloc` is kept verbatim (it may embed credentials and a port) because
/// two rules compare it textually against the raw URL; `host` is the
/// lower-cased host name with credentials and port stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// The raw URL string as given.
    pub raw: String,
    /// Lower-cased scheme, or empty if the URL has none.
    pub scheme: String,
    /// Verbatim authority text between `//` and the path, or empty.
    pub netloc: String,
    /// Path component (query and fragment excluded).
    pub path: String,
    /// Lower-cased host with credentials and port stripped, or empty.
    pub host: String,
    /// Registrable domain label directly below the public suffix
    /// (`example` for `sub.example.co.uk`), or empty.
    pub registrable_domain: String,
    /// Subdomain labels above the registrable domain, or empty.
    pub subdomain: String,
    /// Explicit port, if one is present in the URL. Absence means the
    /// protocol default applies, never port 0.
    pub port: Option<u16>,
    /// Number of `.` characters in the full URL string.
    pub dot_count: usize,
}

impl ParsedUrl {
    /// Decomposes a URL string.
    ///
    /// # Arguments
    ///
    /// * `list` - The Public Suffix List instance
    /// * `url` - The raw URL string
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPort`] if the URL carries an explicit
    /// port component that is not a valid decimal port number. Every other
    /// malformation degrades to empty/default fields.
    pub fn parse(list: &List, url: &str) -> Result<ParsedUrl, ParseError> {
        let (scheme, rest) = split_scheme(url);
        let (netloc, path) = split_netloc(rest);

        // `url::Url` is authoritative for host and port where it can parse
        // the input at all; the textual split covers what it rejects (e.g.
        // scheme-less input). An invalid explicit port is a hard failure on
        // both routes.
        let (host, port) = match url::Url::parse(url) {
            Ok(parsed) => (
                parsed
                    .host_str()
                    .unwrap_or_default()
                    .trim_start_matches('[')
                    .trim_end_matches(']')
                    .to_string(),
                parsed.port(),
            ),
            Err(url::ParseError::InvalidPort) => {
                return Err(ParseError::InvalidPort(url.to_string()));
            }
            Err(_) => {
                let (host, port) = split_host_port(netloc, url)?;
                (host.to_string(), port)
            }
        };
        let host = host.to_lowercase();
        let (subdomain, registrable_domain) = split_domain(list, &host);

        Ok(ParsedUrl {
            raw: url.to_string(),
            scheme: scheme.to_lowercase(),
            netloc: netloc.to_string(),
            path: path.to_string(),
            host,
            registrable_domain,
            subdomain,
            port,
            dot_count: url.matches('.').count(),
        })
    }
}

/// Splits off a leading `scheme:` if present, returning `(scheme, rest)`.
///
/// A scheme is only recognized when the text before the first `:` starts
/// with an ASCII letter and continues with letters, digits, `+`, `-` or
/// `.`. Otherwise the whole input is treated as scheme-less.
fn split_scheme(url: &str) -> (&str, &str) {
    if let Some(colon) = url.find(':') {
        let candidate = &url[..colon];
        let mut chars = candidate.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            }
            _ => false,
        };
        if valid {
            return (candidate, &url[colon + 1..]);
        }
    }
    ("", url)
}

/// Splits the remainder after the scheme into `(netloc, path)`.
///
/// The network location only exists when the remainder starts with `//`;
/// it runs until the first `/`, `?` or `#`. The path excludes query and
/// fragment.
fn split_netloc(rest: &str) -> (&str, &str) {
    let (netloc, after) = match rest.strip_prefix("//") {
        Some(tail) => match tail.find(['/', '?', '#']) {
            Some(end) => (&tail[..end], &tail[end..]),
            None => (tail, ""),
        },
        None => ("", rest),
    };
    let path = match after.find(['?', '#']) {
        Some(end) => &after[..end],
        None => after,
    };
    (netloc, path)
}

/// Extracts `(host, explicit port)` from a verbatim netloc.
///
/// Credentials before the last `@` are stripped. Bracketed IPv6 hosts keep
/// their brackets out of the host text. A trailing `:` with nothing after it
/// means no explicit port; anything else after the final `:` must parse as
/// a port number or the whole URL is rejected.
fn split_host_port<'a>(netloc: &'a str, url: &str) -> Result<(&'a str, Option<u16>), ParseError> {
    let hostinfo = match netloc.rfind('@') {
        Some(at) => &netloc[at + 1..],
        None => netloc,
    };

    if let Some(stripped) = hostinfo.strip_prefix('[') {
        // Bracketed IPv6 literal, optionally followed by `:port`.
        return match stripped.find(']') {
            Some(end) => {
                let host = &stripped[..end];
                let tail = &stripped[end + 1..];
                match tail.strip_prefix(':') {
                    Some("") | None => Ok((host, None)),
                    Some(port_text) => parse_port(port_text, url).map(|p| (host, Some(p))),
                }
            }
            None => Ok((stripped, None)),
        };
    }

    match hostinfo.rfind(':') {
        Some(colon) => {
            let host = &hostinfo[..colon];
            let port_text = &hostinfo[colon + 1..];
            if port_text.is_empty() {
                Ok((host, None))
            } else {
                parse_port(port_text, url).map(|p| (host, Some(p)))
            }
        }
        None => Ok((hostinfo, None)),
    }
}

fn parse_port(text: &str, url: &str) -> Result<u16, ParseError> {
    text.parse::<u16>()
        .map_err(|_| ParseError::InvalidPort(url.to_string()))
}

/// Splits a host into `(subdomain, registrable domain label)`.
///
/// Uses the Public Suffix List so multi-part suffixes resolve correctly
/// (`sub.example.co.uk` -> subdomain `sub`, label `example`). IP hosts have
/// no registrable structure and are carried whole in the label position.
/// Single-label hosts the PSL cannot place keep their one label.
fn split_domain(list: &List, host: &str) -> (String, String) {
    if host.is_empty() {
        return (String::new(), String::new());
    }
    if host.parse::<std::net::Ipv4Addr>().is_ok() || host.parse::<std::net::Ipv6Addr>().is_ok() {
        return (String::new(), host.to_string());
    }

    if let Some(domain) = list.domain(host.as_bytes()) {
        let full = String::from_utf8_lossy(domain.as_bytes()).to_string();
        let suffix = String::from_utf8_lossy(domain.suffix().as_bytes()).to_string();
        let label = match full.strip_suffix(&format!(".{suffix}")) {
            Some(label) if !suffix.is_empty() => label.to_string(),
            _ => full.clone(),
        };
        let subdomain = host
            .strip_suffix(&full)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or("")
            .to_string();
        return (subdomain, label);
    }

    // No registrable structure (e.g. a bare single-label host): the last
    // label stands in for the registrable domain.
    match host.rsplit_once('.') {
        Some((before, last)) => (before.to_string(), last.to_string()),
        None => (String::new(), host.to_string()),
    }
}
