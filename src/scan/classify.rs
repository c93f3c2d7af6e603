//! Classification of a trimmed word and construction of its link target.
//!
//! Three shapes are recognised, tried in order:
//! - `scheme://authority/rest` with an alphabetic scheme
//! - a bare host (`www.`-prefixed, allow-listed TLD, IPv4, `[IPv6]`) with an
//!   optional tail, linked as `http://`
//! - `local@domain`, linked as `mailto:`

use std::fmt;

use super::TokenKind;
use crate::{idn, limits, quote, tld};

/// Why a word was not turned into a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing URL- or email-shaped.
    NoCandidate,
    /// `scheme://` with nothing usable after it.
    EmptyAuthority,
    /// Host starts with a dot.
    LeadingDot,
    /// Host holds a character no URL host may contain.
    BadHost,
    /// `scheme://@host`.
    EmptyUserinfo,
    /// Character after `scheme://` cannot start a host.
    BadAuthority,
    /// Scheme that can run script when followed.
    UnsafeScheme,
    /// Dotted name whose last label is not allow-listed.
    UnknownTld,
    /// Email local part is empty or holds a non-atext character.
    BadLocalPart,
    /// Email domain has fewer than two labels or an invalid label.
    BadDomain,
    /// Host label rejected by IDNA processing.
    IdnFailure,
    /// Word longer than the scan limit.
    TooLong,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::NoCandidate => "not a link candidate",
            Rejection::EmptyAuthority => "empty authority",
            Rejection::LeadingDot => "host starts with a dot",
            Rejection::BadHost => "host contains a forbidden character",
            Rejection::EmptyUserinfo => "empty userinfo before '@'",
            Rejection::BadAuthority => "authority does not start with a host",
            Rejection::UnsafeScheme => "scheme is not allowed",
            Rejection::UnknownTld => "unknown top-level label",
            Rejection::BadLocalPart => "invalid email local part",
            Rejection::BadDomain => "invalid email domain",
            Rejection::IdnFailure => "host is not IDNA-encodable",
            Rejection::TooLong => "word exceeds scan limit",
        })
    }
}

/// A successfully classified word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: TokenKind,
    pub href: String,
    pub scheme_present: bool,
}

const UNSAFE_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// Classify a trimmed word. `middle` is already entity-decoded.
pub fn classify(middle: &str) -> Result<Link, Rejection> {
    if let Some(sep) = middle.find("://") {
        match scheme_url(middle, sep) {
            Err(Rejection::NoCandidate) => {}
            other => return other,
        }
    }
    let bare = match bare_domain(middle) {
        Ok(link) => return Ok(link),
        Err(rejection) => rejection,
    };
    match email(middle) {
        Err(Rejection::NoCandidate) => Err(bare),
        other => other,
    }
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn scheme_url(middle: &str, sep: usize) -> Result<Link, Rejection> {
    let scheme = &middle[..sep];
    if scheme.len() < 2
        || scheme.len() > limits::MAX_SCHEME_LEN
        || !scheme.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return Err(Rejection::NoCandidate);
    }
    if UNSAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)) {
        return Err(Rejection::UnsafeScheme);
    }

    let rest = &middle[sep + 3..];
    let mut chars = rest.chars();
    match chars.next() {
        None | Some('/' | '?' | '#') => return Err(Rejection::EmptyAuthority),
        Some('.') => return Err(Rejection::LeadingDot),
        Some('@') => return Err(Rejection::EmptyUserinfo),
        Some('[') if chars.next().is_some_and(|c| c.is_ascii_hexdigit() || c == ':') => {}
        Some(c) if is_word_char(c) => {}
        Some(_) => return Err(Rejection::BadAuthority),
    }

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };
    let (host, port) = split_port(host_port);
    if host.is_empty() {
        return Err(Rejection::EmptyAuthority);
    }
    if host.starts_with('.') {
        return Err(Rejection::LeadingDot);
    }
    if host.starts_with('[') && !is_ipv6_literal(host) {
        return Err(Rejection::BadAuthority);
    }

    let mut href = String::with_capacity(middle.len() + 16);
    href.extend(scheme.chars().map(|c| c.to_ascii_lowercase()));
    href.push_str("://");
    if let Some(userinfo) = userinfo {
        quote::quote_into(&mut href, userinfo, quote::Component::Path);
        href.push('@');
    }
    push_host(&mut href, host)?;
    if let Some(port) = port {
        href.push(':');
        href.push_str(port);
    }
    quote::quote_tail_into(&mut href, &rest[authority_end..]);

    Ok(Link {
        kind: TokenKind::Url,
        href,
        scheme_present: true,
    })
}

fn bare_domain(middle: &str) -> Result<Link, Rejection> {
    let host_end = middle.find(['/', '?', '#']).unwrap_or(middle.len());
    let authority = &middle[..host_end];
    if authority.is_empty() || authority.contains('@') {
        return Err(Rejection::NoCandidate);
    }
    let (host, port) = split_port(authority);
    if port.is_some_and(str::is_empty) {
        return Err(Rejection::NoCandidate);
    }

    if !is_ipv6_literal(host) && !is_ipv4(host) {
        if !host.chars().next().is_some_and(is_word_char) || host.contains(':') {
            return Err(Rejection::NoCandidate);
        }
        let (labels, last) = host
            .split('.')
            .fold((0usize, ""), |(n, _), label| (n + 1, label));
        if labels < 2 || host.split('.').any(str::is_empty) {
            return Err(Rejection::NoCandidate);
        }
        let www = host.len() > 4 && host[..4].eq_ignore_ascii_case("www.");
        if !www && !tld::is_known_tld(last) {
            return Err(Rejection::UnknownTld);
        }
    }

    let mut href = String::with_capacity(middle.len() + 16);
    href.push_str("http://");
    push_host(&mut href, host)?;
    if let Some(port) = port {
        href.push(':');
        href.push_str(port);
    }
    quote::quote_tail_into(&mut href, &middle[host_end..]);

    Ok(Link {
        kind: TokenKind::Url,
        href,
        scheme_present: false,
    })
}

fn email(middle: &str) -> Result<Link, Rejection> {
    if middle.contains(':') {
        return Err(Rejection::NoCandidate);
    }
    let Some(at) = middle.rfind('@') else {
        return Err(Rejection::NoCandidate);
    };
    let (local, domain) = (&middle[..at], &middle[at + 1..]);

    if local.is_empty() || !local.chars().all(is_local_char) {
        return Err(Rejection::BadLocalPart);
    }
    let mut labels = 0;
    for label in domain.split('.') {
        if label.is_empty() || !label.chars().all(is_domain_char) {
            return Err(Rejection::BadDomain);
        }
        labels += 1;
    }
    if labels < 2 {
        return Err(Rejection::BadDomain);
    }

    let mut href = String::with_capacity(middle.len() + 16);
    href.push_str("mailto:");
    href.push_str(local);
    href.push('@');
    push_host(&mut href, domain)?;

    Ok(Link {
        kind: TokenKind::Email,
        href,
        scheme_present: false,
    })
}

fn push_host(href: &mut String, host: &str) -> Result<(), Rejection> {
    if is_ipv6_literal(host) {
        href.push_str(host);
        return Ok(());
    }
    if host.contains(is_forbidden_host_char) {
        return Err(Rejection::BadHost);
    }
    idn::encode_host_into(href, host).map_err(|_| Rejection::IdnFailure)
}

/// Split `host:port` when the part after the last colon is all digits.
///
/// An empty port (`host:`) still splits. A bracketed IPv6 host only splits
/// after its closing bracket.
fn split_port(host_port: &str) -> (&str, Option<&str>) {
    let search_from = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(close) => close + 1,
            None => return (host_port, None),
        }
    } else {
        0
    };
    match host_port[search_from..].rfind(':') {
        Some(rel) => {
            let colon = search_from + rel;
            let port = &host_port[colon + 1..];
            if port.bytes().all(|b| b.is_ascii_digit()) {
                (&host_port[..colon], Some(port))
            } else {
                (host_port, None)
            }
        }
        None => (host_port, None),
    }
}

fn is_ipv4(host: &str) -> bool {
    let mut octets = 0;
    for part in host.split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if part.parse::<u16>().map_or(true, |n| n > 255) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

fn is_ipv6_literal(host: &str) -> bool {
    let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) else {
        return false;
    };
    inner.contains(':')
        && inner
            .bytes()
            .all(|b| b.is_ascii_hexdigit() || b == b':' || b == b'.')
}

#[inline]
fn is_forbidden_host_char(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '<' | '>' | '`' | '\\' | '^' | '{' | '}' | '|')
}

/// RFC 5322 atext plus dot; non-ASCII allowed as in RFC 6531.
#[inline]
fn is_local_char(ch: char) -> bool {
    ch.is_alphanumeric()
        || matches!(
            ch,
            '.' | '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '/' | '=' | '?' | '^'
                | '_' | '`' | '{' | '|' | '}' | '~'
        )
}

#[inline]
fn is_domain_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii()
}
