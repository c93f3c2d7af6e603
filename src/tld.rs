//! Top-level labels accepted for scheme-less domains.
//!
//! `example.org` is linked, `some.organization` is not. Country codes that
//! double as common file extensions (`.md`, `.rs`, `.py`, `.sh`, `.pl`, ...)
//! are left out so `README.md` stays text.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

const GENERIC: &[&str] = &[
    "com", "edu", "gov", "int", "mil", "net", "org", "aero", "app", "arpa", "asia", "biz", "blog",
    "cloud", "coop", "dev", "info", "io", "jobs", "mobi", "museum", "name", "news", "online",
    "page", "pro", "shop", "site", "store", "tech", "tel", "travel", "xyz",
];

const COUNTRY: &[&str] = &[
    "ae", "ar", "at", "au", "be", "bg", "br", "by", "ca", "ch", "cl", "cn", "cz", "de", "dk", "ee",
    "es", "eu", "fi", "fr", "gr", "hk", "hr", "hu", "ie", "il", "in", "ir", "is", "it", "jp", "kr",
    "kz", "lt", "lu", "lv", "mx", "my", "nl", "no", "nz", "ph", "pt", "ro", "ru", "se", "sg", "si",
    "sk", "su", "th", "tr", "tv", "tw", "ua", "uk", "us", "vn", "ws", "za",
];

static TLDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| GENERIC.iter().chain(COUNTRY).copied().collect());

/// Is `label` an accepted top-level label? Case-insensitive.
pub fn is_known_tld(label: &str) -> bool {
    // Longest entry is "museum"/"travel"/"online".
    if label.is_empty() || label.len() > 8 || !label.is_ascii() {
        return false;
    }
    let mut buf = [0u8; 8];
    let lower = &mut buf[..label.len()];
    lower.copy_from_slice(label.as_bytes());
    lower.make_ascii_lowercase();
    match std::str::from_utf8(lower) {
        Ok(lower) => TLDS.contains(lower),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_labels() {
        for tld in ["com", "edu", "gov", "int", "mil", "net", "org"] {
            assert!(is_known_tld(tld), "{tld}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_known_tld("COM"));
        assert!(is_known_tld("Org"));
    }

    #[test]
    fn test_rejected_labels() {
        assert!(!is_known_tld("organization"));
        assert!(!is_known_tld("yy"));
        assert!(!is_known_tld("md"));
        assert!(!is_known_tld("rs"));
        assert!(!is_known_tld(""));
        assert!(!is_known_tld("ørg"));
    }

    #[test]
    fn test_entries_are_lowercase_ascii() {
        for tld in GENERIC.iter().chain(COUNTRY) {
            assert!(tld.len() <= 8 && tld.bytes().all(|b| b.is_ascii_lowercase()), "{tld}");
        }
    }
}
