//! Property tests over arbitrary text.

use ferrolink::escape::escape_to_string;
use ferrolink::quote::quote_tail_into;
use ferrolink::{Input, autolink, find_links};
use proptest::prelude::*;

fn quote_tail(tail: &str) -> String {
    let mut out = String::new();
    quote_tail_into(&mut out, tail);
    out
}

/// Text mixing link-like words, punctuation and markup characters.
fn linkish_text() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("http://example.com/a_(b)".to_string()),
        Just("www.c✶.ws".to_string()),
        Just("me@example.org".to_string()),
        Just("&lt;x.com&gt;".to_string()),
        Just("[::1]:80".to_string()),
        "[a-z]{1,8}\\.(com|org|md|zz)",
        "[a-z<>&\"'()\\[\\]{}.,:;!?@/%=#]{1,12}",
    ];
    prop::collection::vec(word, 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn never_panics(text in "\\PC{0,200}") {
        let _ = autolink(Input::Raw(&text));
        let _ = autolink(Input::Safe(&text));
    }

    #[test]
    fn text_without_link_markers_is_only_escaped(text in "[^.@:]{0,200}") {
        prop_assert!(find_links(Input::Raw(&text)).is_empty());
        prop_assert_eq!(autolink(Input::Raw(&text)).into_string(), escape_to_string(&text));
        prop_assert_eq!(autolink(Input::Safe(&text)).into_string(), text);
    }

    #[test]
    fn tokens_ordered_and_disjoint(text in linkish_text(), safe in any::<bool>()) {
        let input = if safe { Input::Safe(&text) } else { Input::Raw(&text) };
        let tokens = find_links(input);
        for token in &tokens {
            prop_assert!(token.span.get(&text).is_some_and(|label| !label.is_empty()));
            prop_assert!(!token.href.chars().any(|c| c.is_whitespace() || c == '"' || c == '<' || c == '>'));
        }
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.precedes(&pair[1].span));
        }
    }

    #[test]
    fn raw_output_has_only_anchor_markup(text in linkish_text()) {
        let html = autolink(Input::Raw(&text)).into_string();
        let links = find_links(Input::Raw(&text)).len();
        prop_assert_eq!(html.matches("<a href=\"").count(), links);
        prop_assert_eq!(html.matches("</a>").count(), links);
        let stripped = html.replace("</a>", "");
        for (i, _) in stripped.match_indices('<') {
            prop_assert!(stripped[i..].starts_with("<a href=\""));
        }
    }

    #[test]
    fn quoting_is_idempotent(tail in "/[a-zA-Z0-9%?#&=+ <>\"é{}!$]{0,40}") {
        let once = quote_tail(&tail);
        prop_assert_eq!(quote_tail(&once), once);
    }
}
