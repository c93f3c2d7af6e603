use ferrolink::{Input, autolink};

fn link(input: &str) -> String {
    autolink(Input::Raw(input)).into_string()
}

#[test]
fn email_autolink() {
    assert_eq!(
        link("scyther@pokemon.com"),
        "<a href=\"mailto:scyther@pokemon.com\">scyther@pokemon.com</a>"
    );
}

#[test]
fn email_with_special_chars() {
    assert_eq!(
        link("scy.the_rbe-edr+ill@pokemon.com"),
        "<a href=\"mailto:scy.the_rbe-edr+ill@pokemon.com\">scy.the_rbe-edr+ill@pokemon.com</a>"
    );
}

#[test]
fn email_trailing_dot() {
    assert_eq!(
        link("scyther@pokemon.com."),
        "<a href=\"mailto:scyther@pokemon.com\">scyther@pokemon.com</a>."
    );
}

#[test]
fn email_multi_label_domain() {
    assert_eq!(
        link("user@mail.example.co.uk"),
        "<a href=\"mailto:user@mail.example.co.uk\">user@mail.example.co.uk</a>"
    );
}

#[test]
fn email_in_angle_brackets() {
    assert_eq!(
        link("Email me at <me@example.com>"),
        "Email me at &lt;<a href=\"mailto:me@example.com\">me@example.com</a>&gt;"
    );
}

#[test]
fn email_never_nofollow() {
    let html = link("foo@bar.com or www.bar.com");
    assert!(html.starts_with("<a href=\"mailto:foo@bar.com\">"));
    assert!(html.ends_with("<a href=\"http://www.bar.com\" rel=\"nofollow\">www.bar.com</a>"));
}

#[test]
fn invalid_emails_are_text() {
    for input in ["email@.stream.ru", "@example.com", "a@b", "me@example", "a@b..com", "x@-"] {
        assert_eq!(link(input), input, "input: {input}");
    }
}

#[test]
fn colon_disables_email() {
    assert_eq!(link("mailto:me@example.com"), "mailto:me@example.com");
}

#[test]
fn label_before_colon_is_text() {
    assert_eq!(
        link("Contact: me@example.com"),
        "Contact: <a href=\"mailto:me@example.com\">me@example.com</a>"
    );
}
