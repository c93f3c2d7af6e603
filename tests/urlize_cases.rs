//! Table-driven acceptance cases.
//!
//! Each entry in tests/urlize_cases.json is an input, whether it is already
//! HTML-escaped, and the exact expected output.

use ferrolink::{Input, autolink};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Deserialize)]
struct Case {
    section: String,
    input: String,
    #[serde(default)]
    safe: bool,
    html: String,
}

fn load_cases() -> Vec<Case> {
    let json = fs::read_to_string("tests/urlize_cases.json")
        .expect("Failed to read tests/urlize_cases.json");
    serde_json::from_str(&json).expect("Failed to parse urlize_cases.json")
}

fn render(case: &Case) -> String {
    let input = if case.safe {
        Input::Safe(&case.input)
    } else {
        Input::Raw(&case.input)
    };
    autolink(input).into_string()
}

#[test]
fn all_cases_pass() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let mut by_section: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    let mut failures = Vec::new();
    for case in &cases {
        let output = render(case);
        let entry = by_section.entry(&case.section).or_default();
        if output == case.html {
            entry.0 += 1;
        } else {
            entry.1 += 1;
            failures.push((case, output));
        }
    }

    for (section, (p, f)) in &by_section {
        let status = if *f == 0 { "✓" } else { " " };
        eprintln!("  {} {:20} {:3}/{:3}", status, section, p, p + f);
    }
    for (case, got) in &failures {
        eprintln!("\n[{}] {:?} (safe={})", case.section, case.input, case.safe);
        eprintln!("  Expected: {:?}", case.html);
        eprintln!("  Got:      {:?}", got);
    }
    assert!(failures.is_empty(), "{} of {} cases failed", failures.len(), cases.len());
}

#[test]
fn cases_cover_both_input_kinds() {
    let cases = load_cases();
    assert!(cases.iter().any(|c| c.safe));
    assert!(cases.iter().any(|c| !c.safe));
}
