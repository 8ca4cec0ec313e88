//! Integration tests for the CSS part tokenizer.

use css_parts::{ParseOptions, Part, PartKind, Segment, parse, parse_with};

/// Helper to parse a string and return the segment sequence.
fn segments(css: &str) -> Vec<Segment> {
    parse(css).expect("built-in patterns compile")
}

fn lit(text: &str) -> Segment {
    Segment::Literal(text.to_string())
}

fn selector(value: &str) -> Segment {
    Segment::Part(Part::Selector {
        value: value.to_string(),
    })
}

fn variable(name: &str, encode: bool) -> Segment {
    Segment::Part(Part::Variable {
        name: name.to_string(),
        encode,
    })
}

fn property(name: &str, value: &str) -> Segment {
    Segment::Part(Part::Property {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn url(value: &str) -> Segment {
    Segment::Part(Part::Url {
        value: value.to_string(),
    })
}

#[test]
fn test_selector_list_splits_into_entries() {
    let segs = segments("a, b { color: red; }");
    assert_eq!(
        segs,
        vec![
            selector("a"),
            lit(", "),
            selector("b"),
            lit(" { color: red; }"),
        ]
    );
}

#[test]
fn test_root_block_yields_property_not_selector() {
    let segs = segments(":root { --x: 1px; }");
    assert_eq!(segs, vec![lit(":root {"), property("x", "1px"), lit(" }")]);
    assert!(
        !segs.contains(&selector(":root")),
        "`:root` must not be emitted as a selector part"
    );
}

#[test]
fn test_variable_reference_in_declaration() {
    let segs = segments("div { width: var(--x); }");
    assert_eq!(
        segs,
        vec![
            selector("div"),
            lit(" { width: "),
            variable("x", false),
            lit("; }"),
        ]
    );
}

#[test]
fn test_variable_inside_svg_attribute_needs_encoding() {
    let segs = segments("svg[fill='var(--c)']");
    assert_eq!(
        segs,
        vec![lit("svg[fill='"), variable("c", true), lit("']")]
    );
}

#[test]
fn test_url_wrapping_a_variable_is_suppressed() {
    let segs = segments("a { background: url(var(--img)); }");
    assert_eq!(
        segs,
        vec![
            selector("a"),
            lit(" { background: url("),
            variable("img", false),
            lit("); }"),
        ]
    );
    assert!(
        segs.iter()
            .all(|s| s.as_part().is_none_or(|p| p.kind() != PartKind::Url)),
        "no url part may shadow the inner variable reference"
    );
}

#[test]
fn test_empty_input_is_a_single_empty_literal() {
    // The no-match rule takes precedence over empty-literal pruning.
    assert_eq!(segments(""), vec![lit("")]);
}

#[test]
fn test_no_match_input_comes_back_unchanged() {
    let css = "just some text without any css constructs";
    assert_eq!(segments(css), vec![lit(css)]);
}

#[test]
fn test_plain_url_is_extracted() {
    let segs = segments("a { background: url('img.png'); }");
    assert_eq!(
        segs,
        vec![
            selector("a"),
            lit(" { background: url('"),
            url("img.png"),
            lit("'); }"),
        ]
    );
}

#[test]
fn test_parts_appear_in_source_order() {
    let css = ":root {\n  --main: #222;\n}\ndiv, span {\n  color: var(--main);\n  background: url('bg.png');\n}\n";
    let segs = segments(css);
    let kinds: Vec<PartKind> = segs
        .iter()
        .filter_map(|s| s.as_part().map(Part::kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            PartKind::Property,
            PartKind::Selector,
            PartKind::Selector,
            PartKind::Variable,
            PartKind::Url,
        ]
    );
}

#[test]
fn test_no_empty_literals_in_output() {
    let css = ":root {\n  --a: 1;\n  --b: 2;\n}\n.x, .y { top: var(--a); }";
    for seg in segments(css) {
        if let Some(text) = seg.as_literal() {
            assert!(!text.is_empty(), "empty literal leaked into the output");
        }
    }
}

#[test]
fn test_concatenating_segments_covers_the_input() {
    // Every byte of the input must survive: literals verbatim, parts as
    // the exact substring they matched.
    let css = "from, .fade { top: 0; }";
    let segs = segments(css);
    assert_eq!(
        segs,
        vec![lit("from, "), selector(".fade"), lit(" { top: 0; }")]
    );
    let rebuilt: String = segs
        .iter()
        .map(|s| match s {
            Segment::Literal(text) => text.clone(),
            Segment::Part(Part::Selector { value }) => value.clone(),
            Segment::Part(_) => unreachable!("only selectors expected"),
        })
        .collect();
    assert_eq!(rebuilt, css);
}

#[test]
fn test_keyframes_stops_stay_literal() {
    let css = "@keyframes fade {\nfrom { opacity: 0; }\nto { opacity: 1; }\n}";
    // `from` and `to` are skipped in selector position and nothing else
    // matches, so the whole input is one literal.
    assert_eq!(segments(css), vec![lit(css)]);
}

#[test]
fn test_overlapping_url_inside_property_resolves_first_wins() {
    // The url also lies inside the property declaration's span; the
    // property record comes first and wins.
    let segs = segments(":root { --icon: url(i.png); }");
    assert_eq!(
        segs,
        vec![lit(":root {"), property("icon", "url(i.png)"), lit(" }")]
    );
}

#[test]
fn test_restricting_matchers_leaves_other_text_literal() {
    let options = ParseOptions {
        kinds: vec![PartKind::Variable],
    };
    let segs = parse_with("div { width: var(--x); }", &options).expect("patterns compile");
    assert_eq!(
        segs,
        vec![lit("div { width: "), variable("x", false), lit("; }")]
    );
}

#[test]
fn test_matcher_order_given_by_caller_does_not_matter() {
    let forward = ParseOptions {
        kinds: vec![PartKind::Selector, PartKind::Variable],
    };
    let backward = ParseOptions {
        kinds: vec![PartKind::Variable, PartKind::Selector],
    };
    let css = "div { width: var(--x); }";
    assert_eq!(
        parse_with(css, &forward).expect("patterns compile"),
        parse_with(css, &backward).expect("patterns compile"),
    );
}

#[test]
fn test_segments_serialize_as_loader_json() {
    let segs = segments("div { width: var(--x); }");
    let json = serde_json::to_string(&segs).expect("segments serialize");
    assert_eq!(
        json,
        "[{\"type\":\"selector\",\"value\":\"div\"},\" { width: \",\
         {\"type\":\"variable\",\"name\":\"x\",\"encode\":false},\"; }\"]"
    );
}
