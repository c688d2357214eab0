//! Integration tests for the parse → serialize cycle.

use paintdoc::{parse_str, parse_value, to_wire_value, NormalizeOptions};
use serde_json::{json, Value};

fn canonicalize(input: &str) -> Value {
    let options = NormalizeOptions::default();
    let doc = parse_str(input, &options);
    to_wire_value(&doc, &options)
}

#[test]
fn test_canonicalization_is_idempotent() {
    let inputs = [
        r#"{"sections":[{"title":"Intro","items":[{"type":"text","text":"Use {{paint:9}}"}]}]}"#,
        r#"{"time":1700000000000,"version":"2.0.0","sections":[
            {"items":[
                {"type":"header","text":"Supplies"},
                {"type":"step","text":"Mix {{paint:1}}"},
                {"type":"image","attachmentId":"5","alt":"brush"},
                {"type":"image","attachmentId":0},
                {"type":"text","text":"   "},
                {"type":"mystery","body":"old content"}
            ]}
        ]}"#,
        "",
        "{",
        "null",
        r#"{"sections":[{"title":"","items":"oops"}]}"#,
    ];

    for input in inputs {
        let once = canonicalize(input);
        let twice = canonicalize(&once.to_string());
        assert_eq!(once, twice, "not idempotent for input {:?}", input);
    }
}

#[test]
fn test_parser_totality() {
    let garbage = [
        "",
        "{",
        "null",
        "[]",
        "\"string\"",
        "12345",
        "{\"sections\":null}",
        "{\"sections\":[]}",
        "\u{0000}\u{FFFD}",
        "{\"sections\":[null, 7, \"x\"]}",
    ];

    let options = NormalizeOptions::default();
    for input in garbage {
        let doc = parse_str(input, &options);
        assert!(
            doc.section_count() >= 1,
            "parse of {:?} produced an empty document",
            input
        );
    }
}

#[test]
fn test_end_to_end_scenario() {
    let input = r#"{"sections":[{"title":"Intro","items":[{"type":"text","text":"Use {{paint:9}}"}]}]}"#;
    let wire = canonicalize(input);

    assert_eq!(wire["version"], json!("3.0.0"));
    assert!(wire["time"].as_i64().unwrap() > 0);
    assert_eq!(
        wire["sections"],
        json!([{
            "title": "Intro",
            "items": [{"type": "text", "text": "Use {{paint:9}}", "paintIds": [9]}],
        }])
    );
}

#[test]
fn test_time_preserved_through_cycle() {
    let input = r#"{"time":1700000000000,"sections":[{"title":"A"}]}"#;
    let wire = canonicalize(input);
    assert_eq!(wire["time"], json!(1700000000000i64));
}

#[test]
fn test_wire_output_reparses_to_equal_document() {
    let options = NormalizeOptions::default();
    let input = r#"{"time":1700000000000,"sections":[
        {"title":"Basing","items":[
            {"type":"header","text":"Prep"},
            {"type":"step","text":"Base {{paint:2}}","steps":[
                {"title":"Prime","text":"Spray {{paint:8}}"},
                {}
            ]},
            {"type":"text","body":"Thin {{paint:4}} with water"},
            {"type":"image","image":{"attachmentId":3,"caption":"Result"}}
        ]}
    ]}"#;

    let doc = parse_str(input, &options);
    let wire = to_wire_value(&doc, &options);
    let reparsed = parse_value(&wire, &options);

    assert_eq!(doc, reparsed);
}

#[test]
fn test_empty_items_pruned_but_sections_kept() {
    let input = r#"{"sections":[
        {"title":"Empty","items":[{"type":"text","text":""},{"type":"header","text":" "}]},
        {"title":"Full","items":[{"type":"text","text":"keep me"}]}
    ]}"#;
    let wire = canonicalize(input);

    let sections = wire["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["items"], json!([]));
    assert_eq!(sections[1]["items"][0]["text"], json!("keep me"));
}

#[test]
fn test_step_canonicalization_rederives_ids() {
    let input = r#"{"sections":[{"items":[
        {"type":"step","text":"Mix {{paint:1}}","paintIds":[1],
         "steps":[{"title":"Step 1","text":"Mix {{paint:1}}","paintIds":[42]}]}
    ]}]}"#;
    let wire = canonicalize(input);

    // Stored sub-step IDs are ignored in favor of the text's tokens.
    assert_eq!(
        wire["sections"][0]["items"][0]["steps"][0]["paintIds"],
        json!([1])
    );
}
