//! Round-trip and escape laws over generated values.

use proptest::prelude::*;
use stanza::{Document, SerializeOptions, multiline, parse, serialize};

// Carriage returns are normalized away on load, so they can't survive a round trip.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[^\r]*",
        prop::collection::vec(prop_oneof!["", "\\$", "\\$\\$", "\\$x", " ", "\\n", "\\x00", "abc"], 0..12)
            .prop_map(|parts| parts.concat()),
    ]
}

fn single_field_document(value: &str) -> Document {
    let mut document = Document::new();
    document.set("S", "f", value);
    document
}

proptest! {
    #[test]
    fn prop_value_survives_serialize_then_parse(value in value_strategy()) {
        let text = serialize(&single_field_document(&value), &SerializeOptions::new()).unwrap();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.get("S", "f"), Some(value.as_str()));
    }

    #[test]
    fn prop_decode_inverts_encode(value in value_strategy()) {
        let body = multiline::encode_body(&value);
        prop_assert_eq!(multiline::decode_body(&body), Ok(value));
    }

    #[test]
    fn prop_terminator_appears_once(value in value_strategy()) {
        let body = multiline::encode_body(&value);
        let bare = body.split('\n').filter(|line| *line == multiline::TERMINATOR).count();
        prop_assert_eq!(bare, 1);
        prop_assert!(body.ends_with("\n$\n"));
    }

    #[test]
    fn prop_document_round_trips_in_order(
        entries in prop::collection::vec(("[a-z0-9]{1,4}", "[A-Za-z0-9_.]{1,6}", value_strategy()), 0..16)
    ) {
        let mut document = Document::new();
        for (section, field, value) in &entries {
            document.set(section, field.as_str(), value.as_str());
        }

        let text = serialize(&document, &SerializeOptions::new()).unwrap();
        let parsed = parse(&text).unwrap();

        prop_assert_eq!(parsed.section_names().collect::<Vec<_>>(), document.section_names().collect::<Vec<_>>());
        for section in document.section_names() {
            prop_assert_eq!(parsed.field_names(section).collect::<Vec<_>>(), document.field_names(section).collect::<Vec<_>>());
            for field in document.field_names(section) {
                prop_assert_eq!(parsed.get(section, field), document.get(section, field));
            }
        }
    }
}
