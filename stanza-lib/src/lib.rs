//! Sectioned, ordered text configuration files.
//!
//! ```text
//! [SectionName]
//! field value
//! multilineField:
//! line1
//! $$line starting with a dollar
//! $
//! ```
//!
//! A document is a list of `[name]` sections holding name/value fields, both
//! kept in insertion order. Values that can't be written on one line use the
//! heredoc form: `name:` followed by the body and a line holding only `$`.

mod builders;
mod config_file;
mod cursor;
pub mod error;
pub mod fs;
pub mod models;
pub mod multiline;
mod natural;
mod options;
mod parser;
mod serializer;
mod values;

pub use crate::builders::{DocumentBuilder, SectionBuilder};
pub use crate::config_file::ConfigFile;
pub use crate::cursor::{Cursor, normalize_line_endings};
pub use crate::error::{Error, ErrorKind, FileError, Location};
pub use crate::models::{Document, FieldPath, Section};
pub use crate::natural::natural_cmp;
pub use crate::options::SerializeOptions;
pub use crate::parser::parse;
pub use crate::serializer::serialize;
pub use crate::values::{ConfigValue, FlagSet};

#[cfg(test)]
mod tests {
    use crate::{DocumentBuilder, SectionBuilder, SerializeOptions, parse, serialize};

    #[test]
    fn parse_happy_flow_with_unnamed_section() {
        let (_, unnamed) = SectionBuilder::new("")
            .field("g_key1", "g_value11")
            .field("g_key2", "g_value12")
            .build();

        let (_, section1) = SectionBuilder::new("section1")
            .field("key1", "value21")
            .field("key2", "multi\nline")
            .field("key3", "  padded  ")
            .build();

        let dummy_document = DocumentBuilder::new()
            .section("", unnamed)
            .section("section1", section1)
            .build();

        let dummy_string = serialize(&dummy_document, &SerializeOptions::new()).unwrap();

        let parsed = parse(&dummy_string).unwrap();

        assert_eq!(parsed, dummy_document);
        assert_eq!(parsed.get("", "g_key2"), Some("g_value12"));
        assert_eq!(parsed.get("section1", "key2"), Some("multi\nline"));
        assert_eq!(parsed.get("section1", "key3"), Some("  padded  "));
    }

    #[test]
    fn format_example_parses() {
        let text = "[SectionName]\nfield value\nmultilineField:\nline1\nline2\n$$escapedDollarLine\n$\n";

        let document = parse(text).unwrap();

        assert_eq!(document.get("SectionName", "field"), Some("value"));
        assert_eq!(document.get("SectionName", "multilineField"), Some("line1\nline2\n$escapedDollarLine"));
        assert_eq!(serialize(&document, &SerializeOptions::new()).unwrap(), text);
    }
}
