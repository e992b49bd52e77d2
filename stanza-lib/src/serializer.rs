use std::fmt::Write;

use crate::{
    SerializeOptions,
    error::{ErrorKind, Result},
    models::{Document, Section},
    multiline,
    natural::natural_cmp,
};

/// Renders `document` as text.
///
/// Every section name is validated before anything is rendered, so an error
/// never comes with partial output.
pub fn serialize(document: &Document, options: &SerializeOptions) -> Result<String> {
    if let Some(name) = document.section_names().find(|name| name.contains(']')) {
        log::debug!("Refusing to serialize section name {name:?}");
        return Err(ErrorKind::SectionNameShouldntContainBrackets.into());
    }

    let mut sections: Vec<(&str, &Section)> = document.sections().collect();
    if options.sort_sections {
        sections.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
    }

    let mut out = String::new();
    for (index, (name, section)) in sections.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        write_fields(&mut out, section, options.sort_fields);
    }

    Ok(out)
}

fn write_fields(out: &mut String, section: &Section, sort_fields: bool) {
    let mut fields: Vec<(&str, &str)> = section.fields().collect();
    if sort_fields {
        fields.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
    }

    // An empty name only reads back in the `:` form.
    for (name, value) in fields {
        if name.is_empty() || multiline::needs_heredoc(value) {
            out.push_str(&multiline::encode_field(name, value));
        } else {
            // Writing into a String can't fail.
            let _ = writeln!(out, "{name} {value}");
        }
    }
}
