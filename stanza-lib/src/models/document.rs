use indexmap::IndexMap;

use crate::{SerializeOptions, error::Result, models::Section};

/// Sections in insertion order, each holding its fields in insertion order.
///
/// The unnamed section is the one whose name is `""`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) sections: IndexMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole content with `text`. On a parse error the document is left unchanged.
    pub fn load(&mut self, text: &str) -> Result<()> {
        *self = crate::parse(text)?;
        Ok(())
    }

    pub fn to_text(&self, options: &SerializeOptions) -> Result<String> {
        crate::serialize(self, options)
    }

    pub fn get(&self, section: &str, field: &str) -> Option<&str> {
        self.sections.get(section)?.get(field)
    }

    /// Creates the section and field as needed. Existing entries keep their position.
    ///
    /// Field names are stored as given. Names containing whitespace, ending in `:`,
    /// or starting with `[` are written out verbatim and won't read back as the
    /// same field.
    pub fn set(&mut self, section: &str, field: impl Into<String>, value: impl Into<String>) {
        match self.sections.get_mut(section) {
            Some(existing) => existing.set(field, value),
            None => {
                let mut created = Section::new();
                created.set(field, value);
                self.sections.insert(section.to_owned(), created);
            }
        }
    }

    /// Replaces the entire field set of `name`, keeping the section's position if it already exists.
    pub fn replace_section(&mut self, name: impl Into<String>, section: Section) {
        self.sections.insert(name.into(), section);
    }

    pub fn delete(&mut self, section: &str) -> Option<Section> {
        self.sections.shift_remove(section)
    }

    pub fn reset(&mut self, section: &str, field: &str) -> Option<String> {
        self.sections.get_mut(section)?.reset(field)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Empty when the section doesn't exist.
    pub fn field_names<'doc>(&'doc self, section: &str) -> impl Iterator<Item = &'doc str> + use<'doc> {
        self.sections.get(section).into_iter().flat_map(|section| section.field_names())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
