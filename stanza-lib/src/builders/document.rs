use crate::models::{Document, Section};

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding a section that already exists replaces its fields but keeps its position.
    pub fn section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.document.replace_section(name, section);
        self
    }

    pub fn build(self) -> Document {
        self.document
    }
}
