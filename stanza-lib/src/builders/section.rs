use crate::models::Section;

#[derive(Debug, Default)]
pub struct SectionBuilder {
    name: String,
    section: Section,
}

impl SectionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A repeated field name overwrites the earlier value in place.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.section.set(name, value);
        self
    }

    pub fn build(self) -> (String, Section) {
        (self.name, self.section)
    }
}
