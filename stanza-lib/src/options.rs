//! Output options for serialization.
//!
//! Both sort flags are off by default, which keeps insertion order.
//!
//! ```rust
//! use stanza::SerializeOptions;
//!
//! let options = SerializeOptions::new().with_sort_sections(true);
//! assert!(options.sort_sections);
//! assert!(!options.sort_fields);
//! ```

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Emit sections in natural/numeric name order.
    pub sort_sections: bool,
    /// Emit fields of each section in natural/numeric name order.
    pub sort_fields: bool,
}

impl SerializeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Both sort flags on.
    #[must_use]
    pub fn sorted() -> Self {
        Self {
            sort_sections: true,
            sort_fields: true,
        }
    }

    #[must_use]
    pub fn with_sort_sections(mut self, sort_sections: bool) -> Self {
        self.sort_sections = sort_sections;
        self
    }

    #[must_use]
    pub fn with_sort_fields(mut self, sort_fields: bool) -> Self {
        self.sort_fields = sort_fields;
        self
    }
}
