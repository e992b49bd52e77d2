mod document;
mod field_path;
mod section;

pub use document::Document;
pub use field_path::FieldPath;
pub use section::Section;
