mod document;
mod section;

pub use document::DocumentBuilder;
pub use section::SectionBuilder;
