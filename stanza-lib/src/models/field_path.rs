/// A `section.field` address.
///
/// Without a dot the field lives in the unnamed section. A leading dot also
/// selects the unnamed section, which lets field names contain dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath<'path> {
    pub section: &'path str,
    pub field: &'path str,
}

impl<'path> FieldPath<'path> {
    pub fn parse(path: &'path str) -> Self {
        match path.split_once('.') {
            Some((section, field)) => Self { section, field },
            None => Self { section: "", field: path },
        }
    }
}
