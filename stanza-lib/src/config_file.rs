use std::path::{Path, PathBuf};

use crate::{
    ConfigValue, SerializeOptions,
    error::{Error, FileError},
    fs,
    models::{Document, FieldPath},
};

/// A [`Document`] bound to output options and, once loaded or saved, a file.
///
/// Fields are addressed either by section and field name, or by a
/// `section.field` path (see [`FieldPath`]).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    document: Document,
    pub options: SerializeOptions,
    /// Write through a temp file and rename instead of overwriting in place.
    pub atomic_write: bool,
    path: Option<PathBuf>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            document: Document::new(),
            options: SerializeOptions::default(),
            atomic_write: true,
            path: None,
        }
    }
}

impl ConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SerializeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let mut config_file = Self::new();
        config_file.load_from_file(path)?;
        Ok(config_file)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replaces the content only if the whole text parses.
    pub fn load_str(&mut self, text: &str) -> Result<(), Error> {
        self.document.load(text)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        log::debug!("Loading {}", path.display());

        let contents = fs::read_to_string(path)?;
        self.load_str(&contents)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn to_text(&self) -> Result<String, Error> {
        self.document.to_text(&self.options)
    }

    /// Saves to the file this config was last loaded from or saved to.
    pub fn save(&self) -> Result<(), FileError> {
        let Some(path) = self.path.as_deref() else {
            return Err(FileError::NoPath);
        };
        self.write_to(path)
    }

    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<(), FileError> {
        let text = self.to_text()?;
        log::debug!("Saving {} (atomic: {})", path.display(), self.atomic_write);
        fs::write(path, &text, self.atomic_write)
    }

    pub fn get<T: ConfigValue>(&self, path: &str) -> Option<T> {
        let FieldPath { section, field } = FieldPath::parse(path);
        self.get_in(section, field)
    }

    pub fn set<T: ConfigValue>(&mut self, path: &str, value: T) {
        let FieldPath { section, field } = FieldPath::parse(path);
        self.set_in(section, field, value);
    }

    pub fn get_in<T: ConfigValue>(&self, section: &str, field: &str) -> Option<T> {
        T::from_raw(self.document.get(section, field)?)
    }

    pub fn set_in<T: ConfigValue>(&mut self, section: &str, field: &str, value: T) {
        self.document.set(section, field, value.to_raw());
    }

    pub fn reset(&mut self, path: &str) -> Option<String> {
        let FieldPath { section, field } = FieldPath::parse(path);
        self.document.reset(section, field)
    }

    pub fn delete_section(&mut self, section: &str) -> bool {
        self.document.delete(section).is_some()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.document.section_names()
    }

    pub fn field_names<'config>(&'config self, section: &str) -> impl Iterator<Item = &'config str> + use<'config> {
        self.document.field_names(section)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlagSet;

    #[test]
    fn path_accessors_use_the_unnamed_section_without_a_dot() {
        let mut config_file = ConfigFile::new();
        config_file.set(".fieldWithoutSection1", -1234567i64);
        config_file.set("fieldWithoutSection2", -1234567i64);
        config_file.set(".fieldName.withDot", -1234567i64);
        config_file.set("MAIN.TEST3", "abcd".to_owned());

        assert_eq!(config_file.field_names("").collect::<Vec<_>>(), [
            "fieldWithoutSection1",
            "fieldWithoutSection2",
            "fieldName.withDot"
        ]);
        assert_eq!(config_file.get::<i64>("fieldName.withDot"), None);
        assert_eq!(config_file.get::<i64>(".fieldName.withDot"), Some(-1234567));
        assert_eq!(config_file.get::<String>("MAIN.TEST3").as_deref(), Some("abcd"));
    }

    #[test]
    fn typed_values_are_stored_as_raw_strings() {
        let mut config_file = ConfigFile::new();
        config_file.set("TYPES.boolTrue", true);
        config_file.set("TYPES.flags", FlagSet::from_bit_indexes([0, 31, 63]).unwrap());

        assert_eq!(config_file.document().get("TYPES", "boolTrue"), Some("1"));
        assert_eq!(config_file.document().get("TYPES", "flags"), Some("(0, 31, 63)"));
        assert_eq!(config_file.get::<u8>("TYPES.flags"), None);
    }

    #[test]
    fn reset_and_delete() {
        let mut config_file = ConfigFile::new();
        config_file.set("A.a", 1u8);
        config_file.set("A.b", 2u8);
        config_file.set("B.a", 3u8);

        assert_eq!(config_file.reset("A.a").as_deref(), Some("1"));
        assert!(config_file.delete_section("B"));
        assert!(!config_file.delete_section("B"));
        assert_eq!(config_file.section_names().collect::<Vec<_>>(), ["A"]);
    }

    #[test]
    fn save_without_a_path_fails() {
        assert!(matches!(ConfigFile::new().save(), Err(FileError::NoPath)));
    }
}
