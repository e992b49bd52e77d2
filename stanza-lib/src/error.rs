use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("expected '['")]
    ExpectedSectionStart,
    #[error("expected section name terminated with ']'")]
    ExpectedSectionName,
    #[error("expected ']'")]
    ExpectedSectionEnd,
    #[error("expected field name")]
    ExpectedFieldName,
    #[error("empty field name")]
    EmptyFieldName,
    #[error("expected newline after ':' in multiline field")]
    ExpectedNewlineInMultilineField,
    #[error("invalid character after ':' in multiline field")]
    InvalidCharacterInMultilineField,
    #[error("invalid escape sequence in multiline block")]
    InvalidEscapeSequenceInMultilineField,
    #[error("unterminated multiline field")]
    UnterminatedMultilineField,
    #[error("section name shouldn't contain brackets")]
    SectionNameShouldntContainBrackets,
}

/// 1-based position in the normalized source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}{kind}", location_prefix(.location))]
pub struct Error {
    pub kind: ErrorKind,
    pub location: Option<Location>,
}

fn location_prefix(location: &Option<Location>) -> String {
    match location {
        Some(Location { line, column }) => format!("[{line}:{column}] "),
        None => String::new(),
    }
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, location: None }
    }

    pub fn at(kind: ErrorKind, location: Location) -> Self {
        Self {
            kind,
            location: Some(location),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Error, Debug)]
pub enum FileError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] Error),
    #[error("no file is associated with this config")]
    NoPath,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location_when_known() {
        let error = Error::at(ErrorKind::ExpectedSectionEnd, Location { line: 2, column: 8 });
        assert_eq!(error.to_string(), "[2:8] expected ']'");
    }

    #[test]
    fn display_without_location_is_just_the_message() {
        let error = Error::from(ErrorKind::SectionNameShouldntContainBrackets);
        assert_eq!(error.to_string(), "section name shouldn't contain brackets");
    }
}
