use crate::{
    builders::{DocumentBuilder, SectionBuilder},
    cursor::{Cursor, normalize_line_endings},
    error::{Error, ErrorKind, Result},
    models::Document,
    multiline::{HeredocDecoder, Step},
};

const SECTION_START: &str = "[";
const SECTION_END: &str = "]";
const MULTILINE_MARKER: char = ':';

pub fn parse(text: &str) -> Result<Document> {
    let normalized = normalize_line_endings(text);
    DocumentParser::new(&normalized).parse_document()
}

struct DocumentParser<'text> {
    cursor: Cursor<'text>,
}

impl<'text> DocumentParser<'text> {
    fn new(text: &'text str) -> Self {
        Self { cursor: Cursor::new(text) }
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.cursor.location())
    }

    fn error_at(&self, kind: ErrorKind, position: usize) -> Error {
        Error::at(kind, self.cursor.location_at(position))
    }

    fn parse_document(mut self) -> Result<Document> {
        let mut document_builder = DocumentBuilder::new();

        while !self.cursor.is_at_end() {
            let (name, section) = self.parse_section()?.build();
            log::debug!("Committing section [{name}] with {} field(s)", section.len());
            document_builder = document_builder.section(name, section);
        }

        Ok(document_builder.build())
    }

    fn parse_section(&mut self) -> Result<SectionBuilder> {
        if !self.cursor.skip_literal(SECTION_START) {
            return Err(self.error(ErrorKind::ExpectedSectionStart));
        }

        let name = self.cursor.without_skipping(|cursor| {
            if cursor.peek_literal(SECTION_END) {
                Some("")
            } else {
                cursor.scan_up_to(']')
            }
        });
        let Some(name) = name else {
            return Err(self.error(ErrorKind::ExpectedSectionName));
        };

        if !self.cursor.without_skipping(|cursor| cursor.skip_literal(SECTION_END)) {
            return Err(self.error(ErrorKind::ExpectedSectionEnd));
        }

        log::debug!("Parsing section [{name}]");

        let mut section_builder = SectionBuilder::new(name);

        loop {
            if self.cursor.is_at_end() {
                break;
            }

            // Lookahead for the next section header.
            let mark = self.cursor.position();
            if self.cursor.skip_literal(SECTION_START) {
                self.cursor.restore(mark);
                break;
            }

            let (field, value) = self.parse_field()?;
            log::trace!("  {field}={value:?}");
            section_builder = section_builder.field(field, value);
        }

        Ok(section_builder)
    }

    fn parse_field(&mut self) -> Result<(&'text str, String)> {
        let Some(token) = self.cursor.scan_while(|c| !c.is_whitespace()) else {
            return Err(self.error(ErrorKind::ExpectedFieldName));
        };

        // A bare ':' is a multiline field named "".
        match token.strip_suffix(MULTILINE_MARKER) {
            Some(name) => Ok((name, self.parse_multiline_value()?)),
            None => {
                let value = self.cursor.scan_line().map(str::trim).unwrap_or_default();
                Ok((token, value.to_owned()))
            }
        }
    }

    fn parse_multiline_value(&mut self) -> Result<String> {
        let after_marker = self.cursor.position();
        match self.cursor.scan_line() {
            None => return Err(self.error_at(ErrorKind::ExpectedNewlineInMultilineField, after_marker)),
            Some(rest) if !rest.is_empty() => {
                return Err(self.error_at(ErrorKind::InvalidCharacterInMultilineField, after_marker));
            }
            Some(_) => {}
        }

        let mut decoder = HeredocDecoder::new();
        loop {
            let line_start = self.cursor.position();
            let Some(line) = self.cursor.scan_line() else {
                return Err(self.error(ErrorKind::UnterminatedMultilineField));
            };
            match decoder.push_line(line) {
                Ok(Step::Done(value)) => return Ok(value),
                Ok(Step::NeedMore) => {}
                Err(kind) => return Err(self.error_at(kind, line_start)),
            }
        }
    }
}
