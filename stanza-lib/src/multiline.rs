//! Heredoc encoding for values that can't live on a single line.
//!
//! A heredoc body is a sequence of lines closed by a line holding only `$`.
//! Body lines that begin with `$` are escaped by doubling it.

use crate::{cursor::normalize_line_endings, error::ErrorKind};

pub const TERMINATOR: &str = "$";

/// Values that are empty stay inline. Anything with a line break (`\n` or `\r`),
/// or with whitespace at either end, would be mangled by the inline form.
pub fn needs_heredoc(value: &str) -> bool {
    let edge_is_whitespace = |c: Option<char>| c.is_some_and(char::is_whitespace);
    !value.is_empty()
        && (edge_is_whitespace(value.chars().next())
            || edge_is_whitespace(value.chars().next_back())
            || value.contains(['\n', '\r']))
}

/// Encodes `value` as heredoc body lines, including the terminator line.
///
/// Line breaks are normalized to `\n` first, since that is how the body is read back.
pub fn encode_body(value: &str) -> String {
    let value = normalize_line_endings(value);
    let mut out = String::with_capacity(value.len() + 4);
    for line in value.split('\n') {
        if line.starts_with(TERMINATOR) {
            out.push_str(TERMINATOR);
        }
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(TERMINATOR);
    out.push('\n');
    out
}

/// Encodes a complete multiline field: `name:` header, body and terminator.
pub fn encode_field(name: &str, value: &str) -> String {
    format!("{name}:\n{}", encode_body(value))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    NeedMore,
    Done(String),
}

/// Incremental decoder fed one physical line at a time.
#[derive(Debug, Default)]
pub struct HeredocDecoder {
    lines: Vec<String>,
}

impl HeredocDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) -> Result<Step, ErrorKind> {
        if line == TERMINATOR {
            return Ok(Step::Done(std::mem::take(&mut self.lines).join("\n")));
        }
        let literal = match line.strip_prefix(TERMINATOR) {
            Some(escaped) if escaped.starts_with(TERMINATOR) => escaped,
            Some(_) => return Err(ErrorKind::InvalidEscapeSequenceInMultilineField),
            None => line,
        };
        self.lines.push(literal.to_owned());
        Ok(Step::NeedMore)
    }
}

/// Decodes a heredoc body (the text following the `name:` line).
/// Anything after the terminator line is ignored.
pub fn decode_body(body: &str) -> Result<String, ErrorKind> {
    let mut decoder = HeredocDecoder::new();
    for line in body.split('\n') {
        if let Step::Done(value) = decoder.push_line(line)? {
            return Ok(value);
        }
    }
    Err(ErrorKind::UnterminatedMultilineField)
}
