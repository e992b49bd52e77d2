use std::borrow::Cow;

use crate::error::Location;

/// Replaces every `"\r\n"` and lone `"\r"` with `"\n"`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Read position over an immutable, LF-normalized buffer.
///
/// Whitespace is skipped before literals, tokens and end-of-input checks
/// unless skipping is turned off with [`Cursor::without_skipping`].
#[derive(Debug, Clone)]
pub struct Cursor<'text> {
    text: &'text str,
    position: usize,
    skip_whitespace: bool,
}

impl<'text> Cursor<'text> {
    pub fn new(text: &'text str) -> Self {
        Self {
            text,
            position: 0,
            skip_whitespace: true,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn restore(&mut self, position: usize) {
        self.position = position;
    }

    fn rest(&self) -> &'text str {
        &self.text[self.position..]
    }

    fn skip_ignorable(&mut self) {
        if self.skip_whitespace {
            let rest = self.rest();
            self.position += rest.len() - rest.trim_start().len();
        }
    }

    /// Runs `scan` with whitespace skipping off, restoring the previous mode afterwards.
    pub fn without_skipping<T>(&mut self, scan: impl FnOnce(&mut Self) -> T) -> T {
        let previous = std::mem::replace(&mut self.skip_whitespace, false);
        let result = scan(self);
        self.skip_whitespace = previous;
        result
    }

    pub fn is_at_end(&mut self) -> bool {
        self.skip_ignorable();
        self.position == self.text.len()
    }

    pub fn peek_literal(&mut self, literal: &str) -> bool {
        self.skip_ignorable();
        self.rest().starts_with(literal)
    }

    pub fn skip_literal(&mut self, literal: &str) -> bool {
        let found = self.peek_literal(literal);
        if found {
            self.position += literal.len();
        }
        found
    }

    /// Consumes text up to (not including) `delimiter`, or up to the end of input.
    /// Returns `None` when nothing could be consumed.
    pub fn scan_up_to(&mut self, delimiter: char) -> Option<&'text str> {
        self.skip_ignorable();
        let rest = self.rest();
        let end = rest.find(delimiter).unwrap_or(rest.len());
        self.take(end)
    }

    /// Consumes the maximal run of characters matching `class`.
    pub fn scan_while(&mut self, class: impl Fn(char) -> bool) -> Option<&'text str> {
        self.skip_ignorable();
        let rest = self.rest();
        let end = rest.find(|c: char| !class(c)).unwrap_or(rest.len());
        self.take(end)
    }

    /// Consumes the remainder of the current physical line and its terminator.
    /// Returns `None` only at end of input.
    pub fn scan_line(&mut self) -> Option<&'text str> {
        self.without_skipping(|cursor| {
            if cursor.skip_literal("\n") {
                return Some("");
            }
            let line = cursor.scan_up_to('\n')?;
            cursor.skip_literal("\n");
            Some(line)
        })
    }

    fn take(&mut self, len: usize) -> Option<&'text str> {
        if len == 0 {
            return None;
        }
        let taken = &self.rest()[..len];
        self.position += len;
        Some(taken)
    }

    /// Rescans the text before `position`; meant for the error path only.
    pub fn location_at(&self, position: usize) -> Location {
        let consumed = &self.text[..position];
        let line_start = consumed.rfind('\n').map_or(0, |newline| newline + 1);
        Location {
            line: consumed.matches('\n').count() + 1,
            column: consumed[line_start..].chars().count() + 1,
        }
    }

    pub fn location(&self) -> Location {
        self.location_at(self.position)
    }
}
