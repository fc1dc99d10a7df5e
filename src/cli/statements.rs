//! Textual statement splitting for display.
//!
//! Splits on every `;` with no knowledge of string literals, dollar-quoted
//! bodies or comments. A `;` inside any of those ends a fragment early. The
//! fragments are only ever echoed, never executed.

/// Characters of a statement shown per line
pub const PREVIEW_CHARS: usize = 80;

/// Non-empty, trimmed fragments of a SQL document, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements<'a> {
    items: Vec<&'a str>,
}

impl<'a> Statements<'a> {
    pub fn split(sql: &'a str) -> Statements<'a> {
        let items = sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        Statements { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Yields `(number, statement)` with numbering starting at 1
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.items.iter().enumerate().map(|(i, s)| (i + 1, *s))
    }

    pub(crate) fn as_slice(&self) -> &[&'a str] {
        &self.items
    }
}

/// First `max` characters of `statement`, cut on a char boundary
pub fn preview(statement: &str, max: usize) -> &str {
    match statement.char_indices().nth(max) {
        Some((idx, _)) => &statement[..idx],
        None => statement,
    }
}
