//! Line/column cursor arithmetic

use serde::{Deserialize, Serialize};

/// A cursor into a text stream (0-indexed line and column)
///
/// Columns are counted in UTF-16 code units, the unit source map
/// consumers use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Offset {
    pub line: usize,
    pub column: usize,
}

impl Offset {
    pub fn new(line: usize, column: usize) -> Self {
        Offset { line, column }
    }

    /// Move the cursor past `lines`
    ///
    /// Multi-line input puts the cursor at the end of the last line;
    /// single-line input extends the current column. An empty slice leaves
    /// the cursor where it is.
    pub fn advance<S: AsRef<str>>(&mut self, lines: &[S]) {
        let Some(last) = lines.last() else {
            return;
        };
        let width = text_width(last.as_ref());

        self.line += lines.len() - 1;
        self.column = if lines.len() > 1 {
            width
        } else {
            self.column + width
        };
    }
}

/// Width of `text` in UTF-16 code units
pub fn text_width(text: &str) -> usize {
    text.encode_utf16().count()
}
