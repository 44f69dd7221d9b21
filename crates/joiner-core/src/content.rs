//! Ordered buffer of output fragments

/// Append-only list of content fragments
///
/// Fragments are joined in append order with no separator; any line
/// terminators must already be part of the fragments.
#[derive(Debug, Clone, Default)]
pub struct ContentAccumulator {
    parts: Vec<String>,
}

impl ContentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>) {
        self.parts.push(text.into());
    }

    pub fn joined_content(&self) -> String {
        self.parts.concat()
    }

    /// Number of fragments appended so far
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
