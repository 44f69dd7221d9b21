//! Content nodes appended to a [`Builder`](crate::Builder)

/// Split text into lines on `\n`
///
/// Text ending with a terminator yields a trailing empty line, which is how
/// "ends with newline" is told apart from "no trailing newline". Empty text
/// has no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// A fragment of output content
///
/// Anything that can hand out its text can be appended. The line
/// decomposition defaults to [`split_lines`]; implementors that already
/// hold their lines may return them directly, as long as rejoining them
/// with `\n` reproduces [`Node::content`].
pub trait Node {
    fn content(&self) -> &str;

    fn lines(&self) -> Vec<&str> {
        split_lines(self.content())
    }

    /// Whether every generated line should map to one frozen original line
    ///
    /// Used for synthetic content that has no per-line counterpart in its
    /// source but must still declare an origin.
    fn suppresses_per_line_mapping(&self) -> bool {
        false
    }
}

impl Node for str {
    fn content(&self) -> &str {
        self
    }
}

impl Node for String {
    fn content(&self) -> &str {
        self
    }
}

/// Owned text content with an optional mapping-suppression flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    content: String,
    synthetic: bool,
}

impl TextNode {
    pub fn new(content: impl Into<String>) -> Self {
        TextNode {
            content: content.into(),
            synthetic: false,
        }
    }

    /// Content injected by the pipeline rather than read from a file
    ///
    /// All of its lines map to the same original line.
    pub fn synthetic(content: impl Into<String>) -> Self {
        TextNode {
            content: content.into(),
            synthetic: true,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

impl Node for TextNode {
    fn content(&self) -> &str {
        &self.content
    }

    fn suppresses_per_line_mapping(&self) -> bool {
        self.synthetic
    }
}

impl From<String> for TextNode {
    fn from(content: String) -> Self {
        TextNode::new(content)
    }
}

impl From<&str> for TextNode {
    fn from(content: &str) -> Self {
        TextNode::new(content)
    }
}
