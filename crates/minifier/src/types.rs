use serde::{Deserialize, Serialize};

/// A text file handed to the minifier by the resolution layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceFile {
    /// Relative, slash-normalized path
    pub path: String,

    /// UTF-8 text content
    pub content: String,

    /// Size on disk (or in the archive) in bytes
    pub size_bytes: u64,
}

impl SourceFile {
    /// Create a source file, deriving `size_bytes` from the content
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            path: normalize_path(&path.into()),
            size_bytes: content.len() as u64,
            content,
        }
    }
}

/// Result of minifying a single file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinifiedFile {
    pub path: String,
    pub content: String,

    /// Input length in bytes
    pub original_size: usize,

    /// Output length in bytes
    pub minified_size: usize,
}

impl MinifiedFile {
    pub(crate) fn new(path: &str, original: &str, content: String) -> Self {
        Self {
            path: path.to_string(),
            original_size: original.len(),
            minified_size: content.len(),
            content,
        }
    }

    /// Bytes saved by minification (zero if the output grew)
    #[must_use]
    pub const fn saved_bytes(&self) -> usize {
        self.original_size.saturating_sub(self.minified_size)
    }
}

/// Turn `a\b\c` into `a/b/c` and drop a leading `./`
pub(crate) fn normalize_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .map(str::to_string)
        .unwrap_or(normalized)
}
