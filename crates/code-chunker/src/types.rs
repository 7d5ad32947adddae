use serde::{Deserialize, Serialize};

/// A line-bounded slice of one file, ready for embedding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeChunk {
    /// `<file_path>::<chunk_index>`, unique per file
    pub id: String,

    /// Trimmed chunk text
    pub content: String,

    /// Source file path
    pub file_path: String,

    /// Start line (0-indexed, inclusive)
    pub start_line: usize,

    /// End line (0-indexed, inclusive)
    pub end_line: usize,

    /// Position of this chunk within its file, starting at 0
    pub chunk_index: usize,
}

impl CodeChunk {
    /// Create a new code chunk; the id is derived from path and index
    #[must_use]
    pub fn new(
        file_path: impl Into<String>,
        chunk_index: usize,
        start_line: usize,
        end_line: usize,
        content: impl Into<String>,
    ) -> Self {
        let file_path = file_path.into();
        Self {
            id: Self::make_id(&file_path, chunk_index),
            content: content.into(),
            file_path,
            start_line,
            end_line,
            chunk_index,
        }
    }

    /// Build the chunk id for a file and index
    #[must_use]
    pub fn make_id(file_path: &str, chunk_index: usize) -> String {
        format!("{file_path}::{chunk_index}")
    }

    /// Get the number of lines in this chunk
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// Check if chunk contains a specific line
    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// Content length in bytes
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_id() {
        let chunk = CodeChunk::new("src/app.ts", 3, 10, 15, "code");
        assert_eq!(chunk.id, "src/app.ts::3");
        assert_eq!(chunk.chunk_index, 3);
    }

    #[test]
    fn test_chunk_line_count() {
        let chunk = CodeChunk::new("test.js", 0, 10, 15, "code");
        assert_eq!(chunk.line_count(), 6);
    }

    #[test]
    fn test_chunk_contains_line() {
        let chunk = CodeChunk::new("test.js", 0, 10, 15, "code");
        assert!(chunk.contains_line(10));
        assert!(chunk.contains_line(12));
        assert!(chunk.contains_line(15));
        assert!(!chunk.contains_line(9));
        assert!(!chunk.contains_line(16));
    }

    #[test]
    fn test_serialized_field_names() {
        let chunk = CodeChunk::new("a.py", 0, 0, 2, "x = 1");
        let value = serde_json::to_value(&chunk).unwrap();
        assert_eq!(value["file_path"], "a.py");
        assert_eq!(value["start_line"], 0);
        assert_eq!(value["end_line"], 2);
        assert_eq!(value["id"], "a.py::0");
    }
}
