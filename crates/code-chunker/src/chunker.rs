use crate::breakpoints::Breakpoints;
use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::text::{floor_char_boundary, next_char_boundary};
use crate::types::CodeChunk;

/// Line-based chunker that prefers to cut at logical breakpoints
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
    breakpoints: Breakpoints,
}

impl Chunker {
    /// Create a new chunker with configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::invalid_config)?;
        Ok(Self {
            config,
            breakpoints: Breakpoints::default(),
        })
    }

    /// Builder: replace the breakpoint rules
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Split one file into ordered chunks.
    ///
    /// Lines accumulate into a buffer. When the next line would push the
    /// buffer past `max_chunk_chars` and that line is a breakpoint, the buffer
    /// is emitted first so the breakpoint opens the next chunk. A buffer that
    /// reaches the limit is emitted right away, breakpoint or not. Lines longer
    /// than the limit are cut into limit-sized segments that share the line
    /// number.
    pub fn chunk_file(&self, file_path: &str, content: &str) -> Vec<CodeChunk> {
        let max = self.config.max_chunk_chars;
        let mut builder = ChunkBuilder::new(file_path);

        // A trailing newline does not open an extra empty line.
        let body = content.strip_suffix('\n').unwrap_or(content);

        for (line_no, line) in body.split('\n').enumerate() {
            for segment in split_long_line(line, max) {
                if builder.len() + segment.len() > max
                    && !builder.is_empty()
                    && self.breakpoints.is_breakpoint(segment)
                {
                    builder.flush();
                }

                builder.push_line(line_no, segment);

                if builder.len() >= max {
                    builder.flush();
                }
            }
        }

        builder.flush();
        let chunks = builder.finish();
        log::debug!("Chunked {} into {} chunks", file_path, chunks.len());
        chunks
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    #[must_use]
    pub const fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Get statistics about chunking
    #[must_use]
    pub fn get_stats(chunks: &[CodeChunk]) -> ChunkingStats {
        let total_chars: usize = chunks.iter().map(CodeChunk::char_len).sum();
        ChunkingStats {
            total_chunks: chunks.len(),
            total_lines: chunks.iter().map(CodeChunk::line_count).sum(),
            total_chars,
            avg_chars_per_chunk: if chunks.is_empty() {
                0
            } else {
                total_chars / chunks.len()
            },
            min_chars: chunks.iter().map(CodeChunk::char_len).min().unwrap_or(0),
            max_chars: chunks.iter().map(CodeChunk::char_len).max().unwrap_or(0),
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            config: ChunkerConfig::default(),
            breakpoints: Breakpoints::default(),
        }
    }
}

/// Accumulates lines and emits trimmed chunks with line cursors
struct ChunkBuilder<'a> {
    file_path: &'a str,
    buffer: String,
    start_line: Option<usize>,
    last_line: usize,
    chunks: Vec<CodeChunk>,
}

impl<'a> ChunkBuilder<'a> {
    fn new(file_path: &'a str) -> Self {
        Self {
            file_path,
            buffer: String::new(),
            start_line: None,
            last_line: 0,
            chunks: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn push_line(&mut self, line_no: usize, line: &str) {
        self.start_line.get_or_insert(line_no);
        self.last_line = line_no;
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Emit the buffer as a chunk. Whitespace-only buffers are kept so the
    /// lines they hold are covered by the next chunk.
    fn flush(&mut self) {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            return;
        }

        let start_line = self.start_line.unwrap_or(self.last_line);
        let chunk = CodeChunk::new(
            self.file_path,
            self.chunks.len(),
            start_line,
            self.last_line,
            trimmed,
        );
        self.chunks.push(chunk);
        self.buffer.clear();
        self.start_line = None;
    }

    fn finish(self) -> Vec<CodeChunk> {
        self.chunks
    }
}

/// Cut `line` into pieces of at most `max` bytes on char boundaries
fn split_long_line(line: &str, max: usize) -> Vec<&str> {
    if line.len() <= max {
        return vec![line];
    }

    let mut segments = Vec::new();
    let mut rest = line;
    while rest.len() > max {
        let mut cut = floor_char_boundary(rest, max);
        if cut == 0 {
            cut = next_char_boundary(rest, 0);
        }
        let (head, tail) = rest.split_at(cut);
        segments.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        segments.push(rest);
    }
    segments
}

/// Statistics about chunking results
#[derive(Debug, Clone)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_lines: usize,
    pub total_chars: usize,
    pub avg_chars_per_chunk: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Lines: {} | Chars: {} | Avg: {} | Range: {}-{}",
            self.total_chunks,
            self.total_lines,
            self.total_chars,
            self.avg_chars_per_chunk,
            self.min_chars,
            self.max_chars
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const JS_CODE: &str = r#"import fs from 'fs';

function readConfig(path) {
  const raw = fs.readFileSync(path, 'utf-8');
  return JSON.parse(raw);
}

class Store {
  constructor() {
    this.items = [];
  }
}

export default Store;
"#;

    fn chunker(max: usize) -> Chunker {
        Chunker::new(ChunkerConfig {
            max_chunk_chars: max,
        })
        .unwrap()
    }

    #[test]
    fn test_small_file_is_one_chunk() {
        let chunks = Chunker::default().chunk_file("src/store.js", JS_CODE);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].id, "src/store.js::0");
        assert_eq!(chunks[0].content, JS_CODE.trim());
        assert_eq!(chunks[0].start_line, 0);
        assert_eq!(chunks[0].end_line, 13);
    }

    #[test]
    fn test_empty_file_has_no_chunks() {
        assert!(Chunker::default().chunk_file("a.js", "").is_empty());
        assert!(Chunker::default().chunk_file("a.js", "\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_breaks_before_breakpoint_line() {
        let code = "let a = 1;\nlet b = 2;\nlet c = 3;\nfunction go() {\n  run();\n}\n";
        let chunks = chunker(40).chunk_file("go.js", code);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].content, "let a = 1;\nlet b = 2;\nlet c = 3;");
        assert_eq!((chunks[0].start_line, chunks[0].end_line), (0, 2));
        assert_eq!(chunks[1].content, "function go() {\n  run();\n}");
        assert_eq!((chunks[1].start_line, chunks[1].end_line), (3, 5));
        assert_eq!(chunks[1].id, "go.js::1");
    }

    #[test]
    fn test_hard_cap_ignores_missing_breakpoint() {
        let chunks = chunker(80).chunk_file("src/store.js", JS_CODE);
        assert_eq!(chunks.len(), 3);
        assert_eq!((chunks[0].start_line, chunks[0].end_line), (0, 3));
        assert!(chunks[1].content.starts_with("return JSON.parse(raw);"));
        assert!(chunks[2].content.ends_with("export default Store;"));
    }

    #[test]
    fn test_line_ranges_are_contiguous() {
        let chunks = chunker(60).chunk_file("src/store.js", JS_CODE);
        assert_eq!(chunks[0].start_line, 0);
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end_line + 1, pair[1].start_line);
        }
        for (idx, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, idx);
            assert!(chunk.start_line <= chunk.end_line);
        }
    }

    #[test]
    fn test_hard_cap_without_breakpoints() {
        let content = (0..40)
            .map(|i| format!("  value_{i} = compute({i});"))
            .collect::<Vec<_>>()
            .join("\n");
        let chunks = chunker(200).chunk_file("dense.js", &content);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.char_len() < 200 + 30, "chunk too large: {}", chunk.char_len());
        }
    }

    #[test]
    fn test_long_single_line_is_segmented() {
        let line = "x".repeat(5000);
        let chunks = Chunker::default().chunk_file("min.js", &line);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].char_len(), 2000);
        assert_eq!(chunks[1].char_len(), 2000);
        assert_eq!(chunks[2].char_len(), 1000);
        assert!(chunks.iter().all(|c| c.start_line == 0 && c.end_line == 0));
    }

    #[test]
    fn test_segmentation_respects_char_boundaries() {
        let line = "é".repeat(30);
        let segments = split_long_line(&line, 7);
        assert!(segments.iter().all(|s| s.len() <= 7));
        assert_eq!(segments.concat(), line);
    }

    #[test]
    fn test_leading_blank_lines_belong_to_first_chunk() {
        let chunks = Chunker::default().chunk_file("a.js", "\n\nlet a = 1;\n");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_line, 0);
        assert_eq!(chunks[0].end_line, 2);
        assert_eq!(chunks[0].content, "let a = 1;");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = Chunker::new(ChunkerConfig { max_chunk_chars: 0 }).unwrap_err();
        assert!(matches!(err, ChunkerError::InvalidConfig(_)));
    }

    #[test]
    fn test_custom_breakpoints() {
        let code = "def a():\n    return 1\ndef b():\n    return 2\n";
        let chunker = chunker(25).with_breakpoints(
            Breakpoints::empty()
                .with_rule("python_def", r"^def\s+\w+")
                .unwrap(),
        );
        let chunks = chunker.chunk_file("m.py", code);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].content, "def b():\n    return 2");
        assert_eq!(chunks[1].start_line, 2);
    }

    #[test]
    fn test_chunking_stats() {
        let chunks = chunker(60).chunk_file("src/store.js", JS_CODE);
        let stats = Chunker::get_stats(&chunks);

        assert_eq!(stats.total_chunks, chunks.len());
        assert!(stats.total_chars > 0);
        assert!(stats.min_chars <= stats.avg_chars_per_chunk);
        assert!(stats.avg_chars_per_chunk <= stats.max_chars);
        assert!(stats.to_string().starts_with("Chunks: "));
    }
}
