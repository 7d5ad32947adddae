//! # Codemin Code Chunker
//!
//! Breakpoint-aware chunking of source text for embedding, and an overlapping
//! splitter for streaming a whole corpus into a model's context window.
//!
//! ## Architecture
//!
//! ```text
//! Source file
//!     │
//!     └──> Chunker (line scan)
//!          ├─> Breakpoints (ordered line predicates)
//!          ├─> Soft cut before a breakpoint once the budget is exceeded
//!          ├─> Hard cut when the buffer reaches the budget
//!          └─> CodeChunk[] { id, lines, chunk_index }
//!
//! Unified text (possibly many files)
//!     │
//!     └──> ContextSplitter
//!          ├─> BreakMarkers (banner > doc > function > class > \n\n > \n)
//!          ├─> Overlap + minimum advance
//!          └─> ContextTurns ("[CODE CONTEXT - PART i/n]")
//! ```
//!
//! Sizes are UTF-8 byte lengths; cuts always land on char boundaries.
//!
//! ## Example
//!
//! ```rust
//! use codemin_code_chunker::{split_for_context, Chunker};
//!
//! let code = "import x from 'x';\n\nfunction run() {\n  return x();\n}\n";
//! let chunks = Chunker::default().chunk_file("src/run.js", code);
//! assert_eq!(chunks[0].id, "src/run.js::0");
//!
//! let parts = split_for_context("short text", 16_000, 1_000).unwrap();
//! assert_eq!(parts, vec!["short text".to_string()]);
//! ```

mod breakpoints;
mod chunker;
mod config;
mod context_splitter;
mod error;
mod text;
mod turns;
mod types;

pub use breakpoints::{BreakpointRule, Breakpoints};
pub use chunker::{Chunker, ChunkingStats};
pub use config::{ChunkerConfig, SplitterConfig};
pub use context_splitter::{split_for_context, BreakMarker, ContextSplitter};
pub use error::{ChunkerError, Result};
pub use turns::{render_retrieved_context, ContextTurn, ContextTurns};
pub use types::CodeChunk;
