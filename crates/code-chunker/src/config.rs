use serde::{Deserialize, Serialize};

/// Configuration for line-based code chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Maximum chunk size in bytes (~4 bytes per token)
    pub max_chunk_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 2000,
        }
    }
}

impl ChunkerConfig {
    /// Create config optimized for embeddings (smaller, focused chunks)
    pub fn for_embeddings() -> Self {
        Self {
            max_chunk_chars: 1500,
        }
    }

    /// Create config optimized for LLM context (larger chunks)
    pub fn for_llm_context() -> Self {
        Self {
            max_chunk_chars: 8000,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_chars == 0 {
            return Err("max_chunk_chars must be > 0".to_string());
        }
        Ok(())
    }
}

/// Configuration for the context-window splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Maximum chunk size in bytes
    pub max_chunk_size: usize,

    /// Bytes repeated at the start of a chunk from the end of the previous one
    pub overlap_size: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 16_000,
            overlap_size: 1_000,
        }
    }
}

impl SplitterConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be > 0".to_string());
        }

        if self.overlap_size >= self.max_chunk_size {
            return Err(format!(
                "overlap_size ({}) must be smaller than max_chunk_size ({})",
                self.overlap_size, self.max_chunk_size
            ));
        }

        Ok(())
    }

    /// Minimum cursor advance per chunk: a third of the window, at least 100
    #[must_use]
    pub fn min_advance(&self) -> usize {
        (self.max_chunk_size / 3).max(100)
    }
}
