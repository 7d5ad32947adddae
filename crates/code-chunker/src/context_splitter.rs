//! Overlapping splitter for streaming a large text into a model's context.
//!
//! ```text
//! |<------------- max_chunk_size ------------->|
//! pos                        break marker ^    end
//!                       |<- overlap ->|
//!                       next pos
//! ```
//!
//! Each window is cut at the last occurrence of the highest-priority marker
//! it contains (file banner, doc comment, function, class, blank line,
//! newline), or at the window edge when none is found. The next window starts
//! `overlap_size` bytes before the cut, but never less than `min_advance`
//! past the previous start and never after the cut.

use crate::config::SplitterConfig;
use crate::error::{ChunkerError, Result};
use crate::text::{floor_char_boundary, next_char_boundary};
use std::ops::Range;

/// A literal string that marks a preferred place to cut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakMarker {
    name: String,
    literal: String,
}

impl BreakMarker {
    pub fn new(name: impl Into<String>, literal: impl Into<String>) -> Result<Self> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(ChunkerError::EmptyMarker);
        }
        Ok(Self {
            name: name.into(),
            literal,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Start of the last occurrence that begins at or before `end` and
    /// strictly after `start`
    fn last_between(&self, text: &str, start: usize, end: usize) -> Option<usize> {
        let limit = floor_char_boundary(text, end.saturating_add(self.literal.len()));
        text[..limit]
            .rfind(self.literal.as_str())
            .filter(|&idx| idx > start)
    }
}

const DEFAULT_MARKERS: &[(&str, &str)] = &[
    ("file_banner", "\n\n// -----"),
    ("doc_comment", "\n\n/**"),
    ("function", "\n\nfunction "),
    ("class", "\n\nclass "),
    ("blank_line", "\n\n"),
    ("newline", "\n"),
];

fn default_markers() -> Vec<BreakMarker> {
    DEFAULT_MARKERS
        .iter()
        .map(|(name, literal)| BreakMarker {
            name: (*name).to_string(),
            literal: (*literal).to_string(),
        })
        .collect()
}

/// Splits text into overlapping, context-sized chunks
#[derive(Debug, Clone)]
pub struct ContextSplitter {
    config: SplitterConfig,
    markers: Vec<BreakMarker>,
}

impl Default for ContextSplitter {
    fn default() -> Self {
        Self {
            config: SplitterConfig::default(),
            markers: default_markers(),
        }
    }
}

impl ContextSplitter {
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::invalid_config)?;
        Ok(Self {
            config,
            markers: default_markers(),
        })
    }

    /// Builder: replace the marker list (highest priority first)
    #[must_use]
    pub fn with_markers(mut self, markers: Vec<BreakMarker>) -> Self {
        self.markers = markers;
        self
    }

    /// Builder: insert a marker at `priority` (0 = tried first)
    #[must_use]
    pub fn with_marker_at(mut self, priority: usize, marker: BreakMarker) -> Self {
        let priority = priority.min(self.markers.len());
        self.markers.insert(priority, marker);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    pub fn markers(&self) -> &[BreakMarker] {
        &self.markers
    }

    /// Split `text` into owned chunks
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_spans(text)
            .into_iter()
            .map(|span| text[span].to_string())
            .collect()
    }

    /// Byte ranges of each chunk within `text`
    pub fn split_spans(&self, text: &str) -> Vec<Range<usize>> {
        let len = text.len();
        let max = self.config.max_chunk_size;
        if len <= max {
            return vec![0..len];
        }

        let overlap = self.config.overlap_size;
        let min_advance = self.config.min_advance();
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < len {
            let mut end = floor_char_boundary(text, pos.saturating_add(max));
            if end <= pos {
                end = next_char_boundary(text, pos);
            }
            if end < len {
                end = self.find_break_point(text, pos, end);
            }

            spans.push(pos..end);

            // Rounding up keeps the overlap within `overlap_size`
            let candidate = end
                .saturating_sub(overlap)
                .max(pos + min_advance)
                .min(end);
            let next = if text.is_char_boundary(candidate) {
                candidate
            } else {
                next_char_boundary(text, candidate).min(end)
            };
            pos = if next > pos { next } else { end };
        }

        log::debug!(
            "Split {} bytes into {} context chunks (max={}, overlap={})",
            len,
            spans.len(),
            max,
            overlap
        );
        spans
    }

    fn find_break_point(&self, text: &str, start: usize, end: usize) -> usize {
        for marker in &self.markers {
            if let Some(idx) = marker.last_between(text, start, end) {
                log::trace!("Cut at {} marker ({idx})", marker.name);
                return idx;
            }
        }
        end
    }
}

/// Split `text` with the default markers
pub fn split_for_context(
    text: &str,
    max_chunk_size: usize,
    overlap_size: usize,
) -> Result<Vec<String>> {
    let splitter = ContextSplitter::new(SplitterConfig {
        max_chunk_size,
        overlap_size,
    })?;
    Ok(splitter.split(text))
}
