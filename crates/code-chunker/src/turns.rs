use crate::types::CodeChunk;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One splitter chunk wrapped as a conversational turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTurn {
    /// 1-based position
    pub index: usize,
    pub total: usize,
    pub body: String,
}

impl fmt::Display for ContextTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total > 1 {
            write!(
                f,
                "[CODE CONTEXT - PART {}/{}]\n\n{}",
                self.index, self.total, self.body
            )
        } else {
            f.write_str(&self.body)
        }
    }
}

/// Ordered turns built from the output of the context splitter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTurns {
    turns: Vec<ContextTurn>,
}

impl ContextTurns {
    pub fn from_chunks(chunks: Vec<String>) -> Self {
        let total = chunks.len();
        let turns = chunks
            .into_iter()
            .enumerate()
            .map(|(idx, body)| ContextTurn {
                index: idx + 1,
                total,
                body,
            })
            .collect();
        Self { turns }
    }

    /// Announcement sent before the first chunk
    #[must_use]
    pub fn preamble(&self) -> String {
        format!(
            "I will send {} chunk(s) of my source code for analysis. Please wait until all of the code has been sent before answering in detail.",
            self.turns.len()
        )
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContextTurn> {
        self.turns.iter()
    }

    /// Every turn rendered with its position marker
    pub fn render(&self) -> Vec<String> {
        self.turns.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ContextTurns {
    type Item = &'a ContextTurn;
    type IntoIter = std::slice::Iter<'a, ContextTurn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

/// Render retrieved chunks as the context block handed to a completion model
pub fn render_retrieved_context(chunks: &[CodeChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| {
            format!(
                "-- file: {} (lines {}-{}) --\n```\n{}\n```",
                chunk.file_path, chunk.start_line, chunk.end_line, chunk.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
