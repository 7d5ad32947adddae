use crate::error::{MinifyError, Result};
use crate::family::is_minifiable;
use crate::minifier::Minifier;
use crate::types::{normalize_path, SourceFile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supplies file text to the batch minifier.
///
/// Implementations own all I/O (archive members, directories, uploads); the
/// minifier itself only ever sees the returned text.
pub trait SourceResolver {
    fn resolve(&self, path: &str) -> Result<SourceFile>;
}

/// Resolver backed by an in-memory map of path -> text
#[derive(Debug, Clone, Default)]
pub struct InMemoryResolver {
    files: BTreeMap<String, String>,
}

impl InMemoryResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a file
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files
            .insert(normalize_path(&path.into()), content.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceResolver for InMemoryResolver {
    fn resolve(&self, path: &str) -> Result<SourceFile> {
        let key = normalize_path(path);
        self.files
            .get(&key)
            .map(|content| SourceFile::new(key.clone(), content.clone()))
            .ok_or_else(|| MinifyError::not_found(path))
    }
}

/// Per-file size line of a batch report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileStats {
    pub path: String,
    pub original_size: usize,
    pub minified_size: usize,
}

/// Unified output of a batch minification
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchReport {
    /// Banner-delimited minified text of every file, trimmed
    pub content: String,

    /// Sum of input sizes (bytes) of the files that made it into `content`
    pub original_size: usize,

    /// Sum of output sizes (bytes)
    pub minified_size: usize,

    /// Per-file sizes, in input order
    pub files: Vec<FileStats>,

    /// Supported paths the resolver could not supply
    #[serde(default)]
    pub unreadable: Vec<String>,
}

impl BatchReport {
    /// `(original - minified) / original * 100`, or `None` for an empty input
    #[must_use]
    pub fn reduction_percentage(&self) -> Option<f64> {
        if self.original_size == 0 {
            return None;
        }
        let original = self.original_size as f64;
        Some((original - self.minified_size as f64) / original * 100.0)
    }
}

/// Banner line that opens each file's section in the unified text
#[must_use]
pub fn file_banner(path: &str) -> String {
    format!("// ----- {path} -----")
}

/// Split `paths` into (supported, skipped) by the minifier's support predicate
pub fn partition_supported<S: AsRef<str>>(paths: &[S]) -> (Vec<String>, Vec<String>) {
    let mut supported = Vec::new();
    let mut skipped = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if is_minifiable(path) {
            supported.push(path.to_string());
        } else {
            skipped.push(path.to_string());
        }
    }
    (supported, skipped)
}

/// Minifies a selection of files into one unified text
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchMinifier {
    minifier: Minifier,
}

impl BatchMinifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            minifier: Minifier::new(),
        }
    }

    /// Minify every supported path in `paths`.
    ///
    /// Unsupported paths are skipped without a trace in the report; use
    /// [`partition_supported`] to count them. A resolver failure only drops
    /// that file. Fails with [`MinifyError::NoSupportedFiles`] when nothing in
    /// `paths` is supported.
    pub fn minify_files<S, R>(&self, paths: &[S], resolver: &R) -> Result<BatchReport>
    where
        S: AsRef<str>,
        R: SourceResolver + ?Sized,
    {
        let (supported, skipped) = partition_supported(paths);
        log::debug!(
            "Processing {} supported files out of {} total files",
            supported.len(),
            paths.len()
        );
        if !skipped.is_empty() {
            log::debug!("Skipping {} unsupported files: {:?}", skipped.len(), skipped);
        }
        if supported.is_empty() {
            return Err(MinifyError::NoSupportedFiles {
                requested: paths.len(),
            });
        }

        let mut report = BatchReport::default();
        let mut unified = String::new();

        for path in &supported {
            let source = match resolver.resolve(path) {
                Ok(source) => source,
                Err(e) => {
                    log::warn!("Skipping {path}: {e}");
                    report.unreadable.push(path.clone());
                    continue;
                }
            };

            let Some(minified) = self.minifier.minify_source(&source) else {
                continue;
            };

            unified.push_str(&file_banner(&minified.path));
            unified.push('\n');
            unified.push_str(&minified.content);
            unified.push_str("\n\n");

            report.original_size += minified.original_size;
            report.minified_size += minified.minified_size;
            report.files.push(FileStats {
                path: minified.path,
                original_size: minified.original_size,
                minified_size: minified.minified_size,
            });
        }

        report.content = unified.trim().to_string();
        log::info!(
            "Minified {} files: {} -> {} bytes ({} unreadable)",
            report.files.len(),
            report.original_size,
            report.minified_size,
            report.unreadable.len()
        );
        Ok(report)
    }
}
