use crate::config::ScanConfig;
use codemin_minifier::{MinifyError, SourceFile, SourceResolver, BINARY_EXTENSIONS};
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Collects candidate text files under a project root
pub struct FileScanner {
    root: PathBuf,
    limits: ScanConfig,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>, limits: ScanConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            limits,
        }
    }

    /// Relative, slash-separated paths of text files under the root, in
    /// file-name order, capped at `max_files`. Hidden entries, known binary
    /// extensions and files above `max_file_bytes` are left out.
    pub fn scan(&self) -> Vec<String> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_name(|a, b| a.cmp(b));

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Failed to read entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if is_binary_path(path) {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if meta.len() > self.limits.max_file_bytes {
                    log::debug!(
                        "Skipping large file {} ({} bytes > {})",
                        path.display(),
                        meta.len(),
                        self.limits.max_file_bytes
                    );
                    continue;
                }
            }

            let Some(relative) = Self::relative_path(&self.root, path) else {
                continue;
            };
            files.push(relative);

            if files.len() >= self.limits.max_files {
                log::info!(
                    "Stopped scanning {} at {} files",
                    self.root.display(),
                    self.limits.max_files
                );
                break;
            }
        }

        log::debug!("Found {} text files under {}", files.len(), self.root.display());
        files
    }

    fn relative_path(root: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }
}

/// Whether `path` carries a binary-denylist extension
pub fn is_binary_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            BINARY_EXTENSIONS.iter().any(|candidate| *candidate == ext)
        })
        .unwrap_or(false)
}

/// `root.join(relative)`, or `None` when `relative` is absolute or climbs
/// out of the root with `..`
pub fn confined_join(root: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        None
    } else {
        Some(root.join(relative))
    }
}

/// Resolves relative paths against a directory on disk
pub struct DirResolver {
    root: PathBuf,
    max_file_bytes: u64,
}

impl DirResolver {
    pub fn new(root: impl AsRef<Path>, max_file_bytes: u64) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_file_bytes,
        }
    }
}

impl SourceResolver for DirResolver {
    fn resolve(&self, path: &str) -> codemin_minifier::Result<SourceFile> {
        let full = confined_join(&self.root, path).ok_or_else(|| {
            MinifyError::resolve(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "path leaves the project root"),
            )
        })?;
        let meta = fs::metadata(&full).map_err(|e| MinifyError::resolve(path, e))?;
        if !meta.is_file() {
            return Err(MinifyError::not_found(path));
        }
        if meta.len() > self.max_file_bytes {
            return Err(MinifyError::resolve(
                path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} bytes exceeds limit of {}", meta.len(), self.max_file_bytes),
                ),
            ));
        }

        let content = fs::read_to_string(&full).map_err(|e| MinifyError::resolve(path, e))?;
        let mut file = SourceFile::new(path, content);
        file.size_bytes = meta.len();
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, body: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn scan_skips_hidden_binary_and_large_files() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write(root, "src/app.js", b"let a = 1;");
        write(root, "src/lib.rs", b"fn main() {}");
        write(root, "logo.png", b"\x89PNG");
        write(root, ".git/config", b"[core]");
        write(root, "big.txt", &vec![b'a'; 64]);

        let scanner = FileScanner::new(
            root,
            ScanConfig {
                max_files: 50,
                max_file_bytes: 32,
            },
        );
        assert_eq!(
            scanner.scan(),
            vec!["src/app.js".to_string(), "src/lib.rs".to_string()]
        );
    }

    #[test]
    fn scan_stops_at_max_files() {
        let temp = tempdir().unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            write(temp.path(), name, b"x");
        }
        let scanner = FileScanner::new(
            temp.path(),
            ScanConfig {
                max_files: 2,
                ..ScanConfig::default()
            },
        );
        assert_eq!(scanner.scan(), vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn resolver_reads_text_and_reports_failures() {
        let temp = tempdir().unwrap();
        write(temp.path(), "src/a.ts", b"export {};");
        write(temp.path(), "bad.txt", &[0xff, 0xfe, 0x00]);
        let resolver = DirResolver::new(temp.path(), 1_000);

        let file = resolver.resolve("src/a.ts").unwrap();
        assert_eq!(file.path, "src/a.ts");
        assert_eq!(file.content, "export {};");
        assert_eq!(file.size_bytes, 10);

        assert!(matches!(
            resolver.resolve("missing.ts"),
            Err(MinifyError::Resolve { .. })
        ));
        assert!(matches!(
            resolver.resolve("bad.txt"),
            Err(MinifyError::Resolve { .. })
        ));
        assert!(matches!(
            resolver.resolve("src"),
            Err(MinifyError::NotFound(_))
        ));
    }

    #[test]
    fn resolver_refuses_paths_outside_root() {
        let temp = tempdir().unwrap();
        write(temp.path(), "project/src/a.ts", b"export {};");
        write(temp.path(), "secret.txt", b"token");
        let project = temp.path().join("project");
        let resolver = DirResolver::new(&project, 1_000);

        assert!(resolver.resolve("src/a.ts").is_ok());
        assert!(matches!(
            resolver.resolve("../secret.txt"),
            Err(MinifyError::Resolve { .. })
        ));
        let absolute = temp.path().join("secret.txt");
        assert!(matches!(
            resolver.resolve(absolute.to_str().unwrap()),
            Err(MinifyError::Resolve { .. })
        ));
        assert_eq!(confined_join(&project, "src/./a.ts"), Some(project.join("src/./a.ts")));
        assert_eq!(confined_join(&project, "src/../../secret.txt"), None);
    }
}
