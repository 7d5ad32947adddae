use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions that are never treated as text, regardless of the family table
pub const BINARY_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "ico", "svg", // images
    "mp3", "mp4", "wav", "ogg", "avi", "mov", // audio/video
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", // documents
    "zip", "rar", "tar", "gz", "7z", // archives
    "exe", "dll", "so", "dylib", // executables
    "bin", "dat", "db", "sqlite", "class",
];

/// Language family that decides which removal rules and whitespace pass apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageFamily {
    /// JavaScript / TypeScript
    Script,
    Python,
    /// Java and C#
    JavaLike,
    /// HTML / XHTML
    Markup,
    Stylesheet,
    /// Markdown and plain text
    Plain,
    /// JSON, minified by reparse and compact re-serialization
    Json,
}

impl LanguageFamily {
    /// Detect family from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        if BINARY_EXTENSIONS.contains(&ext.as_str()) {
            return None;
        }

        match ext.as_str() {
            "js" | "jsx" | "ts" | "tsx" => Some(Self::Script),
            "py" => Some(Self::Python),
            "java" | "cs" => Some(Self::JavaLike),
            "html" | "htm" | "xhtml" => Some(Self::Markup),
            "css" => Some(Self::Stylesheet),
            "md" | "txt" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect family from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get family name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Python => "python",
            Self::JavaLike => "java_like",
            Self::Markup => "markup",
            Self::Stylesheet => "stylesheet",
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

/// Whether the minifier accepts this path (known extension, not binary)
pub fn is_minifiable(path: impl AsRef<Path>) -> bool {
    LanguageFamily::from_path(path).is_some()
}
