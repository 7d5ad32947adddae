use thiserror::Error;

/// Result type for minifier operations
pub type Result<T> = std::result::Result<T, MinifyError>;

/// Errors that can occur while minifying a batch of files
#[derive(Error, Debug)]
pub enum MinifyError {
    /// None of the requested paths has a supported extension
    #[error("No supported files among {requested} requested path(s)")]
    NoSupportedFiles { requested: usize },

    /// The resolver could not supply the file's text
    #[error("Failed to resolve {path}: {source}")]
    Resolve {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The path was not found by the resolver
    #[error("File not found: {0}")]
    NotFound(String),
}

impl MinifyError {
    /// Create a resolve error for `path`
    pub fn resolve(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Resolve {
            path: path.into(),
            source,
        }
    }

    /// Create a not-found error for `path`
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }
}
