//! # Codemin Minifier
//!
//! Per-language noise stripping for source files, plus a batch front end that
//! stitches many files into one banner-delimited text.
//!
//! ## Architecture
//!
//! ```text
//! (path, content)
//!     │
//!     ├──> Family detection (extension table, binary denylist)
//!     │
//!     ├──> .json ──> parse + compact re-serialize (pass-through on failure)
//!     │
//!     └──> other families
//!          ├─> Removal rules (comments, doc-strings, imports)
//!          └─> Whitespace pass (per family)
//!
//! BatchMinifier
//!     ├──> SourceResolver (caller-supplied I/O)
//!     ├──> Minifier per file
//!     └──> "// ----- <path> -----" banners + size totals
//! ```
//!
//! ## Example
//!
//! ```rust
//! use codemin_minifier::Minifier;
//!
//! let minified = Minifier::new()
//!     .minify("config.json", r#"{"a":1,  "b": [1,2,  3]}"#)
//!     .expect("json is supported");
//! assert_eq!(minified.content, r#"{"a":1,"b":[1,2,3]}"#);
//! ```

mod batch;
mod error;
mod family;
mod minifier;
mod rules;
mod types;

pub use batch::{
    file_banner, partition_supported, BatchMinifier, BatchReport, FileStats, InMemoryResolver,
    SourceResolver,
};
pub use error::{MinifyError, Result};
pub use family::{is_minifiable, LanguageFamily, BINARY_EXTENSIONS};
pub use minifier::Minifier;
pub use types::{MinifiedFile, SourceFile};
