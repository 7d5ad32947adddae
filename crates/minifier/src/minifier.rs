use crate::family::LanguageFamily;
use crate::rules;
use crate::types::{MinifiedFile, SourceFile};

/// Stateless per-file minifier
#[derive(Debug, Clone, Copy, Default)]
pub struct Minifier;

impl Minifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Minify `content` according to the family of `file_path`.
    ///
    /// Returns `None` when the extension is unknown or binary. Malformed
    /// input never fails: invalid JSON comes back unchanged.
    pub fn minify(&self, file_path: &str, content: &str) -> Option<MinifiedFile> {
        let Some(family) = LanguageFamily::from_path(file_path) else {
            log::debug!("Skipping unsupported file: {file_path}");
            return None;
        };

        let minified = match family {
            LanguageFamily::Json => Self::minify_json(file_path, content),
            _ => {
                let stripped = rules::strip_noise(family, content);
                rules::collapse_whitespace(family, &stripped)
            }
        };

        let result = MinifiedFile::new(file_path, content, minified);
        log::debug!(
            "Minified {} ({}): {} -> {} bytes",
            file_path,
            family.as_str(),
            result.original_size,
            result.minified_size
        );
        Some(result)
    }

    /// Minify an already-resolved source file
    pub fn minify_source(&self, file: &SourceFile) -> Option<MinifiedFile> {
        self.minify(&file.path, &file.content)
    }

    fn minify_json(file_path: &str, content: &str) -> String {
        match serde_json::from_str::<serde_json::Value>(content) {
            Ok(value) => match serde_json::to_string(&value) {
                Ok(compact) => compact,
                Err(e) => {
                    log::debug!("JSON re-serialization failed for {file_path}: {e}");
                    content.to_string()
                }
            },
            Err(e) => {
                log::debug!("Invalid JSON in {file_path}, passing through: {e}");
                content.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TS_FIXTURE: &str = r#"
import { useState } from 'react';
import axios from "axios";

/**
 * Fetches the user list.
 */
export async function loadUsers(url: string) {
    // hit the API
    const res = await axios.get(url);


    return res.data; /* array */
}
"#;

    #[test]
    fn json_is_compacted() {
        let out = Minifier::new()
            .minify("data.json", r#"{"a":1,  "b": [1,2,  3]}"#)
            .unwrap();
        assert_eq!(out.content, r#"{"a":1,"b":[1,2,3]}"#);
        assert_eq!(out.minified_size, out.content.len());
    }

    #[test]
    fn json_keeps_key_order() {
        let out = Minifier::new()
            .minify("order.json", "{\n  \"z\": true,\n  \"a\": null\n}")
            .unwrap();
        assert_eq!(out.content, r#"{"z":true,"a":null}"#);
    }

    #[test]
    fn invalid_json_passes_through() {
        let out = Minifier::new().minify("broken.json", "{not json").unwrap();
        assert_eq!(out.content, "{not json");
        assert_eq!(out.minified_size, out.original_size);
    }

    #[test]
    fn script_fixture_shrinks() {
        let out = Minifier::new().minify("src/users.ts", TS_FIXTURE).unwrap();
        assert!(out.minified_size < out.original_size);
        assert_eq!(
            out.content,
            "export async function loadUsers(url: string) {\nconst res = await axios.get(url);\nreturn res.data;\n}"
        );
    }

    #[test]
    fn unsupported_extensions_return_none() {
        let minifier = Minifier::new();
        assert!(minifier.minify("main.rs", "fn main() {}").is_none());
        assert!(minifier.minify("logo.png", "\u{89}PNG").is_none());
        assert!(minifier.minify("LICENSE", "MIT").is_none());
    }

    #[test]
    fn markdown_keeps_body_untouched() {
        let out = Minifier::new()
            .minify("README.md", "\n\n# Title\n\n- item   one\n")
            .unwrap();
        assert_eq!(out.content, "# Title\n\n- item   one\n");
    }

    #[test]
    fn python_is_lossy_but_shrinks() {
        let src = "import os\n\n\ndef main():\n    \"\"\"Entry.\"\"\"\n    print(os.getcwd())  # cwd\n";
        let out = Minifier::new().minify("tool.py", src).unwrap();
        assert_eq!(out.content, "def main():\n \n print(os.getcwd())");
    }

    #[test]
    fn minify_source_uses_file_path() {
        let file = SourceFile::new("styles/site.css", "a { color: red; }");
        let out = Minifier::new().minify_source(&file).unwrap();
        assert_eq!(out.path, "styles/site.css");
        assert_eq!(out.content, "a{color:red;}");
    }
}
