use anyhow::{Context, Result};
use codemin_code_chunker::{ChunkerConfig, SplitterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Limits applied when a whole directory is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum number of files collected from a directory
    pub max_files: usize,

    /// Files larger than this (bytes) are skipped
    pub max_file_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_files: 50,
            max_file_bytes: 1_000_000,
        }
    }
}

/// `codemin` configuration file. Every section is optional.
///
/// ```toml
/// [chunker]
/// max_chunk_chars = 1500
///
/// [splitter]
/// max_chunk_size = 16000
/// overlap_size = 1000
///
/// [scan]
/// max_files = 50
/// max_file_bytes = 1000000
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub chunker: ChunkerConfig,
    pub splitter: SplitterConfig,
    pub scan: ScanConfig,
}

impl CliConfig {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("Invalid TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.chunker
            .validate()
            .map_err(anyhow::Error::msg)
            .context("[chunker]")?;
        self.splitter
            .validate()
            .map_err(anyhow::Error::msg)
            .context("[splitter]")?;
        if self.scan.max_files == 0 {
            anyhow::bail!("[scan]: max_files must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = CliConfig::parse("[splitter]\noverlap_size = 200\n\n[scan]\nmax_files = 5\n")
            .unwrap();
        assert_eq!(config.splitter.overlap_size, 200);
        assert_eq!(config.splitter.max_chunk_size, 16_000);
        assert_eq!(config.scan.max_files, 5);
        assert_eq!(config.scan.max_file_bytes, 1_000_000);
        assert_eq!(config.chunker, ChunkerConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(CliConfig::parse("[splitter]\nmax_chunk_size = 10\noverlap_size = 10\n").is_err());
        assert!(CliConfig::parse("[chunker]\nmax_chunk_chars = 0\n").is_err());
        assert!(CliConfig::parse("[unknown]\nx = 1\n").is_err());
    }

    #[test]
    fn missing_path_means_defaults() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
        assert!(CliConfig::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }
}
