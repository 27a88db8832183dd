//! Analyzer configuration

use gamepulse_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the sentiment analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Engine inputs are cut to this many characters before prediction
    pub max_input_chars: usize,

    /// Number of independently constructed engine instances in the pool.
    /// 1 means strict one-inference-at-a-time serialization.
    pub pool_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 512,
            pool_size: 1,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        serde_yaml::from_str(&content).map_err(|e| {
            gamepulse_core::Error::config(format!("Failed to parse analyzer config: {e}"))
        })
    }
}

/// Load analyzer configuration from file
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalyzerConfig> {
    AnalyzerConfig::from_file(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_input_chars, 512);
        assert_eq!(config.pool_size, 1);
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_input_chars: 256\npool_size: 4").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.max_input_chars, 256);
        assert_eq!(config.pool_size, 4);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pool_size: 2").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.max_input_chars, 512);
        assert_eq!(config.pool_size, 2);
    }
}
