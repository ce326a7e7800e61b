//! Loading [`AnalyzerConfig`] from TOML files.
//!
//! ```toml
//! epsilon = 1e-6
//! complex_syllable_threshold = 2
//! pronoun_case = "lowercased"      # or "preserve_case"
//! annotations = ["(Former Yug. Rep.)"]
//! stopword_encoding = "latin1"     # or "utf8"
//! sentiment_encoding = "utf8"
//! ```

use std::fs;
use std::path::Path;

use lexmetric_types::{AnalyzerConfig, ConfigError};
use tracing::info;

/// Reads, parses and validates a config file.
///
/// # Errors
///
/// `ConfigError::Read` when the file cannot be read, otherwise whatever
/// [`AnalyzerConfig::from_toml_str`] reports.
pub fn load(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = AnalyzerConfig::from_toml_str(&text)?;
    info!(path = %path.display(), "loaded analyzer config");
    Ok(config)
}

/// Like [`load`], but a missing file yields the default config.
pub fn load_or_default(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        Ok(AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexmetric_types::PronounCase;
    use std::io::Write;

    #[test]
    fn loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pronoun_case = \"preserve_case\"").unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.pronoun_case, PronounCase::PreserveCase);
        assert_eq!(config.epsilon, 1e-6);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn invalid_value_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "epsilon = -2.0").unwrap();
        assert!(matches!(load(file.path()), Err(ConfigError::Invalid(_))));
    }
}
