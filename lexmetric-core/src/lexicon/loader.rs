//! Reading lexicon sources from disk.
//!
//! Every `*.txt` file in a directory becomes one [`LexiconSource`] named
//! after the file. Files are visited in name order so repeated runs see
//! sources in the same sequence.

use std::fs;
use std::path::{Path, PathBuf};

use lexmetric_types::{AnalyzerConfig, LexiconError, SourceEncoding};
use tracing::debug;

use super::{BuildReport, LexiconBuilder, LexiconSource, Lexicons};

/// Loads all `.txt` sources in `dir`.
///
/// # Errors
///
/// Returns `LexiconError::LexiconSourceNotFound` when `dir` does not exist
/// or cannot be listed. Files that fail to read or decode are recorded in
/// the report and skipped.
pub fn load_dir(
    dir: &Path,
    encoding: SourceEncoding,
) -> Result<(Vec<LexiconSource>, BuildReport), LexiconError> {
    let entries = fs::read_dir(dir).map_err(|_| LexiconError::LexiconSourceNotFound {
        path: dir.to_path_buf(),
    })?;

    let mut report = BuildReport::default();
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                // Unreadable entries still go through `fs::read` so the
                // failure lands in the report.
                let is_dir = entry.file_type().is_ok_and(|t| t.is_dir()) || path.is_dir();
                if !is_dir && path.extension().is_some_and(|ext| ext == "txt") {
                    paths.push(path);
                }
            }
            Err(source) => report.push(LexiconError::Read {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => {
                report.push(LexiconError::Read { path, source });
                continue;
            }
        };

        let Some(text) = encoding.decode(&bytes) else {
            report.push(LexiconError::Decode { path });
            continue;
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(source = %name, bytes = bytes.len(), "loaded lexicon source");
        sources.push(LexiconSource { name, text });
    }

    Ok((sources, report))
}

/// Loads and builds both lexicons from their directories.
///
/// # Errors
///
/// Fails only when a directory is missing; the caller may then fall back
/// to [`Lexicons::empty`].
pub fn load_lexicons(
    stopword_dir: &Path,
    sentiment_dir: &Path,
    config: &AnalyzerConfig,
) -> Result<(Lexicons, BuildReport), LexiconError> {
    let (stopword_sources, mut report) = load_dir(stopword_dir, config.stopword_encoding)?;
    let (sentiment_sources, sentiment_report) =
        load_dir(sentiment_dir, config.sentiment_encoding)?;
    report.merge(sentiment_report);

    let (lexicons, build_report) =
        LexiconBuilder::new(config).build(&stopword_sources, &sentiment_sources);
    report.merge(build_report);

    Ok((lexicons, report))
}
