//! Token source: turns text into the case-sensitive tokens the tables count.

use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Split `text` on whitespace and strip surrounding punctuation.
///
/// Apostrophes survive so contractions stay whole; case is preserved.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !is_word_char(c)))
        .filter(|w| !w.is_empty())
}

pub fn read_tokens(path: impl AsRef<Path>) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens: Vec<String> = tokenize(&text).map(str::to_owned).collect();
    tracing::debug!(path = %path.display(), tokens = tokens.len(), "loaded corpus");
    Ok(tokens)
}
