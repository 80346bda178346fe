use std::io::ErrorKind;
use std::path::Path;

use crate::dictionary::{BuildOptions, DictionaryIndex};
use crate::error::LoadError;

pub struct WordListLoader;

impl WordListLoader {
    /// Load and index a delimited word list from disk
    pub fn load_from_file(path: &Path, options: BuildOptions) -> Result<DictionaryIndex, LoadError> {
        tracing::info!("Loading word list from file: {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            ErrorKind::InvalidData => LoadError::InvalidEncoding(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;

        let index = Self::load_from_str(&text, options);
        tracing::info!(
            "Indexed {} words into {} anagram groups",
            index.word_count(),
            index.len()
        );
        Ok(index)
    }

    pub fn load_from_str(text: &str, options: BuildOptions) -> DictionaryIndex {
        DictionaryIndex::build_with(text, options)
    }
}
