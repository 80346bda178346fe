use std::sync::Arc;

use anagram_config::Config;
use anagram_core::{LoadError, WordListLoader};
use anagram_io::SharedIndex;

pub struct AppState {
    pub config: Config,
    pub index: SharedIndex,
}

impl AppState {
    /// Read the word list and build the index. Fails when the list is unreadable.
    pub fn load(config: Config) -> Result<Self, LoadError> {
        let index = WordListLoader::load_from_file(
            &config.dictionary.word_list,
            config.dictionary.build_options(),
        )?;

        Ok(Self {
            config,
            index: Arc::new(index),
        })
    }
}
