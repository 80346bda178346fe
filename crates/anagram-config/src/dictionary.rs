use std::env;
use std::path::PathBuf;

use anagram_core::{BuildOptions, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_word_list() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Delimited word list read once at startup
    #[serde(default = "default_word_list")]
    pub word_list: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Lower-case words when indexing, see [`BuildOptions::fold_case`]
    #[serde(default)]
    pub fold_case: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list: default_word_list(),
            delimiter: default_delimiter(),
            fold_case: false,
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let word_list = env::var("ANAGRAM_WORD_LIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_word_list());

        // Single character only, anything else keeps the default
        let delimiter = env::var("ANAGRAM_DELIMITER")
            .ok()
            .and_then(|v| {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            })
            .unwrap_or_else(default_delimiter);

        let fold_case = env_flag("ANAGRAM_FOLD_CASE").unwrap_or(false);

        Self {
            word_list,
            delimiter,
            fold_case,
        }
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            delimiter: self.delimiter,
            fold_case: self.fold_case,
        }
    }
}
