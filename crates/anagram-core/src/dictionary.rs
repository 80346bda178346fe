use std::collections::HashMap;

/// Separator between words in a raw word list
pub const DEFAULT_DELIMITER: char = ',';

/// How a raw word list is turned into an index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub delimiter: char,
    /// Lower-case words before computing their signature.
    ///
    /// Off by default: build-time keys use the word exactly as stored, while
    /// lookups always lower-case the query, so a capitalized entry such as
    /// `"Act"` is only reachable once this is enabled.
    pub fold_case: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            fold_case: false,
        }
    }
}

/// Words grouped by their sorted-letter signature
///
/// Groups keep the order in which words appeared in the source list. The
/// index has no mutating API; share it behind an `Arc` once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryIndex {
    groups: HashMap<String, Vec<String>>,
    word_count: usize,
}

impl DictionaryIndex {
    /// Build from comma-separated text with default options
    pub fn build(word_list: &str) -> Self {
        Self::build_with(word_list, BuildOptions::default())
    }

    /// Build from delimited text. Words are taken verbatim between
    /// delimiters, empty ones included.
    pub fn build_with(word_list: &str, options: BuildOptions) -> Self {
        let mut groups: HashMap<String, Vec<String>> = HashMap::new();
        let mut word_count = 0;

        for word in word_list.split(options.delimiter) {
            let key = if options.fold_case {
                signature(&word.to_lowercase())
            } else {
                signature(word)
            };

            groups.entry(key).or_default().push(word.to_string());
            word_count += 1;
        }

        Self { groups, word_count }
    }

    /// Words stored under an already computed signature
    pub fn get(&self, signature: &str) -> Option<&[String]> {
        self.groups.get(signature).map(Vec::as_slice)
    }

    /// Number of distinct signatures
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of words indexed, duplicates included
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, words)| (key.as_str(), words.as_slice()))
    }
}

/// Characters of `word` sorted by code point.
///
/// Case-sensitive: callers lower-case first when they want case folding.
pub fn signature(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
