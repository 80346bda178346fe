use crate::dictionary::DictionaryIndex;
use crate::preprocess::{LowercasePreprocessor, Preprocessor};

/// Exact anagrams of `query`, in source order.
///
/// Case-insensitive on the query side. No match yields an empty slice.
pub fn find<'a>(index: &'a DictionaryIndex, query: &str) -> &'a [String] {
    find_with(index, query, &LowercasePreprocessor)
}

pub fn find_with<'a, P>(index: &'a DictionaryIndex, query: &str, preprocessor: &P) -> &'a [String]
where
    P: Preprocessor + ?Sized,
{
    let key = preprocessor.signature(query);
    let words = index.get(&key).unwrap_or_default();
    tracing::debug!(query, key = %key, matches = words.len(), "anagram lookup");
    words
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    const WORDS: &str = "hello,cat,act,world,coat,abcd,taco,cadb";

    fn index() -> DictionaryIndex {
        DictionaryIndex::build(WORDS)
    }

    #[test]
    fn test_known_scenarios() {
        let index = index();

        assert_eq!(find(&index, "heLOL"), ["hello"]);
        assert_eq!(find(&index, "act"), ["cat", "act"]);
        assert_eq!(find(&index, "acot"), ["coat", "taco"]);
        assert_eq!(find(&index, "abcd"), ["abcd", "cadb"]);
        assert!(find(&index, "notaword").is_empty());
    }

    #[test]
    fn test_every_word_finds_itself() {
        let index = index();

        for word in WORDS.split(',') {
            assert!(find(&index, word).iter().any(|w| w == word), "{word}");
        }
    }

    #[test]
    fn test_anagrams_share_a_result() {
        let index = index();

        assert_eq!(find(&index, "cat"), find(&index, "tac"));
        assert_eq!(find(&index, "coat"), find(&index, "taco"));
        assert_eq!(find(&index, "abcd"), find(&index, "dcba"));
    }

    #[test]
    fn test_query_case_is_ignored() {
        let index = index();

        for query in ["hello", "Taco", "CADB", "notaword"] {
            let plain = find(&index, query);
            assert_eq!(plain, find(&index, &query.to_uppercase()));
            assert_eq!(plain, find(&index, &query.to_lowercase()));
        }
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        let index = index();
        let first = find(&index, "act").to_vec();

        for _ in 0..10 {
            assert_eq!(find(&index, "act"), first.as_slice());
        }
    }

    #[test]
    fn test_non_letters_are_not_filtered() {
        let index = index();

        assert!(find(&index, "c-at").is_empty());
        assert!(find(&index, "cat ").is_empty());
        assert!(find(&index, "").is_empty());
    }

    #[test]
    fn test_capitalized_entries_need_fold_case() {
        let index = DictionaryIndex::build("Act,cat");
        assert_eq!(find(&index, "act"), ["cat"]);

        let folded = DictionaryIndex::build_with(
            "Act,cat",
            crate::BuildOptions {
                fold_case: true,
                ..Default::default()
            },
        );
        assert_eq!(find(&folded, "ACT"), ["Act", "cat"]);
    }

    #[test]
    fn test_concurrent_lookups_share_index() {
        let index = Arc::new(index());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let index = Arc::clone(&index);
                std::thread::spawn(move || find(&index, "OCTA").to_vec())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), ["coat", "taco"]);
        }
    }
}
