use regex::Regex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::OnceLock;

/// Union of two maps. Entries from `right` replace entries from `left`.
pub fn merge_dicts<K, V>(left: &HashMap<K, V>, right: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut merged = left.clone();
    merged.extend(right.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Entries of `left` whose key also appears in `right`.
pub fn intersect_dicts<K, V, W>(left: &HashMap<K, V>, right: &HashMap<K, W>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    left.iter()
        .filter(|(k, _)| right.contains_key(*k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub fn count_word_frequencies<I, S>(words: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut freq = HashMap::new();
    for word in words {
        let word = word.as_ref();
        match freq.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                freq.insert(word.to_string(), 1);
            }
        }
    }
    freq
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\w']+").expect("word pattern is valid"))
}

/// Splits free text into lowercase words, dropping punctuation.
pub fn tokenize_words(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
