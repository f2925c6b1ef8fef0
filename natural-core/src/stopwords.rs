//! Palavras vazias (stopwords) do inglês.
//!
//! A comparação é exata: a lista está em minúsculas e "The" não é stopword.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Lista embutida, em minúsculas.
pub const STOPWORDS: [&str; 144] = [
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "came", "can", "cannot", "come", "could", "did", "do", "does", "doing",
    "during", "each", "few", "for", "from", "further", "get", "got", "has", "had", "he", "have",
    "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its",
    "itself", "like", "make", "many", "me", "might", "more", "most", "much", "must", "my",
    "myself", "never", "now", "of", "on", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "said", "same", "see", "should", "since", "so", "some", "still",
    "such", "take", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "way", "we", "well", "were", "what", "where", "when", "which", "while",
    "who", "whom", "with", "would", "why", "you", "your", "yours", "yourself", "a", "b", "c",
    "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
];

fn set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

pub fn is_stopword(word: &str) -> bool {
    set().contains(word)
}
