//! # Corretor Ortográfico Probabilístico
//!
//! Baseado na ideia de Peter Norvig: dada uma palavra, geram-se todas as strings
//! a uma certa distância de edição, filtram-se as que existem no vocabulário e
//! ordenam-se pela frequência no corpus.
//!
//! Candidatos a distância `n` são sempre considerados mais prováveis que
//! candidatos a distância `n + 1`, independentemente da frequência.
//!
//! ## Custo
//!
//! Uma palavra de tamanho `n` tem cerca de `54n + 25` edições a distância 1.
//! A partir de distância 2 a geração fica rapidamente cara.

use std::collections::{HashMap, HashSet};

use crate::trie::Trie;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Corretor construído a partir de uma lista de palavras (com repetições).
#[derive(Debug, Clone)]
pub struct Spellcheck {
    trie: Trie,
    frequencies: HashMap<String, usize>,
}

impl Spellcheck {
    /// A frequência de cada palavra é o número de vezes que ela aparece na lista.
    pub fn new<I, S>(word_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::default();
        let mut frequencies = HashMap::new();
        for word in word_list {
            let word = word.as_ref();
            trie.add_string(word);
            *frequencies.entry(word.to_string()).or_insert(0) += 1;
        }
        Self { trie, frequencies }
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn frequency(&self, word: &str) -> usize {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Correções sugeridas, da mais para a menos provável.
    ///
    /// `max_distance = 0` é tratado como 1. Uma palavra correta aparece entre
    /// as sugestões de distância 1 (substituir uma letra por ela mesma).
    pub fn get_corrections(&self, word: &str, max_distance: usize) -> Vec<String> {
        let levels = edits_with_max_distance(word, max_distance.max(1));
        let mut seen = HashSet::new();
        let mut corrections = Vec::new();

        for level in levels.iter().skip(1) {
            let mut known: Vec<&String> = level.iter().filter(|w| self.is_correct(w)).collect();
            known.sort_by(|a, b| {
                self.frequency(b)
                    .cmp(&self.frequency(a))
                    .then_with(|| a.cmp(b))
            });
            for candidate in known {
                if seen.insert(candidate.as_str()) {
                    corrections.push(candidate.clone());
                }
            }
        }
        corrections
    }
}

/// Todas as strings distintas a distância de edição 1 de `word`:
/// remoções, transposições adjacentes, substituições e inserções (a–z).
pub fn edits(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |candidate: String| {
        if seen.insert(candidate.clone()) {
            out.push(candidate);
        }
    };
    let join = |parts: &[&[char]]| -> String { parts.iter().flat_map(|p| p.iter()).collect() };

    for i in 0..=n {
        let (left, right) = chars.split_at(i);
        if i > 0 {
            // remoção de chars[i-1]
            push(join(&[&left[..i - 1], right]));
        }
        if i > 0 && i < n {
            // transposição de chars[i-1] e chars[i]
            push(join(&[&left[..i - 1], &[right[0], left[i - 1]], &right[1..]]));
        }
        for letter in ALPHABET.chars() {
            if i > 0 {
                push(join(&[&left[..i - 1], &[letter], right]));
            }
            push(join(&[left, &[letter], right]));
        }
    }
    out
}

/// Edições agrupadas por distância: o índice `d` contém as strings a distância `d`
/// (geradas a partir do nível anterior); o índice 0 é a própria palavra.
pub fn edits_with_max_distance(word: &str, distance: usize) -> Vec<Vec<String>> {
    let mut levels = vec![vec![word.to_string()]];
    for _ in 0..distance {
        let Some(previous) = levels.last() else {
            break;
        };
        let mut seen = HashSet::new();
        let next: Vec<String> = previous
            .iter()
            .flat_map(|w| edits(w))
            .filter(|w| seen.insert(w.clone()))
            .collect();
        levels.push(next);
    }
    levels
}
