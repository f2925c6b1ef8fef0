//! # Trie (Árvore de Prefixos)
//!
//! Cada nó representa um prefixo; um nó marcado como palavra indica que o
//! prefixo até ali foi inserido. Os filhos ficam em um `BTreeMap`, então todas as
//! listagens saem em ordem lexicográfica.
//!
//! Em modo *case-insensitive*, chaves e buscas são convertidas para minúsculas.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    is_word: bool,
    children: BTreeMap<char, Node>,
}

impl Node {
    fn get(&self, key: &str) -> Option<&Node> {
        key.chars().try_fold(self, |node, c| node.children.get(&c))
    }

    fn collect(&self, prefix: &mut String, out: &mut Vec<String>) {
        if self.is_word {
            out.push(prefix.clone());
        }
        for (&c, child) in &self.children {
            prefix.push(c);
            child.collect(prefix, out);
            prefix.pop();
        }
    }

    fn size(&self) -> usize {
        1 + self.children.values().map(Node::size).sum::<usize>()
    }
}

/// Trie de strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    case_sensitive: bool,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Trie {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            root: Node::default(),
            case_sensitive,
        }
    }

    fn normalize(&self, s: &str) -> String {
        if self.case_sensitive {
            s.to_string()
        } else {
            s.to_lowercase()
        }
    }

    /// Insere `key`; retorna `true` se ela já estava na trie.
    pub fn add_string(&mut self, key: &str) -> bool {
        let key = self.normalize(key);
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        std::mem::replace(&mut node.is_word, true)
    }

    pub fn add_strings<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add_string(key.as_ref());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.root
            .get(&self.normalize(key))
            .is_some_and(|node| node.is_word)
    }

    /// Todas as chaves que começam com `prefix` (inclusive o próprio prefixo).
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut prefix = self.normalize(prefix);
        let mut out = Vec::new();
        if let Some(node) = self.root.get(&prefix) {
            node.collect(&mut prefix, &mut out);
        }
        out
    }

    /// Chaves encontradas ao longo do caminho de `search` (prefixos dela),
    /// da menor para a maior.
    ///
    /// Com `a, ab, bc, abc` inseridas, buscar `abcd` retorna `[a, ab, abc]`.
    pub fn find_matches_on_path(&self, search: &str) -> Vec<String> {
        let search = self.normalize(search);
        let mut out = Vec::new();
        let mut node = &self.root;
        let mut walked = String::new();

        if node.is_word {
            out.push(walked.clone());
        }
        for c in search.chars() {
            let Some(next) = node.children.get(&c) else {
                break;
            };
            node = next;
            walked.push(c);
            if node.is_word {
                out.push(walked.clone());
            }
        }
        out
    }

    /// Maior prefixo de `search` que está na trie, e o resto não casado.
    ///
    /// O resto começa onde o caminho na trie termina, não onde termina o prefixo.
    pub fn find_prefix(&self, search: &str) -> (Option<String>, String) {
        let search = self.normalize(search);
        let mut node = &self.root;
        let mut longest = node.is_word.then(String::new);
        let mut consumed = 0;

        for c in search.chars() {
            let Some(next) = node.children.get(&c) else {
                break;
            };
            node = next;
            consumed += c.len_utf8();
            if node.is_word {
                longest = Some(search[..consumed].to_string());
            }
        }
        (longest, search[consumed..].to_string())
    }

    /// Número de nós, incluindo a raiz.
    pub fn size(&self) -> usize {
        self.root.size()
    }
}
