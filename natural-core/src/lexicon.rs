//! # Léxico — Palavra → Categorias Candidatas
//!
//! O léxico é o primeiro estágio do etiquetador de Brill: cada palavra recebe
//! a lista ordenada de categorias morfossintáticas em que já foi observada.
//! A **primeira** categoria é, por convenção, a mais frequente, e é ela que o
//! etiquetador usa como etiqueta inicial.
//!
//! ## Formatos aceitos
//!
//! - **Texto**: uma entrada por linha, `palavra cat1 cat2 ... catN`.
//! - **JSON**: objeto `{"palavra": ["cat1", "cat2"]}`.
//!
//! ## Ordem de busca
//!
//! 1. Forma exata (sensível a maiúsculas).
//! 2. Forma em minúsculas.
//! 3. `[categoria_padrão]`.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Categoria atribuída a palavras ausentes do léxico (substantivo comum no Penn Treebank).
pub const DEFAULT_CATEGORY: &str = "NN";

/// Léxico imutável com categoria padrão para palavras desconhecidas.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
    default_category: String,
}

impl Lexicon {
    /// Constrói o léxico a partir de um mapa já estruturado.
    ///
    /// Falha com [`Error::EmptyEntry`] se alguma palavra não tiver categorias.
    pub fn new(entries: HashMap<String, Vec<String>>, default_category: impl Into<String>) -> Result<Self> {
        if let Some((word, _)) = entries.iter().find(|(_, cats)| cats.is_empty()) {
            return Err(Error::EmptyEntry { word: word.clone() });
        }
        debug!(entries = entries.len(), "léxico construído");
        Ok(Self {
            entries,
            default_category: default_category.into(),
        })
    }

    /// Lê o léxico no formato texto: `palavra cat1 cat2 ... catN` por linha.
    ///
    /// Linhas em branco são ignoradas. Uma linha só com a palavra é um erro.
    /// Se uma palavra aparecer duas vezes, vale a última linha.
    pub fn from_text(text: &str, default_category: impl Into<String>) -> Result<Self> {
        let mut entries = HashMap::new();

        for (i, line) in text.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let categories: Vec<String> = fields.map(str::to_string).collect();
            if categories.is_empty() {
                return Err(Error::Lexicon {
                    line: i + 1,
                    message: format!("palavra `{word}` sem categorias"),
                });
            }
            if entries.insert(word.to_string(), categories).is_some() {
                warn!(word, line = i + 1, "palavra redefinida no léxico");
            }
        }

        Self::new(entries, default_category)
    }

    /// Lê o léxico no formato JSON: `{"palavra": ["cat1", ...]}`.
    pub fn from_json(json: &str, default_category: impl Into<String>) -> Result<Self> {
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Self::new(entries, default_category)
    }

    /// Detecta o formato pelo primeiro caractere não-branco (`{` → JSON).
    pub fn parse(source: &str, default_category: impl Into<String>) -> Result<Self> {
        if source.trim_start().starts_with('{') {
            Self::from_json(source, default_category)
        } else {
            Self::from_text(source, default_category)
        }
    }

    /// Carrega o léxico de um arquivo (JSON ou texto).
    pub fn load(path: impl AsRef<Path>, default_category: impl Into<String>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "lendo léxico");
        Self::parse(&source, default_category)
    }

    /// Categorias candidatas de `word`, nunca vazia.
    ///
    /// Busca exata, depois em minúsculas, e por fim `[categoria_padrão]`.
    pub fn tag_word(&self, word: &str) -> &[String] {
        if let Some(categories) = self.entries.get(word) {
            return categories;
        }
        if let Some(categories) = self.entries.get(&word.to_lowercase()) {
            return categories;
        }
        std::slice::from_ref(&self.default_category)
    }

    /// Verdadeiro se a palavra (ou sua forma em minúsculas) está no léxico.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word) || self.entries.contains_key(&word.to_lowercase())
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
