//! # Regra de Transformação
//!
//! Uma regra de Brill tem a forma `antiga nova PREDICADO p1 [p2]`:
//! na posição `i`, se a etiqueta atual for `antiga` (ou a regra usar o curinga `*`)
//! e o predicado for verdadeiro, a etiqueta passa a ser `nova`.
//!
//! O efeito colateral fica restrito à categoria de **um** token.

use std::fmt;

use tracing::trace;

use crate::predicate::Predicate;
use crate::tagger::TaggedToken;

/// Curinga de categoria de origem: casa com qualquer etiqueta atual.
pub const WILDCARD: &str = "*";

/// Regra de transformação: `(antiga, nova, predicado)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationRule {
    old_category: String,
    new_category: String,
    predicate: Predicate,
}

impl TransformationRule {
    pub fn new(old_category: impl Into<String>, new_category: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            old_category: old_category.into(),
            new_category: new_category.into(),
            predicate,
        }
    }

    pub fn old_category(&self) -> &str {
        &self.old_category
    }

    pub fn new_category(&self) -> &str {
        &self.new_category
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn is_wildcard(&self) -> bool {
        self.old_category == WILDCARD
    }

    /// Verdadeiro se a regra reescreveria a etiqueta na posição `position`.
    pub fn matches(&self, sentence: &[TaggedToken], position: usize) -> bool {
        let Some(token) = sentence.get(position) else {
            return false;
        };
        (self.is_wildcard() || token.category == self.old_category)
            && self.predicate.evaluate(sentence, position)
    }

    /// Aplica a regra na posição `position`.
    ///
    /// Quando a etiqueta é reescrita, retorna a categoria anterior.
    pub fn apply(&self, sentence: &mut [TaggedToken], position: usize) -> Option<String> {
        if !self.matches(sentence, position) {
            return None;
        }
        let token = &mut sentence[position];
        trace!(
            position,
            word = token.word(),
            from = %token.category,
            to = %self.new_category,
            "regra aplicada"
        );
        Some(std::mem::replace(&mut token.category, self.new_category.clone()))
    }
}

impl fmt::Display for TransformationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.old_category, self.new_category, self.predicate)
    }
}
