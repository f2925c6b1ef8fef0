//! # Conjunto de Regras
//!
//! Sequência ordenada e imutável de regras de transformação, construída uma
//! única vez a partir do texto (ou arquivo) de regras.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::rule::TransformationRule;
use crate::rule_parser;

/// Regras na ordem em que foram declaradas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<TransformationRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<TransformationRule>) -> Self {
        Self { rules }
    }

    /// Parseia o texto do arquivo de regras.
    pub fn parse(text: &str) -> Result<Self> {
        let rules = rule_parser::parse(text)?;
        debug!(rules = rules.len(), "regras de transformação lidas");
        Ok(Self { rules })
    }

    /// Lê e parseia um arquivo de regras.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "lendo regras");
        Self::parse(&text)
    }

    pub fn rules(&self) -> &[TransformationRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransformationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a TransformationRule;
    type IntoIter = std::slice::Iter<'a, TransformationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Uma regra por linha, no formato do arquivo de regras.
impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
