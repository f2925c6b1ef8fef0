//! # Parser do Arquivo de Regras
//!
//! Gramática orientada a linhas, uma regra por linha não-vazia:
//!
//! ```text
//! antiga nova PREDICADO p1 [p2]
//! ```
//!
//! Campos separados por espaços em branco. A aridade de cada predicado é fixa
//! (ver [`crate::predicate`]): um predicado unário com dois parâmetros é
//! **rejeitado**, assim como um binário com apenas um.
//!
//! A ordem das regras na saída é a ordem das linhas na entrada. Essa ordem faz
//! parte da semântica: regras posteriores enxergam o efeito das anteriores.

use crate::error::{Error, Result, RuleError};
use crate::predicate::Predicate;
use crate::rule::TransformationRule;

/// Parseia uma única linha (já sabidamente não-vazia).
pub fn parse_rule(line: &str) -> std::result::Result<TransformationRule, RuleError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(4..=5).contains(&fields.len()) {
        return Err(RuleError::FieldCount(fields.len()));
    }
    let predicate = Predicate::from_name(fields[2], &fields[3..])?;
    Ok(TransformationRule::new(fields[0], fields[1], predicate))
}

/// Parseia o texto completo de um arquivo de regras.
///
/// Linhas em branco são ignoradas; a primeira linha inválida aborta o parse com
/// [`Error::Rule`], informando o número da linha (base 1) e seu conteúdo.
pub fn parse(text: &str) -> Result<Vec<TransformationRule>> {
    let mut rules = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let rule = parse_rule(line).map_err(|kind| Error::rule(i + 1, line, kind))?;
        rules.push(rule);
    }
    Ok(rules)
}
