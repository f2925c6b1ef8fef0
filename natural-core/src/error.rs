//! # Erros de Construção
//!
//! Todas as falhas do toolkit acontecem na **construção** dos componentes
//! (léxico, predicados, conjunto de regras). Uma vez construído, o etiquetador
//! nunca falha: palavras desconhecidas recebem a categoria padrão e predicados
//! que olham para fora da sentença simplesmente retornam `false`.

use std::io;

use thiserror::Error;

/// Atalho para resultados do crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Erro de configuração: fonte ilegível ou mal-formada.
#[derive(Debug, Error)]
pub enum Error {
    /// Arquivo de léxico ou de regras não pôde ser lido.
    #[error("Erro de E/S: {0}")]
    Io(#[from] io::Error),

    /// Léxico em formato JSON inválido.
    #[error("Léxico JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    /// Linha mal-formada em um léxico no formato texto.
    #[error("Léxico inválido (linha {line}): {message}")]
    Lexicon { line: usize, message: String },

    /// Entrada do léxico sem nenhuma categoria.
    #[error("Entrada do léxico sem categorias: `{word}`")]
    EmptyEntry { word: String },

    /// Linha mal-formada no arquivo de regras de transformação.
    #[error("Regra inválida (linha {line}: `{text}`): {kind}")]
    Rule {
        line: usize,
        text: String,
        kind: RuleError,
    },
}

/// Motivo pelo qual uma regra foi rejeitada.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("esperados 4 ou 5 campos, encontrados {0}")]
    FieldCount(usize),

    #[error("predicado desconhecido `{0}`")]
    UnknownPredicate(String),

    #[error("predicado {predicate} exige {expected} parâmetro(s), encontrados {found}")]
    Arity {
        predicate: &'static str,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// Anexa o contexto de linha a um [`RuleError`].
    pub(crate) fn rule(line: usize, text: &str, kind: RuleError) -> Self {
        Error::Rule {
            line,
            text: text.trim().to_string(),
            kind,
        }
    }
}
