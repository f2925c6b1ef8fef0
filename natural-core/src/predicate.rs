//! # Predicados Contextuais das Regras de Transformação
//!
//! Um predicado é um teste booleano sobre a sentença etiquetada em uma posição,
//! parametrizado por até duas strings. Ele é a "condição" de uma regra de Brill:
//! `NN VB PREVTAG TO` significa "troque NN por VB **se** a etiqueta anterior for TO".
//!
//! ## Vocabulário fechado
//!
//! O vocabulário é fixo e cada nome tem aridade fixa (tabela abaixo). Nomes
//! desconhecidos e aridades erradas são rejeitados na construção, nunca na avaliação.
//!
//! | Predicado        | Aridade | Condição                                   |
//! |------------------|---------|--------------------------------------------|
//! | `NEXTTAG`        | 1       | tag[i+1] = p1                              |
//! | `PREVTAG`        | 1       | tag[i-1] = p1                              |
//! | `NEXT2TAG`       | 1       | tag[i+2] = p1                              |
//! | `PREV2TAG`       | 1       | tag[i-2] = p1                              |
//! | `NEXT1OR2TAG`    | 1       | tag[i+1] = p1 ou tag[i+2] = p1             |
//! | `PREV1OR2TAG`    | 1       | tag[i-1] = p1 ou tag[i-2] = p1             |
//! | `NEXT1OR2OR3TAG` | 1       | tag[i+1..=i+3] contém p1                   |
//! | `PREV1OR2OR3TAG` | 1       | tag[i-3..=i-1] contém p1                   |
//! | `CURWD`          | 1       | word[i] = p1                               |
//! | `PREVWD`         | 1       | word[i-1] = p1                             |
//! | `NEXTWD`         | 1       | word[i+1] = p1                             |
//! | `PREV2WD`        | 1       | word[i-2] = p1                             |
//! | `NEXT2WD`        | 1       | word[i+2] = p1                             |
//! | `PREV1OR2WD`     | 1       | word[i-1] = p1 ou word[i-2] = p1           |
//! | `NEXT1OR2WD`     | 1       | word[i+1] = p1 ou word[i+2] = p1           |
//! | `NEXTBIGRAM`     | 2       | tag[i+1] = p1 e tag[i+2] = p2              |
//! | `PREVBIGRAM`     | 2       | tag[i-2] = p1 e tag[i-1] = p2              |
//! | `SURROUNDTAG`    | 2       | tag[i-1] = p1 e tag[i+1] = p2              |
//! | `LBIGRAM`        | 2       | word[i-1] = p1 e word[i] = p2              |
//! | `RBIGRAM`        | 2       | word[i] = p1 e word[i+1] = p2              |
//! | `WDPREVTAG`      | 2       | word[i] = p1 e tag[i-1] = p2               |
//! | `WDNEXTTAG`      | 2       | word[i] = p1 e tag[i+1] = p2               |
//! | `WDAND2AFT`      | 2       | word[i] = p1 e tag[i+2] = p2               |
//! | `WDAND2TAGBFR`   | 2       | word[i] = p1 e tag[i-2] = p2               |
//!
//! Posições fora de `[0, len)` nunca casam: o predicado retorna `false`.

use std::fmt;

use crate::error::RuleError;
use crate::tagger::TaggedToken;

/// Nome de um predicado do vocabulário fechado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    NextTag,
    PrevTag,
    Next2Tag,
    Prev2Tag,
    Next1Or2Tag,
    Prev1Or2Tag,
    Next1Or2Or3Tag,
    Prev1Or2Or3Tag,
    CurWd,
    PrevWd,
    NextWd,
    Prev2Wd,
    Next2Wd,
    Prev1Or2Wd,
    Next1Or2Wd,
    NextBigram,
    PrevBigram,
    SurroundTag,
    LBigram,
    RBigram,
    WdPrevTag,
    WdNextTag,
    WdAnd2Aft,
    WdAnd2TagBfr,
}

impl PredicateKind {
    /// Todo o vocabulário, na ordem da tabela do módulo.
    pub const ALL: [PredicateKind; 24] = [
        PredicateKind::NextTag,
        PredicateKind::PrevTag,
        PredicateKind::Next2Tag,
        PredicateKind::Prev2Tag,
        PredicateKind::Next1Or2Tag,
        PredicateKind::Prev1Or2Tag,
        PredicateKind::Next1Or2Or3Tag,
        PredicateKind::Prev1Or2Or3Tag,
        PredicateKind::CurWd,
        PredicateKind::PrevWd,
        PredicateKind::NextWd,
        PredicateKind::Prev2Wd,
        PredicateKind::Next2Wd,
        PredicateKind::Prev1Or2Wd,
        PredicateKind::Next1Or2Wd,
        PredicateKind::NextBigram,
        PredicateKind::PrevBigram,
        PredicateKind::SurroundTag,
        PredicateKind::LBigram,
        PredicateKind::RBigram,
        PredicateKind::WdPrevTag,
        PredicateKind::WdNextTag,
        PredicateKind::WdAnd2Aft,
        PredicateKind::WdAnd2TagBfr,
    ];

    /// Nome usado no arquivo de regras (ex: "PREVTAG").
    pub fn name(&self) -> &'static str {
        match self {
            PredicateKind::NextTag => "NEXTTAG",
            PredicateKind::PrevTag => "PREVTAG",
            PredicateKind::Next2Tag => "NEXT2TAG",
            PredicateKind::Prev2Tag => "PREV2TAG",
            PredicateKind::Next1Or2Tag => "NEXT1OR2TAG",
            PredicateKind::Prev1Or2Tag => "PREV1OR2TAG",
            PredicateKind::Next1Or2Or3Tag => "NEXT1OR2OR3TAG",
            PredicateKind::Prev1Or2Or3Tag => "PREV1OR2OR3TAG",
            PredicateKind::CurWd => "CURWD",
            PredicateKind::PrevWd => "PREVWD",
            PredicateKind::NextWd => "NEXTWD",
            PredicateKind::Prev2Wd => "PREV2WD",
            PredicateKind::Next2Wd => "NEXT2WD",
            PredicateKind::Prev1Or2Wd => "PREV1OR2WD",
            PredicateKind::Next1Or2Wd => "NEXT1OR2WD",
            PredicateKind::NextBigram => "NEXTBIGRAM",
            PredicateKind::PrevBigram => "PREVBIGRAM",
            PredicateKind::SurroundTag => "SURROUNDTAG",
            PredicateKind::LBigram => "LBIGRAM",
            PredicateKind::RBigram => "RBIGRAM",
            PredicateKind::WdPrevTag => "WDPREVTAG",
            PredicateKind::WdNextTag => "WDNEXTTAG",
            PredicateKind::WdAnd2Aft => "WDAND2AFT",
            PredicateKind::WdAnd2TagBfr => "WDAND2TAGBFR",
        }
    }

    /// Parseia o nome do predicado (ex: "SURROUNDTAG" → Some(SurroundTag)).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Número exato de parâmetros exigidos.
    pub fn arity(&self) -> usize {
        match self {
            PredicateKind::NextBigram
            | PredicateKind::PrevBigram
            | PredicateKind::SurroundTag
            | PredicateKind::LBigram
            | PredicateKind::RBigram
            | PredicateKind::WdPrevTag
            | PredicateKind::WdNextTag
            | PredicateKind::WdAnd2Aft
            | PredicateKind::WdAnd2TagBfr => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Predicado instanciado: nome + parâmetros já validados contra a aridade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    kind: PredicateKind,
    param1: String,
    param2: Option<String>,
}

impl Predicate {
    /// Instancia o predicado validando o número de parâmetros.
    pub fn new(kind: PredicateKind, params: &[&str]) -> Result<Self, RuleError> {
        if params.len() != kind.arity() {
            return Err(RuleError::Arity {
                predicate: kind.name(),
                expected: kind.arity(),
                found: params.len(),
            });
        }
        Ok(Self {
            kind,
            param1: params[0].to_string(),
            param2: params.get(1).map(|p| p.to_string()),
        })
    }

    /// Atalho: resolve o nome e valida os parâmetros.
    pub fn from_name(name: &str, params: &[&str]) -> Result<Self, RuleError> {
        let kind = PredicateKind::from_name(name)
            .ok_or_else(|| RuleError::UnknownPredicate(name.to_string()))?;
        Self::new(kind, params)
    }

    pub fn kind(&self) -> PredicateKind {
        self.kind
    }

    pub fn param1(&self) -> &str {
        &self.param1
    }

    pub fn param2(&self) -> Option<&str> {
        self.param2.as_deref()
    }

    /// Avalia o predicado na posição `position` da sentença.
    ///
    /// Nunca entra em pânico: deslocamentos fora da sentença não casam.
    pub fn evaluate(&self, sentence: &[TaggedToken], position: usize) -> bool {
        let p1 = self.param1.as_str();
        // Só é lido pelos predicados de aridade 2, onde sempre está presente.
        let p2 = self.param2.as_deref().unwrap_or_default();
        let tag = |offset: isize| tag_at(sentence, position, offset);
        let word = |offset: isize| word_at(sentence, position, offset);

        match self.kind {
            PredicateKind::NextTag => tag(1) == Some(p1),
            PredicateKind::PrevTag => tag(-1) == Some(p1),
            PredicateKind::Next2Tag => tag(2) == Some(p1),
            PredicateKind::Prev2Tag => tag(-2) == Some(p1),
            PredicateKind::Next1Or2Tag => [1, 2].iter().any(|&o| tag(o) == Some(p1)),
            PredicateKind::Prev1Or2Tag => [-1, -2].iter().any(|&o| tag(o) == Some(p1)),
            PredicateKind::Next1Or2Or3Tag => [1, 2, 3].iter().any(|&o| tag(o) == Some(p1)),
            PredicateKind::Prev1Or2Or3Tag => [-1, -2, -3].iter().any(|&o| tag(o) == Some(p1)),
            PredicateKind::CurWd => word(0) == Some(p1),
            PredicateKind::PrevWd => word(-1) == Some(p1),
            PredicateKind::NextWd => word(1) == Some(p1),
            PredicateKind::Prev2Wd => word(-2) == Some(p1),
            PredicateKind::Next2Wd => word(2) == Some(p1),
            PredicateKind::Prev1Or2Wd => [-1, -2].iter().any(|&o| word(o) == Some(p1)),
            PredicateKind::Next1Or2Wd => [1, 2].iter().any(|&o| word(o) == Some(p1)),
            PredicateKind::NextBigram => tag(1) == Some(p1) && tag(2) == Some(p2),
            PredicateKind::PrevBigram => tag(-2) == Some(p1) && tag(-1) == Some(p2),
            PredicateKind::SurroundTag => tag(-1) == Some(p1) && tag(1) == Some(p2),
            PredicateKind::LBigram => word(-1) == Some(p1) && word(0) == Some(p2),
            PredicateKind::RBigram => word(0) == Some(p1) && word(1) == Some(p2),
            PredicateKind::WdPrevTag => word(0) == Some(p1) && tag(-1) == Some(p2),
            PredicateKind::WdNextTag => word(0) == Some(p1) && tag(1) == Some(p2),
            PredicateKind::WdAnd2Aft => word(0) == Some(p1) && tag(2) == Some(p2),
            PredicateKind::WdAnd2TagBfr => word(0) == Some(p1) && tag(-2) == Some(p2),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.param1)?;
        if let Some(p2) = &self.param2 {
            write!(f, " {p2}")?;
        }
        Ok(())
    }
}

fn token_at(sentence: &[TaggedToken], position: usize, offset: isize) -> Option<&TaggedToken> {
    let index = position.checked_add_signed(offset)?;
    sentence.get(index)
}

fn tag_at(sentence: &[TaggedToken], position: usize, offset: isize) -> Option<&str> {
    token_at(sentence, position, offset).map(|t| t.category.as_str())
}

fn word_at(sentence: &[TaggedToken], position: usize, offset: isize) -> Option<&str> {
    token_at(sentence, position, offset).map(TaggedToken::word)
}
