//! # natural-core — Etiquetagem Morfossintática Baseada em Regras (Brill)
//!
//! Este crate implementa o etiquetador de Brill: cada palavra recebe primeiro a
//! categoria mais frequente segundo um léxico, e em seguida uma lista ordenada de
//! regras de transformação contextuais corrige essas etiquetas.
//!
//! ## Arquitetura do Sistema
//!
//! 1.  **Entrada**: Texto bruto, ou uma sentença já tokenizada.
//! 2.  **Tokenização** ([`tokenizer`]): Divide o texto em palavras preservando offsets.
//! 3.  **Léxico** ([`lexicon`]): Etiqueta inicial (exata → minúscula → categoria padrão).
//! 4.  **Transformações** ([`rule_set`], [`rule`], [`predicate`]): Regras no formato
//!     `antiga nova PREDICADO p1 [p2]`, lidas por [`rule_parser`].
//! 5.  **Saída**: Lista de [`TaggedToken`] (ex: "run" → `VB`).
//!
//! Utilitários de apoio acompanham o etiquetador: codificação fonética
//! ([`phonetic`]), árvore de prefixos ([`trie`]) e correção ortográfica
//! ([`spellcheck`]).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use natural_core::{BrillTagger, Lexicon, RuleSet};
//!
//! let lexicon = Lexicon::parse("I PRP\nwant VBP VB\nto TO\nrun NN VB\n", "NN").unwrap();
//! let rules = RuleSet::parse("NN VB PREVTAG TO\n").unwrap();
//! let tagger = BrillTagger::new(lexicon, rules);
//!
//! let tagged = tagger.tag(&["I", "want", "to", "run"]);
//! let tags: Vec<&str> = tagged.iter().map(|t| t.category.as_str()).collect();
//! assert_eq!(tags, ["PRP", "VBP", "TO", "VB"]);
//! ```
//!
//! ## Módulos Principais
//!
//! - [`tagger`]: O etiquetador e o tipo [`TaggedToken`].
//! - [`pipeline`]: Tokenização + etiquetagem com eventos observáveis.
//! - [`corpus`]: Léxico, regras e sentenças de demonstração embutidos.

pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod phonetic;
pub mod pipeline;
pub mod predicate;
pub mod rule;
pub mod rule_parser;
pub mod rule_set;
pub mod spellcheck;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
pub mod trie;

pub use error::{Error, Result, RuleError};
pub use lexicon::{Lexicon, DEFAULT_CATEGORY};
pub use phonetic::{Phonetic, SoundEx};
pub use pipeline::{PipelineEvent, PosPipeline};
pub use predicate::{Predicate, PredicateKind};
pub use rule::{TransformationRule, WILDCARD};
pub use rule_set::RuleSet;
pub use spellcheck::Spellcheck;
pub use tagger::{BrillTagger, TaggedToken};
pub use tokenizer::{RegexpTokenizer, Token, TokenizerMode};
pub use trie::Trie;
