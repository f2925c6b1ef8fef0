//! # Etiquetador de Brill (Transformation-Based Tagging)
//!
//! O etiquetador funciona em dois estágios:
//!
//! 1. **Etiquetagem inicial**: cada palavra recebe a *primeira* categoria do
//!    [`Lexicon`] (ou a categoria padrão, se desconhecida).
//! 2. **Transformações**: para cada posição `i` (laço externo) e para cada regra
//!    do [`RuleSet`] na ordem declarada (laço interno), aplica-se a regra em `i`.
//!
//! ## Por que a ordem dos laços importa?
//!
//! Todas as regras são tentadas na posição 0 antes de qualquer regra na
//! posição 1. Assim, um predicado que olha para **trás** enxerga etiquetas já
//! reescritas, enquanto um predicado que olha para **frente** enxerga a etiqueta
//! inicial do léxico. Aplicar "todas as regras em toda a sentença" produziria
//! outro resultado.
//!
//! ## Exemplo
//!
//! | Palavra | Inicial | Regra `NN VB PREVTAG DT` | Final |
//! |---------|---------|--------------------------|-------|
//! | the     | DT      | –                        | DT    |
//! | dog     | NN      | tag[0] = DT → VB         | VB    |
//! | barks   | VBZ     | –                        | VBZ   |

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::rule::TransformationRule;
use crate::rule_set::RuleSet;

/// Uma palavra com sua categoria morfossintática.
///
/// A forma de superfície é fixada na criação e só pode ser lida via
/// [`TaggedToken::word`]; apenas `category` muda durante a etiquetagem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    word: String,
    pub category: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            category: category.into(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

impl std::fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.word, self.category)
    }
}

/// Etiquetador de Brill: léxico + regras de transformação, ambos imutáveis.
///
/// É `Send + Sync`: várias threads podem chamar [`BrillTagger::tag`] na mesma
/// instância, cada chamada trabalha sobre sua própria sentença.
#[derive(Debug, Clone)]
pub struct BrillTagger {
    lexicon: Lexicon,
    rule_set: RuleSet,
}

impl BrillTagger {
    pub fn new(lexicon: Lexicon, rule_set: RuleSet) -> Self {
        Self { lexicon, rule_set }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Etiquetagem inicial: primeira categoria do léxico para cada palavra.
    pub fn initial_tags<S: AsRef<str>>(&self, sentence: &[S]) -> Vec<TaggedToken> {
        sentence
            .iter()
            .map(|word| {
                let word = word.as_ref();
                // `tag_word` nunca retorna lista vazia
                TaggedToken::new(word, self.lexicon.tag_word(word)[0].as_str())
            })
            .collect()
    }

    /// Etiqueta uma sentença já tokenizada.
    ///
    /// A saída tem o mesmo tamanho e a mesma ordem da entrada.
    pub fn tag<S: AsRef<str>>(&self, sentence: &[S]) -> Vec<TaggedToken> {
        self.tag_traced(sentence, |_, _, _| {})
    }

    /// Como [`BrillTagger::tag`], notificando cada reescrita de categoria.
    ///
    /// O observador recebe `(posição, regra, categoria_anterior)`.
    pub fn tag_traced<S, F>(&self, sentence: &[S], mut observer: F) -> Vec<TaggedToken>
    where
        S: AsRef<str>,
        F: FnMut(usize, &TransformationRule, &str),
    {
        let mut tagged = self.initial_tags(sentence);

        for position in 0..tagged.len() {
            for rule in &self.rule_set {
                if let Some(previous) = rule.apply(&mut tagged, position) {
                    observer(position, rule, &previous);
                }
            }
        }

        tagged
    }

    /// Etiqueta várias sentenças em paralelo (Rayon), preservando a ordem.
    pub fn tag_sentences<S>(&self, sentences: &[Vec<S>]) -> Vec<Vec<TaggedToken>>
    where
        S: AsRef<str> + Sync,
    {
        sentences.par_iter().map(|sentence| self.tag(sentence)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::DEFAULT_CATEGORY;
    use std::collections::HashMap;

    fn lexicon() -> Lexicon {
        let entries: HashMap<String, Vec<String>> = [
            ("the", vec!["DT"]),
            ("dog", vec!["NN"]),
            ("barks", vec!["VBZ"]),
        ]
        .into_iter()
        .map(|(w, cats)| (w.to_string(), cats.into_iter().map(String::from).collect()))
        .collect();
        Lexicon::new(entries, DEFAULT_CATEGORY).unwrap()
    }

    fn tagger(rules: &str) -> BrillTagger {
        BrillTagger::new(lexicon(), RuleSet::parse(rules).unwrap())
    }

    fn categories(tagged: &[TaggedToken]) -> Vec<&str> {
        tagged.iter().map(|t| t.category.as_str()).collect()
    }

    #[test]
    fn test_prevtag_rule() {
        let tagged = tagger("NN VB PREVTAG DT").tag(&["the", "dog", "barks"]);
        assert_eq!(
            tagged,
            vec![
                TaggedToken::new("the", "DT"),
                TaggedToken::new("dog", "VB"),
                TaggedToken::new("barks", "VBZ"),
            ]
        );
    }

    #[test]
    fn test_unknown_word_gets_default() {
        let tagged = tagger("").tag(&["foo"]);
        assert_eq!(tagged, vec![TaggedToken::new("foo", "NN")]);
    }

    #[test]
    fn test_empty_sentence() {
        let empty: [&str; 0] = [];
        assert!(tagger("NN VB PREVTAG DT").tag(&empty).is_empty());
    }

    #[test]
    fn test_first_lexicon_category_is_initial_tag() {
        let lexicon = Lexicon::from_text("run VB NN\n", "NN").unwrap();
        let tagger = BrillTagger::new(lexicon, RuleSet::default());
        assert_eq!(categories(&tagger.tag(&["run"])), ["VB"]);
    }

    #[test]
    fn test_rule_order_matters() {
        let words = ["the", "dog"];
        let first = tagger("NN VB PREVTAG DT\nNN JJ PREVTAG DT").tag(&words);
        let second = tagger("NN JJ PREVTAG DT\nNN VB PREVTAG DT").tag(&words);
        assert_eq!(first[1].category, "VB");
        assert_eq!(second[1].category, "JJ");
    }

    #[test]
    fn test_later_rule_sees_earlier_rewrite_at_same_position() {
        let tagged = tagger("NN VB PREVTAG DT\nVB MD PREVTAG DT").tag(&["the", "dog"]);
        assert_eq!(tagged[1].category, "MD");
    }

    #[test]
    fn test_lookahead_sees_initial_tag() {
        // Na posição 0, "dog" ainda é NN: a regra 2 não casa. Só depois a
        // posição 1 vira VB. Aplicar cada regra na sentença inteira daria PDT.
        let tagged = tagger("NN VB PREVTAG DT\nDT PDT NEXTTAG VB").tag(&["the", "dog"]);
        assert_eq!(categories(&tagged), ["DT", "VB"]);
    }

    #[test]
    fn test_lookbehind_sees_rewritten_tag() {
        // A posição 0 vira VB antes de a posição 1 ser visitada.
        let tagged = tagger("NN VB NEXTTAG NN\nNN JJ PREVTAG VB").tag(&["dog", "dog"]);
        assert_eq!(categories(&tagged), ["VB", "JJ"]);
    }

    #[test]
    fn test_tag_traced_reports_rewrites() {
        let mut seen = Vec::new();
        tagger("NN VB PREVTAG DT").tag_traced(&["the", "dog", "the", "dog"], |pos, rule, prev| {
            seen.push((pos, rule.to_string(), prev.to_string()));
        });
        assert_eq!(
            seen,
            vec![
                (1, "NN VB PREVTAG DT".to_string(), "NN".to_string()),
                (3, "NN VB PREVTAG DT".to_string(), "NN".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_sentences_parallel_preserves_order() {
        let t = tagger("NN VB PREVTAG DT");
        let sentences = vec![vec!["the", "dog"], vec!["dog"], vec![], vec!["barks", "the", "dog"]];
        let tagged = t.tag_sentences(&sentences);
        assert_eq!(tagged.len(), 4);
        for (sentence, result) in sentences.iter().zip(&tagged) {
            assert_eq!(result, &t.tag(sentence));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TaggedToken::new("dog", "NN").to_string(), "dog/NN");
    }
}
