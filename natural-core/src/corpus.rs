//! # Corpus de Demonstração em Inglês (Penn Treebank)
//!
//! Recursos embutidos para demonstração e testes do etiquetador de Brill:
//!
//! - **Léxico** no formato texto (`palavra cat1 cat2 ...`), a primeira categoria
//!   é a mais frequente.
//! - **Regras contextuais** no formato do arquivo de regras, no estilo das regras
//!   aprendidas por Brill sobre o Wall Street Journal.
//! - **Sentenças anotadas** com as etiquetas esperadas após as transformações.
//!
//! ## Categorias usadas
//!
//! | Tag | Significado              | Tag  | Significado                 |
//! |-----|--------------------------|------|-----------------------------|
//! | DT  | Determinante             | MD   | Verbo modal                 |
//! | NN  | Substantivo singular     | VB   | Verbo, forma base           |
//! | NNS | Substantivo plural       | VBP  | Verbo, presente (não 3ª p.) |
//! | JJ  | Adjetivo                 | VBZ  | Verbo, presente 3ª pessoa   |
//! | PRP | Pronome pessoal          | VBD  | Verbo, passado              |
//! | TO  | "to"                     | UH   | Interjeição                 |
//! | IN  | Preposição               | RB   | Advérbio                    |

use crate::error::Result;
use crate::lexicon::{Lexicon, DEFAULT_CATEGORY};
use crate::rule_set::RuleSet;
use crate::tagger::BrillTagger;

/// Uma sentença com as etiquetas esperadas.
pub struct AnnotatedSentence {
    /// O texto completo da sentença.
    pub text: &'static str,
    /// Pares (palavra, etiqueta) esperados na saída do etiquetador.
    pub annotations: &'static [(&'static str, &'static str)],
}

/// Léxico de demonstração.
pub const DEMO_LEXICON: &str = "\
the DT
a DT
an DT
old JJ
big JJ
dog NN
dogs NNS
man NN
house NN
flight NN
barks VBZ NNS
bark NN VB
saw VBD NN
can MD NN
will MD NN
want VBP VB
wants VBZ
run NN VB
walk NN VB
book NN VB
to TO
in IN
on IN
quickly RB
not RB
please UH VB
I PRP
you PRP
he PRP
she PRP
they PRP
";

/// Regras de transformação de demonstração, na ordem em que são aplicadas.
pub const DEMO_RULES: &str = "\
NN VB PREVTAG TO
NN VB PREVTAG MD
VBP VB PREV1OR2OR3TAG MD
NN VBP PREVTAG PRP
VBD NN PREVTAG DT
MD NN PREVTAG DT
NN VB WDNEXTTAG book DT
";

/// Sentenças de demonstração com as etiquetas esperadas.
pub fn demo_sentences() -> Vec<AnnotatedSentence> {
    vec![
        AnnotatedSentence {
            text: "I want to run",
            annotations: &[("I", "PRP"), ("want", "VBP"), ("to", "TO"), ("run", "VB")],
        },
        AnnotatedSentence {
            text: "They can walk to the house",
            annotations: &[
                ("They", "PRP"), ("can", "MD"), ("walk", "VB"),
                ("to", "TO"), ("the", "DT"), ("house", "NN"),
            ],
        },
        AnnotatedSentence {
            text: "She saw the can",
            annotations: &[("She", "PRP"), ("saw", "VBD"), ("the", "DT"), ("can", "NN")],
        },
        AnnotatedSentence {
            text: "Please book a flight",
            annotations: &[("Please", "UH"), ("book", "VB"), ("a", "DT"), ("flight", "NN")],
        },
        AnnotatedSentence {
            text: "The old dog barks",
            annotations: &[("The", "DT"), ("old", "JJ"), ("dog", "NN"), ("barks", "VBZ")],
        },
        AnnotatedSentence {
            text: "they will not quickly want the saw",
            annotations: &[
                ("they", "PRP"), ("will", "MD"), ("not", "RB"), ("quickly", "RB"),
                ("want", "VB"), ("the", "DT"), ("saw", "NN"),
            ],
        },
        AnnotatedSentence {
            text: "I walk",
            annotations: &[("I", "PRP"), ("walk", "VBP")],
        },
    ]
}

/// Léxico embutido com a categoria padrão `NN`.
pub fn demo_lexicon() -> Result<Lexicon> {
    Lexicon::from_text(DEMO_LEXICON, DEFAULT_CATEGORY)
}

/// Regras embutidas.
pub fn demo_rule_set() -> Result<RuleSet> {
    RuleSet::parse(DEMO_RULES)
}

/// Etiquetador pronto com o léxico e as regras embutidos.
pub fn demo_tagger() -> Result<BrillTagger> {
    Ok(BrillTagger::new(demo_lexicon()?, demo_rule_set()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, words};

    #[test]
    fn test_demo_resources_parse() {
        let tagger = demo_tagger().unwrap();
        assert_eq!(tagger.lexicon().len(), 31);
        assert_eq!(tagger.rule_set().len(), 7);
    }

    #[test]
    fn test_demo_sentences_are_tagged_as_annotated() {
        let tagger = demo_tagger().unwrap();
        for sentence in demo_sentences() {
            let tokens = tokenize(sentence.text);
            let tagged = tagger.tag(&words(&tokens));
            let got: Vec<(&str, &str)> = tagged
                .iter()
                .map(|t| (t.word(), t.category.as_str()))
                .collect();
            assert_eq!(got, sentence.annotations, "sentença: {}", sentence.text);
        }
    }
}
