//! # Pipeline de Etiquetagem — Orquestrador com Eventos Observáveis
//!
//! O pipeline conecta tokenizador e etiquetador de Brill e emite eventos em cada
//! passo via um canal Rust (`mpsc`), permitindo que uma interface acompanhe o
//! "raciocínio" do etiquetador: etiqueta inicial de cada palavra e cada regra que
//! reescreveu uma etiqueta.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::corpus::demo_tagger;
use crate::error::Result;
use crate::tagger::{BrillTagger, TaggedToken};
use crate::tokenizer::{tokenize_with_mode, words, Token, TokenizerMode};

/// Eventos emitidos pelo pipeline durante o processamento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: Tokenização concluída.
    TokenizationDone { tokens: Vec<Token>, total: usize },
    /// **Passo 2**: Etiqueta inicial vinda do léxico (uma por token).
    InitialTag {
        position: usize,
        word: String,
        category: String,
    },
    /// **Passo 3**: Uma regra de transformação reescreveu uma etiqueta.
    RuleApplied {
        position: usize,
        word: String,
        from: String,
        to: String,
        /// A regra no formato do arquivo de regras.
        rule: String,
    },
    /// **Conclusão**: etiquetas finais e tempo de processamento.
    Done {
        tokens: Vec<Token>,
        tagged_tokens: Vec<TaggedToken>,
        total_tokens: usize,
        processing_ms: u64,
    },
}

/// Pipeline: tokenização + etiquetador de Brill.
#[derive(Debug, Clone)]
pub struct PosPipeline {
    pub tagger: BrillTagger,
    pub tokenizer_mode: TokenizerMode,
}

impl PosPipeline {
    pub fn new(tagger: BrillTagger, tokenizer_mode: TokenizerMode) -> Self {
        Self {
            tagger,
            tokenizer_mode,
        }
    }

    /// Pipeline com o léxico e as regras de demonstração embutidos.
    pub fn demo() -> Result<Self> {
        Ok(Self::new(demo_tagger()?, TokenizerMode::default()))
    }

    /// Tokeniza e etiqueta o texto de forma síncrona.
    pub fn analyze(&self, text: &str) -> Vec<TaggedToken> {
        let tokens = tokenize_with_mode(text, self.tokenizer_mode);
        self.tagger.tag(&words(&tokens))
    }

    /// Executa o pipeline enviando eventos de progresso.
    ///
    /// # Fluxo de Eventos
    /// 1. `TokenizationDone`
    /// 2. `InitialTag` (um por token)
    /// 3. `RuleApplied` (um por reescrita, na ordem de aplicação)
    /// 4. `Done`
    ///
    /// Se o receptor for descartado no meio do caminho, os eventos restantes são
    /// ignorados e a etiquetagem termina normalmente.
    pub fn analyze_streaming(&self, text: &str, tx: mpsc::Sender<PipelineEvent>) {
        let start = std::time::Instant::now();

        // === Passo 1: Tokenização ===
        let tokens = tokenize_with_mode(text, self.tokenizer_mode);
        let _ = tx.send(PipelineEvent::TokenizationDone {
            tokens: tokens.clone(),
            total: tokens.len(),
        });
        let sentence = words(&tokens);

        // === Passo 2: Etiquetas iniciais ===
        for (position, token) in self.tagger.initial_tags(&sentence).into_iter().enumerate() {
            let _ = tx.send(PipelineEvent::InitialTag {
                position,
                word: token.word().to_string(),
                category: token.category,
            });
        }

        // === Passo 3: Transformações ===
        let tagged = self.tagger.tag_traced(&sentence, |position, rule, previous| {
            let _ = tx.send(PipelineEvent::RuleApplied {
                position,
                word: sentence[position].to_string(),
                from: previous.to_string(),
                to: rule.new_category().to_string(),
                rule: rule.to_string(),
            });
        });

        let total_tokens = tagged.len();
        let _ = tx.send(PipelineEvent::Done {
            tokens,
            tagged_tokens: tagged,
            total_tokens,
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze() {
        let pipeline = PosPipeline::demo().unwrap();
        let tagged = pipeline.analyze("I want to run.");
        let tags: Vec<&str> = tagged.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(tags, ["PRP", "VBP", "TO", "VB"]);
    }

    #[test]
    fn test_streaming_event_order() {
        let pipeline = PosPipeline::demo().unwrap();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming("I want to run", tx);
        let events: Vec<PipelineEvent> = rx.iter().collect();

        assert!(matches!(events[0], PipelineEvent::TokenizationDone { total: 4, .. }));
        let initial = events
            .iter()
            .filter(|e| matches!(e, PipelineEvent::InitialTag { .. }))
            .count();
        assert_eq!(initial, 4);
        assert_eq!(
            events[5],
            PipelineEvent::RuleApplied {
                position: 3,
                word: "run".to_string(),
                from: "NN".to_string(),
                to: "VB".to_string(),
                rule: "NN VB PREVTAG TO".to_string(),
            }
        );
        match events.last() {
            Some(PipelineEvent::Done {
                tagged_tokens,
                total_tokens,
                ..
            }) => {
                assert_eq!(*total_tokens, 4);
                assert_eq!(tagged_tokens[3], TaggedToken::new("run", "VB"));
            }
            other => panic!("último evento inesperado: {other:?}"),
        }
        assert_eq!(events.len(), 7);
    }

    #[test]
    fn test_streaming_empty_text() {
        let pipeline = PosPipeline::demo().unwrap();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming("", tx);
        let events: Vec<PipelineEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], PipelineEvent::Done { total_tokens: 0, .. }));
    }

    #[test]
    fn test_events_serialize_tagged() {
        let event = PipelineEvent::InitialTag {
            position: 0,
            word: "the".to_string(),
            category: "DT".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "InitialTag");
        assert_eq!(json["data"]["category"], "DT");
    }
}
