//! # Tokenizadores
//!
//! Responsáveis por dividir o texto bruto em palavras para o etiquetador.
//! Cada token preserva sua posição original no texto (offset em bytes), o que
//! permite reconstruir ou destacar trechos do texto de entrada.
//!
//! ## Estratégias
//!
//! - **Word**: separa em tudo que não é letra, dígito ou `_` (pontuação é descartada).
//! - **WordPunct**: palavras e os sinais `. ! ' "` como tokens próprios.
//! - **Unicode**: fronteiras de palavra do UAX #29 (`unicode-segmentation`).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use natural_core::tokenizer::{tokenize_with_mode, TokenizerMode};
//!
//! let words: Vec<String> = tokenize_with_mode("She said 'hello'.", TokenizerMode::Word)
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, ["She", "said", "hello"]);
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "dog", ".").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Estratégias de tokenização disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerMode {
    /// Sequências alfanuméricas (latinas e cirílicas); o resto é separador.
    #[default]
    Word,
    /// Palavras mais `. ! ' "` como tokens separados.
    WordPunct,
    /// Palavras segundo as fronteiras Unicode (UAX #29).
    Unicode,
}

const WORD_GAPS: &str = r"[^A-Za-zА-Яа-я0-9_]+";
const WORD_PUNCT: &str = r#"(?i)\w+|[а-я0-9_]+|\.|!|'|""#;

fn word_tokenizer() -> &'static RegexpTokenizer {
    static TOKENIZER: OnceLock<RegexpTokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(|| RegexpTokenizer::from_regex(compile(WORD_GAPS), true))
}

fn word_punct_tokenizer() -> &'static RegexpTokenizer {
    static TOKENIZER: OnceLock<RegexpTokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(|| RegexpTokenizer::from_regex(compile(WORD_PUNCT), false))
}

// Padrões constantes, cobertos pelos testes deste módulo.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("padrão de tokenização inválido")
}

/// Tokenizador genérico por expressão regular.
///
/// - `gaps = true`: o padrão casa os **separadores**; os tokens são os trechos
///   entre eles (vazios e espaços simples são descartados).
/// - `gaps = false`: o padrão casa os **próprios tokens**.
#[derive(Debug, Clone)]
pub struct RegexpTokenizer {
    pattern: Regex,
    gaps: bool,
}

impl RegexpTokenizer {
    /// Compila o padrão; falha se a expressão for inválida.
    pub fn new(pattern: &str, gaps: bool) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?, gaps))
    }

    pub fn from_regex(pattern: Regex, gaps: bool) -> Self {
        Self { pattern, gaps }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        if self.gaps {
            let mut last = 0;
            for sep in self.pattern.find_iter(text) {
                push_piece(&mut tokens, text, last, sep.start());
                last = sep.end();
            }
            push_piece(&mut tokens, text, last, text.len());
        } else {
            for m in self.pattern.find_iter(text) {
                push_piece(&mut tokens, text, m.start(), m.end());
            }
        }

        reindex(&mut tokens);
        tokens
    }
}

/// Tokeniza um texto usando o modo padrão ([`TokenizerMode::Word`]).
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with_mode(text, TokenizerMode::default())
}

/// Tokeniza um texto com o modo especificado.
pub fn tokenize_with_mode(text: &str, mode: TokenizerMode) -> Vec<Token> {
    match mode {
        TokenizerMode::Word => word_tokenizer().tokenize(text),
        TokenizerMode::WordPunct => word_punct_tokenizer().tokenize(text),
        TokenizerMode::Unicode => tokenize_unicode(text),
    }
}

/// Apenas os textos dos tokens, no formato que o etiquetador consome.
pub fn words(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn tokenize_unicode(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = text
        .unicode_word_indices()
        .map(|(start, word)| Token {
            text: word.to_string(),
            start,
            end: start + word.len(),
            index: 0,
        })
        .collect();
    reindex(&mut tokens);
    tokens
}

/// Adiciona `text[start..end]` como token, exceto vazio ou espaço simples.
fn push_piece(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    let piece = &text[start..end];
    if piece.is_empty() || piece == " " {
        return;
    }
    tokens.push(Token {
        text: piece.to_string(),
        start,
        end,
        index: 0,
    });
}

fn reindex(tokens: &mut [Token]) {
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
}
