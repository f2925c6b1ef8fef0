//! # Codificação Fonética — Soundex
//!
//! Algoritmos fonéticos mapeiam palavras que "soam parecido" para o mesmo código,
//! útil para busca tolerante a grafia (ex: "Robert" e "Rupert" → `R163`).
//!
//! ## Soundex
//!
//! 1. Converte para minúsculas e separa a primeira letra.
//! 2. No restante, troca consoantes por dígitos:
//!
//!    | Dígito | Letras              |
//!    |--------|---------------------|
//!    | 1      | b f p v             |
//!    | 2      | c g j k q s x z     |
//!    | 3      | d t                 |
//!    | 4      | l                   |
//!    | 5      | m n                 |
//!    | 6      | r                   |
//!
//! 3. Colapsa dígitos iguais **adjacentes** (vogais e `h`/`w` separam repetições).
//! 4. Remove um dígito inicial igual ao código da primeira letra.
//! 5. Descarta tudo que não é dígito, completa com zeros até 3 dígitos e corta.
//! 6. Prefixa a primeira letra em maiúscula.

use crate::stopwords::is_stopword;
use crate::tokenizer::tokenize;

/// Comprimento padrão do código (letra + 3 dígitos).
const DEFAULT_DIGITS: usize = 3;

/// Interface comum dos codificadores fonéticos.
pub trait Phonetic {
    /// Código de `token`, limitado a `max_length` caracteres quando informado.
    fn process_with_max(&self, token: &str, max_length: Option<usize>) -> String;

    fn process(&self, token: &str) -> String {
        self.process_with_max(token, None)
    }

    /// Duas palavras "soam igual" se têm o mesmo código.
    fn sounds_like(&self, a: &str, b: &str) -> bool {
        self.process(a) == self.process(b)
    }

    /// Tokeniza o texto e retorna o código de cada palavra.
    ///
    /// Sem `keep_stops`, as stopwords (comparação exata, ver
    /// [`crate::stopwords`]) são descartadas antes da codificação.
    fn tokenize_and_phoneticize(&self, text: &str, keep_stops: bool) -> Vec<String> {
        tokenize(text)
            .iter()
            .filter(|t| keep_stops || !is_stopword(&t.text))
            .map(|t| self.process(&t.text))
            .collect()
    }
}

/// Codificador Soundex.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundEx;

impl SoundEx {
    pub fn new() -> Self {
        Self
    }
}

/// Dígito Soundex de uma letra minúscula.
fn code(c: char) -> Option<char> {
    match c {
        'b' | 'f' | 'p' | 'v' => Some('1'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some('2'),
        'd' | 't' => Some('3'),
        'l' => Some('4'),
        'm' | 'n' => Some('5'),
        'r' => Some('6'),
        _ => None,
    }
}

fn transform(c: char) -> char {
    code(c).unwrap_or(c)
}

impl Phonetic for SoundEx {
    fn process_with_max(&self, token: &str, max_length: Option<usize>) -> String {
        let lower = token.to_lowercase();
        let mut chars = lower.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        // Colapsa dígitos repetidos adjacentes
        let mut transformed: Vec<char> = Vec::new();
        for c in chars.map(transform) {
            if c.is_ascii_digit() && transformed.last() == Some(&c) {
                continue;
            }
            transformed.push(c);
        }

        if transformed.first() == Some(&transform(first)) {
            transformed.remove(0);
        }

        let mut digits: String = transformed.into_iter().filter(char::is_ascii_digit).collect();
        while digits.len() < DEFAULT_DIGITS {
            digits.push('0');
        }

        let keep = max_length
            .filter(|&max| max > 1)
            .map_or(DEFAULT_DIGITS, |max| max - 1);
        digits.truncate(keep);

        let mut result: String = first.to_uppercase().collect();
        result.push_str(&digits);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_codes() {
        let soundex = SoundEx::new();
        assert_eq!(soundex.process("Robert"), "R163");
        assert_eq!(soundex.process("Rupert"), "R163");
        assert_eq!(soundex.process("Tymczak"), "T522");
        assert_eq!(soundex.process("Pfister"), "P236");
    }

    #[test]
    fn test_leading_duplicate_removed() {
        assert_eq!(SoundEx.process("Lloyd"), "L300");
    }

    #[test]
    fn test_vowel_separated_repeats_kept() {
        // h não separa em Soundex americano, mas aqui separa
        assert_eq!(SoundEx.process("Ashcraft"), "A226");
    }

    #[test]
    fn test_padding() {
        assert_eq!(SoundEx.process("Lee"), "L000");
        assert_eq!(SoundEx.process("a"), "A000");
    }

    #[test]
    fn test_max_length() {
        assert_eq!(SoundEx.process_with_max("Robert", Some(3)), "R16");
        assert_eq!(SoundEx.process_with_max("Robert", Some(8)), "R163");
        assert_eq!(SoundEx.process_with_max("Robert", Some(1)), "R163");
    }

    #[test]
    fn test_sounds_like() {
        assert!(SoundEx.sounds_like("Smith", "Smyth"));
        assert!(!SoundEx.sounds_like("Smith", "Jones"));
    }

    #[test]
    fn test_tokenize_and_phoneticize() {
        assert_eq!(SoundEx.tokenize_and_phoneticize("Robert, Rupert!", false), ["R163", "R163"]);
    }

    #[test]
    fn test_tokenize_and_phoneticize_stopwords() {
        let text = "Robert and the dog";
        assert_eq!(SoundEx.tokenize_and_phoneticize(text, false), ["R163", "D200"]);
        assert_eq!(
            SoundEx.tokenize_and_phoneticize(text, true),
            ["R163", "A530", "T000", "D200"]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(SoundEx.process(""), "");
    }
}
