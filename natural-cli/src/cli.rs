use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use natural_core::{TokenizerMode, DEFAULT_CATEGORY};

/// Ferramentas de linguagem natural: etiquetador de Brill, Soundex e corretor.
#[derive(Debug, Parser)]
#[command(name = "natural", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Etiqueta um texto (argumento ou stdin), uma sentença por linha.
    Tag(Tag),
    /// Código Soundex de cada palavra.
    Soundex(Soundex),
    /// Sugestões de correção ortográfica.
    Spell(Spell),
}

#[derive(Debug, Parser)]
pub struct Tag {
    /// Léxico (texto ou JSON). Sem ele, usa o léxico de demonstração.
    #[arg(long, short = 'l')]
    pub lexicon: Option<PathBuf>,

    /// Arquivo de regras. Sem ele, usa as regras de demonstração.
    #[arg(long, short = 'r')]
    pub rules: Option<PathBuf>,

    /// Categoria para palavras fora do léxico.
    #[arg(long, short = 'd', default_value = DEFAULT_CATEGORY)]
    pub default_category: String,

    #[arg(long, short = 't', value_enum, default_value_t = Tokenizer::Word)]
    pub tokenizer: Tokenizer,

    /// Saída em JSON em vez de `palavra/CAT`.
    #[arg(long)]
    pub json: bool,

    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Tokenizer {
    Word,
    WordPunct,
    Unicode,
}

impl From<Tokenizer> for TokenizerMode {
    fn from(value: Tokenizer) -> Self {
        match value {
            Tokenizer::Word => TokenizerMode::Word,
            Tokenizer::WordPunct => TokenizerMode::WordPunct,
            Tokenizer::Unicode => TokenizerMode::Unicode,
        }
    }
}

#[derive(Debug, Parser)]
pub struct Soundex {
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct Spell {
    /// Lista de palavras do vocabulário (separadas por espaço em branco).
    #[arg(long, short = 'w')]
    pub wordlist: PathBuf,

    #[arg(long, short = 'm', default_value_t = 1)]
    pub max_distance: usize,

    #[arg(required = true)]
    pub words: Vec<String>,
}
