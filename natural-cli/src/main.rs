//! # natural — linha de comando
//!
//! ```text
//! natural tag "I want to run"
//! natural tag --lexicon lexicon.json --rules rules.txt --json < corpus.txt
//! natural soundex Robert Rupert
//! natural spell --wordlist words.txt --max-distance 2 somthing
//! ```
//!
//! O nível de log vem de `RUST_LOG` (padrão `warn`) e vai para stderr.

mod cli;

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use natural_core::corpus::{demo_rule_set, DEMO_LEXICON};
use natural_core::tokenizer::{tokenize_with_mode, words};
use natural_core::{
    BrillTagger, Lexicon, Phonetic, RuleSet, SoundEx, Spellcheck, TaggedToken, TokenizerMode,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, Soundex, Spell, Tag};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Tag(args) => tag(args),
        Command::Soundex(args) => soundex(args),
        Command::Spell(args) => spell(args),
    }
}

fn build_tagger(args: &Tag) -> Result<BrillTagger> {
    let lexicon = match &args.lexicon {
        Some(path) => Lexicon::load(path, args.default_category.as_str())
            .with_context(|| format!("falha ao carregar o léxico {}", path.display()))?,
        None => Lexicon::parse(DEMO_LEXICON, args.default_category.as_str())?,
    };
    let rule_set = match &args.rules {
        Some(path) => RuleSet::load(path)
            .with_context(|| format!("falha ao carregar as regras {}", path.display()))?,
        None => demo_rule_set()?,
    };
    info!(
        lexicon = lexicon.len(),
        rules = rule_set.len(),
        "etiquetador pronto"
    );
    Ok(BrillTagger::new(lexicon, rule_set))
}

fn tag(args: Tag) -> Result<()> {
    let tagger = build_tagger(&args)?;
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("falha ao ler stdin")?;
            buf
        }
    };

    let mode: TokenizerMode = args.tokenizer.into();
    let sentences: Vec<Vec<String>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let tokens = tokenize_with_mode(line, mode);
            words(&tokens).into_iter().map(str::to_string).collect()
        })
        .collect();
    debug!(sentences = sentences.len(), "texto tokenizado");

    let tagged = tagger.tag_sentences(&sentences);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&tagged)?);
    } else {
        for sentence in &tagged {
            println!("{}", format_sentence(sentence));
        }
    }
    Ok(())
}

fn format_sentence(sentence: &[TaggedToken]) -> String {
    sentence
        .iter()
        .map(TaggedToken::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn soundex(args: Soundex) -> Result<()> {
    let encoder = SoundEx::new();
    for word in &args.words {
        println!("{word}\t{}", encoder.process(word));
    }
    Ok(())
}

fn spell(args: Spell) -> Result<()> {
    let content = std::fs::read_to_string(&args.wordlist)
        .with_context(|| format!("falha ao ler a lista de palavras {}", args.wordlist.display()))?;
    let checker = Spellcheck::new(content.split_whitespace());
    info!(words = content.split_whitespace().count(), "vocabulário carregado");

    for word in &args.words {
        if checker.is_correct(word) {
            println!("{word}\tok");
        } else {
            let corrections = checker.get_corrections(word, args.max_distance);
            println!("{word}\t{}", corrections.join(" "));
        }
    }
    Ok(())
}
