//! Testes de ponta a ponta do etiquetador de Brill: léxico + regras + etiquetagem.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use natural_core::{BrillTagger, Error, Lexicon, RuleError, RuleSet, TaggedToken, DEFAULT_CATEGORY};

fn dog_lexicon() -> Lexicon {
    let entries: HashMap<String, Vec<String>> = [("the", "DT"), ("dog", "NN"), ("barks", "VBZ")]
        .into_iter()
        .map(|(w, c)| (w.to_string(), vec![c.to_string()]))
        .collect();
    Lexicon::new(entries, DEFAULT_CATEGORY).unwrap()
}

fn tagger(rules: &str) -> BrillTagger {
    BrillTagger::new(dog_lexicon(), RuleSet::parse(rules).unwrap())
}

fn categories(tagged: &[TaggedToken]) -> Vec<&str> {
    tagged.iter().map(|t| t.category.as_str()).collect()
}

#[test]
fn test_prevtag_rewrites_dog() {
    let tagged = tagger("NN VB PREVTAG DT").tag(&["the", "dog", "barks"]);
    assert_eq!(
        tagged,
        [
            TaggedToken::new("the", "DT"),
            TaggedToken::new("dog", "VB"),
            TaggedToken::new("barks", "VBZ"),
        ]
    );
}

#[test]
fn test_unknown_word_gets_default_category() {
    let tagged = tagger("").tag(&["foo"]);
    assert_eq!(tagged, [TaggedToken::new("foo", "NN")]);

    let custom = BrillTagger::new(
        Lexicon::parse("the DT\n", "UNK").unwrap(),
        RuleSet::default(),
    );
    assert_eq!(categories(&custom.tag(&["the", "foo"])), ["DT", "UNK"]);
}

#[test]
fn test_output_preserves_length_and_words() {
    let tagger = tagger("NN VB PREVTAG DT\nVBZ NNS NEXTTAG DT");
    assert!(tagger.tag::<&str>(&[]).is_empty());

    let sentence = ["the", "dog", "barks", "at", "the", "moon"];
    let tagged = tagger.tag(&sentence);
    assert_eq!(tagged.len(), sentence.len());
    for (token, word) in tagged.iter().zip(sentence) {
        assert_eq!(token.word(), word);
    }
}

#[test]
fn test_tagging_is_deterministic() {
    let tagger = tagger("NN VB PREVTAG DT\nNN JJ NEXTTAG VBZ");
    let sentence = ["the", "dog", "dog", "barks"];
    let first = tagger.tag(&sentence);
    for _ in 0..10 {
        assert_eq!(tagger.tag(&sentence), first);
    }
}

#[test]
fn test_rule_order_changes_result() {
    let sentence = ["the", "dog"];
    let vb_first = tagger("NN VB PREVTAG DT\nNN JJ PREVTAG DT").tag(&sentence);
    let jj_first = tagger("NN JJ PREVTAG DT\nNN VB PREVTAG DT").tag(&sentence);
    assert_eq!(vb_first[1].category, "VB");
    assert_eq!(jj_first[1].category, "JJ");
}

#[test]
fn test_positions_are_visited_before_rules() {
    let tagged = tagger("NN VB PREVTAG DT\nDT PDT NEXTTAG VB").tag(&["the", "dog"]);
    assert_eq!(categories(&tagged), ["DT", "VB"]);

    let mut rewrites = Vec::new();
    tagger("NN VB PREVTAG DT\nDT PDT NEXTTAG VB").tag_traced(&["the", "dog"], |position, rule, _| {
        rewrites.push((position, rule.to_string()));
    });
    assert_eq!(rewrites, [(1, "NN VB PREVTAG DT".to_string())]);
}

#[test]
fn test_wildcard_matches_any_category() {
    let tagger = tagger("* JJ PREVTAG DT");
    // "dog" (NN) e "barks" (VBZ) casam igualmente
    assert_eq!(categories(&tagger.tag(&["the", "dog"])), ["DT", "JJ"]);
    assert_eq!(categories(&tagger.tag(&["the", "barks"])), ["DT", "JJ"]);
    // sem DT antes, nada muda
    assert_eq!(categories(&tagger.tag(&["dog", "barks"])), ["NN", "VBZ"]);
}

#[test]
fn test_predicates_at_sentence_boundaries_do_not_match() {
    let rules = "\
NN VB PREVTAG DT
NN VB NEXTTAG VBZ
NN VB PREV1OR2OR3TAG DT
NN VB NEXT1OR2OR3TAG VBZ
NN VB SURROUNDTAG DT VBZ
NN VB WDAND2AFT dog VBZ
NN VB WDAND2TAGBFR dog DT
NN VB LBIGRAM the dog
NN VB RBIGRAM dog barks
";
    let tagged = tagger(rules).tag(&["dog"]);
    assert_eq!(tagged, [TaggedToken::new("dog", "NN")]);
}

#[test]
fn test_surroundtag_rule_is_parsed_with_two_parameters() {
    let rules = RuleSet::parse("NN VB SURROUNDTAG DT VBZ").unwrap();
    let rule = &rules.rules()[0];
    assert_eq!(rule.predicate().kind().name(), "SURROUNDTAG");
    assert_eq!(rule.predicate().param1(), "DT");
    assert_eq!(rule.predicate().param2(), Some("VBZ"));

    let tagged = BrillTagger::new(dog_lexicon(), rules).tag(&["the", "dog", "barks"]);
    assert_eq!(categories(&tagged), ["DT", "VB", "VBZ"]);
}

#[test]
fn test_extra_parameter_on_unary_predicate_is_rejected() {
    let err = RuleSet::parse("NN VB PREVTAG DT\n\nNN VB NEXTTAG DT EXTRA").unwrap_err();
    match err {
        Error::Rule { line, text, kind } => {
            assert_eq!(line, 3);
            assert_eq!(text, "NN VB NEXTTAG DT EXTRA");
            assert_eq!(
                kind,
                RuleError::Arity {
                    predicate: "NEXTTAG",
                    expected: 1,
                    found: 2,
                }
            );
        }
        other => panic!("erro inesperado: {other:?}"),
    }
}

#[test]
fn test_malformed_rule_files_fail() {
    assert!(matches!(
        RuleSet::parse("NN VB NOTAPREDICATE DT"),
        Err(Error::Rule { kind: RuleError::UnknownPredicate(_), .. })
    ));
    assert!(matches!(
        RuleSet::parse("NN VB"),
        Err(Error::Rule { kind: RuleError::FieldCount(2), .. })
    ));
    assert!(matches!(
        RuleSet::parse("NN VB SURROUNDTAG DT"),
        Err(Error::Rule { kind: RuleError::Arity { expected: 2, found: 1, .. }, .. })
    ));
}

#[test]
fn test_json_lexicon_end_to_end() {
    let lexicon = Lexicon::parse(
        r#"{"I": ["PRP"], "want": ["VBP", "VB"], "to": ["TO"], "run": ["NN", "VB"]}"#,
        "NN",
    )
    .unwrap();
    let rules = RuleSet::parse("NN VB PREVTAG TO\n").unwrap();
    let tagger = BrillTagger::new(lexicon, rules);

    let tagged = tagger.tag(&["I", "want", "to", "run"]);
    assert_eq!(categories(&tagged), ["PRP", "VBP", "TO", "VB"]);
    // minúsculas também são procuradas
    assert_eq!(categories(&tagger.tag(&["To", "run"])), ["TO", "VB"]);
}

#[test]
fn test_shared_tagger_across_threads() {
    let tagger = Arc::new(tagger("NN VB PREVTAG DT"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tagger = Arc::clone(&tagger);
            thread::spawn(move || tagger.tag(&["the", "dog", "barks"]))
        })
        .collect();

    for handle in handles {
        let tagged = handle.join().unwrap();
        assert_eq!(categories(&tagged), ["DT", "VB", "VBZ"]);
    }
}

#[test]
fn test_tag_sentences_matches_sequential() {
    let tagger = tagger("NN VB PREVTAG DT");
    let sentences = vec![
        vec!["the", "dog"],
        vec![],
        vec!["dog", "barks"],
        vec!["the", "foo", "barks"],
    ];
    let parallel = tagger.tag_sentences(&sentences);
    let sequential: Vec<Vec<TaggedToken>> = sentences.iter().map(|s| tagger.tag(s)).collect();
    assert_eq!(parallel, sequential);
}
