// End-to-end behavior of the linking engine over whole texts.

use linking_core::core::tokenizer::tokenize;
use linking_core::{Category, LinkDecision, LinkingEngine, TokenKind};

const SAMPLE: &str = "The quantum theory of consciousness fascinates philosophers.";

fn linkable_words(decisions: &[LinkDecision]) -> Vec<String> {
    decisions
        .iter()
        .filter_map(|d| match d {
            LinkDecision::Linkable { text, .. } => Some(text.to_lowercase()),
            _ => None,
        })
        .collect()
}

#[test]
fn tokenize_round_trips_arbitrary_text() {
    let samples = [
        SAMPLE,
        "",
        "a an the",
        "—punctuation... everywhere?! (yes) [no] {maybe}\n",
        "Multi\nline\ttext with  double  spaces",
    ];
    for text in samples {
        let rejoined: String = tokenize(text).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rejoined, text);
    }
}

#[test]
fn one_decision_per_token_in_order() {
    let engine = LinkingEngine::new();
    let tokens = tokenize(SAMPLE);
    let decisions = engine.generate_links(SAMPLE, "", &[]);

    assert_eq!(decisions.len(), tokens.len());
    for (token, decision) in tokens.iter().zip(&decisions) {
        assert_eq!(token.text, decision.text());
    }
}

#[test]
fn identical_calls_yield_identical_output() {
    let engine = LinkingEngine::new();
    let exclusions = vec!["consciousness".to_string()];
    let first = engine.generate_links(SAMPLE, "quantum", &exclusions);
    let second = engine.generate_links(SAMPLE, "quantum", &exclusions);
    assert_eq!(first, second);
}

#[test]
fn linkable_count_respects_cap_and_floor() {
    let engine = LinkingEngine::new();
    let texts = [
        SAMPLE,
        "Ancient philosophy shaped medieval metaphysical thinking across cultures.",
        "time make take come know quantum",
        "one two three four five six seven eight nine ten",
    ];
    for text in texts {
        let word_tokens = tokenize(text)
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .count();
        let cap = (word_tokens as f64 * 0.7).ceil() as usize;

        let decisions = engine.generate_links(text, "", &[]);
        let mut linked = 0;
        for decision in &decisions {
            if let LinkDecision::Linkable { confidence, .. } = decision {
                assert!(*confidence > 0.4);
                linked += 1;
            }
        }
        assert!(linked <= cap, "{}: {} links over cap {}", text, linked, cap);
    }
}

#[test]
fn excluded_words_are_never_linkable() {
    let engine = LinkingEngine::new();
    let exclusions = vec!["Quantum".to_string(), "philosophers".to_string()];
    let decisions = engine.generate_links(SAMPLE, "", &exclusions);

    let words = linkable_words(&decisions);
    assert!(!words.contains(&"quantum".to_string()));
    assert!(!words.contains(&"philosophers".to_string()));
}

#[test]
fn active_flag_matches_case_insensitively() {
    let engine = LinkingEngine::new();
    let text = "Quantum mechanics meets quantum computing.";
    let decisions = engine.generate_links(text, "quantum", &[]);

    let mut active_seen = 0;
    for decision in &decisions {
        if let LinkDecision::Linkable { text, active, .. } = decision {
            if text.eq_ignore_ascii_case("quantum") {
                assert!(*active);
                active_seen += 1;
            } else {
                assert!(!*active);
            }
        }
    }
    assert_eq!(active_seen, 2);
}

#[test]
fn quantum_sentence_scenario() {
    let engine = LinkingEngine::new();
    let decisions = engine.generate_links(SAMPLE, "", &[]);

    let words = linkable_words(&decisions);
    for expected in ["quantum", "theory", "consciousness", "philosophers"] {
        assert!(words.contains(&expected.to_string()), "missing {}", expected);
    }

    // Stop words stay plain.
    for decision in &decisions {
        if matches!(decision.text(), "The" | "of") {
            assert!(!decision.is_linkable());
        }
    }

    // Domain assignments from the keyword table.
    for decision in &decisions {
        if let LinkDecision::Linkable { text, category, .. } = decision {
            match text.as_str() {
                "quantum" => assert_eq!(*category, Category::Science),
                "consciousness" => assert_eq!(*category, Category::Philosophy),
                "theory" => assert_eq!(*category, Category::General),
                _ => {}
            }
        }
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let engine = LinkingEngine::new();
    assert!(engine.generate_links("", "", &[]).is_empty());
}

#[test]
fn all_stop_words_yield_zero_links() {
    let engine = LinkingEngine::new();
    let decisions = engine.generate_links("a an the", "", &[]);
    assert!(decisions.iter().all(|d| !d.is_linkable()));
    // Still one decision per token.
    assert_eq!(decisions.len(), tokenize("a an the").len());
}

#[test]
fn excluding_one_word_changes_only_that_decision() {
    let engine = LinkingEngine::new();
    let before = engine.generate_links(SAMPLE, "", &[]);
    let after = engine.generate_links(SAMPLE, "", &["quantum".to_string()]);

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        if b.text() == "quantum" {
            assert!(b.is_linkable());
            assert!(!a.is_linkable());
        } else {
            assert_eq!(b, a);
        }
    }
}

#[test]
fn streamed_prefixes_always_render_completely() {
    // The caller re-runs the engine over the whole accumulated buffer after
    // each fragment; every prefix must render losslessly.
    let engine = LinkingEngine::new();
    let mut buffer = String::new();
    for fragment in ["The quantum ", "theory of conscious", "ness fascinates philosophers."] {
        buffer.push_str(fragment);
        let decisions = engine.generate_links(&buffer, "", &[]);
        let rejoined: String = decisions.iter().map(|d| d.text()).collect();
        assert_eq!(rejoined, buffer);
    }
}
