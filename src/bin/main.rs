use crossterm::style::Stylize;
use linking_core::history::SearchHistory;
use linking_core::persistence::{load_or_default, save_history};
use linking_core::{LinkDecision, LinkStyle, LinkingEngine};
use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const HISTORY_PATH: &str = "history.bin";

fn main() {
    let engine = LinkingEngine::new();
    let mut history = load_or_default(Path::new(HISTORY_PATH));
    let mut active_word = String::new();
    let mut text = String::new();

    println!("Infinite Wiki link engine. Type 'exit' to save and quit.");
    println!("---------------------------------------------------------------");

    loop {
        render(&engine, &text, &active_word, &history);

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            ":history" => {
                println!("\nExplored words ({}):", history.word_count());
                for entry in history.recent(10) {
                    println!("  {} — {}", entry.word, entry.preview.chars().take(60).collect::<String>());
                }
                pause();
            }
            ":clear" => {
                history.clear();
                active_word.clear();
            }
            s if s.starts_with(":open ") => {
                let word = s[":open ".len()..].trim().to_string();
                if !word.is_empty() {
                    history.put(&word, &text, now_millis());
                    active_word = word;
                }
            }
            "" => {}
            s => {
                // New text to annotate; a fresh block means nothing is loading.
                text = s.to_string();
                active_word.clear();
            }
        }
    }

    println!("\nSaving history...");
    if let Err(e) = save_history(&history, Path::new(HISTORY_PATH)) {
        eprintln!("[ERROR] Could not save history: {}", e);
    } else {
        println!("History saved to '{}'", HISTORY_PATH);
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn render(engine: &LinkingEngine, text: &str, active_word: &str, history: &SearchHistory) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("Infinite Wiki link engine");
    println!("---------------------------------------------------------------");
    println!("Type a block of text to annotate it.");
    println!("':open <word>' marks it loading and records it. ':history', ':clear', 'exit'.\n");

    if text.is_empty() {
        println!("(no text yet)");
    } else {
        let exclusions = history.explored_words();
        let decisions = engine.generate_links(text, active_word, &exclusions);
        print_decisions(&decisions);

        let linked = decisions.iter().filter(|d| d.is_linkable()).count();
        println!("\n\n{} of {} tokens linkable", linked, decisions.len());
    }
    print!("\n> ");
    stdout().flush().unwrap();
}

fn print_decisions(decisions: &[LinkDecision]) {
    for decision in decisions {
        match decision {
            LinkDecision::PassThrough { text } => print!("{}", text),
            LinkDecision::Linkable { text, active, .. } => {
                let styled = match decision.style() {
                    Some(LinkStyle::High) => text.clone().blue().bold().underlined(),
                    Some(LinkStyle::Medium) => text.clone().blue().bold(),
                    _ => text.clone().blue().underlined(),
                };
                if *active {
                    print!("{}", styled.reverse());
                } else {
                    print!("{}", styled);
                }
            }
        }
    }
    stdout().flush().unwrap();
}

fn pause() {
    print!("\n[enter to continue] ");
    stdout().flush().unwrap();
    let mut sink = String::new();
    let _ = stdin().read_line(&mut sink);
}
