// src/core/tokenizer.rs
use crate::core::tables::PUNCTUATION;
use crate::core::types::{Token, TokenKind};

fn classify(c: char) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Whitespace
    } else if PUNCTUATION.contains(&c) {
        TokenKind::Punctuation
    } else {
        TokenKind::Word
    }
}

/// Splits text into word, whitespace, and punctuation tokens.
/// Lossless: concatenating the tokens in order reproduces the input exactly.
/// O(n) over the input; never produces an empty token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_kind = TokenKind::Word;

    for c in text.chars() {
        let kind = classify(c);
        if !current.is_empty() && kind == current_kind {
            current.push(c);
        } else {
            if !current.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut current), current_kind));
            }
            current.push(c);
            current_kind = kind;
        }
    }
    if !current.is_empty() {
        tokens.push(Token::new(current, current_kind));
    }
    tokens
}
