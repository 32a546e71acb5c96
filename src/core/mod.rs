// src/core/mod.rs

pub mod categorize;
pub mod engine;
pub mod filter;
pub mod rank;
pub mod scorer;
pub mod tables;
pub mod tokenizer;
pub mod types;
