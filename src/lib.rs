// src/lib.rs

pub mod core;
pub mod history;
pub mod persistence;
pub mod stream;

pub use crate::core::engine::LinkingEngine;
pub use crate::core::types::{Category, LinkDecision, LinkStyle, Token, TokenKind};
