//! Lexical analysis module for the evaluator.
//!
//! This module contains the lexer (tokenizer) that converts an expression
//! into a flat stream of tokens for parsing. It handles:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of integer literals and the `+`/`-` operators
//! - Skipping of spaces
//! - Reporting the character offset of anything unrecognised

pub mod lexer;
pub mod tokens;
