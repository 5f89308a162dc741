//! Parser module for evaluating token streams.
//!
//! This module contains the parser that consumes the lexer's tokens and
//! folds them into a single integer. It handles:
//!
//! - A leading number followed by any number of `+`/`-` operations
//! - Left-to-right evaluation with checked arithmetic
//! - Reporting the index of the first token that breaks the grammar

pub mod parser;

#[cfg(test)]
mod tests;
