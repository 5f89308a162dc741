//! Error types and error handling for the evaluator.
//!
//! This module defines the errors raised while lexing and parsing an
//! expression. It includes:
//!
//! - An error structure carrying the position of the failure
//! - Specific error variants for the lexer and parser stages
//! - Short suggestions rendered alongside each error

pub mod errors;
