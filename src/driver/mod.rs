//! Evaluation driver.
//!
//! Runs the lexer and then the parser over one expression and turns every
//! failure into a readable report.

pub mod driver;
