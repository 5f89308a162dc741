use tracing::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    render_caret,
};

/// The outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub tokens: Vec<Token>,
    pub result: i64,
}

/// Everything shown to a user for one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// `Evaluating:`, `Lexer output:` and `Parser output:` lines, or the
    /// error report in place of whichever stage failed.
    pub transcript: String,
    /// The result, or the rendered error report.
    pub outcome: Result<i64, String>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub fn evaluate(source: &str) -> Result<Evaluation, Error> {
    let tokens = tokenize(source)?;
    let result = parse(tokens.clone())?;

    Ok(Evaluation { tokens, result })
}

/// Renders a distinct message for every error kind. Errors that did not
/// come from the lexer or parser get a generic message.
pub fn report(source: &str, error: &(dyn std::error::Error + 'static)) -> String {
    let Some(error) = error.downcast_ref::<Error>() else {
        return format!("An error occurred: {}", error);
    };

    let position = error.get_position().offset();
    let mut message = match error.get_error() {
        ErrorImpl::InvalidCharacter { character } => format!(
            "Input contained an invalid character at position {}: {}\n{}",
            position,
            character.escape_debug(),
            render_caret(source, position)
        ),
        ErrorImpl::UnexpectedEndOfInput => String::from("Unexpected end of input during parsing"),
        ErrorImpl::InvalidToken { token } => {
            format!("Invalid token during parsing at index {}: {}", position, token)
        }
        ErrorImpl::NumberOverflow { digits } => format!(
            "Number at position {} does not fit in a 64-bit integer: {}\n{}",
            position,
            digits,
            render_caret(source, position)
        ),
        ErrorImpl::ArithmeticOverflow { operator } => format!(
            "Result overflowed a 64-bit integer at index {}: {}",
            position, operator
        ),
    };

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        message.push_str(&format!("\nhelp: {}", tip));
    }

    message
}

pub fn evaluate_and_report(source: &str) -> Report {
    info!(target: "lexcalc::driver", source, "evaluating");
    let mut transcript = format!("Evaluating: {}\n", source);

    let outcome = tokenize(source).and_then(|tokens| {
        transcript.push_str(&format!("Lexer output: {:?}\n", tokens));
        parse(tokens)
    });

    let outcome = match outcome {
        Ok(result) => {
            transcript.push_str(&format!("Parser output: {}", result));
            Ok(result)
        }
        Err(error) => {
            debug!(target: "lexcalc::driver", error = error.get_error_name(), "evaluation failed");
            let rendered = report(source, &error);
            transcript.push_str(&rendered);
            Err(rendered)
        }
    };

    Report { transcript, outcome }
}
