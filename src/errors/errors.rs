use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::NumberOverflow { .. } => "NumberOverflow",
            ErrorImpl::ArithmeticOverflow { .. } => "ArithmeticOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::Suggestion(String::from(
                "Only digits, `+`, `-` and spaces are allowed",
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Every `+` or `-` must be followed by a number",
            )),
            ErrorImpl::InvalidToken { token } if token.is_operator() => ErrorTip::Suggestion(
                format!("Expected a number, found `{}`", token),
            ),
            ErrorImpl::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "Expected `+` or `-` before `{}`",
                token
            )),
            ErrorImpl::NumberOverflow { digits } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                digits
            )),
            ErrorImpl::ArithmeticOverflow { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("invalid token: {token:?}")]
    InvalidToken { token: Token },
    #[error("number does not fit in 64 bits: {digits:?}")]
    NumberOverflow { digits: String },
    #[error("result overflowed at operator {operator:?}")]
    ArithmeticOverflow { operator: Token },
}
