//! Unit tests for the parser module.
//!
//! This module contains tests for evaluating token sequences including:
//! - Addition and subtraction chains
//! - Missing operands
//! - Misplaced numbers and operators
//! - Overflow of the running result

use super::parser::{parse, Parser};
use crate::{errors::errors::ErrorImpl, lexer::lexer::tokenize, lexer::tokens::Token, Position};

#[test]
fn test_parse_addition() {
    let tokens = vec![Token::Number(10), Token::Plus, Token::Number(3), Token::Plus, Token::Number(5)];

    assert_eq!(parse(tokens).unwrap(), 18);
}

#[test]
fn test_parse_subtraction() {
    let tokens = tokenize("10 + 5 - 3 - 1").unwrap();

    assert_eq!(parse(tokens).unwrap(), 11);
}

#[test]
fn test_parse_is_left_associative() {
    let tokens = tokenize("10 - 3 - 2").unwrap();

    assert_eq!(parse(tokens).unwrap(), 5);
}

#[test]
fn test_parse_single_number() {
    assert_eq!(parse(vec![Token::Number(42)]).unwrap(), 42);
}

#[test]
fn test_parse_negative_result() {
    let tokens = tokenize("1 - 5").unwrap();

    assert_eq!(parse(tokens).unwrap(), -4);
}

#[test]
fn test_parse_empty_input() {
    let error = parse(vec![]).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(error.get_position(), &Position::Token(0));
}

#[test]
fn test_parse_trailing_operator() {
    let tokens = tokenize("1 + 2 + ").unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(error.get_position(), &Position::Token(4));
}

#[test]
fn test_parse_adjacent_numbers() {
    let tokens = tokenize("1 + 2 + 3 + 5 5").unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::InvalidToken { token: Token::Number(5) });
    assert_eq!(error.get_position(), &Position::Token(7));
}

#[test]
fn test_parse_leading_operator() {
    let error = parse(vec![Token::Minus, Token::Number(1)]).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::InvalidToken { token: Token::Minus });
    assert_eq!(error.get_position(), &Position::Token(0));
}

#[test]
fn test_parse_double_operator() {
    let tokens = tokenize("1 + + 2").unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::InvalidToken { token: Token::Plus });
    assert_eq!(error.get_position(), &Position::Token(2));
}

#[test]
fn test_parse_addition_overflow() {
    let tokens = tokenize("9223372036854775807 + 1").unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::ArithmeticOverflow { operator: Token::Plus });
    assert_eq!(error.get_position(), &Position::Token(1));
}

#[test]
fn test_parse_subtraction_overflow() {
    let tokens = tokenize("0 - 9223372036854775807 - 2").unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::ArithmeticOverflow { operator: Token::Minus });
    assert_eq!(error.get_position(), &Position::Token(3));
}

#[test]
fn test_parse_number_consumes_one_token() {
    let mut parser = Parser::new(vec![Token::Number(7), Token::Plus]);

    assert_eq!(parser.parse_number().unwrap(), 7);
    assert_eq!(parser.pos(), 1);
    assert_eq!(parser.current_token(), Some(&Token::Plus));

    let error = parser.parse_number().unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::InvalidToken { token: Token::Plus });
    assert!(!parser.has_tokens());
    assert_eq!(parser.next_token(), None);
}

#[test]
fn test_parse_number_at_end() {
    let mut parser = Parser::new(vec![]);
    let error = parser.parse_number().unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedEndOfInput);
}
