//! Parser implementation for evaluating additive expressions.
//!
//! The grammar is `expr := number (('+' | '-') number)*`. Both operators
//! share one precedence level and associate to the left, so the parser
//! folds the result while it walks the token stream once, front to back.

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position,
};

/// The parser state: an immutable token sequence and a forward-only cursor.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser positioned at the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the cursor position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the token under the cursor and advances past it.
    pub fn next_token(&mut self) -> Option<Token> {
        let token = *self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Consumes the next token, which must be a number.
    ///
    /// # Errors
    ///
    /// `UnexpectedEndOfInput` when the tokens are exhausted, `InvalidToken`
    /// when the next token is an operator. The reported index is that of the
    /// offending token itself, not the cursor after consuming it, so a misplaced
    /// token at index 7 reports 7 rather than 8.
    pub fn parse_number(&mut self) -> Result<i64, Error> {
        let index = self.pos;
        let Some(token) = self.next_token() else {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                Position::Token(self.tokens.len()),
            ));
        };

        match token {
            Token::Number(value) => Ok(value),
            Token::Plus | Token::Minus => Err(Error::new(
                ErrorImpl::InvalidToken { token },
                Position::Token(index),
            )),
        }
    }

    /// Evaluates the whole token sequence.
    ///
    /// A number where an operator was expected fails with `InvalidToken` at
    /// that number's 0-based index (7 for `1 + 2 + 3 + 5 5`), one less than
    /// the cursor position after it is consumed.
    pub fn parse(&mut self) -> Result<i64, Error> {
        let mut value = self.parse_number()?;

        while self.has_tokens() {
            let index = self.pos;
            let Some(token) = self.next_token() else { break };

            let applied = match token {
                Token::Plus => value.checked_add(self.parse_number()?),
                Token::Minus => value.checked_sub(self.parse_number()?),
                Token::Number(_) => {
                    return Err(Error::new(
                        ErrorImpl::InvalidToken { token },
                        Position::Token(index),
                    ))
                }
            };

            value = applied.ok_or_else(|| {
                Error::new(
                    ErrorImpl::ArithmeticOverflow { operator: token },
                    Position::Token(index),
                )
            })?;
        }

        debug!(target: "lexcalc::parser", value, "parsed");
        Ok(value)
    }
}

pub fn parse(tokens: Vec<Token>) -> Result<i64, Error> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}
