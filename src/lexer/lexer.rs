use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_DEFAULT_HANDLER};

use super::tokens::Token;

/// Handles a pattern match of the given length at the lexer's cursor.
pub type RegexHandler = fn(&mut Lexer, usize) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored so it can only match at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^ +").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(Token::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(Token::Minus, "-") },
    ];
}

#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    // Only ASCII is ever consumed, so this byte offset is also the
    // character offset and always sits on a char boundary.
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.source.len(), "cannot advance past end of input");
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(target: "lexcalc::lexer", pos = self.pos, %token, "token");
        self.tokens.push(token);
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, matched: usize) -> Result<(), Error> {
    let start = lexer.pos;
    let digits = &lexer.source[start..start + matched];

    let mut value: i64 = 0;
    for digit in digits.bytes().map(|b| i64::from(b - b'0')) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::NumberOverflow { digits: digits.to_string() },
                    Position::Char(start),
                )
            })?;
    }

    lexer.push(Token::Number(value));
    lexer.advance_n(matched);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, matched: usize) -> Result<(), Error> {
    lexer.advance_n(matched);
    Ok(())
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.end()))
        });

        match matched {
            Some((handler, len)) => handler(&mut lex, len)?,
            None => {
                let Some(character) = lex.at() else { break };
                debug!(target: "lexcalc::lexer", pos = lex.pos, ?character, "invalid character");
                return Err(Error::new(
                    ErrorImpl::InvalidCharacter { character },
                    Position::Char(lex.pos),
                ));
            }
        }
    }

    debug!(target: "lexcalc::lexer", count = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
