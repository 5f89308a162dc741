//! Utility macros for the lexer.
//!
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for single-character tokens

/// Creates a default lexer handler for simple single-token patterns.
///
/// Generates a handler function that pushes the given token and advances
/// the lexer position by the length of the literal.
///
/// # Arguments
///
/// * `$token` - The Token to push
/// * `$value` - The literal source text (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(Token::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($token:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: usize| -> Result<(), Error> {
            lexer.push($token);
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
