#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod parser;

extern crate regex;

/// Where in the input a failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// 0-based character offset into the source text.
    Char(usize),
    /// 0-based index into the token sequence.
    Token(usize),
}

impl Position {
    pub fn offset(&self) -> usize {
        match self {
            Position::Char(offset) | Position::Token(offset) => *offset,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Char(offset) => write!(f, "character {}", offset),
            Position::Token(index) => write!(f, "token {}", index),
        }
    }
}

/// Finds the `'\n'`-delimited line holding the character at `offset`.
///
/// Returns the 1-based line number, the line without its terminator and the
/// column of `offset` within it.
pub fn get_line_at_position(source: &str, offset: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut found = (1, String::new(), offset);

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let len = line.chars().count();
        found = (index + 1, line.trim_end_matches('\n').to_string(), offset.saturating_sub(start));

        if offset < start + len {
            break;
        }
        start += len;
    }

    found
}

pub fn render_caret(source: &str, offset: usize) -> String {
    /*
          |
        1 | 1 + 2 + abcdefg
          | --------^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    // Control characters would shift or split the diagram; each stays one column wide.
    let line_text: String = line_text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let mut rendered = format!("{:>padding$}\n", "|");
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, render_caret, Position};

    #[test]
    fn test_render_caret() {
        let rendered = render_caret("1 + 2 + abcdefg", 8);
        assert_eq!(rendered, "  |\n1 | 1 + 2 + abcdefg\n  | --------^");
    }

    #[test]
    fn test_render_caret_leading_spaces() {
        let rendered = render_caret("   1 # 2", 5);
        assert_eq!(rendered, "  |\n1 | 1 # 2\n  | --^");
    }

    #[test]
    fn test_render_caret_first_character() {
        let rendered = render_caret("x", 0);
        assert_eq!(rendered, "  |\n1 | x\n  | ^");
    }

    #[test]
    fn test_render_caret_later_line() {
        let rendered = render_caret("1 + 2\n+ x", 8);
        assert_eq!(rendered, "  |\n2 | + x\n  | --^");
    }

    #[test]
    fn test_render_caret_control_characters() {
        let rendered = render_caret("3\t+ 4", 1);
        assert_eq!(rendered, "  |\n1 | 3 + 4\n  | -^");
    }

    #[test]
    fn test_get_line_at_position() {
        assert_eq!(get_line_at_position("1 + 2\n+ x", 5), (1, "1 + 2".to_string(), 5));
        assert_eq!(get_line_at_position("1 + 2\n+ x", 6), (2, "+ x".to_string(), 0));
        assert_eq!(get_line_at_position("1 + 2\n+ x", 8), (2, "+ x".to_string(), 2));
        assert_eq!(get_line_at_position("", 0), (1, String::new(), 0));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::Char(3).to_string(), "character 3");
        assert_eq!(Position::Token(7).to_string(), "token 7");
        assert_eq!(Position::Token(7).offset(), 7);
    }
}
