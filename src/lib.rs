#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    verifier::verifier::{verify_with, VerifierConfig},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod verifier;

/// A location in the source text. Lines start at 1; the column counts the
/// characters consumed on the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Result of running the front end over one compilation unit.
#[derive(Debug)]
pub struct Compilation {
    pub program: Program,
    pub parse_errors: Vec<Error>,
    pub verify_errors: Vec<Error>,
}

impl Compilation {
    pub fn is_ok(&self) -> bool {
        self.parse_errors.is_empty() && self.verify_errors.is_empty()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Error> {
        self.parse_errors.iter().chain(self.verify_errors.iter())
    }
}

/// Runs tokenize → parse → verify over in-memory source.
///
/// The only `Err` is a fatal lexer error; syntax and semantic problems are
/// collected in the returned [`Compilation`].
pub fn compile_source(source: &str, config: VerifierConfig) -> Result<Compilation, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    let (parser, program) = parser::parser::parse(tokens);
    let parse_errors = parser.errors().to_vec();
    let verify_errors = verify_with(&program, config);

    Ok(Compilation {
        program,
        parse_errors,
        verify_errors,
    })
}

/// Returns the 1-based `line` of `source`, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth((line as usize).checked_sub(1)?)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    /*
        error: message
        -> final.mn
          |
        2 | var int a = #
          | ------------^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();
    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("error: {}\n", error));
    } else {
        rendered.push_str(&format!("error: {} ({})\n", error, error.get_tip()));
    }
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line() {
        let source = "var int x = 5\n  var int y = 6\n";
        assert_eq!(super::get_line(source, 1), Some("var int x = 5"));
        assert_eq!(super::get_line(source, 2), Some("  var int y = 6"));
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_display_error_points_at_column() {
        let source = "var int x = 5\n    var int x = 6\n";
        let error = Error::new(
            ErrorImpl::AlreadyDefined {
                name: "x".to_string(),
            },
            Position::new(2, 13),
        );

        let rendered = super::display_error(&error, source, "demo.mn");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "error: already defined x");
        assert_eq!(lines[1], "-> demo.mn");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | var int x = 6");
        assert_eq!(lines[4], "  | --------^");
    }
}
