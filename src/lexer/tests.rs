//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type names, booleans and identifiers
//! - Integer and string literals
//! - Operators and punctuation
//! - Comments and the `@import` instruction
//! - Positions and error cases

use std::io::{self, Read};

use crate::Position;

use super::{
    lexer::{tokenize, tokenize_reader, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("var if else for while return break continue as func efunc mfunc"),
        vec![
            TokenKind::Var,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Return,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::As,
            TokenKind::Func,
            TokenKind::Efunc,
            TokenKind::Mfunc,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_types_and_booleans() {
    let tokens = tokenize("string int float double bool true false").unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::TypeAnnotation);
    }
    assert_eq!(tokens[1].value, "int");
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo Bar variable integer").unwrap();

    for (token, expected) in tokens.iter().zip(["foo", "Bar", "variable", "integer"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, expected);
    }
}

#[test]
fn test_identifiers_are_letters_only() {
    let tokens = tokenize("x_y").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "_");
    assert_eq!(tokens[2].value, "y");
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 12ab").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].value, "12");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "ab");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % < > = == ! !="),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    let tokens = tokenize("a==b!=c=!d").unwrap();
    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();

    assert_eq!(values, vec!["a", "==", "b", "!=", "c", "=", "!", "d", "EOF"]);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , ."),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "two words""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "two words");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_string_keeps_backslashes() {
    let tokens = tokenize(r#""a\nb""#).unwrap();

    assert_eq!(tokens[0].value, "a\\nb");
}

#[test]
fn test_unterminated_string() {
    let tokens = tokenize("\"abc").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_multiline_string_moves_line() {
    let tokens = tokenize("\"a\nb\" x").unwrap();

    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[1].position, Position::new(2, 4));
}

#[test]
fn test_comment_becomes_single_newline() {
    assert_eq!(
        kinds("x // a comment\ny"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(
        kinds("x // trailing"),
        vec![TokenKind::Identifier, TokenKind::Newline, TokenKind::EOF]
    );
}

#[test]
fn test_import_directive() {
    let tokens = tokenize("@import \"std\"").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Import);
    assert_eq!(tokens[0].value, "@import");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "std");
}

#[test]
fn test_unknown_directive_is_illegal() {
    let tokens = tokenize("@include x").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "@include");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_illegal_character() {
    let tokens = tokenize("var int a = #").unwrap();

    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].value, "#");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("var int x = 5\n  y").unwrap();
    let positions: Vec<Position> = tokens.iter().map(|token| token.position).collect();

    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 5),
            Position::new(1, 9),
            Position::new(1, 11),
            Position::new(1, 13),
            Position::new(1, 14),
            Position::new(2, 3),
            Position::new(2, 3),
        ]
    );
}

#[test]
fn test_values_concatenate_to_source() {
    let source = "var int x=5\nfunc f(int a){\nreturn a*2\n}\n";
    let tokens = tokenize(source).unwrap();

    let joined: String = tokens
        .iter()
        .filter(|token| token.kind != TokenKind::EOF)
        .map(|token| token.value.as_str())
        .collect();

    assert_eq!(joined, source.replace(' ', ""));
}

#[test]
fn test_exactly_one_eof() {
    let tokens = tokenize("a\n\n").unwrap();

    assert_eq!(
        tokens.iter().filter(|token| token.kind == TokenKind::EOF).count(),
        1
    );
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::from_source("x");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_invalid_utf8_is_fatal() {
    let error = tokenize_reader(&[b'x', b' ', 0xFF][..]).unwrap_err();

    assert!(error.is_fatal());
    assert_eq!(error.get_error_name(), "UnreadableSource");
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn test_reader_failure_is_fatal() {
    let error = tokenize_reader(BrokenReader).unwrap_err();

    assert!(error.is_fatal());
    assert_eq!(error.to_string(), "unreadable source: disk on fire");
}

#[test]
fn test_multibyte_characters() {
    let tokens = tokenize("\"héllo\" ü").unwrap();

    assert_eq!(tokens[0].value, "héllo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "ü");
}
