use std::io::Read;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    source::CharReader,
    tokens::{lookup_word, Token, TokenKind, IMPORT_DIRECTIVE},
};

/// Finite-state tokenizer over a character stream.
///
/// Each call to [`Lexer::next_token`] consumes exactly one token's worth of
/// input. Over-reading while disambiguating a multi-character token is undone
/// by pushing the last character back into the source.
pub struct Lexer<R: Read> {
    source: CharReader<R>,
    position: Position,
    reached_eof: bool,
}

impl<'a> Lexer<&'a [u8]> {
    pub fn from_source(source: &'a str) -> Self {
        Lexer::new(source.as_bytes())
    }
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Lexer {
            source: CharReader::new(reader),
            position: Position::start(),
            reached_eof: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the next token.
    ///
    /// Malformed input comes back as an `Illegal` token. The only error is an
    /// unreadable source, which should abort the compilation.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if self.reached_eof {
            return Ok(self.eof_token());
        }

        loop {
            let ch = match self.read()? {
                Some(ch) => ch,
                None => {
                    self.reached_eof = true;
                    return Ok(self.eof_token());
                }
            };
            let start = self.position;

            if let Some(kind) = single_char_kind(ch) {
                return Ok(MK_TOKEN!(kind, ch.to_string(), start));
            }

            let token = match ch {
                '\n' => {
                    self.new_line();
                    MK_TOKEN!(TokenKind::Newline, "\n", start)
                }
                '/' => self.lex_slash(start)?,
                '=' => self.lex_pair(start, '=', TokenKind::Equals, TokenKind::Assignment, "=")?,
                '!' => self.lex_pair(start, '=', TokenKind::NotEquals, TokenKind::Not, "!")?,
                '@' => {
                    let literal = self.lex_while(String::from("@"), |c| !c.is_whitespace())?;
                    let kind = if literal == IMPORT_DIRECTIVE {
                        TokenKind::Import
                    } else {
                        TokenKind::Illegal
                    };
                    MK_TOKEN!(kind, literal, start)
                }
                '"' => MK_TOKEN!(TokenKind::String, self.lex_string()?, start),
                c if c.is_whitespace() => continue,
                c if c.is_ascii_digit() => {
                    let literal = self.lex_while(c.to_string(), |c| c.is_ascii_digit())?;
                    MK_TOKEN!(TokenKind::Integer, literal, start)
                }
                c if c.is_alphabetic() => {
                    let literal = self.lex_while(c.to_string(), char::is_alphabetic)?;
                    MK_TOKEN!(lookup_word(&literal), literal, start)
                }
                c => MK_TOKEN!(TokenKind::Illegal, c.to_string(), start),
            };

            return Ok(token);
        }
    }

    fn read(&mut self) -> Result<Option<char>, Error> {
        let ch = self.source.read_char().map_err(|err| {
            Error::new(
                ErrorImpl::UnreadableSource {
                    reason: err.to_string(),
                },
                self.position,
            )
        })?;

        if ch.is_some() {
            self.position.column += 1;
        }
        Ok(ch)
    }

    fn unread(&mut self, ch: Option<char>) {
        if ch.is_some() {
            self.source.unread_char();
            self.position.column -= 1;
        }
    }

    fn new_line(&mut self) {
        self.position.line += 1;
        self.position.column = 0;
    }

    fn eof_token(&self) -> Token {
        MK_TOKEN!(TokenKind::EOF, "EOF", self.position)
    }

    /// `//` starts a comment that runs to the end of the line and stands in
    /// for that line's newline.
    fn lex_slash(&mut self, start: Position) -> Result<Token, Error> {
        let next = self.read()?;
        if next != Some('/') {
            self.unread(next);
            return Ok(MK_TOKEN!(TokenKind::Slash, "/", start));
        }

        loop {
            match self.read()? {
                Some('\n') => {
                    self.new_line();
                    break;
                }
                Some(_) => {}
                None => break,
            }
        }

        Ok(MK_TOKEN!(TokenKind::Newline, "\n", start))
    }

    fn lex_pair(
        &mut self,
        start: Position,
        second: char,
        pair_kind: TokenKind,
        single_kind: TokenKind,
        single: &str,
    ) -> Result<Token, Error> {
        let next = self.read()?;
        if next == Some(second) {
            Ok(MK_TOKEN!(pair_kind, format!("{}{}", single, second), start))
        } else {
            self.unread(next);
            Ok(MK_TOKEN!(single_kind, single, start))
        }
    }

    /// Extends `literal` while `accept` holds, unreading the first rejected character.
    fn lex_while(&mut self, mut literal: String, accept: impl Fn(char) -> bool) -> Result<String, Error> {
        loop {
            match self.read()? {
                Some(c) if accept(c) => literal.push(c),
                other => {
                    self.unread(other);
                    return Ok(literal);
                }
            }
        }
    }

    /// Reads raw string contents up to the closing quote. No escapes are processed
    /// and an unterminated literal ends quietly at end of input.
    fn lex_string(&mut self) -> Result<String, Error> {
        let mut literal = String::new();
        loop {
            match self.read()? {
                Some('"') | None => return Ok(literal),
                Some(c) => {
                    if c == '\n' {
                        self.new_line();
                    }
                    literal.push(c);
                }
            }
        }
    }
}

fn single_char_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Dash,
        '*' => TokenKind::Star,
        '%' => TokenKind::Percent,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '{' => TokenKind::OpenCurly,
        '}' => TokenKind::CloseCurly,
        _ => return None,
    };
    Some(kind)
}

/// Tokenizes a whole byte stream, ending with exactly one EOF token.
pub fn tokenize_reader<R: Read>(reader: R) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(reader);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_reader(source.as_bytes())
}
