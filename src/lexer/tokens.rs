use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("as", TokenKind::As);
        map.insert("func", TokenKind::Func);
        map.insert("efunc", TokenKind::Efunc);
        map.insert("mfunc", TokenKind::Mfunc);
        map
    };

    /// Names lexed as `TypeAnnotation` instead of `Identifier`.
    pub static ref BUILTIN_TYPES: HashSet<&'static str> =
        ["string", "int", "float", "double", "bool"].into_iter().collect();
}

/// The only compiler instruction the lexer knows about.
pub const IMPORT_DIRECTIVE: &str = "@import";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Newline,

    Integer,
    String,
    True,
    False,

    TypeAnnotation,
    Import,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=
    Less,
    Greater,

    Comma,
    Dot,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    // Reserved
    Var,
    If,
    Else,
    For,
    While,
    Return,
    Break,
    Continue,
    As,
    Func,
    Efunc,
    Mfunc,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Classifies a run of letters: keyword first, then built-in type, then boolean.
pub fn lookup_word(word: &str) -> TokenKind {
    if let Some(kind) = RESERVED_LOOKUP.get(word) {
        *kind
    } else if BUILTIN_TYPES.contains(word) {
        TokenKind::TypeAnnotation
    } else if word == "true" {
        TokenKind::True
    } else if word == "false" {
        TokenKind::False
    } else {
        TokenKind::Identifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "{} {}", self.position, self.kind),
            _ => write!(f, "{} {} {}", self.position, self.kind, self.value),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
