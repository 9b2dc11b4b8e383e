use std::fmt::Display;

use thiserror::Error;

use crate::{ast::statements::ENTRYPOINT_NAMES, lexer::tokens::TokenKind, Position};

/// A diagnostic: what went wrong and where.
///
/// Displays as the bare message, e.g. `already defined x`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Fatal errors abort the pipeline; everything else is a collected diagnostic.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnreadableSource { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnreadableSource { .. } => "UnreadableSource",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NoPrefixParseFunction { .. } => "NoPrefixParseFunction",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::AlreadyDefined { .. } => "AlreadyDefined",
            ErrorImpl::UnknownEntrypoint { .. } => "UnknownEntrypoint",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnreadableSource { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected, .. } => match expected {
                TokenKind::CloseCurly => {
                    ErrorTip::Suggestion(String::from("is a `}` missing?"))
                }
                TokenKind::CloseParen => {
                    ErrorTip::Suggestion(String::from("is a `)` missing?"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::NoPrefixParseFunction { kind } => match kind {
                TokenKind::Illegal => {
                    ErrorTip::Suggestion(String::from("this character is not part of the language"))
                }
                TokenKind::Newline => {
                    ErrorTip::Suggestion(String::from("the statement ends before its value"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::NumberParseError { .. } => {
                ErrorTip::Suggestion(String::from("is it above the integer limit?"))
            }
            ErrorImpl::AlreadyDefined { .. } => ErrorTip::None,
            ErrorImpl::UnknownEntrypoint { .. } => ErrorTip::Suggestion(format!(
                "entrypoint names are: {}",
                ENTRYPOINT_NAMES.join(", ")
            )),
            ErrorImpl::TypeMismatch { .. } => ErrorTip::None,
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unreadable source: {reason}")]
    UnreadableSource { reason: String },
    #[error("expected {expected}, got {received}")]
    ExpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFunction { kind: TokenKind },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
    #[error("already defined {name}")]
    AlreadyDefined { name: String },
    #[error("unknown entrypoint name {name}")]
    UnknownEntrypoint { name: String },
    #[error("type mismatch: {name} declared as {declared}, assigned {actual}")]
    TypeMismatch {
        name: String,
        declared: String,
        actual: String,
    },
}
