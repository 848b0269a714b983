use std::fmt;

use thiserror::Error;

use crate::ast::TokenKind;
use crate::lexer::Rule;

pub type Result<T> = std::result::Result<T, CompileError>;

/// What the parser ran into where the grammar did not allow it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token(TokenKind),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(kind) => write!(f, "{}", kind),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Errors that abort a compilation
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("unknown character: {0:?}")]
    UnknownCharacter(char),

    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: Found,
    },

    /// Broken invariant in a target tree; transformer output never triggers it
    #[error("unsupported node: {0}")]
    UnsupportedNode(&'static str),

    #[error(transparent)]
    Grammar(#[from] Box<pest::error::Error<Rule>>),
}

impl CompileError {
    pub(crate) fn unexpected(expected: &'static str, found: Option<TokenKind>) -> Self {
        CompileError::UnexpectedToken {
            expected,
            found: found.map_or(Found::EndOfInput, Found::Token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        assert_eq!(
            CompileError::UnknownCharacter('%').to_string(),
            "unknown character: '%'"
        );
        assert_eq!(
            CompileError::unexpected("')'", None).to_string(),
            "unexpected token: expected ')', found end of input"
        );
        assert_eq!(
            CompileError::unexpected("name", Some(TokenKind::Number)).to_string(),
            "unexpected token: expected name, found number"
        );
    }
}
