use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::ast::{Token, TokenKind};
use crate::error::{CompileError, Result};

#[derive(Parser)]
#[grammar = "src/sexpr.pest"]
pub struct Lexer;

impl Lexer {
    /// Split source text into tokens, failing on the first character outside
    /// digits, letters, parentheses and whitespace
    pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
        let mut pairs = match Lexer::parse(Rule::tokens, input) {
            Ok(pairs) => pairs,
            Err(err) => return Err(Self::unknown_character(input, err)),
        };

        Ok(pairs
            .next()
            .map(|stream| stream.into_inner().filter_map(Self::token).collect())
            .unwrap_or_default())
    }

    fn token(pair: Pair<'_, Rule>) -> Option<Token<'_>> {
        let kind = match pair.as_rule() {
            Rule::left_paren => TokenKind::LeftParen,
            Rule::right_paren => TokenKind::RightParen,
            Rule::number => TokenKind::Number,
            Rule::name => TokenKind::Name,
            _ => return None,
        };
        Some(Token::new(kind, pair.as_str()))
    }

    /// `token*` only stops short of EOI on a character no rule accepts, so the
    /// failure position points at the culprit.
    fn unknown_character(input: &str, err: pest::error::Error<Rule>) -> CompileError {
        let pos = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        match input.get(pos..).and_then(|rest| rest.chars().next()) {
            Some(ch) => CompileError::UnknownCharacter(ch),
            None => CompileError::Grammar(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_call() {
        let tokens = Lexer::tokenize("(add 2 3)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::LeftParen, "("),
                Token::new(TokenKind::Name, "add"),
                Token::new(TokenKind::Number, "2"),
                Token::new(TokenKind::Number, "3"),
                Token::new(TokenKind::RightParen, ")"),
            ]
        );
    }

    #[test]
    fn test_number_keeps_leading_zeros() {
        let tokens = Lexer::tokenize("007 1234567890123456789012345").unwrap();
        assert_eq!(tokens[0].text, "007");
        assert_eq!(tokens[1].text, "1234567890123456789012345");
    }

    #[test]
    fn test_name_keeps_case() {
        let tokens = Lexer::tokenize("(AdD)").unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::Name, "AdD"));
    }

    #[test]
    fn test_adjacent_runs_split() {
        assert_eq!(
            kinds("12ab(x)"),
            vec![
                TokenKind::Number,
                TokenKind::Name,
                TokenKind::LeftParen,
                TokenKind::Name,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert!(kinds("").is_empty());
        assert!(kinds(" \t\r\n ").is_empty());
        assert_eq!(
            kinds("\n(add\t1\r\n 2 )\n"),
            vec![
                TokenKind::LeftParen,
                TokenKind::Name,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(
            kinds("\u{FEFF}(a 1) \u{FEFF}"),
            vec![
                TokenKind::LeftParen,
                TokenKind::Name,
                TokenKind::Number,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(matches!(
            Lexer::tokenize("(a 1)\u{85}(b 2)"),
            Err(CompileError::UnknownCharacter('\u{85}'))
        ));
    }

    #[test]
    fn test_unknown_character() {
        for (input, culprit) in [
            ("(add 1 2%)", '%'),
            ("-1", '-'),
            ("(add 1.5 2)", '.'),
            ("(snake_case)", '_'),
            ("(café 1)", 'é'),
        ] {
            match Lexer::tokenize(input) {
                Err(CompileError::UnknownCharacter(ch)) => assert_eq!(ch, culprit, "{input}"),
                other => panic!("Expected UnknownCharacter for {input:?}, got {other:?}"),
            }
        }
    }
}
