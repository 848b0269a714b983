use std::fmt;

use serde::Serialize;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    LeftParen,
    RightParen,
    /// Verbatim run of ASCII digits
    Number,
    /// Verbatim run of ASCII letters
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Name => write!(f, "name"),
        }
    }
}

/// A single lexeme borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Root of the source AST
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

/// Expression node of the source AST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    NumberLiteral(NumberLiteral),
    CallExpression(CallExpression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    /// Digits exactly as written, leading zeros included
    pub value: String,
}

/// `(name params...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
}

impl Node {
    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral(NumberLiteral {
            value: value.into(),
        })
    }

    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression {
            name: name.into(),
            params,
        })
    }

    /// Parenthesis nesting depth of this expression; a bare number is 0
    pub fn depth(&self) -> usize {
        match self {
            Node::NumberLiteral(_) => 0,
            Node::CallExpression(call) => {
                1 + call.params.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

impl Program {
    /// Total number of expression nodes in the tree
    pub fn node_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::NumberLiteral(_) => 1,
                Node::CallExpression(call) => 1 + call.params.iter().map(count).sum::<usize>(),
            }
        }
        self.body.iter().map(count).sum()
    }
}
