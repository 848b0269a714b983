//! C-style output tree produced by the transformer.

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Top-level expression followed by a terminator
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    #[serde(serialize_with = "tagged_identifier")]
    pub callee: Identifier,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    pub value: String,
}

impl Node {
    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral(NumberLiteral {
            value: value.into(),
        })
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression {
            callee: Identifier {
                name: callee.into(),
            },
            arguments,
        })
    }

    pub fn statement(expression: Node) -> Self {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }
}

// `Identifier` is tagged by `Node` when it appears as a variant; a callee
// sits outside the enum and has to carry the tag itself.
fn tagged_identifier<S: Serializer>(ident: &Identifier, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Identifier", 2)?;
    state.serialize_field("type", "Identifier")?;
    state.serialize_field("name", &ident.name)?;
    state.end()
}
