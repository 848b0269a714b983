//! Source AST to target AST.
//!
//! Children are visited in source order. A call node first fills a fresh
//! argument list, the insertion target handed down to its children, and then
//! appends itself to its parent's list. Sibling order is therefore the same as
//! a pre-order walk, and nothing about the transformation is ever stored on
//! the source tree.

use crate::ast;
use crate::target;

/// Kind of source node the current node is a child of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Program,
    Call,
}

/// Build the target tree for a parsed program
pub fn transform(program: &ast::Program) -> target::Program {
    let mut body = Vec::with_capacity(program.body.len());
    transform_nodes(&program.body, Parent::Program, &mut body);
    target::Program { body }
}

fn transform_nodes(nodes: &[ast::Node], parent: Parent, into: &mut Vec<target::Node>) {
    for node in nodes {
        transform_node(node, parent, into);
    }
}

fn transform_node(node: &ast::Node, parent: Parent, into: &mut Vec<target::Node>) {
    match node {
        // Numbers are never wrapped, not even at the top level
        ast::Node::NumberLiteral(literal) => into.push(target::Node::number(&*literal.value)),
        ast::Node::CallExpression(call) => {
            let mut arguments = Vec::with_capacity(call.params.len());
            transform_nodes(&call.params, Parent::Call, &mut arguments);

            let expression = target::Node::call(&*call.name, arguments);
            into.push(match parent {
                Parent::Program => target::Node::statement(expression),
                Parent::Call => expression,
            });
        }
    }
}
