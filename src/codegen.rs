use crate::error::{CompileError, Result};
use crate::target::{Node, Program};

/// Appended to every top-level expression statement
pub const TERMINATOR: char = ';';

/// Render a target program, one body entry per line
pub fn generate(program: &Program) -> Result<String> {
    let lines = program
        .body
        .iter()
        .map(generate_statement)
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

fn generate_statement(node: &Node) -> Result<String> {
    match node {
        Node::ExpressionStatement(statement) => {
            let mut line = generate_expression(&statement.expression)?;
            line.push(TERMINATOR);
            Ok(line)
        }
        other => generate_expression(other),
    }
}

fn generate_expression(node: &Node) -> Result<String> {
    match node {
        Node::Identifier(ident) => Ok(ident.name.clone()),
        Node::NumberLiteral(literal) => Ok(literal.value.clone()),
        Node::CallExpression(call) => {
            let arguments = call
                .arguments
                .iter()
                .map(generate_expression)
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("{}({})", call.callee.name, arguments.join(", ")))
        }
        Node::ExpressionStatement(_) => Err(CompileError::UnsupportedNode(
            "ExpressionStatement outside a program body",
        )),
    }
}
