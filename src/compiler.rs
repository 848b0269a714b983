use serde::Serialize;
use tracing::debug;

use crate::ast::{self, Token};
use crate::codegen;
use crate::error::Result;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::target;
use crate::transform;

/// Every artifact of one successful compilation, stage by stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compilation<'a> {
    pub tokens: Vec<Token<'a>>,
    pub ast: ast::Program,
    pub target: target::Program,
    pub output: String,
}

impl<'a> Compilation<'a> {
    /// Run all four stages; the first failing stage aborts the whole run
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run(source: &'a str) -> Result<Self> {
        let tokens = Lexer::tokenize(source)?;
        debug!(tokens = tokens.len(), "tokenized");

        let ast = Parser::parse(&tokens)?;
        debug!(nodes = ast.node_count(), "parsed");

        let target = transform::transform(&ast);
        debug!(statements = target.body.len(), "transformed");

        let output = codegen::generate(&target)?;
        debug!(bytes = output.len(), "generated");

        Ok(Self {
            tokens,
            ast,
            target,
            output,
        })
    }
}

/// Translate S-expression source into C-style call expressions
pub fn compile(source: &str) -> Result<String> {
    Compilation::run(source).map(|compilation| compilation.output)
}
