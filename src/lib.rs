pub mod ast;
pub mod codegen;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod target;
pub mod transform;

pub use compiler::{Compilation, compile};
pub use error::{CompileError, Result};
