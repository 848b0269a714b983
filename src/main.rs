use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lispc::Compilation;

/// Compile S-expressions like `(add 2 (subtract 4 2))` into C-style calls
#[derive(Parser)]
#[command(name = "lispc")]
#[command(about = "Compile S-expressions into C-style function calls")]
struct Cli {
    /// Source file to compile; stdin is read when neither this nor --expr is given
    source_file: Option<PathBuf>,

    /// Compile this expression instead of reading a file
    #[arg(short = 'e', long, conflicts_with = "source_file")]
    expr: Option<String>,

    /// Artifact to print
    #[arg(long, value_enum, default_value_t = Emit::Code)]
    emit: Emit,

    /// Output file (if not specified, prints to console)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// More log output; RUST_LOG takes precedence
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Generated C-style source
    Code,
    /// Token stream as JSON
    Tokens,
    /// Source AST as JSON
    Ast,
    /// Target AST as JSON
    Target,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(cli: &Cli) -> Result<String> {
    if let Some(expr) = &cli.expr {
        return Ok(expr.clone());
    }
    match &cli.source_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading '{}'", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Error reading stdin")?;
            Ok(source)
        }
    }
}

fn render(compilation: &Compilation<'_>, emit: Emit) -> Result<String> {
    let rendered = match emit {
        Emit::Code => compilation.output.clone(),
        Emit::Tokens => serde_json::to_string_pretty(&compilation.tokens)?,
        Emit::Ast => serde_json::to_string_pretty(&compilation.ast)?,
        Emit::Target => serde_json::to_string_pretty(&compilation.target)?,
    };
    Ok(rendered)
}

fn run(cli: Cli) -> Result<()> {
    let source = read_source(&cli)?;
    let compilation = Compilation::run(&source)?;
    let rendered = render(&compilation, cli.emit)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Error writing '{}'", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
