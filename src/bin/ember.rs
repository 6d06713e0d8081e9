//! Ember REPL and file-mode driver.
//!
//! Owns exactly what the language core does not: reading source text (from
//! a file argument or an interactive prompt), invoking the pipeline, and
//! rendering the resulting value or parse errors. No persistent storage, no
//! concurrency, no I/O beyond stdin/stdout and the optional source file.

use clap::Parser as CliParser;
use log::{error, trace};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

use ember::ast::Program;
use ember::evaluator;
use ember::lexer::Lexer;
use ember::object::Environment;
use ember::parser::Parser as EmberParser;

const BANNER: &str = r#"
 _____ __  __ ____  _____ ____
| ____|  \/  | __ )| ____|  _ \
|  _| | |\/| |  _ \|  _| | |_) |
| |___| |  | | |_) | |___|  _ <
|_____|_|  |_|____/|_____|_| \_\
"#;

#[derive(CliParser, Debug)]
#[command(author, version, about = "Ember language interpreter")]
struct Cli {
    /// Source file to run. Omit to start an interactive session.
    file: Option<std::path::PathBuf>,
}

/// Failures that can end the process with a non-zero exit code. Distinct
/// from `Value::Error`, which lives entirely inside the evaluated program.
#[derive(Debug, Error)]
enum CliError {
    #[error("could not read file '{path}': {source}")]
    ReadSource {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("program exited with a runtime error")]
    Runtime,
    #[error("source failed to parse")]
    ParseFailed,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let result = match args.file {
        Some(path) => run_file(&path),
        None => {
            run_repl();
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run_file(path: &std::path::Path) -> Result<(), CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    let env = Environment::new();
    match parse(&source) {
        Ok(program) => {
            let value = evaluator::eval_program(&program, &env);
            println!("{value}");
            if value.is_error() {
                Err(CliError::Runtime)
            } else {
                Ok(())
            }
        }
        Err(errors) => {
            print_parse_errors(&errors);
            Err(CliError::ParseFailed)
        }
    }
}

fn run_repl() {
    let user = std::env::var("USER").unwrap_or_else(|_| "friend".to_string());
    println!("{BANNER}");
    println!("Hello, {user}! This is the Ember scripting language.");
    println!("Feel free to type in commands.");

    let env = Environment::new();
    let mut editor = DefaultEditor::new().expect("failed to initialize line editor");

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                if line.trim() == "exit" {
                    break;
                }
                match parse(&line) {
                    Ok(program) => {
                        trace!("evaluating {} top-level statement(s)", program.statements.len());
                        let value = evaluator::eval_program(&program, &env);
                        println!("{value}");
                    }
                    Err(errors) => print_parse_errors(&errors),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!("readline error: {err}");
                break;
            }
        }
    }
}

fn parse(source: &str) -> Result<Program, Vec<String>> {
    let lexer = Lexer::new(source);
    let mut parser = EmberParser::new(lexer);
    let program = parser.parse_program();
    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.errors().to_vec())
    }
}

fn print_parse_errors(errors: &[String]) {
    println!("Woops! That didn't parse.");
    println!(" parser errors:");
    for message in errors {
        println!("\t{message}");
    }
}
