use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use log::debug;
use rustyline::{DefaultEditor, error::ReadlineError};
use yoru::{
    ast::Statement,
    error::ParseError,
    interpreter::{environment::Environment, evaluator::core::Evaluator, value::core::Value},
    parse,
};

/// yoru is a small scripting language with integers, strings, arrays, hashes
/// and first-class functions.
///
/// Without a file or `--eval`, an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A script to run. Must have the `.yoru` extension.
    #[arg(conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Runs the given code instead of a file.
    #[arg(short, long, value_name = "CODE")]
    eval: Option<String>,

    /// Prints the value of the last statement after running a script.
    #[arg(short, long)]
    print: bool,

    /// How deeply expressions may nest before evaluation fails with a stack
    /// overflow error.
    #[arg(long, value_name = "N", default_value_t = yoru::interpreter::evaluator::core::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let script = match (&args.file, &args.eval) {
        (Some(path), _) => read_script(path),
        (None, Some(code)) => code.clone(),
        (None, None) => {
            if let Err(e) = repl(args.max_depth) {
                eprintln!("{e}");
                process::exit(1);
            }
            return;
        },
    };

    run_script(&script, &args);
}

fn read_script(path: &Path) -> String {
    if path.extension().is_none_or(|ext| ext != "yoru") {
        eprintln!("Refusing to run '{}': yoru scripts must have the .yoru extension.",
                  path.display());
        process::exit(1);
    }

    fs::read_to_string(path).unwrap_or_else(|_| {
                                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                          path.display());
                                process::exit(1);
                            })
}

/// Runs a whole script once in a fresh environment.
///
/// Any syntax error stops the script before it runs.
fn run_script(script: &str, args: &Args) {
    let (program, errors) = parse(script);
    if !errors.is_empty() {
        print_parse_errors(&errors);
        process::exit(1);
    }

    let env = Environment::new();
    match Evaluator::with_max_depth(args.max_depth).eval_program(&program, &env) {
        error @ Value::Error(_) => {
            eprintln!("{error}");
            process::exit(1);
        },
        value => {
            if args.print {
                println!("{value}");
            }
        },
    }
}

/// Reads lines until end of input, evaluating each in one shared
/// environment.
fn repl(max_depth: usize) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let env = Environment::new();
    let mut evaluator = Evaluator::with_max_depth(max_depth);

    loop {
        let line = match editor.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }
        editor.add_history_entry(line.as_str())?;

        let (program, errors) = parse(&line);
        if !errors.is_empty() {
            print_parse_errors(&errors);
            continue;
        }

        let value = evaluator.eval_program(&program, &env);
        if !matches!(value, Value::Error(_))
           && matches!(program.statements.last(), Some(Statement::Let { .. }))
        {
            continue;
        }
        println!("{value}");
    }

    debug!("leaving repl");
    Ok(())
}

fn print_parse_errors(errors: &[ParseError]) {
    eprintln!("parser errors:");
    for error in errors {
        eprintln!("\tline {}: {error}", error.line());
    }
}
