use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use infixa::{evaluate_expression_with, interpreter::evaluator::core::Strategy};
use tracing::{debug, level_filters::LevelFilter};

/// infixa evaluates arithmetic expressions made of numbers, `+ - * /`, unary
/// minus and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infixa to treat the argument as a file and evaluate each
    /// non-blank line of it. Exits with a failure if any line fails.
    #[arg(short, long)]
    file: bool,

    /// The evaluation strategy to use.
    #[arg(short, long, value_enum, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Show more logging on stderr. Repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Starts an interactive session when left
    /// out.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_ansi(false)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
    debug!(strategy = ?args.strategy, "starting");

    match (args.contents, args.file) {
        (Some(path), true) => {
            let Ok(script) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            let mut failures = 0usize;
            for line in script.lines().filter(|line| !line.trim().is_empty()) {
                if !report(line, args.strategy) {
                    failures += 1;
                }
            }
            debug!(failures, "finished input file");
            if failures == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        (Some(expression), false) => {
            if report(&expression, args.strategy) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        (None, _) => match repl(args.strategy) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Reads expressions from stdin until `quit`, `exit` or end of input.
fn repl(strategy: Strategy) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    println!("Type \"quit\" or \"exit\" to quit.");
    loop {
        print!(">>> ");
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        if line == "quit" || line == "exit" {
            return Ok(());
        }
        report(&line, strategy);
    }
}

/// Evaluates one expression and prints the result or the error message.
fn report(expression: &str, strategy: Strategy) -> bool {
    match evaluate_expression_with(expression, strategy) {
        Ok(value) => {
            println!("Result: {value}");
            true
        },
        Err(e) => {
            println!("{e}");
            false
        },
    }
}
