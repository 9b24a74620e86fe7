use std::{io, process::ExitCode};

use arithc::{
    evaluate, evaluate_strict,
    repl::{self, ReplOptions},
    tokenize,
};
use clap::Parser;
use tracing::{Level, error};
use tracing_subscriber::EnvFilter;

/// arithc evaluates arithmetic expressions with `+ - * / **` and parentheses.
///
/// Without an expression it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reject tokens left over after a complete expression, such as the `4`
    /// in `3 4`.
    #[arg(short, long)]
    strict: bool,

    /// Print the tokens of the expression instead of evaluating it.
    #[arg(short, long, requires = "expression")]
    tokens: bool,

    /// Do not print the banner and farewell of the interactive prompt.
    #[arg(short, long, conflicts_with = "expression")]
    quiet: bool,

    /// Increase log verbosity; may be repeated. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate once. Reads expressions from stdin if omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.expression {
        Some(expression) if args.tokens => print_tokens(expression),
        Some(expression) => evaluate_once(expression, args.strict),
        None => {
            let options = ReplOptions { strict: args.strict,
                                        quiet:  args.quiet, };
            let stdin = io::stdin();
            if let Err(e) = repl::run(stdin.lock(), io::stdout(), io::stderr(), &options) {
                error!(error = %e, "session aborted");
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
    }
}

fn evaluate_once(expression: &str, strict: bool) -> ExitCode {
    let result = if strict {
        evaluate_strict(expression)
    } else {
        evaluate(expression)
    };

    match result {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn print_tokens(expression: &str) -> ExitCode {
    match tokenize(expression) {
        Ok(tokens) => {
            tokens.iter().for_each(|token| println!("{token:?}"));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                              EnvFilter::new(format!("arithc={level},warn"))
                                          });

    tracing_subscriber::fmt().with_env_filter(env_filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}
