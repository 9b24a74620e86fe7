use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{evaluate, evaluate_strict};

/// Lines that end the session instead of being evaluated.
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Text printed before each line is read.
pub const PROMPT: &str = "> ";

const BANNER: &str = "arithc - simple arithmetic evaluator
Enter arithmetic expressions or 'exit' to quit
Supported operations: + - * / ** ( )
Example: 3 + 5 * (10 - 4) / 2
====================================";

/// Settings for a [`run`] session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplOptions {
    /// Reject tokens left over after a complete expression.
    pub strict: bool,
    /// Skip the banner and the farewell line.
    pub quiet:  bool,
}

/// What the loop does with one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// End the session.
    Exit,
    /// Nothing to do; read the next line.
    Skip,
    /// Evaluate the expression.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a line with its terminator already removed.
    ///
    /// # Example
    /// ```
    /// use arithc::repl::Command;
    ///
    /// assert_eq!(Command::from_line("quit"), Command::Exit);
    /// assert_eq!(Command::from_line(""), Command::Skip);
    /// assert_eq!(Command::from_line("1 + 1"), Command::Evaluate("1 + 1"));
    /// ```
    #[must_use]
    pub fn from_line(line: &'a str) -> Self {
        if EXIT_COMMANDS.contains(&line) {
            Self::Exit
        } else if line.is_empty() {
            Self::Skip
        } else {
            Self::Evaluate(line)
        }
    }
}

/// Runs the read-eval-print loop until an exit command or end of input.
///
/// Results go to `out` as `Result: <value>`, failures to `err` as
/// `Error: <message>`. A failing expression never ends the session.
///
/// # Errors
/// Returns any I/O error raised while reading or writing.
///
/// # Example
/// ```
/// use arithc::repl::{ReplOptions, run};
///
/// let input = "1 + 2\n5 / 0\nexit\n".as_bytes();
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let options = ReplOptions { quiet: true, ..ReplOptions::default() };
///
/// run(input, &mut out, &mut err, &options).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "> Result: 3\n> > ");
/// assert!(String::from_utf8(err).unwrap().starts_with("Error: Division by zero"));
/// ```
pub fn run<R, O, E>(mut input: R, mut out: O, mut err: E, options: &ReplOptions) -> io::Result<()>
    where R: BufRead,
          O: Write,
          E: Write
{
    info!(strict = options.strict, "starting session");

    if !options.quiet {
        writeln!(out, "{BANNER}")?;
    }

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            break;
        }

        match Command::from_line(strip_line_terminator(&line)) {
            Command::Exit => break,
            Command::Skip => {},
            Command::Evaluate(expression) => {
                let result = if options.strict {
                    evaluate_strict(expression)
                } else {
                    evaluate(expression)
                };

                match result {
                    Ok(value) => writeln!(out, "Result: {value}")?,
                    Err(e) => writeln!(err, "Error: {e}")?,
                }
            },
        }
    }

    if !options.quiet {
        writeln!(out, "Goodbye!")?;
    }

    info!("session finished");
    Ok(())
}

/// Removes a trailing `\n` or `\r\n`, leaving all other whitespace in place.
fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
