mod highlighter;
mod lexer;

use clap::Parser;
use dijkstra::{EvaluatorOptions, evaluate_source, render_error};
use dijkstra_core::scanner::Scanner;
use highlighter::{Highlighter, ParenValidator};
use miette::{Diagnostic, Result};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, Emacs, FileBackedHistory, Reedline, Signal,
    default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use thiserror::Error;

const HISTORY_CAPACITY: usize = 1000;

/// Dijkstra - evaluate arithmetic expressions with the two-stack algorithm
#[derive(Parser, Debug)]
#[command(name = "dijkstra")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Reject unclosed parentheses and operands with no operator between them
    #[arg(long)]
    strict: bool,

    /// Reject a '(' that is never closed
    #[arg(long)]
    strict_parentheses: bool,

    /// Reject input such as "1 2" instead of returning the last operand
    #[arg(long)]
    strict_operands: bool,

    /// Upper bound on the size of each evaluation stack
    #[arg(long, value_name = "N")]
    max_stack_size: Option<usize>,

    /// Print the scanned tokens (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn evaluator_options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            max_stack_size: self.max_stack_size,
            strict_parentheses: self.strict || self.strict_parentheses,
            strict_operands: self.strict || self.strict_operands,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("failed to read a line from stdin")]
    #[diagnostic(code(dijkstra::stdin))]
    Stdin(#[source] std::io::Error),

    #[error("line editor failed")]
    #[diagnostic(code(dijkstra::line_editor))]
    LineEditor(#[source] std::io::Error),
}

/// Opens the history file, creating its directory if needed.
///
/// Failures are logged and leave the REPL without history.
fn open_history(path: PathBuf) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("cannot create history directory {}: {e}", parent.display());
        }
    }
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
        Ok(history) => Some(history),
        Err(e) => {
            tracing::warn!("history disabled: {e}");
            None
        }
    }
}

fn setup_reedline(options: &EvaluatorOptions) -> (Reedline, DefaultPrompt) {
    let edit_mode = Box::new(Emacs::new(default_emacs_keybindings()));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_edit_mode(edit_mode);

    // With strict parentheses an unclosed '(' can only be an error, so keep
    // reading lines until it is closed.
    if options.strict_parentheses {
        line_editor = line_editor.with_validator(Box::new(ParenValidator));
    }

    if let Some(history) = dirs::data_dir()
        .map(|dir| dir.join("dijkstra").join("history.txt"))
        .and_then(open_history)
    {
        line_editor = line_editor.with_history(Box::new(history));
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("dijkstra".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Evaluate one line of input and print the outcome.
///
/// Returns whether evaluation succeeded; errors are reported and never
/// abort the caller.
fn interpret_input(input: &str, options: &EvaluatorOptions, debug_tokens: bool) -> bool {
    if debug_tokens {
        println!("=== Tokens ===");
        for lexeme in Scanner::new(input) {
            match lexeme {
                Ok(lexeme) => println!("{:?} @ {:?}", lexeme.token, lexeme.span.0),
                Err(e) => println!("{e}"),
            }
        }
        println!();
    }

    match evaluate_source(input, options) {
        Ok(value) => {
            println!("The expression evaluates to: {:?}", value);
            true
        }
        Err(e) => {
            tracing::debug!(code = e.error.code(), "evaluation failed");
            render_error(&e);
            false
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = args.evaluator_options();
    tracing::debug!(?options, "starting");

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        if !interpret_input(expr, &options, args.debug_tokens) {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(&options);

        println!("Welcome to the Dijkstra Calculator!!");
        println!("Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");
        println!();

        loop {
            let sig = line_editor.read_line(&prompt).map_err(CliError::LineEditor)?;

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&buffer, &options, args.debug_tokens);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.map_err(CliError::Stdin)?;
            interpret_input(&line, &options, args.debug_tokens);
        }
    }

    Ok(())
}
