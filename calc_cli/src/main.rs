//! # Tally CLI Application
//!
//! Line-driven terminal shell for the calculator engine. Every character on
//! a line is treated as a key press on the keypad (see
//! [`calc_core::intent`] for the layout); an empty line is Enter. A few whole
//! words are accepted for keys a terminal line cannot carry:
//!
//! ```text
//! clear   Escape
//! back    Backspace
//! neg     sign inversion
//! quit    leave the shell
//! ```
//!
//! After each line the equation line and the input buffer are printed.
//! Errors go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::{load_settings, Calculator, EngineSettings, Intent};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "calc_cli", version)]
#[command(about = "Tally - keypad calculator for the terminal")]
struct Cli {
    /// Load engine settings from a JSON settings file
    #[arg(long, short = 's', value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Print a JSON snapshot after each line
    #[arg(long)]
    json: bool,

    /// Run one key sequence and exit instead of reading stdin
    #[arg(long, short = 'e', value_name = "KEYS")]
    expr: Option<String>,

    /// Log engine transitions to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// What a line of input asks the shell to do.
#[derive(Debug, PartialEq)]
enum LineCommand {
    Quit,
    Intents(Vec<Intent>),
}

fn parse_line(line: &str) -> LineCommand {
    match line.trim() {
        "quit" | "exit" => LineCommand::Quit,
        "" => LineCommand::Intents(vec![Intent::Evaluate]),
        "clear" => LineCommand::Intents(vec![Intent::Clear]),
        "back" => LineCommand::Intents(vec![Intent::Backspace]),
        "neg" => LineCommand::Intents(vec![Intent::InvertSign]),
        keys => LineCommand::Intents(Intent::from_keys(keys)),
    }
}

/// Apply one line to the engine and print the result.
///
/// Returns `false` when the line asks to quit.
fn process_line<O: Write, E: Write>(
    calc: &mut Calculator,
    line: &str,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let intents = match parse_line(line) {
        LineCommand::Quit => return Ok(false),
        LineCommand::Intents(intents) => intents,
    };
    debug!(?intents, "line parsed");

    for intent in intents {
        if let Err(e) = calc.apply(intent) {
            writeln!(err, "Error: {}", e)?;
            if json {
                if let Ok(error_json) = serde_json::to_string(&e) {
                    writeln!(err, "{}", error_json)?;
                }
            }
        }
    }

    if json {
        match serde_json::to_string(&calc.snapshot()) {
            Ok(snapshot) => writeln!(out, "{}", snapshot)?,
            Err(e) => warn!(error = %e, "snapshot serialization failed"),
        }
    } else {
        writeln!(out, "  {}", calc.equation_text())?;
        writeln!(out, "> {}", calc.input_text())?;
    }
    Ok(true)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> io::Result<()> {
    let settings = match &cli.settings {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
            }
        },
        None => EngineSettings::default(),
    };

    let mut calc = Calculator::with_settings(settings);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if let Some(keys) = &cli.expr {
        process_line(&mut calc, keys, cli.json, &mut out, &mut err)?;
        return Ok(());
    }

    if !cli.json {
        writeln!(out, "Tally - type keys, Enter to evaluate, 'quit' to exit")?;
        writeln!(out, "  {}", calc.equation_text())?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if !process_line(&mut calc, &line, cli.json, &mut out, &mut err)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
