use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use entail::{
    check_argument,
    config::{Limits, MAX_FORMULAS, MAX_VARIABLES},
    interpreter::{evaluator::validity::Verdict, trace::Tracer},
};
use log::{LevelFilter, Log, Metadata, Record};

/// entail checks whether a propositional argument is valid.
///
/// Formulas are read one after another; the last one is the conclusion and
/// the rest are premises. The exit status is 0 for a valid argument, 1 for an
/// invalid one and 2 if the input could not be read or parsed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells entail to treat the contents as a path to a file.
    #[arg(short, long)]
    file: bool,

    /// Prints the premises and the conclusion as they were parsed.
    #[arg(short, long)]
    print: bool,

    /// Prints the first counterexample of an invalid argument.
    #[arg(short, long)]
    counterexample: bool,

    /// Writes a call trace of parsing and checking to stderr (debug builds
    /// only).
    #[arg(short, long)]
    trace: bool,

    /// Logs each parsed formula and the verdict to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Maximum number of distinct variables.
    #[arg(long, default_value_t = MAX_VARIABLES, value_parser = parse_max_vars)]
    max_vars: usize,

    /// Maximum number of formulas, premises and conclusion together.
    #[arg(long, default_value_t = MAX_FORMULAS, value_parser = parse_max_formulas)]
    max_formulas: usize,

    /// The formulas to check. Read from stdin when omitted.
    contents: Option<String>,
}

fn parse_max_vars(value: &str) -> Result<usize, String> {
    let n: usize = value.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_VARIABLES).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_VARIABLES}"))
    }
}

fn parse_max_formulas(value: &str) -> Result<usize, String> {
    match value.parse() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{e}")),
    }
}

/// Prints library log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the stderr logger. Warnings are always shown, debug records only
/// when `verbose` is set.
fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    }
}

fn read_source(args: &Args) -> io::Result<String> {
    match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path),
        (Some(text), false) => Ok(text.clone()),
        (None, _) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input: {e}");
            return ExitCode::from(2);
        },
    };

    let limits = Limits::new(args.max_vars).unwrap_or_default()
                                           .with_max_formulas(args.max_formulas);
    let tracer = if args.trace { Tracer::new(io::stderr()) } else { Tracer::disabled() };

    let outcome = match check_argument(&source, limits, tracer) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        },
    };

    if args.print {
        for premise in outcome.argument.premises() {
            println!("{}", premise.display(&outcome.symbols));
        }
        if let Some(conclusion) = outcome.argument.conclusion() {
            println!("therefore {}", conclusion.display(&outcome.symbols));
        }
    }

    match outcome.verdict {
        Verdict::Valid => ExitCode::SUCCESS,
        Verdict::Invalid { counterexample } => {
            if args.counterexample {
                println!("counterexample: {}", counterexample.display(&outcome.symbols));
            }
            ExitCode::FAILURE
        },
    }
}
