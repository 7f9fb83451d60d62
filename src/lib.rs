//! # entail
//!
//! entail decides whether an argument in propositional logic is valid.
//! It reads premises followed by a conclusion, parses them with a
//! recursive-descent parser, and checks every truth assignment of the
//! variables involved.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Limits,
    interpreter::{
        evaluator::validity::{Argument, Verdict},
        parser::core::Parser,
        symbols::SymbolTable,
        trace::Tracer,
    },
};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Formula` tree built by the parser and consumed
/// by the evaluator, together with the pretty printer that turns a tree back
/// into text.
///
/// # Responsibilities
/// - Defines the variable, negation and binary connective nodes.
/// - Gives every node exclusive ownership of its children.
/// - Renders formulas in a form the lexer reads back unchanged.
pub mod ast;
/// Resource limits applied while reading input.
///
/// Bounds the number of distinct variables, which fixes the size of the
/// assignment space, the length of a single token, the number of formulas
/// and how deeply a formula may nest.
pub mod config;
/// Provides unified error types for parsing and checking.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or checking an argument. Parse errors carry the source line they refer
/// to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, checker).
/// - Keeps parse failures distinct from an argument being invalid.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates reading and deciding arguments.
///
/// This module ties together lexing, parsing, symbol interning and
/// evaluation, and exposes each stage for direct use.
///
/// # Responsibilities
/// - Coordinates lexer, parser, symbol table and evaluator.
/// - Manages the flow of data and errors between phases.
/// - Threads the optional diagnostic trace through every phase.
pub mod interpreter;

/// Everything learned from checking one input.
#[derive(Debug)]
pub struct Outcome {
    /// Variables in order of first appearance.
    pub symbols:  SymbolTable,
    /// The parsed premises and conclusion.
    pub argument: Argument,
    /// Whether the argument is valid.
    pub verdict:  Verdict,
}

/// Parses every formula in `source` and decides the resulting argument.
///
/// The last formula is the conclusion and all others are premises. Formulas
/// are read until the end of input; a formula cut off by the end of input is
/// dropped with a warning.
///
/// # Errors
/// Returns a [`error::ParseError`] if the input is malformed or exceeds
/// `limits`. An invalid argument is not an error; it is reported through
/// [`Outcome::verdict`].
///
/// # Examples
/// ```
/// use entail::{check_argument, config::Limits, error::ParseError, interpreter::trace::Tracer};
///
/// // Modus ponens: the last formula is the conclusion.
/// let outcome = check_argument("p -> q  p  q", Limits::default(), Tracer::disabled()).unwrap();
/// assert!(outcome.verdict.is_valid());
///
/// // Example with an intentional error (unbalanced parentheses).
/// let err = check_argument("(p -> q", Limits::default(), Tracer::disabled()).unwrap_err();
/// assert!(err.downcast_ref::<ParseError>().is_some());
/// ```
pub fn check_argument<'a>(source: &'a str,
                          limits: Limits,
                          tracer: Tracer<'a>)
                          -> Result<Outcome, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(source, limits, tracer)?;
    let formulas = parser.parse_all()?;
    let (symbols, mut tracer) = parser.into_parts();

    let argument = Argument::from_formulas(formulas);
    let verdict = argument.check(symbols.len(), &mut tracer)?;

    Ok(Outcome { symbols,
                 argument,
                 verdict })
}
