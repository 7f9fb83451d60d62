/// The evaluator module decides truth values and validity.
///
/// Evaluates formulas under a single assignment and drives the exhaustive
/// enumeration of assignments that decides whether an argument is valid.
///
/// # Responsibilities
/// - Evaluates every connective with its truth-functional meaning.
/// - Enumerates assignments as bitfields in ascending order.
/// - Stops at the first counterexample.
pub mod evaluator;
/// The lexer module tokenizes formula text.
///
/// The lexer reads the raw source and produces classified tokens: operators,
/// parentheses and identifiers. It is the first stage of processing.
///
/// # Responsibilities
/// - Splits input into maximal letter runs and maximal symbol runs.
/// - Tracks line numbers for error reporting.
/// - Rejects overlong tokens.
pub mod lexer;
/// The parser module builds formula trees from tokens.
///
/// A recursive-descent parser with one token of lookahead. Formulas follow
/// each other without separators; their boundaries come from the grammar.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Formula`] trees.
/// - Interns variable names through the session's symbol table.
/// - Reports syntax errors with line numbers.
pub mod parser;
/// Variable interning.
///
/// Maps variable names to dense ids in order of first appearance.
pub mod symbols;
/// Optional indented call trace for diagnostics.
pub mod trace;
