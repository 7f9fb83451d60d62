/// The parsing session and its entry points.
///
/// Holds the lookahead token, the lexer cursor and the symbol table shared by
/// every formula of one input.
pub mod core;

/// Binary connective chains.
///
/// Implements the two left-associative precedence levels, implications and
/// biconditionals above conjunctions and disjunctions.
pub mod binary;

/// Terms: variables, negations and parenthesized formulas.
pub mod unary;
