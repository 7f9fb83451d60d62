/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing formulas:
/// overlong tokens, too many distinct variables, unexpected tokens and
/// unbalanced parentheses.
pub mod parse_error;
/// Checking errors.
///
/// Contains the errors the validity checker raises when it is handed an
/// argument it cannot enumerate, such as one with more variables than an
/// assignment can hold.
pub mod check_error;

pub use check_error::CheckError;
pub use parse_error::ParseError;
