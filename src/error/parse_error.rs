#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A lexeme was longer than the configured maximum token length.
    TokenTooLong {
        /// The offending lexeme, untruncated.
        token: String,
        /// The maximum number of characters a token may have.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// More distinct variable names than the symbol table can hold.
    TooManyVariables {
        /// The name that did not fit.
        name:  String,
        /// The maximum number of distinct variables.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found a token where a term was required.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// More formulas than one argument may hold.
    TooManyFormulas {
        /// The maximum number of formulas.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A formula nested connectives or parentheses too deeply.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TokenTooLong { line, .. }
            | Self::TooManyVariables { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::TooManyFormulas { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::ExpectedClosingParen { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenTooLong { token, limit, line } => write!(f,
                                                                "Error on line {line}: Token '{token}' is longer than {limit} characters."),

            Self::TooManyVariables { name, limit, line } => write!(f,
                                                                   "Error on line {line}: Variable '{name}' exceeds the limit of {limit} distinct variables."),

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::TooManyFormulas { limit, line } => {
                write!(f, "Error on line {line}: More than {limit} formulas.")
            },

            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Formula is nested deeper than {limit} levels.")
            },

            Self::ExpectedClosingParen { found, line } => write!(f,
                                                                 "Error on line {line}: Expected closing parenthesis ')' but found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
