#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the validity checker can raise.
///
/// Evaluation itself is total; these errors only guard the enumeration
/// against arguments that were not produced by a single parsing session.
pub enum CheckError {
    /// The assignment space would not fit in an assignment bitfield.
    TooManyVariables {
        /// The number of variables requested.
        count: usize,
        /// The largest supported number of variables.
        limit: usize,
    },
    /// A formula refers to a variable outside the enumerated range.
    UnboundVariable {
        /// The offending symbol index.
        index: usize,
        /// The number of variables being enumerated.
        count: usize,
    },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyVariables { count, limit } => write!(f,
                                                              "Cannot enumerate {count} variables: at most {limit} are supported."),
            Self::UnboundVariable { index, count } => write!(f,
                                                             "Variable #{index} is outside the {count} enumerated variables."),
        }
    }
}

impl std::error::Error for CheckError {}
