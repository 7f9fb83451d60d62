/// Largest number of distinct variables an argument may contain.
///
/// Assignments are `u32` bitfields and the checker enumerates `2^n` of them,
/// so the bound is kept below the word width.
pub const MAX_VARIABLES: usize = 30;
/// Largest number of characters a single token may have.
pub const MAX_TOKEN_LENGTH: usize = 63;
/// Default number of formulas (premises plus conclusion) one input may hold.
pub const MAX_FORMULAS: usize = 10;
/// Default bound on how deeply connectives and parentheses may nest.
///
/// Parsing, evaluation and destruction of a formula all recurse over its
/// tree, so this keeps them within the stack.
pub const MAX_DEPTH: usize = 256;

const _: () = assert!(MAX_VARIABLES < u32::BITS as usize);

/// Resource bounds applied while reading formulas.
///
/// `Limits` is created once per run and handed to the parser. Every bound is
/// enforced as an error rather than by truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of distinct variable names.
    pub max_variables:    usize,
    /// Maximum length of a lexeme in characters.
    pub max_token_length: usize,
    /// Maximum number of formulas in one argument.
    pub max_formulas:     usize,
    /// Maximum nesting of connectives and parentheses in one formula.
    pub max_depth:        usize,
}

impl Limits {
    /// Creates limits with a custom variable bound.
    ///
    /// Returns `None` if `max_variables` exceeds [`MAX_VARIABLES`].
    ///
    /// # Example
    /// ```
    /// use entail::config::{Limits, MAX_VARIABLES};
    ///
    /// assert_eq!(Limits::new(4).map(|l| l.max_variables), Some(4));
    /// assert!(Limits::new(MAX_VARIABLES + 1).is_none());
    /// ```
    #[must_use]
    pub const fn new(max_variables: usize) -> Option<Self> {
        if max_variables > MAX_VARIABLES {
            return None;
        }
        Some(Self { max_variables,
                    max_token_length: MAX_TOKEN_LENGTH,
                    max_formulas: MAX_FORMULAS,
                    max_depth: MAX_DEPTH })
    }

    /// Replaces the formula bound.
    #[must_use]
    pub const fn with_max_formulas(self, max_formulas: usize) -> Self {
        Self { max_formulas, ..self }
    }

    /// Replaces the nesting bound.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_variables:    MAX_VARIABLES,
               max_token_length: MAX_TOKEN_LENGTH,
               max_formulas:     MAX_FORMULAS,
               max_depth:        MAX_DEPTH, }
    }
}
