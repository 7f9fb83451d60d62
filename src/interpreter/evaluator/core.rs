use std::fmt;

use crate::{
    ast::{BinaryOperator, Formula},
    config::MAX_VARIABLES,
    error::CheckError,
    interpreter::symbols::{SymbolId, SymbolTable},
};

/// A truth value for every variable, packed into a bitfield.
///
/// Bit `i` holds the value of the variable with id `i`. With `n` variables
/// the assignments are exactly the integers in `[0, 2^n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Assignment(u32);

impl Assignment {
    /// Wraps a raw bitfield.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bitfield.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns the value of `id`. Ids beyond the bitfield read as false.
    #[must_use]
    pub fn value(self, id: SymbolId) -> bool {
        u32::try_from(id.index()).ok()
                                 .and_then(|shift| self.0.checked_shr(shift))
                                 .is_some_and(|bits| bits & 1 == 1)
    }

    /// Returns a copy with `id` set to `value`.
    ///
    /// Ids beyond the bitfield are left untouched.
    #[must_use]
    pub fn with(self, id: SymbolId, value: bool) -> Self {
        let Some(mask) = u32::try_from(id.index()).ok()
                                                  .and_then(|shift| 1u32.checked_shl(shift))
        else {
            return self;
        };
        if value { Self(self.0 | mask) } else { Self(self.0 & !mask) }
    }

    /// Enumerates every assignment of `count` variables in ascending order.
    ///
    /// # Errors
    /// Returns [`CheckError::TooManyVariables`] if `count` exceeds
    /// [`MAX_VARIABLES`].
    ///
    /// # Example
    /// ```
    /// use entail::interpreter::evaluator::core::Assignment;
    ///
    /// let bits: Vec<u32> = Assignment::all(2).unwrap().map(Assignment::bits).collect();
    /// assert_eq!(bits, vec![0, 1, 2, 3]);
    /// assert_eq!(Assignment::all(0).unwrap().count(), 1);
    /// ```
    pub fn all(count: usize) -> Result<impl Iterator<Item = Self>, CheckError> {
        if count > MAX_VARIABLES {
            return Err(CheckError::TooManyVariables { count,
                                                      limit: MAX_VARIABLES });
        }
        Ok((0..1u32 << count).map(Self))
    }

    /// Returns a value that prints the assignment as `p = true, q = false`.
    #[must_use]
    pub const fn display(self, symbols: &SymbolTable) -> AssignmentDisplay<'_> {
        AssignmentDisplay { assignment: self,
                            symbols }
    }
}

/// Helper returned by [`Assignment::display`].
pub struct AssignmentDisplay<'a> {
    assignment: Assignment,
    symbols:    &'a SymbolTable,
}

impl fmt::Display for AssignmentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return f.write_str("(no variables)");
        }
        for (i, (id, name)) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} = {}", self.assignment.value(id))?;
        }
        Ok(())
    }
}

impl BinaryOperator {
    /// Applies the connective to two truth values.
    ///
    /// # Example
    /// ```
    /// use entail::ast::BinaryOperator;
    ///
    /// assert!(!BinaryOperator::Implies.apply(true, false));
    /// assert!(BinaryOperator::Iff.apply(false, false));
    /// assert!(!BinaryOperator::And.apply(true, false));
    /// ```
    #[must_use]
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
        }
    }
}

impl Formula {
    /// Evaluates the formula under `assignment`.
    ///
    /// Evaluation is total and has no side effects. Both operands of a
    /// binary node are always evaluated.
    ///
    /// # Example
    /// ```
    /// use entail::{
    ///     ast::Formula,
    ///     interpreter::{evaluator::core::Assignment, symbols::SymbolTable},
    /// };
    ///
    /// let mut symbols = SymbolTable::default();
    /// let p = symbols.intern("p").unwrap();
    /// let q = symbols.intern("q").unwrap();
    /// let formula = Formula::iff(Formula::var(p), Formula::var(q));
    ///
    /// assert!(formula.evaluate(Assignment::from_bits(0b00)));
    /// assert!(!formula.evaluate(Assignment::from_bits(0b01)));
    /// assert!(formula.evaluate(Assignment::from_bits(0b11)));
    /// ```
    #[must_use]
    pub fn evaluate(&self, assignment: Assignment) -> bool {
        match self {
            Self::Variable(id) => assignment.value(*id),
            Self::Not(operand) => !operand.evaluate(assignment),
            Self::Binary { op, left, right } => {
                op.apply(left.evaluate(assignment), right.evaluate(assignment))
            },
        }
    }

    /// Returns whether the formula holds under every assignment of `count`
    /// variables.
    ///
    /// # Errors
    /// Returns [`CheckError::TooManyVariables`] if `count` exceeds
    /// [`MAX_VARIABLES`].
    pub fn is_tautology(&self, count: usize) -> Result<bool, CheckError> {
        Ok(Assignment::all(count)?.all(|a| self.evaluate(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> (SymbolTable, Vec<SymbolId>) {
        let mut table = SymbolTable::default();
        let ids = names.iter().map(|n| table.intern(n).unwrap()).collect();
        (table, ids)
    }

    #[test]
    fn truth_tables() {
        let (_, ids) = symbols(&["p", "q"]);
        let (p, q) = (Formula::var(ids[0]), Formula::var(ids[1]));
        let table = |f: &Formula| -> Vec<bool> {
            Assignment::all(2).unwrap().map(|a| f.evaluate(a)).collect()
        };
        // Rows: (p, q) = (F, F), (T, F), (F, T), (T, T).
        assert_eq!(table(&Formula::and(p.clone(), q.clone())), vec![false, false, false, true]);
        assert_eq!(table(&Formula::or(p.clone(), q.clone())), vec![false, true, true, true]);
        assert_eq!(table(&Formula::implies(p.clone(), q.clone())), vec![true, false, true, true]);
        assert_eq!(table(&Formula::iff(p.clone(), q.clone())), vec![true, false, false, true]);
        assert_eq!(table(&Formula::not(p)), vec![true, false, true, false]);
    }

    #[test]
    fn with_sets_and_clears_bits() {
        let (_, ids) = symbols(&["p", "q"]);
        let a = Assignment::default().with(ids[1], true);
        assert_eq!(a.bits(), 0b10);
        assert!(a.value(ids[1]));
        assert!(!a.value(ids[0]));
        assert_eq!(a.with(ids[1], false).bits(), 0);
    }

    #[test]
    fn too_many_variables_fail_fast() {
        assert!(matches!(Assignment::all(MAX_VARIABLES + 1),
                         Err(CheckError::TooManyVariables { count: 31,
                                                            limit: 30, })));
    }

    #[test]
    fn tautologies() {
        let (_, ids) = symbols(&["p"]);
        let p = Formula::var(ids[0]);
        assert!(Formula::or(p.clone(), Formula::not(p.clone())).is_tautology(1).unwrap());
        assert!(!p.is_tautology(1).unwrap());
    }

    #[test]
    fn display_names_every_variable() {
        let (table, ids) = symbols(&["p", "q"]);
        let a = Assignment::default().with(ids[0], true);
        assert_eq!(a.display(&table).to_string(), "p = true, q = false");
        assert_eq!(a.display(&SymbolTable::default()).to_string(), "(no variables)");
    }
}
