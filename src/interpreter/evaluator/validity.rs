use crate::{
    ast::Formula,
    error::CheckError,
    interpreter::{evaluator::core::Assignment, trace::Tracer},
};

/// The result of checking an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every assignment satisfying the premises satisfies the conclusion.
    Valid,
    /// Some assignment satisfies the premises but not the conclusion.
    Invalid {
        /// The first such assignment in ascending order.
        counterexample: Assignment,
    },
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the counterexample of an invalid argument.
    #[must_use]
    pub const fn counterexample(self) -> Option<Assignment> {
        match self {
            Self::Valid => None,
            Self::Invalid { counterexample } => Some(counterexample),
        }
    }
}

/// Premises followed by a conclusion.
///
/// An argument is built from the formulas of one input in order: the last
/// formula is the conclusion and all earlier ones are premises.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Argument {
    premises:   Vec<Formula>,
    conclusion: Option<Formula>,
}

impl Argument {
    /// Creates an argument from explicit premises and a conclusion.
    #[must_use]
    pub fn new(premises: Vec<Formula>, conclusion: Formula) -> Self {
        Self { premises,
               conclusion: Some(conclusion) }
    }

    /// Splits formulas in input order into premises and a final conclusion.
    ///
    /// An empty list gives an argument with neither.
    #[must_use]
    pub fn from_formulas(mut formulas: Vec<Formula>) -> Self {
        let conclusion = formulas.pop();
        Self { premises: formulas,
               conclusion }
    }

    #[must_use]
    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    #[must_use]
    pub const fn conclusion(&self) -> Option<&Formula> {
        self.conclusion.as_ref()
    }

    /// Adds another premise.
    pub fn push_premise(&mut self, premise: Formula) {
        self.premises.push(premise);
    }

    /// Decides validity by enumerating all assignments of `variable_count`
    /// variables in ascending order.
    ///
    /// Assignments that falsify a premise are skipped without looking at the
    /// conclusion. The first assignment satisfying every premise but not the
    /// conclusion ends the search as a counterexample. With no premises this
    /// checks that the conclusion is a tautology; with no formulas at all the
    /// argument is vacuously valid.
    ///
    /// # Errors
    /// - [`CheckError::TooManyVariables`] if `variable_count` is too large to
    ///   enumerate.
    /// - [`CheckError::UnboundVariable`] if a formula mentions a variable id
    ///   not below `variable_count`.
    ///
    /// # Example
    /// ```
    /// use entail::{
    ///     ast::Formula,
    ///     interpreter::{
    ///         evaluator::validity::{Argument, Verdict},
    ///         symbols::SymbolTable,
    ///         trace::Tracer,
    ///     },
    /// };
    ///
    /// let mut symbols = SymbolTable::default();
    /// let p = Formula::var(symbols.intern("p").unwrap());
    /// let q = Formula::var(symbols.intern("q").unwrap());
    ///
    /// let modus_ponens = Argument::new(vec![Formula::implies(p.clone(), q.clone()), p], q);
    /// let verdict = modus_ponens.check(symbols.len(), &mut Tracer::disabled()).unwrap();
    /// assert_eq!(verdict, Verdict::Valid);
    /// ```
    pub fn check(&self, variable_count: usize, tracer: &mut Tracer<'_>) -> Result<Verdict, CheckError> {
        let assignments = Assignment::all(variable_count)?;
        self.ensure_bound(variable_count)?;

        let Some(conclusion) = &self.conclusion else {
            log::warn!("argument has no formulas; it is vacuously valid");
            return Ok(Verdict::Valid);
        };

        tracer.enter("check");
        let mut verdict = Verdict::Valid;
        for assignment in assignments {
            tracer.print(format_args!("env = {}", assignment.bits()));
            if !self.premises.iter().all(|premise| premise.evaluate(assignment)) {
                continue;
            }
            if !conclusion.evaluate(assignment) {
                tracer.print(format_args!("Counterexample at env = {}", assignment.bits()));
                verdict = Verdict::Invalid { counterexample: assignment };
                break;
            }
        }
        tracer.exit();

        log::debug!("{} premises over {variable_count} variables: {verdict:?}",
                    self.premises.len());
        Ok(verdict)
    }

    fn ensure_bound(&self, variable_count: usize) -> Result<(), CheckError> {
        let unbound = self.premises
                          .iter()
                          .chain(self.conclusion.as_ref())
                          .flat_map(Formula::variables)
                          .find(|id| id.index() >= variable_count);
        match unbound {
            Some(id) => Err(CheckError::UnboundVariable { index: id.index(),
                                                          count: variable_count, }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::symbols::SymbolTable;

    struct Vars {
        symbols: SymbolTable,
    }

    impl Vars {
        fn new() -> Self {
            Self { symbols: SymbolTable::default() }
        }

        fn var(&mut self, name: &str) -> Formula {
            Formula::var(self.symbols.intern(name).unwrap())
        }

        fn check(&self, argument: &Argument) -> Verdict {
            argument.check(self.symbols.len(), &mut Tracer::disabled())
                    .unwrap()
        }
    }

    #[test]
    fn modus_ponens_is_valid() {
        let mut v = Vars::new();
        let (p, q) = (v.var("p"), v.var("q"));
        let argument = Argument::new(vec![Formula::implies(p.clone(), q.clone()), p], q);
        assert_eq!(v.check(&argument), Verdict::Valid);
    }

    #[test]
    fn affirming_the_consequent_is_invalid() {
        let mut v = Vars::new();
        let (p, q) = (v.var("p"), v.var("q"));
        let argument = Argument::new(vec![Formula::implies(p.clone(), q.clone()), q], p);
        // p false, q true.
        assert_eq!(v.check(&argument),
                   Verdict::Invalid { counterexample: Assignment::from_bits(0b10) });
    }

    #[test]
    fn counterexample_is_the_smallest_one() {
        let mut v = Vars::new();
        let (p, q) = (v.var("p"), v.var("q"));
        let argument = Argument::new(vec![], Formula::and(p, q));
        assert_eq!(v.check(&argument).counterexample(), Some(Assignment::from_bits(0)));
    }

    #[test]
    fn inconsistent_premises_entail_anything() {
        let mut v = Vars::new();
        let (p, q) = (v.var("p"), v.var("q"));
        let argument = Argument::new(vec![p.clone(), Formula::not(p)], q);
        assert!(v.check(&argument).is_valid());
    }

    #[test]
    fn no_premises_means_tautology() {
        let mut v = Vars::new();
        let p = v.var("p");
        let excluded_middle = Argument::new(vec![], Formula::or(p.clone(), Formula::not(p.clone())));
        assert!(v.check(&excluded_middle).is_valid());
        assert!(!v.check(&Argument::new(vec![], p)).is_valid());
    }

    #[test]
    fn empty_argument_is_vacuously_valid() {
        let argument = Argument::from_formulas(vec![]);
        assert!(argument.conclusion().is_none());
        assert_eq!(argument.check(0, &mut Tracer::disabled()), Ok(Verdict::Valid));
    }

    #[test]
    fn from_formulas_takes_the_last_as_conclusion() {
        let mut v = Vars::new();
        let (p, q) = (v.var("p"), v.var("q"));
        let argument = Argument::from_formulas(vec![p.clone(), q.clone()]);
        assert_eq!(argument.premises(), &[p]);
        assert_eq!(argument.conclusion(), Some(&q));
    }

    #[test]
    fn unbound_variables_are_rejected() {
        let mut v = Vars::new();
        v.var("p");
        let q = v.var("q");
        let argument = Argument::new(vec![], q);
        assert_eq!(argument.check(1, &mut Tracer::disabled()),
                   Err(CheckError::UnboundVariable { index: 1, count: 1 }));
    }

    #[test]
    fn oversized_variable_counts_are_rejected() {
        let argument = Argument::from_formulas(vec![]);
        assert!(matches!(argument.check(64, &mut Tracer::disabled()),
                         Err(CheckError::TooManyVariables { count: 64, .. })));
    }
}
