use std::{collections::BTreeSet, fmt};

use crate::interpreter::{
    lexer::Token,
    symbols::{SymbolId, SymbolTable},
};

/// A binary connective of propositional logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Conjunction, `and`.
    And,
    /// Disjunction, `or`.
    Or,
    /// Material implication, `->`.
    Implies,
    /// Biconditional, `<->`.
    Iff,
}

impl BinaryOperator {
    /// Returns the token this operator is written as.
    #[must_use]
    pub const fn token(self) -> Token {
        match self {
            Self::And => Token::And,
            Self::Or => Token::Or,
            Self::Implies => Token::Implies,
            Self::Iff => Token::Iff,
        }
    }
}

/// An expression tree node representing a propositional formula.
///
/// Every node owns its children outright: trees are never shared and never
/// cyclic, so dropping a root releases the whole tree children-first.
/// Variables refer to the [`SymbolTable`] of the parser that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A propositional variable.
    Variable(SymbolId),
    /// Negation of the operand.
    Not(Box<Self>),
    /// A binary connective applied to two operands.
    Binary {
        /// The connective.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Formula {
    /// Creates a variable node.
    #[must_use]
    pub const fn var(id: SymbolId) -> Self {
        Self::Variable(id)
    }

    /// Creates the negation of `operand`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    /// Creates a binary node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Creates `left and right`.
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    /// Creates `left or right`.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    /// Creates `left -> right`.
    #[must_use]
    pub fn implies(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Implies, left, right)
    }

    /// Creates `left <-> right`.
    #[must_use]
    pub fn iff(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Iff, left, right)
    }

    /// Returns the variables occurring in the formula, ascending and without
    /// duplicates.
    #[must_use]
    pub fn variables(&self) -> Vec<SymbolId> {
        let mut found = BTreeSet::new();
        self.collect_variables(&mut found);
        found.into_iter().collect()
    }

    fn collect_variables(&self, found: &mut BTreeSet<SymbolId>) {
        match self {
            Self::Variable(id) => {
                found.insert(*id);
            },
            Self::Not(operand) => operand.collect_variables(found),
            Self::Binary { left, right, .. } => {
                left.collect_variables(found);
                right.collect_variables(found);
            },
        }
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Variable(_) => 1,
            Self::Not(operand) => 1 + operand.size(),
            Self::Binary { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    /// Number of connectives on the longest path from the root to a variable.
    ///
    /// A lone variable has depth 0 and `~ ( p and q )` has depth 2.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Variable(_) => 0,
            Self::Not(operand) => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Renders the formula as a fully parenthesized token sequence.
    ///
    /// Binary nodes become `( left op right )` and negations `~ operand`.
    /// Variables are named through `symbols`; an id the table does not know
    /// is written as `#index`.
    ///
    /// Lexing the space-separated tokens yields exactly this sequence again,
    /// which [`Formula::display`] relies on.
    #[must_use]
    pub fn tokens(&self, symbols: &SymbolTable) -> Vec<Token> {
        let mut out = Vec::with_capacity(self.size() * 2);
        self.push_tokens(symbols, &mut out);
        out
    }

    fn push_tokens(&self, symbols: &SymbolTable, out: &mut Vec<Token>) {
        match self {
            Self::Variable(id) => {
                let name = symbols.name(*id)
                                  .map_or_else(|| format!("#{}", id.index()), str::to_string);
                out.push(Token::Identifier(name));
            },
            Self::Not(operand) => {
                out.push(Token::Not);
                operand.push_tokens(symbols, out);
            },
            Self::Binary { op, left, right } => {
                out.push(Token::LParen);
                left.push_tokens(symbols, out);
                out.push(op.token());
                right.push_tokens(symbols, out);
                out.push(Token::RParen);
            },
        }
    }

    /// Returns a value that prints the formula with variable names.
    ///
    /// # Example
    /// ```
    /// use entail::{ast::Formula, interpreter::symbols::SymbolTable};
    ///
    /// let mut symbols = SymbolTable::default();
    /// let p = symbols.intern("p").unwrap();
    /// let q = symbols.intern("q").unwrap();
    ///
    /// let formula = Formula::implies(Formula::not(Formula::var(p)), Formula::var(q));
    /// assert_eq!(formula.display(&symbols).to_string(), "( ~ p -> q )");
    /// ```
    #[must_use]
    pub const fn display<'a>(&'a self, symbols: &'a SymbolTable) -> FormulaDisplay<'a> {
        FormulaDisplay { formula: self,
                         symbols }
    }
}

/// Helper returned by [`Formula::display`].
pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    symbols: &'a SymbolTable,
}

impl fmt::Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.formula.tokens(self.symbols).iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(names: &[&str]) -> (SymbolTable, Vec<SymbolId>) {
        let mut symbols = SymbolTable::default();
        let ids = names.iter()
                       .map(|n| symbols.intern(n).unwrap())
                       .collect();
        (symbols, ids)
    }

    #[test]
    fn variables_are_sorted_and_unique() {
        let (_, ids) = table(&["p", "q", "r"]);
        let f = Formula::and(Formula::or(Formula::var(ids[2]), Formula::var(ids[0])),
                             Formula::not(Formula::var(ids[2])));
        assert_eq!(f.variables(), vec![ids[0], ids[2]]);
    }

    #[test]
    fn size_counts_every_node() {
        let (_, ids) = table(&["p", "q"]);
        let f = Formula::iff(Formula::not(Formula::var(ids[0])), Formula::var(ids[1]));
        assert_eq!(f.size(), 4);
    }

    #[test]
    fn depth_follows_the_longest_branch() {
        let (_, ids) = table(&["p", "q"]);
        assert_eq!(Formula::var(ids[0]).depth(), 0);
        let f = Formula::or(Formula::var(ids[0]),
                            Formula::not(Formula::and(Formula::var(ids[0]), Formula::var(ids[1]))));
        assert_eq!(f.depth(), 3);
    }

    #[test]
    fn display_parenthesizes_binary_nodes() {
        let (symbols, ids) = table(&["p", "q", "r"]);
        let f = Formula::and(Formula::or(Formula::var(ids[0]), Formula::var(ids[1])),
                             Formula::var(ids[2]));
        assert_eq!(f.display(&symbols).to_string(), "( ( p or q ) and r )");
    }

    #[test]
    fn unknown_ids_are_numbered() {
        let (symbols, _) = table(&[]);
        let mut other = SymbolTable::default();
        other.intern("a").unwrap();
        let id = other.intern("b").unwrap();
        assert_eq!(Formula::var(id).display(&symbols).to_string(), "#1");
    }
}
