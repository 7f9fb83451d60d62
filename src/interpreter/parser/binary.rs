use crate::{
    ast::{BinaryOperator, Formula},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to the connective it denotes at the implication level.
const fn cond_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Implies => Some(BinaryOperator::Implies),
        Token::Iff => Some(BinaryOperator::Iff),
        _ => None,
    }
}

/// Maps a token to the connective it denotes at the conjunction level.
const fn expr_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses implications and biconditionals.
    ///
    /// This is the lowest-precedence level and the entry point for a whole
    /// formula. Both operators share the level and associate to the left, so
    /// `p -> q <-> r` parses as `(p -> q) <-> r`.
    ///
    /// Grammar: `cond := expr (("->" | "<->") expr)*`
    ///
    /// Returns `Ok(None)` if the input ends before the formula is complete.
    ///
    /// # Errors
    /// Propagates any error from the operands. The left-hand tree built so
    /// far is dropped with it.
    pub fn parse_cond(&mut self) -> ParseResult<Option<Formula>> {
        self.tracer.enter("parse_cond");
        let result = self.parse_left_assoc(Self::parse_expr, cond_operator);
        self.tracer.exit();
        result
    }

    /// Parses conjunctions and disjunctions.
    ///
    /// `and` and `or` share one precedence level and associate to the left:
    /// `p or q and r` parses as `(p or q) and r`.
    ///
    /// Grammar: `expr := term (("and" | "or") term)*`
    ///
    /// # Errors
    /// Propagates any error from the terms.
    pub fn parse_expr(&mut self) -> ParseResult<Option<Formula>> {
        self.tracer.enter("parse_expr");
        let result = self.parse_left_assoc(Self::parse_term, expr_operator);
        self.tracer.exit();
        result
    }

    /// Parses `operand (op operand)*` and folds it to the left.
    ///
    /// A missing operand at the end of input abandons the whole chain.
    ///
    /// # Parameters
    /// - `operand`: Parser for the next-higher precedence level.
    /// - `operator`: Recognizes the connectives of this level.
    fn parse_left_assoc(&mut self,
                        operand: fn(&mut Self) -> ParseResult<Option<Formula>>,
                        operator: fn(&Token) -> Option<BinaryOperator>)
                        -> ParseResult<Option<Formula>> {
        let Some(mut left) = operand(self)? else {
            return Ok(None);
        };
        while let Some(op) = operator(self.peek()) {
            self.tracer.print(format_args!("Reading operand of {}", op.token()));
            self.accept()?;
            let Some(right) = operand(self)? else {
                return Ok(None);
            };
            left = self.bounded(Formula::binary(op, left, right))?;
        }
        Ok(Some(left))
    }
}
