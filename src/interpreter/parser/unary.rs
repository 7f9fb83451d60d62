use crate::{
    ast::Formula,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a term: a variable, a negation or a parenthesized formula.
    ///
    /// Negation is right-recursive, so `~ ~ p` is `~(~p)`. Reaching the end
    /// of input where a term is required yields `Ok(None)`: the input is
    /// over and the enclosing formula is abandoned.
    ///
    /// Grammar:
    /// ```text
    ///     term := identifier
    ///           | ("~" | "not") term
    ///           | "(" cond ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead cannot start a term.
    /// - `ExpectedClosingParen` if a parenthesized formula is not closed.
    /// - `NestingTooDeep` if negations or parentheses nest past the limit.
    /// - `TooManyVariables` if a new variable does not fit in the symbol
    ///   table.
    pub fn parse_term(&mut self) -> ParseResult<Option<Formula>> {
        self.tracer.enter("parse_term");
        let result = self.parse_term_inner();
        self.tracer.exit();
        result
    }

    fn parse_term_inner(&mut self) -> ParseResult<Option<Formula>> {
        match self.peek() {
            Token::Identifier(name) => {
                let name = name.clone();
                let id = self.intern(&name)?;
                self.accept()?;
                Ok(Some(Formula::var(id)))
            },
            Token::Not => {
                self.accept()?;
                let Some(operand) = self.nested(Self::parse_term)? else {
                    return Ok(None);
                };
                self.bounded(Formula::not(operand)).map(Some)
            },
            Token::LParen => {
                self.accept()?;
                let Some(inner) = self.nested(Self::parse_cond)? else {
                    return Ok(None);
                };
                if *self.peek() != Token::RParen {
                    return Err(ParseError::ExpectedClosingParen { found: self.peek().to_string(),
                                                                  line:  self.line(), });
                }
                self.accept()?;
                Ok(Some(inner))
            },
            Token::End => {
                self.tracer.print(format_args!("End of input inside a formula"));
                Ok(None)
            },
            tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     line:  self.line(), }),
        }
    }
}
