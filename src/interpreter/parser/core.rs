use crate::{
    ast::Formula,
    config::Limits,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        symbols::{SymbolId, SymbolTable},
        trace::Tracer,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsing session over one input.
///
/// The parser owns the lexer cursor, one token of lookahead and the symbol
/// table. It is created once per input and reused for every formula, so a
/// variable gets the same id in every premise and in the conclusion.
///
/// # Example
/// ```
/// use entail::{
///     config::Limits,
///     interpreter::{parser::core::Parser, trace::Tracer},
/// };
///
/// let mut parser = Parser::new("p -> q  p  q", Limits::default(), Tracer::disabled()).unwrap();
/// let formulas = parser.parse_all().unwrap();
/// assert_eq!(formulas.len(), 3);
/// assert_eq!(parser.symbols().len(), 2);
/// ```
pub struct Parser<'a> {
    lexer:        Lexer<'a>,
    symbols:      SymbolTable,
    lookahead:    Token,
    line:         usize,
    depth:        usize,
    max_depth:    usize,
    max_formulas: usize,
    pub(in crate::interpreter::parser) tracer: Tracer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a session over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a `ParseError` if the first token cannot be lexed.
    pub fn new(source: &'a str, limits: Limits, tracer: Tracer<'a>) -> ParseResult<Self> {
        let mut parser = Self { lexer: Lexer::new(source, limits.max_token_length),
                                symbols: SymbolTable::with_limit(limits.max_variables),
                                lookahead: Token::End,
                                line: 1,
                                depth: 0,
                                max_depth: limits.max_depth,
                                max_formulas: limits.max_formulas,
                                tracer };
        parser.accept()?;
        Ok(parser)
    }

    /// Parses the next formula.
    ///
    /// Returns `Ok(None)` once the input is exhausted. That is the normal way
    /// for reading to stop and is not an error. If the input ends in the
    /// middle of a formula, that unfinished formula is dropped and reading
    /// stops the same way.
    ///
    /// # Errors
    /// Returns a `ParseError` on malformed input. Everything built for the
    /// failed formula is dropped.
    pub fn next_formula(&mut self) -> ParseResult<Option<Formula>> {
        if self.lookahead == Token::End {
            self.tracer.print(format_args!("End of input"));
            return Ok(None);
        }
        let start = self.line;
        let Some(formula) = self.parse_cond()? else {
            log::warn!("input ended inside the formula starting on line {start}; it was dropped");
            return Ok(None);
        };
        log::debug!("parsed formula: {}", formula.display(&self.symbols));
        Ok(Some(formula))
    }

    /// Parses formulas until the input is exhausted.
    ///
    /// # Errors
    /// Stops at and returns the first `ParseError`, including
    /// [`ParseError::TooManyFormulas`] when the input holds more formulas than
    /// the configured limit.
    pub fn parse_all(&mut self) -> ParseResult<Vec<Formula>> {
        let mut formulas = Vec::new();
        while let Some(formula) = self.next_formula()? {
            if formulas.len() == self.max_formulas {
                return Err(ParseError::TooManyFormulas { limit: self.max_formulas,
                                                         line:  self.line, });
            }
            formulas.push(formula);
        }
        Ok(formulas)
    }

    /// The variables interned so far.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Ends the session, handing back the symbol table and the tracer.
    #[must_use]
    pub fn into_parts(self) -> (SymbolTable, Tracer<'a>) {
        (self.symbols, self.tracer)
    }

    /// The current lookahead token.
    pub(in crate::interpreter::parser) const fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Line of the lookahead token.
    pub(in crate::interpreter::parser) const fn line(&self) -> usize {
        self.line
    }

    /// Consumes the lookahead token and reads the next one.
    ///
    /// # Returns
    /// The token that was consumed.
    pub(in crate::interpreter::parser) fn accept(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        self.line = self.lexer.line();
        self.tracer.print(format_args!("Read token: {next}"));
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] instead of descending past the
    /// configured depth.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    line:  self.line, });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Rejects a freshly built node whose tree is deeper than the limit.
    pub(in crate::interpreter::parser) fn bounded(&self, formula: Formula) -> ParseResult<Formula> {
        if formula.depth() > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    line:  self.line, });
        }
        Ok(formula)
    }

    /// Resolves a variable name to its id.
    ///
    /// # Errors
    /// Returns [`ParseError::TooManyVariables`] when the name is new and the
    /// table is full.
    pub(in crate::interpreter::parser) fn intern(&mut self, name: &str) -> ParseResult<SymbolId> {
        let id = self.symbols
                     .intern(name)
                     .map_err(|full| ParseError::TooManyVariables { name:  name.to_string(),
                                                                    limit: full.limit,
                                                                    line:  self.line, })?;
        self.tracer
            .print(format_args!("var[{}] = '{name}'", id.index()));
        Ok(id)
    }
}
