use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token of a formula.
///
/// Tokens are classified from raw lexemes by [`Token::classify`]; anything
/// that is not an operator or a parenthesis is an identifier.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Token {
    /// `and`
    And,
    /// `or`
    Or,
    /// `~` or `not`
    Not,
    /// `->`
    Implies,
    /// `<->`
    Iff,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Variable names such as `p` or `raining`.
    Identifier(String),
    /// End of input.
    End,
}

impl Token {
    /// Classifies a raw lexeme.
    ///
    /// # Example
    /// ```
    /// use entail::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::classify("not"), Token::Not);
    /// assert_eq!(Token::classify("<->"), Token::Iff);
    /// assert_eq!(Token::classify("p"), Token::Identifier("p".to_string()));
    /// ```
    #[must_use]
    pub fn classify(lexeme: &str) -> Self {
        match lexeme {
            "~" | "not" => Self::Not,
            "and" => Self::And,
            "or" => Self::Or,
            "<->" => Self::Iff,
            "->" => Self::Implies,
            "(" => Self::LParen,
            ")" => Self::RParen,
            _ => Self::Identifier(lexeme.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
            Self::Not => f.write_str("~"),
            Self::Implies => f.write_str("->"),
            Self::Iff => f.write_str("<->"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Identifier(name) => f.write_str(name),
            Self::End => f.write_str("end of input"),
        }
    }
}

/// Raw lexemes before classification.
///
/// A lexeme is either a maximal run of ASCII letters or a maximal run of
/// characters that are neither letters nor whitespace, so `((` is one
/// lexeme.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    #[regex(r"[A-Za-z]+")]
    Word,
    #[regex(r"[^\sA-Za-z]+", allow_greedy = true)]
    Symbol,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    #[regex(r"[^\S\n]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Pulls classified tokens out of a source string one at a time.
///
/// Once the input is exhausted every further call yields [`Token::End`].
pub struct Lexer<'s> {
    inner:            logos::Lexer<'s, Lexeme>,
    max_token_length: usize,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer over `source` rejecting lexemes longer than
    /// `max_token_length` characters.
    #[must_use]
    pub fn new(source: &'s str, max_token_length: usize) -> Self {
        Self { inner: Lexeme::lexer_with_extras(source, LexerExtras { line: 1 }),
               max_token_length }
    }

    /// The line of the most recently produced token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Reads the next token.
    ///
    /// # Errors
    /// Returns [`ParseError::TokenTooLong`] if the lexeme exceeds the maximum
    /// length; the lexeme is never truncated.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(lexeme) = self.inner.next() else {
            return Ok(Token::End);
        };
        let slice = self.inner.slice();
        if lexeme.is_err() {
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  self.line(), });
        }
        if slice.chars().count() > self.max_token_length {
            return Err(ParseError::TokenTooLong { token: slice.to_string(),
                                                  limit: self.max_token_length,
                                                  line:  self.line(), });
        }
        Ok(Token::classify(slice))
    }
}

/// Lexes a whole source string, stopping before [`Token::End`].
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Example
/// ```
/// use entail::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("~p -> q").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Not,
///                 Token::Identifier("p".to_string()),
///                 Token::Implies,
///                 Token::Identifier("q".to_string())]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(source, crate::config::MAX_TOKEN_LENGTH);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token()? {
            Token::End => return Ok(tokens),
            token => tokens.push(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn classifies_keywords_and_symbols() {
        let tokens = tokenize("not p and q or r -> s <-> ( t )").unwrap();
        assert_eq!(tokens,
                   vec![Token::Not,
                        id("p"),
                        Token::And,
                        id("q"),
                        Token::Or,
                        id("r"),
                        Token::Implies,
                        id("s"),
                        Token::Iff,
                        Token::LParen,
                        id("t"),
                        Token::RParen]);
    }

    #[test]
    fn letters_end_a_symbol_run() {
        assert_eq!(tokenize("~p->q").unwrap(),
                   vec![Token::Not, id("p"), Token::Implies, id("q")]);
    }

    #[test]
    fn symbol_runs_are_maximal() {
        assert_eq!(tokenize("((p))").unwrap(), vec![id("(("), id("p"), id("))")]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(tokenize("AND Or").unwrap(), vec![id("AND"), id("Or")]);
    }

    #[test]
    fn end_repeats_after_input_is_exhausted() {
        let mut lexer = Lexer::new("  p ", 8);
        assert_eq!(lexer.next_token().unwrap(), id("p"));
        assert_eq!(lexer.next_token().unwrap(), Token::End);
        assert_eq!(lexer.next_token().unwrap(), Token::End);
    }

    #[test]
    fn last_token_without_trailing_whitespace_is_kept() {
        assert_eq!(tokenize("p").unwrap(), vec![id("p")]);
    }

    #[test]
    fn tracks_lines() {
        let mut lexer = Lexer::new("p\n\nq", 8);
        lexer.next_token().unwrap();
        assert_eq!(lexer.line(), 1);
        lexer.next_token().unwrap();
        assert_eq!(lexer.line(), 3);
    }

    #[test]
    fn overlong_tokens_are_rejected() {
        let mut lexer = Lexer::new("p\nabcdefghi", 8);
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(),
                   Err(ParseError::TokenTooLong { token: "abcdefghi".to_string(),
                                                  limit: 8,
                                                  line:  2, }));
    }

    #[test]
    fn tokens_at_the_limit_are_accepted() {
        let mut lexer = Lexer::new("abcdefgh", 8);
        assert_eq!(lexer.next_token().unwrap(), id("abcdefgh"));
    }
}
