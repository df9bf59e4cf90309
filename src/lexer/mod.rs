//! Lexical analysis module.
//!
//! This module turns PHP expression source into a stream of classified tokens.
//! Every token keeps its raw lexeme so the parser can rebuild literals and
//! names exactly as written.

mod token;

pub use token::{Position, Token, TokenKind};

use crate::error::LexerError;
use logos::Logos;

/// Lexer producing [`Token`]s with line/column tracking
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    position: Position,
    input: &'a str,
    last_end: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            position: Position::new(),
            input,
            last_end: 0,
        }
    }

    /// Collect all tokens and terminate the stream with an `Eof` token
    pub fn collect_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for token in self.by_ref() {
            tokens.push(token);
        }
        tokens.push(self.eof());
        tokens
    }

    /// The end-of-input token for the text consumed so far
    fn eof(&mut self) -> Token {
        let end = self.input.len();
        for ch in self.input[self.last_end..end].chars() {
            self.position.advance(ch);
        }
        self.last_end = end;
        Token::eof(self.position, end)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();

        // Update position for any skipped content since last token
        if span.start > self.last_end {
            for ch in self.input[self.last_end..span.start].chars() {
                self.position.advance(ch);
            }
        }

        // Store the position at the start of the token
        let position = self.position;

        for ch in self.input[span.start..span.end].chars() {
            self.position.advance(ch);
        }
        self.last_end = span.end;

        let kind = result.unwrap_or(TokenKind::Error);
        Some(Token::new(kind, self.inner.slice(), position, span))
    }
}

/// Tokenize `input`, failing on the first unrecognized character.
///
/// The returned vector always ends with an `Eof` token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    let tokens = Lexer::new(input).collect_tokens();
    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Error) {
        let span = bad.span.clone().into();
        return Err(match bad.text.chars().next() {
            Some(quote @ ('\'' | '"' | '`')) => LexerError::UnterminatedString { quote, span },
            _ => LexerError::UnrecognizedToken {
                token: bad.text.clone(),
                span,
            },
        });
    }
    log::trace!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}

/// Debug helper: render a token stream one token per line
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:>4}:{:<3} {:?} {:?}", t.position.line, t.position.column, t.kind, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}
