//! Lexer for Go type declarations.
//!
//! Wraps the `logos` generated scanner and applies Go's automatic semicolon
//! rule: a line break becomes a `;` when the token before it could end a
//! statement, and is dropped otherwise.

use crate::syntax::token::{Position, Span, Token, TokenKind};
use crate::syntax::SyntaxError;
use logos::Logos;

pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    last: Option<TokenKind>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            last: None,
        }
    }

    /// Produce the next significant token, or `Eof` once the input is used up.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        loop {
            let kind = match self.inner.next() {
                Some(Ok(kind)) => kind,
                Some(Err(())) => {
                    let span = self.inner.span();
                    if self.inner.slice() == "/*" {
                        return Err(SyntaxError::UnterminatedComment {
                            pos: Position::at(self.source, span.start),
                        });
                    }
                    return Err(SyntaxError::UnexpectedChar {
                        ch: self.source[span.start..].chars().next().unwrap_or('\u{fffd}'),
                        pos: Position::at(self.source, span.start),
                    });
                }
                None => {
                    let end = self.source.len();
                    // The last line may lack its newline
                    if self.last.map_or(false, |k| k.ends_line()) {
                        self.last = Some(TokenKind::Semicolon);
                        return Ok(Token::new(TokenKind::Semicolon, Span::new(end, end)));
                    }
                    return Ok(Token::new(TokenKind::Eof, Span::new(end, end)));
                }
            };

            let span = self.inner.span();
            let line_break = match kind {
                TokenKind::Newline => true,
                TokenKind::BlockComment => self.inner.slice().contains('\n'),
                _ => {
                    self.last = Some(kind);
                    return Ok(Token::new(kind, Span::new(span.start, span.end)));
                }
            };

            if line_break && self.last.map_or(false, |k| k.ends_line()) {
                self.last = Some(TokenKind::Semicolon);
                return Ok(Token::new(TokenKind::Semicolon, Span::new(span.start, span.start)));
            }
        }
    }

    /// Collect all tokens, ending with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }
}

pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).tokenize()
}
