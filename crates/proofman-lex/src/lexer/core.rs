//! Lexer dispatch loop.

use proofman_util::{ProofmanError, ProofmanResult, Span};

use crate::cursor::Cursor;
use crate::token::{punctuation_kind, Token};

/// Tokenizes a ROOT/theory source string.
///
/// Holds the cursor plus the byte offset and line of the token currently
/// being scanned, so sub-scanners can slice back to `token_start` once they
/// know where the token ends.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), token_start: 0, token_start_line: 0 }
    }

    /// Tokenizes the entire source, stopping at the first lexical error.
    pub fn tokenize(source: &'a str) -> ProofmanResult<Vec<Token>> {
        let mut lexer = Self::new(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current_char().is_whitespace() {
            self.cursor.advance();
        }
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ProofmanError {
        let span = Span::new(self.token_start, self.cursor.position(), self.token_start_line, 1);
        ProofmanError::lexical(message, span)
    }

    /// Produces the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> ProofmanResult<Option<Token>> {
        self.skip_whitespace();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        let c = self.cursor.current_char();

        let token = if c.is_alphabetic() {
            self.lex_identifier()?
        } else if c == '"' {
            self.lex_string_literal()?
        } else if c == '{' && self.cursor.peek_char(1) == '*' {
            self.lex_braced_string_literal()?
        } else if c == '\\' {
            self.lex_unicode_bracket_literal()?
        } else if c.is_ascii_digit() {
            self.lex_number_literal()?
        } else if c == '(' && self.cursor.peek_char(1) == '*' {
            self.lex_comment()?
        } else if let Some(kind) = punctuation_kind(c) {
            self.cursor.advance();
            Token::new(kind, c.to_string(), self.token_start_line)
        } else {
            return Err(self.error(format!("unknown token starting with '{c}'")));
        };

        Ok(Some(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn empty_source_yields_no_tokens() {
        let tokens = Lexer::tokenize("   \n  ").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn punctuation_tokens_dispatch_correctly() {
        let tokens = Lexer::tokenize("= + ( ) [ ] , # *").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Equal,
                TokenKind::Plus,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftSquareParen,
                TokenKind::RightSquareParen,
                TokenKind::Comma,
                TokenKind::Hash,
                TokenKind::Asterisk,
            ]
        );
    }

    #[test]
    fn unknown_character_is_lexical_error() {
        let result = Lexer::tokenize("@");
        assert!(result.is_err());
    }

    #[test]
    fn newlines_advance_line_counter() {
        let tokens = Lexer::tokenize("foo\nbar").unwrap();
        assert_eq!(tokens[0].line, 0);
        assert_eq!(tokens[1].line, 1);
    }
}
