//! Identifier scanning.
//!
//! Identifiers are letters, digits, and underscores, with at most one
//! interior `.` — the dot may not open or close the identifier.

use proofman_util::ProofmanResult;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> ProofmanResult<Token> {
        let mut dot_found = false;

        loop {
            let c = self.cursor.current_char();
            if c == '.' {
                if dot_found {
                    return Err(self.error("identifiers may only contain a single '.'"));
                }
                dot_found = true;
                self.cursor.advance();
                continue;
            }

            if c.is_alphanumeric() || c == '_' {
                self.cursor.advance();
                continue;
            }

            break;
        }

        let text = self.cursor.slice_from(self.token_start);
        if text.ends_with('.') {
            return Err(self.error("identifiers may not end with '.'"));
        }

        Ok(Token::new(TokenKind::Identifier, text, self.token_start_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> ProofmanResult<Token> {
        let mut lexer = Lexer::new(source);
        lexer.next_token().map(|t| t.expect("expected one token"))
    }

    #[test]
    fn plain_identifier() {
        let token = lex_one("foo").unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "foo");
    }

    #[test]
    fn single_interior_dot_is_allowed() {
        let token = lex_one("foo.bar").unwrap();
        assert_eq!(token.lexeme, "foo.bar");
    }

    #[test]
    fn trailing_dot_is_an_error() {
        assert!(lex_one("foo.").is_err());
    }

    #[test]
    fn two_dots_is_an_error() {
        assert!(lex_one("foo..bar").is_err());
    }

    #[test]
    fn leading_dot_is_unreachable_via_dispatch() {
        // '.' is not a letter, so the top-level dispatch never calls
        // lex_identifier for it - it surfaces as an "unknown token" error.
        let mut lexer = Lexer::new(".foo");
        assert!(lexer.next_token().is_err());
    }
}
