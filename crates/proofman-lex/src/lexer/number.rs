//! Number-literal scanning: digits with at most one interior `.`.

use proofman_util::ProofmanResult;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number_literal(&mut self) -> ProofmanResult<Token> {
        let mut decimal_found = false;

        loop {
            let c = self.cursor.current_char();
            if c.is_ascii_digit() {
                self.cursor.advance();
                continue;
            }
            if c == '.' && !decimal_found {
                decimal_found = true;
                self.cursor.advance();
                continue;
            }
            break;
        }

        let text = self.cursor.slice_from(self.token_start);
        if text.ends_with('.') {
            return Err(self.error("number literal cannot end with '.'"));
        }

        Ok(Token::new(TokenKind::NumberLiteral, text, self.token_start_line))
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
    fn integer_literal() {
        let token = lex_one("42").unwrap();
        assert_eq!(token.kind, TokenKind::NumberLiteral);
        assert_eq!(token.lexeme, "42");
    }

    #[test]
    fn decimal_literal() {
        let token = lex_one("3.14").unwrap();
        assert_eq!(token.lexeme, "3.14");
    }

    #[test]
    fn trailing_dot_is_an_error() {
        assert!(lex_one("3.").is_err());
    }

    #[test]
    fn second_dot_stops_the_scan() {
        // "1.2.3" lexes as "1.2" followed by a separate "." (unknown
        // punctuation) and "3" - the number scanner stops at the second dot
        // rather than erroring, mirroring the identifier scanner's approach
        // of treating only a trailing dot as malformed.
        let mut lexer = Lexer::new("1.2.3");
        let first = lexer.next_token().unwrap().unwrap();
        assert_eq!(first.lexeme, "1.2");
    }
}
