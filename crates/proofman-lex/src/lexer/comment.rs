//! Nested `(* ... *)` comment scanning.

use proofman_util::ProofmanResult;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_comment(&mut self) -> ProofmanResult<Token> {
        self.cursor.advance();
        self.cursor.advance(); // opening '(*'
        let content_start = self.cursor.position();

        let mut depth: u32 = 1;
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("unterminated comment"));
            }

            if self.cursor.starts_with("*)") {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }

            if self.cursor.starts_with("(*") {
                depth += 1;
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }

            if self.cursor.current_char() == '\\' {
                self.cursor.advance();
            }
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(content_start).trim().to_string();
        self.cursor.advance();
        self.cursor.advance(); // closing '*)'
        Ok(Token::new(TokenKind::Comment, content, self.token_start_line))
    }
}
