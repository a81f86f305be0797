//! String-literal scanning: double-quoted, brace-quoted, and Isabelle's
//! Unicode-bracket `\<open> … \<close>` form.

use proofman_util::ProofmanResult;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

const OPEN_MARKER: &str = "\\<open>";
const CLOSE_MARKER: &str = "\\<close>";
const COMMENT_MARKER: &str = "\\<comment>";

impl<'a> Lexer<'a> {
    /// `"..."`, honouring `\` as a one-character escape. Lexeme is the
    /// interior, trimmed.
    pub(crate) fn lex_string_literal(&mut self) -> ProofmanResult<Token> {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position();

        let mut escaped = false;
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("unterminated string literal"));
            }
            let c = self.cursor.current_char();
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                break;
            }
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(content_start).trim().to_string();
        self.cursor.advance(); // closing quote
        Ok(Token::new(TokenKind::StringLiteral, content, self.token_start_line))
    }

    /// `{* ... *}`. Lexeme is the interior, trimmed.
    pub(crate) fn lex_braced_string_literal(&mut self) -> ProofmanResult<Token> {
        self.cursor.advance();
        self.cursor.advance(); // opening '{*'
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("unterminated braced string literal"));
            }
            if self.cursor.starts_with("*}") {
                break;
            }
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(content_start).trim().to_string();
        self.cursor.advance();
        self.cursor.advance(); // closing '*}'
        Ok(Token::new(TokenKind::StringLiteral, content, self.token_start_line))
    }

    /// `\<open> ... \<close>`, balanced. The markers are kept in the lexeme. A
    /// lexeme beginning with `\<comment>` is classified as a comment instead
    /// of a string literal.
    pub(crate) fn lex_unicode_bracket_literal(&mut self) -> ProofmanResult<Token> {
        let mut depth: i32 = 0;

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("unterminated latex string literal"));
            }

            if self.cursor.current_char() == '\\' {
                if self.cursor.starts_with(CLOSE_MARKER) {
                    for _ in 0..CLOSE_MARKER.chars().count() {
                        self.cursor.advance();
                    }
                    depth -= 1;
                    if depth == 0 {
                        let lexeme = self.cursor.slice_from(self.token_start).to_string();
                        let kind = if lexeme.starts_with(COMMENT_MARKER) {
                            TokenKind::Comment
                        } else {
                            TokenKind::StringLiteral
                        };
                        return Ok(Token::new(kind, lexeme, self.token_start_line));
                    }
                    continue;
                } else if self.cursor.starts_with(OPEN_MARKER) {
                    for _ in 0..OPEN_MARKER.chars().count() {
                        self.cursor.advance();
                    }
                    depth += 1;
                    continue;
                }
            }

            self.cursor.advance();
        }
    }
}
