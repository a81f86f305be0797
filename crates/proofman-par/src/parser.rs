//! Token-consumption primitives shared by the root-grammar and
//! theory-grammar parsers.

use proofman_lex::{Token, TokenKind};
use proofman_util::{ProofmanError, ProofmanResult};

/// Owns a token stream (comments already filtered out) and a cursor index
/// into it. All "maybe" methods return `Ok(None)` without advancing the
/// cursor when the expected construct is absent, so alternation never needs
/// backtracking beyond a single rewind.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Builds a parser over `tokens`, dropping every `Comment` token -
    /// comments are semantically inert to both grammars.
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens.into_iter().filter(|t| t.kind != TokenKind::Comment).collect();
        Self { tokens, position: 0 }
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.position + offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn expected_names(kinds: &[TokenKind]) -> String {
        kinds.iter().map(|k| k.display_name()).collect::<Vec<_>>().join(", ")
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub fn eat(&mut self, kinds: &[TokenKind]) -> ProofmanResult<Token> {
        let expected = Self::expected_names(kinds);

        let Some(token) = self.current() else {
            return Err(ProofmanError::parse_eof(expected));
        };

        if kinds.contains(&token.kind) {
            let token = token.clone();
            self.position += 1;
            return Ok(token);
        }

        Err(ProofmanError::parse_mismatch(expected, token.kind.display_name(), token.line))
    }

    /// Consumes an identifier whose lexeme is one of `words`. On mismatch,
    /// the position is restored to where it was at entry.
    pub fn eat_keyword(&mut self, words: &[&str]) -> ProofmanResult<Token> {
        let identifier = self.eat(&[TokenKind::Identifier])?;

        if words.iter().any(|w| *w == identifier.lexeme) {
            return Ok(identifier);
        }

        self.position -= 1;
        Err(ProofmanError::parse_mismatch(words.join(", "), identifier.lexeme.clone(), identifier.line))
    }

    /// Consumes an identifier-or-string-literal ("name" in the grammar).
    pub fn eat_name(&mut self) -> ProofmanResult<Token> {
        self.eat(&[TokenKind::Identifier, TokenKind::StringLiteral])
    }

    /// Consumes a run of name tokens up to (but not including) any
    /// identifier whose lexeme appears in `terminators`.
    pub fn string_array(&mut self, terminators: &[&str]) -> ProofmanResult<Vec<String>> {
        let mut found = Vec::new();

        while let Some(next) = self.current() {
            if next.kind == TokenKind::Identifier && terminators.contains(&next.lexeme.as_str()) {
                break;
            }
            found.push(self.eat_name()?.lexeme);
        }

        Ok(found)
    }

    /// If the next token is the keyword `keyword`, consumes it and delegates
    /// to [`Self::string_array`]; otherwise returns `Ok(None)` without
    /// consuming anything.
    pub fn maybe_qualified_string_array(
        &mut self,
        keyword: &str,
        terminators: &[&str],
    ) -> ProofmanResult<Option<Vec<String>>> {
        if self.eat_keyword(&[keyword]).is_err() {
            return Ok(None);
        }

        Ok(Some(self.string_array(terminators)?))
    }
}
