//! Error types shared by the lexer, parsers, indexer, and CLI.

use thiserror::Error;

use crate::span::Span;

/// Top-level error type propagated by every fallible operation in the crate family.
#[derive(Debug, Error)]
pub enum ProofmanError {
    #[error("lexical error at line {line}: {message}")]
    Lexical { message: String, span: Span, line: u32 },

    #[error("parsing failed at {at}\nExpected: {expected}\nGot: {actual}")]
    Parse { expected: String, actual: String, at: String, line: Option<u32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("index error: {0}")]
    Index(String),

    #[error("VCS error: {0}")]
    Vcs(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type ProofmanResult<T> = std::result::Result<T, ProofmanError>;

impl ProofmanError {
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::Lexical { message: message.into(), line: span.line, span }
    }

    pub fn parse_eof(expected: impl Into<String>) -> Self {
        Self::Parse { expected: expected.into(), actual: "EOF".to_string(), at: "EOF".to_string(), line: None }
    }

    pub fn parse_mismatch(expected: impl Into<String>, actual: impl Into<String>, line: u32) -> Self {
        Self::Parse {
            expected: expected.into(),
            actual: actual.into(),
            at: format!("L{line}"),
            line: Some(line),
        }
    }

    pub fn index(message: impl Into<String>) -> Self {
        Self::Index(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_eof_display_names_eof() {
        let err = ProofmanError::parse_eof("')'");
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn parse_mismatch_display_names_line() {
        let err = ProofmanError::parse_mismatch("Identifier", "'+'", 3);
        assert!(err.to_string().contains("L3"));
    }

    #[test]
    fn lexical_error_carries_span_line() {
        let span = Span::new(4, 5, 2, 1);
        let err = ProofmanError::lexical("unterminated string literal", span);
        assert!(matches!(err, ProofmanError::Lexical { line: 2, .. }));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ProofmanError = io_err.into();
        assert!(matches!(err, ProofmanError::Io(_)));
    }
}
