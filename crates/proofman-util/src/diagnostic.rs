//! Non-fatal diagnostics.
//!
//! The lexer and parsers abort at the first error (see [`crate::error`]); the
//! indexer instead needs to surface a handful of non-fatal notices (for
//! example, two AFP packages providing the same session). `Handler` is a thin
//! wrapper over `tracing` so those notices are routed the same way as every
//! other log line in the CLI, rather than collected and printed separately.

#[derive(Debug, Default, Clone, Copy)]
pub struct Handler;

impl Handler {
    pub fn new() -> Self {
        Self
    }

    pub fn warn(&self, message: impl std::fmt::Display) {
        tracing::warn!("{message}");
    }

    pub fn info(&self, message: impl std::fmt::Display) {
        tracing::info!("{message}");
    }
}
