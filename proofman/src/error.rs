//! CLI-level error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Indexing(#[from] proofman_util::ProofmanError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_message() {
        let err = CliError::Config("missing afp_path".to_string());
        assert_eq!(err.to_string(), "configuration error: missing afp_path");
    }

    #[test]
    fn indexing_error_wraps_proofman_error() {
        let inner = proofman_util::ProofmanError::Index("unknown session".to_string());
        let err: CliError = inner.into();
        assert!(matches!(err, CliError::Indexing(_)));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
