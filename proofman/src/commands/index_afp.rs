//! `index-afp` command implementation.

use proofman_index::{AfpIndexer, NullVcsDriver};

use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the index-afp command.
#[derive(Debug, Clone)]
pub struct IndexAfpArgs {
    pub afp_path: String,
    pub index_url: String,
    pub version_override: Option<String>,
    pub verbose: bool,
}

/// Index-afp command handler.
pub struct IndexAfpCommand {
    args: IndexAfpArgs,
}

impl IndexAfpCommand {
    pub fn new(args: IndexAfpArgs) -> Self {
        Self { args }
    }

    pub fn run(&self) -> Result<()> {
        let indexer =
            AfpIndexer::new(self.args.afp_path.as_str(), self.args.index_url.clone(), self.args.version_override.clone())?;

        indexer.index()?;

        if self.args.verbose {
            tracing::info!(version = indexer.afp_version(), "wrote a proofman.toml for every AFP package");
        }

        // VCS push is opt-in and has no production driver in this crate -
        // the default path runs the no-op finaliser so the pipeline shape
        // mirrors what a real push would do.
        indexer.finalize(&NullVcsDriver)?;

        Ok(())
    }
}

impl Command for IndexAfpCommand {
    type Args = IndexAfpArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "index-afp"
    }
}

pub fn run_index_afp(args: IndexAfpArgs) -> Result<()> {
    IndexAfpCommand::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_name_is_index_afp() {
        assert_eq!(IndexAfpCommand::name(), "index-afp");
    }

    #[test]
    fn missing_afp_directory_surfaces_as_an_error() {
        let args = IndexAfpArgs {
            afp_path: "/nonexistent/afp".to_string(),
            index_url: String::new(),
            version_override: None,
            verbose: false,
        };
        assert!(run_index_afp(args).is_err());
    }
}
