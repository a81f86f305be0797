//! VCS push contract.
//!
//! Pushing the finished index to an upstream repository is an out-of-scope
//! external collaborator - this trait only captures the shape of that
//! contract so the indexer's finalisation step is structured the way a real
//! implementation would call it. [`NullVcsDriver`] is the only
//! implementation shipped here.

use std::path::Path;

use proofman_util::ProofmanResult;

pub trait VcsDriver {
    fn setup_remote(&self, url: &str, dir: &Path) -> ProofmanResult<()>;
    fn make_branch(&self, dir: &Path, name: &str) -> ProofmanResult<()>;
    fn add_all(&self, dir: &Path) -> ProofmanResult<()>;
    fn commit(&self, dir: &Path, message: &str) -> ProofmanResult<()>;
    fn push(&self, dir: &Path) -> ProofmanResult<()>;
}

/// A no-op driver satisfying [`VcsDriver`] without touching a VCS at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVcsDriver;

impl VcsDriver for NullVcsDriver {
    fn setup_remote(&self, _url: &str, _dir: &Path) -> ProofmanResult<()> {
        Ok(())
    }

    fn make_branch(&self, _dir: &Path, _name: &str) -> ProofmanResult<()> {
        Ok(())
    }

    fn add_all(&self, _dir: &Path) -> ProofmanResult<()> {
        Ok(())
    }

    fn commit(&self, _dir: &Path, _message: &str) -> ProofmanResult<()> {
        Ok(())
    }

    fn push(&self, _dir: &Path) -> ProofmanResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_driver_always_succeeds() {
        let driver = NullVcsDriver;
        let dir = Path::new("/tmp/does-not-matter");
        assert!(driver.setup_remote("https://example.com/repo.git", dir).is_ok());
        assert!(driver.make_branch(dir, "2024").is_ok());
        assert!(driver.add_all(dir).is_ok());
        assert!(driver.commit(dir, "message").is_ok());
        assert!(driver.push(dir).is_ok());
    }
}
