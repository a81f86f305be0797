//! Archive of Formal Proofs indexer: resolves per-package session
//! dependencies and emits a `proofman.toml` manifest for each package.

mod afp;
mod builtins;
mod manifest;
mod vcs;

pub use afp::AfpIndexer;
pub use builtins::fetch_builtin_sessions;
pub use manifest::{Package, PackageManifest, Project};
pub use vcs::{NullVcsDriver, VcsDriver};
