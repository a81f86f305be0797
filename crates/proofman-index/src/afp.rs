//! Walks an AFP checkout, resolves each package's session dependencies, and
//! emits a `proofman.toml` manifest per package.

use std::collections::HashSet;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use proofman_util::{ProofmanError, ProofmanResult};

use crate::builtins::fetch_builtin_sessions;
use crate::manifest::PackageManifest;
use crate::vcs::VcsDriver;

const CONFIG_FILE_NAME: &str = "proofman.toml";

static VERSION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^VERSION=(\d{4}(?:-\d+)*)$").expect("valid regex"));

/// What a single AFP package provides and requires, resolved from its
/// `ROOT` file but before cross-package resolution has happened.
#[derive(Debug, Clone, PartialEq)]
struct PackageSessions {
    provides: HashSet<String>,
    requires: HashSet<String>,
}

pub struct AfpIndexer {
    afp_version: String,
    afp_directory_path: PathBuf,
    index_repository_url: String,
}

impl AfpIndexer {
    /// Resolves the AFP version (from `version_override` if given, else
    /// `<afp>/etc/version`) and builds an indexer over `afp_directory_path`.
    pub fn new(
        afp_directory_path: impl Into<PathBuf>,
        index_repository_url: impl Into<String>,
        version_override: Option<String>,
    ) -> ProofmanResult<Self> {
        let afp_directory_path = afp_directory_path.into();

        let afp_version = match version_override {
            Some(v) => v,
            None => {
                let version_file = afp_directory_path.join("etc").join("version");
                let content = std::fs::read_to_string(&version_file).map_err(|e| {
                    ProofmanError::Index(format!("failed reading {}: {e}", version_file.display()))
                })?;

                let captures = VERSION_LINE
                    .captures(&content)
                    .ok_or_else(|| ProofmanError::Index(format!("failed parsing {}", version_file.display())))?;
                captures[1].to_string()
            }
        };
        tracing::info!(version = %afp_version, "AFP directory matches version");

        Ok(Self { afp_version, afp_directory_path, index_repository_url: index_repository_url.into() })
    }

    fn theories_path(&self) -> PathBuf {
        self.afp_directory_path.join("thys")
    }

    /// Parses `<afp>/thys/<pkg>/ROOT` and resolves its provided/required
    /// session sets, already subtracting builtin sessions and self-provides.
    fn resolve_package_sessions(&self, pkg: &str, builtin_sessions: &HashSet<String>) -> ProofmanResult<PackageSessions> {
        tracing::debug!(pkg = %pkg, "parsing theory package");

        let root_path = self.theories_path().join(pkg).join("ROOT");
        let content = std::fs::read_to_string(&root_path)
            .map_err(|e| ProofmanError::Index(format!("failed reading ROOT for {pkg}: {e}")))?;

        let parsed = proofman_par::parse_root_file(&content)
            .map_err(|e| ProofmanError::Index(format!("failed parsing ROOT for {pkg}: {e}")))?;

        let mut provides = HashSet::new();
        let mut requires = HashSet::new();

        for chapter in parsed.chapters.values() {
            for session in &chapter.sessions {
                provides.insert(session.name.clone());
                if let Some(deps) = &session.sessions {
                    requires.extend(deps.iter().cloned());
                }
            }
        }

        for builtin in builtin_sessions {
            requires.remove(builtin);
        }
        for provided in &provides {
            requires.remove(provided);
        }

        tracing::debug!(pkg = %pkg, provides = provides.len(), requires = requires.len(), "resolved package sessions");

        Ok(PackageSessions { provides, requires })
    }

    /// Reads `<afp>/thys/ROOTS`, one package name per non-empty line.
    fn read_package_list(&self) -> ProofmanResult<Vec<String>> {
        let roots_path = self.theories_path().join("ROOTS");
        let content = std::fs::read_to_string(&roots_path)
            .map_err(|e| ProofmanError::Index(format!("failed reading ROOTS: {e}")))?;

        Ok(content.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect())
    }

    /// Runs the full indexing pipeline, writing a `proofman.toml` into each
    /// package directory. Does not touch VCS state.
    pub fn index(&self) -> ProofmanResult<()> {
        let packages = self.read_package_list()?;
        let builtin_sessions: HashSet<String> = fetch_builtin_sessions(&self.afp_version)?.into_iter().collect();

        let mut sessions = FxHashMap::default();
        for pkg in &packages {
            let resolved = self.resolve_package_sessions(pkg, &builtin_sessions)?;
            sessions.insert(pkg.clone(), resolved);
        }

        // Session name -> providing package. Iterated in ROOTS file order so
        // a duplicate provider is resolved deterministically (last wins),
        // rather than depending on hash-map iteration order.
        let mut sessions_to_package: FxHashMap<String, String> = FxHashMap::default();
        for pkg in &packages {
            for session in &sessions[pkg].provides {
                if let Some(existing) = sessions_to_package.insert(session.clone(), pkg.clone()) {
                    tracing::warn!(
                        session = %session,
                        existing = %existing,
                        new = %pkg,
                        "session provided by more than one package"
                    );
                }
            }
        }

        let mut package_requires: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for pkg in &packages {
            let mut required_packages = Vec::new();
            for session in &sessions[pkg].requires {
                let Some(provider) = sessions_to_package.get(session) else {
                    return Err(ProofmanError::Index(format!("unknown session required by package: {session}")));
                };
                if !required_packages.contains(provider) {
                    required_packages.push(provider.clone());
                }
            }
            required_packages.sort();
            package_requires.insert(pkg.clone(), required_packages);
        }

        for pkg in &packages {
            tracing::debug!(pkg = %pkg, "creating proofman config file");

            let requires = package_requires[pkg]
                .iter()
                .map(|dep| format!("{dep} @ {}", self.afp_version))
                .collect::<Vec<_>>();

            let manifest = PackageManifest::for_afp_package(pkg, &self.afp_version, requires);
            let toml = manifest.to_toml_string()?;

            let manifest_path = self.theories_path().join(pkg).join(CONFIG_FILE_NAME);
            std::fs::write(&manifest_path, toml)
                .map_err(|e| ProofmanError::Index(format!("failed writing manifest for {pkg}: {e}")))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let perms = std::fs::Permissions::from_mode(0o666);
                std::fs::set_permissions(&manifest_path, perms)
                    .map_err(|e| ProofmanError::Index(format!("failed setting permissions for {pkg}: {e}")))?;
            }
        }

        tracing::info!(count = packages.len(), "indexing complete");
        Ok(())
    }

    /// Finalises the index by pushing it through a [`VcsDriver`]. Not called
    /// by [`Self::index`] - the CLI wires this in only when VCS push is
    /// explicitly requested.
    pub fn finalize(&self, driver: &dyn VcsDriver) -> ProofmanResult<()> {
        let theories_path = self.theories_path();
        driver.setup_remote(&self.index_repository_url, &self.afp_directory_path)?;
        driver.make_branch(&theories_path, &self.afp_version)?;
        driver.add_all(&self.afp_directory_path)?;
        driver.commit(&self.afp_directory_path, &format!("[proofman] auto index AFP (version {})", self.afp_version))?;
        driver.push(&self.afp_directory_path)?;
        tracing::info!("committed and pushed changes");
        Ok(())
    }

    pub fn afp_version(&self) -> &str {
        &self.afp_version
    }
}
