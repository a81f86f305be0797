//! The per-package `proofman.toml` shape emitted by the indexer.

use serde::{Deserialize, Serialize};

use proofman_util::{ProofmanError, ProofmanResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub requires: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// A single package's `proofman.toml`: a `[project]` table plus an empty
/// `[package]` table left for the package author to fill in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub project: Project,
    #[serde(default)]
    pub package: Package,
}

impl PackageManifest {
    pub fn for_afp_package(name: &str, version: &str, requires: Vec<String>) -> Self {
        Self {
            project: Project {
                name: name.to_string(),
                description: format!("{name} from the Archive of Formal Proofs"),
                version: version.to_string(),
                requires,
            },
            package: Package::default(),
        }
    }

    pub fn to_toml_string(&self) -> ProofmanResult<String> {
        toml::to_string_pretty(self).map_err(|e| ProofmanError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_nested_tables() {
        let manifest = PackageManifest::for_afp_package("Foo-Bar", "2024", vec!["Baz @ 2024".to_string()]);
        let toml = manifest.to_toml_string().unwrap();
        assert!(toml.contains("[project]"));
        assert!(toml.contains("name = \"Foo-Bar\""));
        assert!(toml.contains("[package]"));
    }

    #[test]
    fn round_trips_through_toml() {
        let manifest = PackageManifest::for_afp_package("Foo", "2024-1", vec![]);
        let toml = manifest.to_toml_string().unwrap();
        let parsed: PackageManifest = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, manifest);
    }
}
