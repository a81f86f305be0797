//! Resolves the set of session names built into a given Isabelle
//! distribution, caching the result under `~/.proofman/`.

use std::path::PathBuf;

use proofman_util::{ProofmanError, ProofmanResult};

const ISABELLE_ROOTS_URL: &str = "https://isabelle.in.tum.de/repos/isabelle/raw-file/{version}/ROOTS";
const ISABELLE_ROOT_URL: &str = "https://isabelle.in.tum.de/repos/isabelle/raw-file/{version}/{dir}/ROOT";

fn cache_base() -> ProofmanResult<PathBuf> {
    dirs::home_dir().map(|h| h.join(".proofman")).ok_or_else(|| {
        ProofmanError::Config("could not resolve the user's home directory".to_string())
    })
}

fn cache_file_name(version: &str) -> String {
    format!("{version}.builtin_sessions")
}

fn read_cache(version: &str) -> Option<Vec<String>> {
    let path = cache_base().ok()?.join(cache_file_name(version));
    let content = std::fs::read_to_string(path).ok()?;
    if content.trim().is_empty() {
        return None;
    }
    Some(content.lines().map(|l| l.trim().to_string()).collect())
}

fn write_cache(version: &str, sessions: &[String]) -> ProofmanResult<()> {
    let base = cache_base()?;
    std::fs::create_dir_all(&base)?;
    std::fs::write(base.join(cache_file_name(version)), sessions.join("\n"))?;
    Ok(())
}

/// Fetches and parses `body` as the list of non-empty, trimmed lines.
fn non_empty_lines(body: &str) -> Vec<String> {
    body.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect()
}

fn http_get(url: &str) -> ProofmanResult<String> {
    ureq::get(url)
        .call()
        .map_err(|e| ProofmanError::Network(format!("GET {url} failed: {e}")))?
        .into_string()
        .map_err(|e| ProofmanError::Network(format!("reading response body from {url} failed: {e}")))
}

/// Returns every session name built into the Isabelle distribution at
/// `version`, consulting (and populating) the local cache first.
pub fn fetch_builtin_sessions(version: &str) -> ProofmanResult<Vec<String>> {
    tracing::debug!(version, "checking local cache for builtin sessions");
    if let Some(cached) = read_cache(version) {
        tracing::debug!(version, "found cached builtin sessions");
        return Ok(cached);
    }

    tracing::debug!(version, "fetching ROOTS file from the Isabelle repository");
    let roots_body = http_get(&ISABELLE_ROOTS_URL.replace("{version}", version))?;
    let root_dirs = non_empty_lines(&roots_body);
    tracing::debug!(count = root_dirs.len(), "parsed ROOTS file");

    let mut builtin_sessions = Vec::new();
    for dir in &root_dirs {
        tracing::debug!(dir = %dir, "fetching ROOT file");
        let url = ISABELLE_ROOT_URL.replace("{version}", version).replace("{dir}", dir);
        let content = http_get(&url)?;

        let parsed = proofman_par::parse_root_file(&content)
            .map_err(|e| ProofmanError::Network(format!("parsing ROOT file for {dir} failed: {e}")))?;

        for chapter in parsed.chapters.values() {
            for session in &chapter.sessions {
                builtin_sessions.push(session.name.clone());
            }
        }
    }

    tracing::debug!(count = builtin_sessions.len(), "resolved builtin sessions, saving to cache");
    write_cache(version, &builtin_sessions)?;

    Ok(builtin_sessions)
}
