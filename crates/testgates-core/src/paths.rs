use std::path::{Path, PathBuf};
use tracing::debug;

// ---------------------------------------------------------------------------
// Epics document candidates
// ---------------------------------------------------------------------------

pub const EPICS_MD: &str = "epics.md";
pub const DOCS_EPICS: &str = "docs/epics.md";
pub const PLANNING_EPICS: &str = "docs/planning-artifacts/epics.md";
pub const SPRINT_EPICS: &str = "docs/sprint-artifacts/epics.md";

/// Candidate locations for the epics document, highest priority first.
pub const EPICS_CANDIDATES: [&str; 4] = [DOCS_EPICS, PLANNING_EPICS, SPRINT_EPICS, EPICS_MD];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn epics_candidates(root: &Path) -> Vec<PathBuf> {
    EPICS_CANDIDATES.iter().map(|rel| root.join(rel)).collect()
}

/// Return the first candidate epics document that exists under `root`.
///
/// Probes stop at the first hit. Directories are skipped. The file content is
/// never read here.
pub fn find_epics_file(root: &Path) -> Option<PathBuf> {
    for path in epics_candidates(root) {
        let found = path.is_file();
        debug!(path = %path.display(), found, "probing epics candidate");
        if found {
            return Some(path);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
