use crate::error::{Result, TestgatesError};
use crate::gate::{parse_test_gates, GateRecord};
use crate::paths::find_epics_file;
use crate::select::next_gate;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

pub const NOT_FOUND_MESSAGE: &str = "epics.md not found";

// ---------------------------------------------------------------------------
// DiscoveryResult
// ---------------------------------------------------------------------------

/// Output envelope for one discovery run.
///
/// Serialized untagged, so each variant's JSON is exactly its field set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiscoveryResult {
    Next {
        next_gate: Option<GateRecord>,
        all_gates: Vec<GateRecord>,
    },
    Error {
        error: String,
        test_gates: Vec<GateRecord>,
    },
    Gates {
        test_gates: Vec<GateRecord>,
    },
}

impl DiscoveryResult {
    pub fn not_found() -> Self {
        DiscoveryResult::Error {
            error: NOT_FOUND_MESSAGE.to_string(),
            test_gates: Vec::new(),
        }
    }

    /// Build the envelope from already-extracted gates. An empty story key
    /// counts as no story.
    pub fn from_gates(gates: Vec<GateRecord>, story: Option<&str>) -> Self {
        match story.filter(|s| !s.is_empty()) {
            Some(story) => DiscoveryResult::Next {
                next_gate: next_gate(&gates, Some(story)).cloned(),
                all_gates: gates,
            },
            None => DiscoveryResult::Gates { test_gates: gates },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DiscoveryResult::Error { .. })
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Locate the epics document under `root`, extract its gates, and select the
/// next one when a story key is given.
pub fn discover(root: &Path, story: Option<&str>) -> Result<DiscoveryResult> {
    let path = find_epics_file(root).ok_or_else(|| TestgatesError::EpicsNotFound {
        root: root.to_path_buf(),
    })?;
    discover_file(&path, story)
}

/// Same as [`discover`] for an epics document that has already been located.
pub fn discover_file(path: &Path, story: Option<&str>) -> Result<DiscoveryResult> {
    debug!(path = %path.display(), "reading epics document");
    let content = std::fs::read_to_string(path)?;
    Ok(DiscoveryResult::from_gates(parse_test_gates(&content), story))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
