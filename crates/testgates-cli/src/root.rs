use std::path::{Path, PathBuf};
use testgates_core::paths::find_epics_file;
use testgates_core::{discover, discover_file, DiscoveryResult, Result, TestgatesError};

/// Where discovery should look, as decided by [`resolve_root`].
#[derive(Debug, PartialEq)]
pub enum ProjectRoot {
    /// Passed on the command line or via env; not probed yet.
    Explicit(PathBuf),
    /// Found by walking upward. `epics` holds the document located during the
    /// walk, or `None` when no ancestor had one.
    Detected { dir: PathBuf, epics: Option<PathBuf> },
}

impl ProjectRoot {
    pub fn dir(&self) -> &Path {
        match self {
            ProjectRoot::Explicit(dir) => dir,
            ProjectRoot::Detected { dir, .. } => dir,
        }
    }

    /// Run discovery without probing candidates the walk already checked.
    pub fn discover(&self, story: Option<&str>) -> Result<DiscoveryResult> {
        match self {
            ProjectRoot::Explicit(dir) => discover(dir, story),
            ProjectRoot::Detected {
                epics: Some(path), ..
            } => discover_file(path, story),
            ProjectRoot::Detected { dir, epics: None } => {
                Err(TestgatesError::EpicsNotFound { root: dir.clone() })
            }
        }
    }
}

/// Resolve the project root to search.
///
/// Priority:
/// 1. Positional argument / `TESTGATES_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` to the first directory with an epics document
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> ProjectRoot {
    if let Some(p) = explicit {
        return ProjectRoot::Explicit(p.to_path_buf());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_from(&cwd)
}

fn resolve_from(start: &Path) -> ProjectRoot {
    for dir in start.ancestors() {
        if let Some(epics) = find_epics_file(dir) {
            return ProjectRoot::Detected {
                dir: dir.to_path_buf(),
                epics: Some(epics),
            };
        }
    }
    let dir = start
        .ancestors()
        .find(|d| d.join(".git").is_dir())
        .unwrap_or(start);
    ProjectRoot::Detected {
        dir: dir.to_path_buf(),
        epics: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, ProjectRoot::Explicit(dir.path().to_path_buf()));
        assert_eq!(result.dir(), dir.path());
    }

    #[test]
    fn finds_epics_above_start() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/epics.md"), "# Epics\n").unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(
            resolve_from(&subdir),
            ProjectRoot::Detected {
                dir: dir.path().to_path_buf(),
                epics: Some(dir.path().join("docs/epics.md")),
            }
        );
    }

    #[test]
    fn epics_preferred_over_nearer_git() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("epics.md"), "# Epics\n").unwrap();
        let nested = dir.path().join("vendor/lib");
        std::fs::create_dir_all(nested.join(".git")).unwrap();

        assert_eq!(resolve_from(&nested).dir(), dir.path());
    }

    #[test]
    fn falls_back_to_git_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let subdir = dir.path().join("a/b");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(
            resolve_from(&subdir),
            ProjectRoot::Detected {
                dir: dir.path().to_path_buf(),
                epics: None,
            }
        );
    }

    #[test]
    fn detected_with_epics_reads_located_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("epics.md");
        std::fs::write(&path, "### Test Gate: Lint\n- **Command:** `make lint`\n").unwrap();
        // Point `dir` elsewhere: discovery must use the located file and not
        // probe the directory again.
        let root = ProjectRoot::Detected {
            dir: dir.path().join("missing"),
            epics: Some(path),
        };

        match root.discover(None).unwrap() {
            DiscoveryResult::Gates { test_gates } => assert_eq!(test_gates[0].command, "make lint"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn detected_without_epics_is_not_found_without_probing() {
        let dir = TempDir::new().unwrap();
        // A document exists, but the walk said none did; it must not be
        // looked up again.
        std::fs::write(dir.path().join("epics.md"), "### Test Gate: Lint\n").unwrap();
        let root = ProjectRoot::Detected {
            dir: dir.path().to_path_buf(),
            epics: None,
        };

        let err = root.discover(None).unwrap_err();
        assert!(matches!(err, TestgatesError::EpicsNotFound { .. }));
    }
}
