//! The fixed, ordered list of `.env` locations

use std::path::{Path, PathBuf};

use serde::Serialize;

/// File name looked for in every candidate directory
pub const ENV_FILE_NAME: &str = ".env";

/// Which of the four search locations a candidate is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// The process's current working directory
    WorkingDirectory,
    /// The directory anchoring this crate
    ModuleDirectory,
    /// Parent of the module directory
    ModuleParent,
    /// Grandparent of the module directory
    ModuleGrandparent,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::WorkingDirectory => "working directory",
            CandidateKind::ModuleDirectory => "module directory",
            CandidateKind::ModuleParent => "module parent",
            CandidateKind::ModuleGrandparent => "module grandparent",
        }
    }
}

/// One `.env` location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub path: PathBuf,
}

/// Ordered `.env` locations: working directory, module directory, its parent
/// and its grandparent
///
/// Earlier entries take precedence. The module directory defaults to this
/// crate's manifest directory, so in a checkout the parent is `crates/` and
/// the grandparent is the workspace root.
///
/// # Example
///
/// ```
/// use supabase_env_core::resolver::CandidateSources;
///
/// let sources = CandidateSources::new("/srv/run", "/srv/backend/app");
/// let paths: Vec<_> = sources.paths().collect();
/// assert_eq!(paths[1].to_str(), Some("/srv/backend/app/.env"));
/// assert_eq!(paths[3].to_str(), Some("/srv/.env"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSources {
    candidates: Vec<Candidate>,
}

impl CandidateSources {
    /// Build the list from a working directory and a module directory
    ///
    /// At the filesystem root, parent and grandparent collapse onto the root
    /// itself, so the list always has four entries.
    pub fn new(cwd: impl AsRef<Path>, module_dir: impl AsRef<Path>) -> Self {
        let module_dir = module_dir.as_ref();
        let parent = module_dir.parent().unwrap_or(module_dir);
        let grandparent = parent.parent().unwrap_or(parent);

        let candidates = vec![
            Candidate {
                kind: CandidateKind::WorkingDirectory,
                path: cwd.as_ref().join(ENV_FILE_NAME),
            },
            Candidate {
                kind: CandidateKind::ModuleDirectory,
                path: module_dir.join(ENV_FILE_NAME),
            },
            Candidate {
                kind: CandidateKind::ModuleParent,
                path: parent.join(ENV_FILE_NAME),
            },
            Candidate {
                kind: CandidateKind::ModuleGrandparent,
                path: grandparent.join(ENV_FILE_NAME),
            },
        ];

        Self { candidates }
    }

    /// Candidates for the running process
    ///
    /// Falls back to `.` when the working directory cannot be determined
    /// (deleted directory, missing permissions).
    pub fn default_for_process() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(cwd, Self::default_module_dir())
    }

    /// Directory the module-relative candidates hang off by default
    pub fn default_module_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Candidate file paths, in search order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.candidates.iter().map(|c| c.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Default for CandidateSources {
    fn default() -> Self {
        Self::default_for_process()
    }
}
