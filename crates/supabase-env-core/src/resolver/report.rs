//! What a resolution run looked at

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::candidates::CandidateKind;
use crate::types::RequiredKey;

/// Where a resolved key came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeySource {
    /// The ambient process environment
    Environment,
    /// A candidate `.env` file
    File { path: PathBuf },
}

/// Result of probing one candidate location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Nothing exists at the path
    Missing,
    /// The file was read; `contributed` lists the keys it filled
    Loaded { contributed: Vec<RequiredKey> },
    /// The file exists but could not be used; it contributed nothing
    Failed { reason: String },
}

/// One candidate that was actually probed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Probe {
    pub kind: CandidateKind,
    pub path: PathBuf,
    pub outcome: ProbeOutcome,
}

/// Record of a resolution: the candidates probed, in order, and the source
/// of each key that was found
///
/// Candidates after the point where every key was satisfied are never
/// probed and do not appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    probes: Vec<Probe>,
    sources: Vec<(RequiredKey, KeySource)>,
}

impl ResolutionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_probe(&mut self, kind: CandidateKind, path: &Path, outcome: ProbeOutcome) {
        self.probes.push(Probe {
            kind,
            path: path.to_path_buf(),
            outcome,
        });
    }

    pub(crate) fn record_source(&mut self, key: RequiredKey, source: KeySource) {
        if self.source_of(key).is_none() {
            self.sources.push((key, source));
        }
    }

    /// Candidates probed, in the order they were tried
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Which source supplied `key`, if it was found
    pub fn source_of(&self, key: RequiredKey) -> Option<&KeySource> {
        self.sources
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, source)| source)
    }

    /// Pretty JSON, for startup diagnostics
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
