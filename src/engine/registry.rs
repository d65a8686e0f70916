//! Name registry
//!
//! The [`NameRegistry`] owns the original→pseudonym mapping and the set of
//! pseudonyms already handed out for one run. It guarantees that a given
//! original name always resolves to the same pseudonym for the lifetime of
//! the registry, and that two distinct originals never share a pseudonym
//! within the generation attempt budget.

use crate::engine::generator::{FirstNameSource, PseudonymSource};
use std::collections::{HashMap, HashSet};

/// Maximum number of candidate draws before falling back to a suffixed name
pub const GENERATION_ATTEMPT_LIMIT: usize = 20;

/// Registry of consistent original→pseudonym assignments
///
/// One registry instance is shared across all files in a run so that the
/// same original name maps to the same pseudonym everywhere it appears.
pub struct NameRegistry {
    /// Trimmed original name → assigned pseudonym
    mappings: HashMap<String, String>,
    /// Pseudonyms already handed out
    assigned: HashSet<String>,
    source: Box<dyn PseudonymSource>,
    warn_exhausted: bool,
}

impl NameRegistry {
    /// Create a registry drawing from the default first-name source,
    /// keyed by the given seed
    pub fn new(seed: &str) -> Self {
        Self::with_source(Box::new(FirstNameSource::new(seed)))
    }

    /// Create a registry drawing from a custom pseudonym source
    pub fn with_source(source: Box<dyn PseudonymSource>) -> Self {
        Self {
            mappings: HashMap::new(),
            assigned: HashSet::new(),
            source,
            warn_exhausted: true,
        }
    }

    /// Enable or disable the diagnostic emitted when the attempt budget
    /// is exhausted
    pub fn with_warn_exhausted(mut self, enabled: bool) -> Self {
        self.warn_exhausted = enabled;
        self
    }

    /// Resolve an original name to its consistent pseudonym
    ///
    /// Empty or whitespace-only input is returned unchanged without touching
    /// the registry. Otherwise the input is trimmed, an existing mapping is
    /// returned as-is, and an unseen name gets a freshly generated pseudonym
    /// that is not already assigned to another original.
    ///
    /// If [`GENERATION_ATTEMPT_LIMIT`] consecutive draws all collide with
    /// already-assigned pseudonyms, one more draw is taken and the current
    /// assigned-set size is appended as a numeric suffix. The suffixed
    /// fallback is not re-checked against the assigned set; see the
    /// boundary-case test below.
    pub fn resolve(&mut self, original: &str) -> String {
        let trimmed = original.trim();
        if trimmed.is_empty() {
            return original.to_string();
        }

        if let Some(existing) = self.mappings.get(trimmed) {
            return existing.clone();
        }

        for _ in 0..GENERATION_ATTEMPT_LIMIT {
            let candidate = self.source.next_name();
            if !self.assigned.contains(&candidate) {
                self.assigned.insert(candidate.clone());
                self.mappings.insert(trimmed.to_string(), candidate.clone());
                return candidate;
            }
        }

        // Fallback: suffix the next draw with the assigned-set size
        let base = self.source.next_name();
        let candidate = format!("{}{}", base, self.assigned.len());
        self.assigned.insert(candidate.clone());
        self.mappings.insert(trimmed.to_string(), candidate.clone());

        if self.warn_exhausted {
            tracing::warn!(
                original = %trimmed,
                attempts = GENERATION_ATTEMPT_LIMIT,
                pseudonym = %candidate,
                "Generation attempts exhausted, assigned suffixed fallback name"
            );
        }

        candidate
    }

    /// Number of original names mapped so far
    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    /// Number of pseudonyms handed out so far
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Snapshot of the current mapping table, sorted by original name
    ///
    /// Used for summaries and determinism checks in tests.
    pub fn mapping_table(&self) -> Vec<(String, String)> {
        let mut table: Vec<(String, String)> = self
            .mappings
            .iter()
            .map(|(original, pseudonym)| (original.clone(), pseudonym.clone()))
            .collect();
        table.sort();
        table
    }
}
