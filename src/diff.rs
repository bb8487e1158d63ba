use std::collections::BTreeMap;
use std::ops::Index;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::change::{Change, ChangeKind, Severity};

/// Outcome of comparing two documents. Counts are derived from `changes` on demand.
#[derive(Debug, Clone)]
pub struct Diff {
    old_version: String,
    new_version: String,
    changes: Vec<Change>,
    created_at: DateTime<Utc>,
}

impl Diff {
    pub fn new(
        old_version: impl Into<String>,
        new_version: impl Into<String>,
        changes: Vec<Change>,
    ) -> Self {
        Self {
            old_version: old_version.into(),
            new_version: new_version.into(),
            changes,
            created_at: Utc::now(),
        }
    }

    pub fn old_version(&self) -> &str {
        &self.old_version
    }

    pub fn new_version(&self) -> &str {
        &self.new_version
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn has_breaking(&self) -> bool {
        self.changes.iter().any(Change::is_breaking)
    }

    pub fn breaking(&self) -> Vec<&Change> {
        self.changes.iter().filter(|c| c.is_breaking()).collect()
    }

    pub fn non_breaking(&self) -> Vec<&Change> {
        self.changes.iter().filter(|c| !c.is_breaking()).collect()
    }

    pub fn breaking_count(&self) -> usize {
        self.changes.iter().filter(|c| c.is_breaking()).count()
    }

    pub fn non_breaking_count(&self) -> usize {
        self.len() - self.breaking_count()
    }

    pub fn count_by_kind(&self) -> BTreeMap<ChangeKind, usize> {
        let mut counts = BTreeMap::new();
        for change in &self.changes {
            *counts.entry(change.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Most severe first.
    pub fn count_by_severity(&self) -> Vec<(Severity, usize)> {
        let mut counts: BTreeMap<Severity, usize> = BTreeMap::new();
        for change in &self.changes {
            *counts.entry(change.severity()).or_insert(0) += 1;
        }
        counts.into_iter().rev().collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} → {} | {} changes | {} breaking | {} non-breaking",
            self.old_version,
            self.new_version,
            self.len(),
            self.breaking_count(),
            self.non_breaking_count()
        )
    }
}

impl Index<usize> for Diff {
    type Output = Change;

    fn index(&self, index: usize) -> &Change {
        &self.changes[index]
    }
}

impl Serialize for Diff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diff", 7)?;
        state.serialize_field("oldVersion", &self.old_version)?;
        state.serialize_field("newVersion", &self.new_version)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("hasBreakingChanges", &self.has_breaking())?;
        state.serialize_field("breakingChangesCount", &self.breaking_count())?;
        state.serialize_field("nonBreakingChangesCount", &self.non_breaking_count())?;
        state.serialize_field("changes", &self.changes)?;
        state.end()
    }
}
