use openapiv3::OpenAPI;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::change::ChangeError;
use crate::diff::Diff;
use crate::rules::{self, Rule};

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("rule '{rule}' failed: {source}")]
    Rule {
        rule: &'static str,
        source: ChangeError,
    },
}

/// Runs a catalogue of rules against a pair of documents.
pub struct Comparator {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator {
    pub fn new() -> Self {
        Self::with_rules(rules::all())
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates every rule once, in registration order. A failing rule aborts the
    /// whole comparison; no partial result is returned.
    pub fn compare(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Diff, CompareError> {
        let old_version = version_label(old);
        let new_version = version_label(new);
        info!(
            old = old_version,
            new = new_version,
            rules = self.rules.len(),
            "comparing documents"
        );

        let mut changes = Vec::new();
        for rule in &self.rules {
            let found = rule.evaluate(old, new).map_err(|source| {
                error!(rule = rule.name(), %source, "rule failed");
                CompareError::Rule {
                    rule: rule.name(),
                    source,
                }
            })?;
            debug!(rule = rule.name(), changes = found.len(), "rule evaluated");
            changes.extend(found);
        }

        let diff = Diff::new(old_version, new_version, changes);
        info!(summary = %diff.summary(), "comparison finished");
        Ok(diff)
    }
}

fn version_label(spec: &OpenAPI) -> &str {
    match spec.info.version.trim() {
        "" => "unknown",
        version => version,
    }
}
