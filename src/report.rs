//! Human and machine readable renderings of a [`Diff`].

use std::fmt;

use crate::change::Change;
use crate::diff::Diff;

const RULE: &str = "═══════════════════════════════════════════════════════════════════";

struct TextReport<'a>(&'a Diff);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diff = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "                     API COMPATIBILITY REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Old version: {}", diff.old_version())?;
        writeln!(f, "New version: {}", diff.new_version())?;
        writeln!(f, "Compared at: {}", diff.created_at().to_rfc3339())?;
        writeln!(f)?;
        writeln!(f, "Total changes:       {}", diff.len())?;
        writeln!(f, "Breaking changes:    {}", diff.breaking_count())?;
        writeln!(f, "Non-breaking changes: {}", diff.non_breaking_count())?;
        for (severity, count) in diff.count_by_severity() {
            writeln!(f, "  {severity}: {count}")?;
        }
        writeln!(f)?;

        if diff.is_empty() {
            return writeln!(f, "No changes detected.");
        }
        if diff.has_breaking() {
            writeln!(f, "Result: BREAKING CHANGES DETECTED")?;
        } else {
            writeln!(f, "Result: no breaking changes")?;
        }

        section(f, "BREAKING CHANGES", &diff.breaking())?;
        section(f, "OTHER CHANGES", &diff.non_breaking())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str, changes: &[&Change]) -> fmt::Result {
    if changes.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{title} ({}):", changes.len())?;
    for change in changes {
        writeln!(f, "  [{}] {}", change.severity(), change.location())?;
        writeln!(f, "    {}", change.kind().description())?;
        writeln!(f, "    {}", change.description())?;
        if change.old_value().is_some() || change.new_value().is_some() {
            writeln!(
                f,
                "    Old: {} → New: {}",
                change.old_value().unwrap_or("-"),
                change.new_value().unwrap_or("-")
            )?;
        }
    }
    Ok(())
}

/// Full multi-line report, breaking changes first.
pub fn render_text(diff: &Diff) -> String {
    TextReport(diff).to_string()
}

/// One line: versions and change counts.
pub fn render_compact(diff: &Diff) -> String {
    diff.summary()
}

pub fn render_json(diff: &Diff) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(diff)
}

#[cfg(test)]
mod tests;
