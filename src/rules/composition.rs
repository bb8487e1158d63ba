use openapiv3::{OpenAPI, Schema};
use serde_json::Value;

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Location, Severity};
use crate::document::{enum_values, identity, literal, one_of, shared_properties, shared_schemas};

/// Schema-level and property-level enums present on both sides.
fn enum_pairs(old: &OpenAPI, new: &OpenAPI) -> Vec<(Location, Vec<Value>, Vec<Value>)> {
    let schemas =
        shared_schemas(old, new).map(|pair| (Location::schema(pair.name), pair.old, pair.new));
    let properties =
        shared_properties(old, new).map(|pair| (pair.location(), pair.old, pair.new));
    schemas
        .chain(properties)
        .filter_map(|(location, old_schema, new_schema): (Location, &Schema, &Schema)| {
            let old_values = enum_values(old_schema);
            let new_values = enum_values(new_schema);
            (!old_values.is_empty() && !new_values.is_empty())
                .then_some((location, old_values, new_values))
        })
        .collect()
}

pub struct EnumValueRemoved;

impl Rule for EnumValueRemoved {
    fn name(&self) -> &'static str {
        "enum-value-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (location, old_values, new_values) in enum_pairs(old, new) {
            for value in old_values.iter().filter(|v| !new_values.contains(v)) {
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::EnumValueRemoved)
                        .severity(Severity::Major)
                        .location(location.clone())
                        .description(format!("Enum value '{}' was removed", literal(value)))
                        .old_value(literal(value))
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct EnumValueAdded;

impl Rule for EnumValueAdded {
    fn name(&self) -> &'static str {
        "enum-value-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (location, old_values, new_values) in enum_pairs(old, new) {
            for value in new_values.iter().filter(|v| !old_values.contains(v)) {
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::EnumValueAdded)
                        .severity(Severity::Info)
                        .location(location.clone())
                        .description(format!("Enum value '{}' was added", literal(value)))
                        .new_value(literal(value))
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct OneOfOptionRemoved;

impl Rule for OneOfOptionRemoved {
    fn name(&self) -> &'static str {
        "one-of-option-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_schemas(old, new) {
            let old_options = one_of(pair.old);
            if old_options.is_empty() {
                continue;
            }
            let new_options = one_of(pair.new);
            let builder = || {
                Change::builder()
                    .kind(ChangeKind::OneOfOptionRemoved)
                    .location(Location::schema(pair.name))
                    .breaking(true)
            };

            if new_options.is_empty() {
                changes.push(
                    builder()
                        .severity(Severity::Critical)
                        .description(format!(
                            "All oneOf options of schema '{}' were removed",
                            pair.name
                        ))
                        .old_value(old_options.len().to_string())
                        .new_value("0")
                        .build()?,
                );
                continue;
            }

            let new_ids: Vec<String> = new_options.iter().map(identity).collect();
            let mut removed = Vec::new();
            for option in old_options.iter().map(identity) {
                if !new_ids.contains(&option) && !removed.contains(&option) {
                    removed.push(option);
                }
            }
            for option in &removed {
                changes.push(
                    builder()
                        .severity(Severity::Major)
                        .description(format!("oneOf option '{option}' was removed"))
                        .old_value(option.as_str())
                        .build()?,
                );
            }
            if removed.is_empty() && new_options.len() < old_options.len() {
                changes.push(
                    builder()
                        .severity(Severity::Major)
                        .description(format!(
                            "Number of oneOf options of schema '{}' dropped from {} to {}",
                            pair.name,
                            old_options.len(),
                            new_options.len()
                        ))
                        .old_value(old_options.len().to_string())
                        .new_value(new_options.len().to_string())
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct DiscriminatorChanged;

impl Rule for DiscriminatorChanged {
    fn name(&self) -> &'static str {
        "discriminator-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_schemas(old, new) {
            let old_property = pair
                .old
                .schema_data
                .discriminator
                .as_ref()
                .map(|d| d.property_name.as_str());
            let new_property = pair
                .new
                .schema_data
                .discriminator
                .as_ref()
                .map(|d| d.property_name.as_str());
            let builder = Change::builder()
                .kind(ChangeKind::DiscriminatorChanged)
                .location(Location::schema(pair.name))
                .breaking(true);
            let change = match (old_property, new_property) {
                (None, Some(to)) => builder
                    .severity(Severity::Major)
                    .description(format!("Discriminator '{to}' was added"))
                    .new_value(to),
                (Some(from), Some(to)) if from != to => builder
                    .severity(Severity::Critical)
                    .description(format!(
                        "Discriminator property changed from '{from}' to '{to}'"
                    ))
                    .old_value(from)
                    .new_value(to),
                (Some(from), None) => builder
                    .severity(Severity::Major)
                    .description(format!("Discriminator '{from}' was removed"))
                    .old_value(from),
                _ => continue,
            };
            changes.push(change.build()?);
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests;
