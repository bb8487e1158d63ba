//! Constraint tightening on schema properties. Every finding here is MAJOR and breaking.

use openapiv3::{AdditionalProperties, OpenAPI};

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Location, Severity};
use crate::document::{
    PropertyPair, additional_properties, identity, is_array, is_string, max_items, max_length,
    maximum, min_items, min_length, minimum, number, pattern, shared_properties, shared_schemas,
    unique_items,
};

fn tightened(
    pair: &PropertyPair<'_>,
    kind: ChangeKind,
    description: String,
    old_value: Option<String>,
    new_value: String,
) -> Result<Change, ChangeError> {
    let builder = Change::builder()
        .kind(kind)
        .severity(Severity::Major)
        .location(pair.location())
        .description(description)
        .new_value(new_value)
        .breaking(true);
    match old_value {
        Some(old_value) => builder.old_value(old_value).build(),
        None => builder.build(),
    }
}

/// Lower bound whose absence means zero; fires when the new bound is above the old one.
fn lower_bound_raised(old: Option<usize>, new: Option<usize>) -> Option<(usize, usize)> {
    let new = new?;
    let old = old.unwrap_or(0);
    (new > old).then_some((old, new))
}

/// Both bounds must be concrete.
fn upper_bound_lowered<T: PartialOrd + Copy>(old: Option<T>, new: Option<T>) -> Option<(T, T)> {
    let (old, new) = (old?, new?);
    (new < old).then_some((old, new))
}

pub struct MinLengthIncreased;

impl Rule for MinLengthIncreased {
    fn name(&self) -> &'static str {
        "min-length-increased"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter(|pair| is_string(pair.old) && is_string(pair.new))
            .filter_map(|pair| {
                let (from, to) = lower_bound_raised(min_length(pair.old), min_length(pair.new))?;
                Some(tightened(
                    &pair,
                    ChangeKind::PropertyMinLengthIncreased,
                    format!(
                        "minLength of property '{}' increased from {from} to {to}",
                        pair.property
                    ),
                    Some(from.to_string()),
                    to.to_string(),
                ))
            })
            .collect()
    }
}

pub struct MaxLengthDecreased;

impl Rule for MaxLengthDecreased {
    fn name(&self) -> &'static str {
        "max-length-decreased"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter_map(|pair| {
                let (from, to) = upper_bound_lowered(max_length(pair.old), max_length(pair.new))?;
                Some(tightened(
                    &pair,
                    ChangeKind::PropertyMaxLengthDecreased,
                    format!(
                        "maxLength of property '{}' decreased from {from} to {to}",
                        pair.property
                    ),
                    Some(from.to_string()),
                    to.to_string(),
                ))
            })
            .collect()
    }
}

pub struct PatternAdded;

impl Rule for PatternAdded {
    fn name(&self) -> &'static str {
        "pattern-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter(|pair| is_string(pair.old) && pattern(pair.old).is_none())
            .filter_map(|pair| {
                let added = pattern(pair.new)?;
                Some(tightened(
                    &pair,
                    ChangeKind::PropertyPatternAdded,
                    format!("Property '{}' must now match a pattern", pair.property),
                    None,
                    added.to_string(),
                ))
            })
            .collect()
    }
}

pub struct PatternChanged;

impl Rule for PatternChanged {
    fn name(&self) -> &'static str {
        "pattern-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter_map(|pair| {
                let (from, to) = (pattern(pair.old)?, pattern(pair.new)?);
                (from != to).then(|| {
                    tightened(
                        &pair,
                        ChangeKind::PropertyPatternChanged,
                        format!("Pattern of property '{}' changed", pair.property),
                        Some(from.to_string()),
                        to.to_string(),
                    )
                })
            })
            .collect()
    }
}

pub struct MinimumIncreased;

impl Rule for MinimumIncreased {
    fn name(&self) -> &'static str {
        "minimum-increased"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter_map(|pair| {
                let (from, to) = (minimum(pair.old)?, minimum(pair.new)?);
                (to > from).then(|| {
                    tightened(
                        &pair,
                        ChangeKind::PropertyMinimumIncreased,
                        format!(
                            "minimum of property '{}' increased from {} to {}",
                            pair.property,
                            number(from),
                            number(to)
                        ),
                        Some(number(from)),
                        number(to),
                    )
                })
            })
            .collect()
    }
}

pub struct MaximumDecreased;

impl Rule for MaximumDecreased {
    fn name(&self) -> &'static str {
        "maximum-decreased"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter_map(|pair| {
                let (from, to) = upper_bound_lowered(maximum(pair.old), maximum(pair.new))?;
                Some(tightened(
                    &pair,
                    ChangeKind::PropertyMaximumDecreased,
                    format!(
                        "maximum of property '{}' decreased from {} to {}",
                        pair.property,
                        number(from),
                        number(to)
                    ),
                    Some(number(from)),
                    number(to),
                ))
            })
            .collect()
    }
}

pub struct MinItemsIncreased;

impl Rule for MinItemsIncreased {
    fn name(&self) -> &'static str {
        "min-items-increased"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter(|pair| is_array(pair.old) && is_array(pair.new))
            .filter_map(|pair| {
                let (from, to) = lower_bound_raised(min_items(pair.old), min_items(pair.new))?;
                Some(tightened(
                    &pair,
                    ChangeKind::ArrayMinItemsIncreased,
                    format!(
                        "minItems of property '{}' increased from {from} to {to}",
                        pair.property
                    ),
                    Some(from.to_string()),
                    to.to_string(),
                ))
            })
            .collect()
    }
}

pub struct MaxItemsDecreased;

impl Rule for MaxItemsDecreased {
    fn name(&self) -> &'static str {
        "max-items-decreased"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter_map(|pair| {
                let (from, to) = upper_bound_lowered(max_items(pair.old), max_items(pair.new))?;
                Some(tightened(
                    &pair,
                    ChangeKind::ArrayMaxItemsDecreased,
                    format!(
                        "maxItems of property '{}' decreased from {from} to {to}",
                        pair.property
                    ),
                    Some(from.to_string()),
                    to.to_string(),
                ))
            })
            .collect()
    }
}

pub struct UniqueItemsAdded;

impl Rule for UniqueItemsAdded {
    fn name(&self) -> &'static str {
        "unique-items-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter(|pair| {
                is_array(pair.old) && !unique_items(pair.old) && unique_items(pair.new)
            })
            .map(|pair| {
                tightened(
                    &pair,
                    ChangeKind::ArrayUniqueItemsAdded,
                    format!("Items of property '{}' must now be unique", pair.property),
                    Some("false".to_string()),
                    "true".to_string(),
                )
            })
            .collect()
    }
}

fn allowance(policy: Option<&AdditionalProperties>) -> Option<&'static str> {
    match policy {
        None => Some("true (default)"),
        Some(AdditionalProperties::Any(true)) => Some("true"),
        Some(AdditionalProperties::Schema(_)) => Some("schema"),
        Some(AdditionalProperties::Any(false)) => None,
    }
}

pub struct AdditionalPropertiesForbidden;

impl Rule for AdditionalPropertiesForbidden {
    fn name(&self) -> &'static str {
        "additional-properties-forbidden"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_schemas(old, new)
            .filter(|pair| {
                matches!(
                    additional_properties(pair.new),
                    Some(AdditionalProperties::Any(false))
                )
            })
            .filter_map(|pair| {
                let allowed = allowance(additional_properties(pair.old))?;
                Some(
                    Change::builder()
                        .kind(ChangeKind::AdditionalPropertiesForbidden)
                        .severity(Severity::Major)
                        .location(Location::schema(pair.name))
                        .description(format!(
                            "Schema '{}' no longer accepts additional properties",
                            pair.name
                        ))
                        .old_value(allowed)
                        .new_value("false")
                        .breaking(true)
                        .build(),
                )
            })
            .collect()
    }
}

pub struct AdditionalPropertiesTypeChanged;

impl Rule for AdditionalPropertiesTypeChanged {
    fn name(&self) -> &'static str {
        "additional-properties-type-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_schemas(old, new)
            .filter_map(|pair| {
                let (
                    Some(AdditionalProperties::Schema(old_schema)),
                    Some(AdditionalProperties::Schema(new_schema)),
                ) = (
                    additional_properties(pair.old),
                    additional_properties(pair.new),
                )
                else {
                    return None;
                };
                let (from, to) = (identity(&**old_schema), identity(&**new_schema));
                (from != to).then(|| {
                    Change::builder()
                        .kind(ChangeKind::AdditionalPropertiesTypeChanged)
                        .severity(Severity::Major)
                        .location(Location::schema(pair.name))
                        .description(format!(
                            "Type of additional properties in schema '{}' changed from {from} to {to}",
                            pair.name
                        ))
                        .old_value(from)
                        .new_value(to)
                        .breaking(true)
                        .build()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
