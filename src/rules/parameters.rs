use openapiv3::{OpenAPI, Parameter};

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Severity};
use crate::document::{
    OperationPair, ParameterLocation, UNKNOWN, effective_parameters, find_parameter, identity,
    is_relocated, parameter_explode, parameter_name, parameter_schema, parameter_style,
    shared_operations,
};

struct ParameterSets<'a> {
    op: OperationPair<'a>,
    old: Vec<&'a Parameter>,
    new: Vec<&'a Parameter>,
}

fn parameter_sets<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = ParameterSets<'a>> {
    shared_operations(old, new).map(move |op| ParameterSets {
        op,
        old: effective_parameters(old, op.old_item, op.old),
        new: effective_parameters(new, op.new_item, op.new),
    })
}

struct ParameterPair<'a> {
    op: OperationPair<'a>,
    name: &'a str,
    location: ParameterLocation,
    old: &'a Parameter,
    new: &'a Parameter,
}

/// Parameters matched by name and location on operations present in both documents.
fn shared_parameters<'a>(old: &'a OpenAPI, new: &'a OpenAPI) -> Vec<ParameterPair<'a>> {
    parameter_sets(old, new)
        .flat_map(|sets| {
            sets.old
                .iter()
                .filter_map(|&old_param| {
                    let name = parameter_name(old_param);
                    let location = ParameterLocation::of(old_param);
                    find_parameter(&sets.new, name, location).map(|new_param| ParameterPair {
                        op: sets.op,
                        name,
                        location,
                        old: old_param,
                        new: new_param,
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn schema_identity(p: &Parameter) -> String {
    parameter_schema(p)
        .map(identity)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub struct RequiredParameterAdded;

impl Rule for RequiredParameterAdded {
    fn name(&self) -> &'static str {
        "required-parameter-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for sets in parameter_sets(old, new) {
            for new_param in &sets.new {
                let data = new_param.parameter_data_ref();
                let location = ParameterLocation::of(new_param);
                if !data.required || is_relocated(&sets.old, &data.name, location) {
                    continue;
                }
                let builder = Change::builder()
                    .kind(ChangeKind::ParameterRequiredAdded)
                    .location(sets.op.location())
                    .new_value("required")
                    .breaking(true);
                match find_parameter(&sets.old, &data.name, location) {
                    None => changes.push(
                        builder
                            .severity(Severity::Critical)
                            .description(format!(
                                "Required {location} parameter '{}' was added",
                                data.name
                            ))
                            .build()?,
                    ),
                    Some(old_param) if !old_param.parameter_data_ref().required => changes.push(
                        builder
                            .severity(Severity::Major)
                            .description(format!(
                                "{location} parameter '{}' changed from optional to required",
                                data.name
                            ))
                            .old_value("optional")
                            .build()?,
                    ),
                    Some(_) => {}
                }
            }
        }
        Ok(changes)
    }
}

pub struct ParameterAdded;

impl Rule for ParameterAdded {
    fn name(&self) -> &'static str {
        "parameter-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for sets in parameter_sets(old, new) {
            for new_param in &sets.new {
                let data = new_param.parameter_data_ref();
                let location = ParameterLocation::of(new_param);
                if data.required
                    || find_parameter(&sets.old, &data.name, location).is_some()
                    || is_relocated(&sets.old, &data.name, location)
                {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ParameterAdded)
                        .severity(Severity::Info)
                        .location(sets.op.location())
                        .description(format!(
                            "Optional {location} parameter '{}' was added",
                            data.name
                        ))
                        .new_value(data.name.as_str())
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct ParameterRemoved;

impl Rule for ParameterRemoved {
    fn name(&self) -> &'static str {
        "parameter-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for sets in parameter_sets(old, new) {
            for old_param in &sets.old {
                let data = old_param.parameter_data_ref();
                let location = ParameterLocation::of(old_param);
                if find_parameter(&sets.new, &data.name, location).is_some()
                    || is_relocated(&sets.new, &data.name, location)
                {
                    continue;
                }
                let (severity, qualifier) = if data.required {
                    (Severity::Major, "Required")
                } else {
                    (Severity::Info, "Optional")
                };
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ParameterRemoved)
                        .severity(severity)
                        .location(sets.op.location())
                        .description(format!(
                            "{qualifier} {location} parameter '{}' was removed",
                            data.name
                        ))
                        .old_value(data.name.as_str())
                        .breaking(data.required)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct ParameterTypeChanged;

impl Rule for ParameterTypeChanged {
    fn name(&self) -> &'static str {
        "parameter-type-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_parameters(old, new)
            .into_iter()
            .filter_map(|pair| {
                let old_type = schema_identity(pair.old);
                let new_type = schema_identity(pair.new);
                (old_type != new_type).then(|| {
                    Change::builder()
                        .kind(ChangeKind::ParameterTypeChanged)
                        .severity(Severity::Major)
                        .location(pair.op.location())
                        .description(format!(
                            "Type of {} parameter '{}' changed from {old_type} to {new_type}",
                            pair.location, pair.name
                        ))
                        .old_value(old_type)
                        .new_value(new_type)
                        .breaking(true)
                        .build()
                })
            })
            .collect()
    }
}

pub struct ParameterLocationChanged;

impl Rule for ParameterLocationChanged {
    fn name(&self) -> &'static str {
        "parameter-location-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for sets in parameter_sets(old, new) {
            for old_param in &sets.old {
                let name = parameter_name(old_param);
                let old_location = ParameterLocation::of(old_param);
                if !is_relocated(&sets.new, name, old_location) {
                    continue;
                }
                let Some(new_location) = sets
                    .new
                    .iter()
                    .find(|p| parameter_name(p) == name)
                    .map(|p| ParameterLocation::of(p))
                else {
                    continue;
                };
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ParameterLocationChanged)
                        .severity(Severity::Critical)
                        .location(sets.op.location())
                        .description(format!(
                            "Parameter '{name}' moved from {old_location} to {new_location}"
                        ))
                        .old_value(old_location.as_str())
                        .new_value(new_location.as_str())
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct ParameterStyleChanged;

impl Rule for ParameterStyleChanged {
    fn name(&self) -> &'static str {
        "parameter-style-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_parameters(old, new)
            .into_iter()
            .filter_map(|pair| {
                let old_style = parameter_style(pair.old);
                let new_style = parameter_style(pair.new);
                (old_style != new_style).then(|| {
                    Change::builder()
                        .kind(ChangeKind::ParameterStyleChanged)
                        .severity(Severity::Major)
                        .location(pair.op.location())
                        .description(format!(
                            "Serialization style of parameter '{}' changed from {old_style} to {new_style}",
                            pair.name
                        ))
                        .old_value(old_style)
                        .new_value(new_style)
                        .breaking(true)
                        .build()
                })
            })
            .collect()
    }
}

pub struct ParameterExplodeChanged;

impl Rule for ParameterExplodeChanged {
    fn name(&self) -> &'static str {
        "parameter-explode-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_parameters(old, new)
            .into_iter()
            .filter_map(|pair| {
                let old_explode = parameter_explode(pair.old);
                let new_explode = parameter_explode(pair.new);
                (old_explode != new_explode).then(|| {
                    Change::builder()
                        .kind(ChangeKind::ParameterExplodeChanged)
                        .severity(Severity::Major)
                        .location(pair.op.location())
                        .description(format!(
                            "Explode setting of parameter '{}' changed from {old_explode} to {new_explode}",
                            pair.name
                        ))
                        .old_value(old_explode.to_string())
                        .new_value(new_explode.to_string())
                        .breaking(true)
                        .build()
                })
            })
            .collect()
    }
}

pub struct ParameterDeprecated;

impl Rule for ParameterDeprecated {
    fn name(&self) -> &'static str {
        "parameter-deprecated"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_parameters(old, new)
            .into_iter()
            .filter(|pair| {
                pair.old.parameter_data_ref().deprecated != Some(true)
                    && pair.new.parameter_data_ref().deprecated == Some(true)
            })
            .map(|pair| {
                Change::builder()
                    .kind(ChangeKind::ParameterDeprecatedAdded)
                    .severity(Severity::Warning)
                    .location(pair.op.location())
                    .description(format!(
                        "{} parameter '{}' was marked as deprecated",
                        pair.location, pair.name
                    ))
                    .old_value("false")
                    .new_value("true")
                    .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
