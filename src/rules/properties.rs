use openapiv3::OpenAPI;

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Location, Severity};
use crate::document::{
    format_name, identity, literal, properties, required, shared_properties,
    shared_property_refs, shared_schemas, type_name,
};

pub struct PropertyRemoved;

impl Rule for PropertyRemoved {
    fn name(&self) -> &'static str {
        "property-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_schemas(old, new) {
            let (Some(old_props), Some(new_props)) = (properties(pair.old), properties(pair.new))
            else {
                continue;
            };
            for name in old_props.keys() {
                if new_props.contains_key(name) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::PropertyRemoved)
                        .severity(Severity::Major)
                        .location(Location::property(pair.name, name))
                        .description(format!(
                            "Property '{name}' was removed from schema '{}'",
                            pair.name
                        ))
                        .old_value(name)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct PropertyAdded;

impl Rule for PropertyAdded {
    fn name(&self) -> &'static str {
        "property-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_schemas(old, new) {
            let (Some(old_props), Some(new_props)) = (properties(pair.old), properties(pair.new))
            else {
                continue;
            };
            let new_required = required(pair.new);
            for name in new_props.keys() {
                if old_props.contains_key(name) || new_required.contains(name) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::PropertyAdded)
                        .severity(Severity::Info)
                        .location(Location::property(pair.name, name))
                        .description(format!(
                            "Optional property '{name}' was added to schema '{}'",
                            pair.name
                        ))
                        .new_value(name)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct PropertyRequired;

impl Rule for PropertyRequired {
    fn name(&self) -> &'static str {
        "property-required"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_schemas(old, new) {
            if properties(pair.new).is_none() {
                continue;
            }
            let old_required = required(pair.old);
            for name in required(pair.new) {
                if old_required.contains(name) {
                    continue;
                }
                let existed = properties(pair.old).is_some_and(|props| props.contains_key(name));
                let builder = Change::builder()
                    .kind(ChangeKind::PropertyRequiredAdded)
                    .location(Location::property(pair.name, name))
                    .new_value("required")
                    .breaking(true);
                let change = if existed {
                    builder
                        .severity(Severity::Major)
                        .description(format!(
                            "Property '{name}' of schema '{}' changed from optional to required",
                            pair.name
                        ))
                        .old_value("optional")
                } else {
                    builder.severity(Severity::Critical).description(format!(
                        "Required property '{name}' was added to schema '{}'",
                        pair.name
                    ))
                };
                changes.push(change.build()?);
            }
        }
        Ok(changes)
    }
}

pub struct PropertyTypeChanged;

impl Rule for PropertyTypeChanged {
    fn name(&self) -> &'static str {
        "property-type-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_property_refs(old, new)
            .filter_map(|pair| {
                let old_type = identity(pair.old);
                let new_type = identity(pair.new);
                (old_type != new_type).then(|| {
                    Change::builder()
                        .kind(ChangeKind::PropertyTypeChanged)
                        .severity(Severity::Major)
                        .location(Location::property(pair.schema, pair.property))
                        .description(format!(
                            "Type of property '{}' changed from {old_type} to {new_type}",
                            pair.property
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

pub struct PropertyFormatChanged;

impl Rule for PropertyFormatChanged {
    fn name(&self) -> &'static str {
        "property-format-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_properties(old, new) {
            if type_name(pair.old).is_none() || type_name(pair.old) != type_name(pair.new) {
                continue;
            }
            let Some(old_format) = format_name(pair.old) else {
                continue;
            };
            let new_format = format_name(pair.new);
            if new_format.as_ref() == Some(&old_format) {
                continue;
            }
            let builder = Change::builder()
                .kind(ChangeKind::PropertyFormatChanged)
                .severity(Severity::Major)
                .location(pair.location())
                .old_value(old_format.as_str())
                .breaking(true);
            let change = match new_format {
                Some(new_format) => builder
                    .description(format!(
                        "Format of property '{}' changed from {old_format} to {new_format}",
                        pair.property
                    ))
                    .new_value(new_format),
                None => builder.description(format!(
                    "Format {old_format} of property '{}' was removed",
                    pair.property
                )),
            };
            changes.push(change.build()?);
        }
        Ok(changes)
    }
}

pub struct ReadOnlyChanged;

impl Rule for ReadOnlyChanged {
    fn name(&self) -> &'static str {
        "read-only-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter(|pair| pair.old.schema_data.read_only != pair.new.schema_data.read_only)
            .map(|pair| {
                let (old_flag, new_flag) =
                    (pair.old.schema_data.read_only, pair.new.schema_data.read_only);
                Change::builder()
                    .kind(ChangeKind::PropertyReadOnlyChanged)
                    .severity(Severity::Minor)
                    .location(pair.location())
                    .description(format!(
                        "readOnly of property '{}' changed from {old_flag} to {new_flag}",
                        pair.property
                    ))
                    .old_value(old_flag.to_string())
                    .new_value(new_flag.to_string())
                    .breaking(true)
                    .build()
            })
            .collect()
    }
}

pub struct WriteOnlyChanged;

impl Rule for WriteOnlyChanged {
    fn name(&self) -> &'static str {
        "write-only-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter(|pair| pair.old.schema_data.write_only != pair.new.schema_data.write_only)
            .map(|pair| {
                let (old_flag, new_flag) =
                    (pair.old.schema_data.write_only, pair.new.schema_data.write_only);
                Change::builder()
                    .kind(ChangeKind::PropertyWriteOnlyChanged)
                    .severity(Severity::Minor)
                    .location(pair.location())
                    .description(format!(
                        "writeOnly of property '{}' changed from {old_flag} to {new_flag}",
                        pair.property
                    ))
                    .old_value(old_flag.to_string())
                    .new_value(new_flag.to_string())
                    .breaking(true)
                    .build()
            })
            .collect()
    }
}

pub struct DefaultValueChanged;

impl Rule for DefaultValueChanged {
    fn name(&self) -> &'static str {
        "default-value-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter_map(|pair| {
                let old_default = pair.old.schema_data.default.as_ref()?;
                let new_default = pair.new.schema_data.default.as_ref()?;
                (old_default != new_default).then(|| {
                    Change::builder()
                        .kind(ChangeKind::DefaultValueChanged)
                        .severity(Severity::Major)
                        .location(pair.location())
                        .description(format!(
                            "Default value of property '{}' changed",
                            pair.property
                        ))
                        .old_value(literal(old_default))
                        .new_value(literal(new_default))
                        .breaking(true)
                        .build()
                })
            })
            .collect()
    }
}

pub struct DefaultValueRemoved;

impl Rule for DefaultValueRemoved {
    fn name(&self) -> &'static str {
        "default-value-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_properties(old, new)
            .filter_map(|pair| {
                let old_default = pair.old.schema_data.default.as_ref()?;
                pair.new.schema_data.default.is_none().then(|| {
                    Change::builder()
                        .kind(ChangeKind::DefaultValueRemoved)
                        .severity(Severity::Minor)
                        .location(pair.location())
                        .description(format!(
                            "Default value of property '{}' was removed",
                            pair.property
                        ))
                        .old_value(literal(old_default))
                        .breaking(true)
                        .build()
                })
            })
            .collect()
    }
}

pub struct SchemaDeprecated;

impl Rule for SchemaDeprecated {
    fn name(&self) -> &'static str {
        "schema-deprecated"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_schemas(old, new)
            .filter(|pair| !pair.old.schema_data.deprecated && pair.new.schema_data.deprecated)
            .map(|pair| {
                Change::builder()
                    .kind(ChangeKind::SchemaDeprecatedAdded)
                    .severity(Severity::Warning)
                    .location(Location::schema(pair.name))
                    .description(format!("Schema '{}' was marked as deprecated", pair.name))
                    .old_value("false")
                    .new_value("true")
                    .build()
            })
            .collect()
    }
}
