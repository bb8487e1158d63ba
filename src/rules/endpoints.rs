use openapiv3::OpenAPI;

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Location, Severity};
use crate::document::{operations, shared_operations, shared_paths};

pub struct EndpointRemoved;

impl Rule for EndpointRemoved {
    fn name(&self) -> &'static str {
        "endpoint-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        old.paths
            .paths
            .keys()
            .filter(|path| !new.paths.paths.contains_key(*path))
            .map(|path| {
                Change::builder()
                    .kind(ChangeKind::EndpointRemoved)
                    .severity(Severity::Critical)
                    .location(Location::Path(path.clone()))
                    .description(format!("Endpoint '{path}' was removed"))
                    .old_value(path)
                    .breaking(true)
                    .build()
            })
            .collect()
    }
}

pub struct EndpointAdded;

impl Rule for EndpointAdded {
    fn name(&self) -> &'static str {
        "endpoint-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        new.paths
            .paths
            .keys()
            .filter(|path| !old.paths.paths.contains_key(*path))
            .map(|path| {
                Change::builder()
                    .kind(ChangeKind::EndpointAdded)
                    .severity(Severity::Info)
                    .location(Location::Path(path.clone()))
                    .description(format!("Endpoint '{path}' was added"))
                    .new_value(path)
                    .build()
            })
            .collect()
    }
}

pub struct MethodRemoved;

impl Rule for MethodRemoved {
    fn name(&self) -> &'static str {
        "method-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_paths(old, new) {
            for ((method, old_op), (_, new_op)) in
                operations(pair.old).into_iter().zip(operations(pair.new))
            {
                if old_op.is_some() && new_op.is_none() {
                    changes.push(
                        Change::builder()
                            .kind(ChangeKind::MethodRemoved)
                            .severity(Severity::Critical)
                            .location(Location::operation(pair.path, method))
                            .description(format!("{method} {} was removed", pair.path))
                            .old_value(method.as_str())
                            .breaking(true)
                            .build()?,
                    );
                }
            }
        }
        Ok(changes)
    }
}

pub struct MethodAdded;

impl Rule for MethodAdded {
    fn name(&self) -> &'static str {
        "method-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for pair in shared_paths(old, new) {
            for ((method, old_op), (_, new_op)) in
                operations(pair.old).into_iter().zip(operations(pair.new))
            {
                if old_op.is_none() && new_op.is_some() {
                    changes.push(
                        Change::builder()
                            .kind(ChangeKind::MethodAdded)
                            .severity(Severity::Info)
                            .location(Location::operation(pair.path, method))
                            .description(format!("{method} {} was added", pair.path))
                            .new_value(method.as_str())
                            .build()?,
                    );
                }
            }
        }
        Ok(changes)
    }
}

pub struct OperationDeprecated;

impl Rule for OperationDeprecated {
    fn name(&self) -> &'static str {
        "operation-deprecated"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_operations(old, new)
            .filter(|pair| !pair.old.deprecated && pair.new.deprecated)
            .map(|pair| {
                Change::builder()
                    .kind(ChangeKind::OperationDeprecatedAdded)
                    .severity(Severity::Warning)
                    .location(pair.location())
                    .description(format!(
                        "{} {} was marked as deprecated",
                        pair.method, pair.path
                    ))
                    .old_value("false")
                    .new_value("true")
                    .build()
            })
            .collect()
    }
}
