use openapiv3::{OpenAPI, RequestBody};

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Severity};
use crate::document::{OperationPair, media_identity, request_body, shared_operations};

fn bodies<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = (OperationPair<'a>, Option<&'a RequestBody>, Option<&'a RequestBody>)> {
    shared_operations(old, new)
        .map(move |op| (op, request_body(old, op.old), request_body(new, op.new)))
}

fn shared_bodies<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = (OperationPair<'a>, &'a RequestBody, &'a RequestBody)> {
    bodies(old, new).filter_map(|(op, old_body, new_body)| Some((op, old_body?, new_body?)))
}

pub struct RequestBodyRemoved;

impl Rule for RequestBodyRemoved {
    fn name(&self) -> &'static str {
        "request-body-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        bodies(old, new)
            .filter(|(_, old_body, new_body)| old_body.is_some() && new_body.is_none())
            .map(|(op, _, _)| {
                Change::builder()
                    .kind(ChangeKind::RequestBodyRemoved)
                    .severity(Severity::Critical)
                    .location(op.location())
                    .description(format!("Request body of {} {} was removed", op.method, op.path))
                    .breaking(true)
                    .build()
            })
            .collect()
    }
}

pub struct RequestBodyAdded;

impl Rule for RequestBodyAdded {
    fn name(&self) -> &'static str {
        "request-body-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        bodies(old, new)
            .filter(|(_, old_body, new_body)| {
                old_body.is_none() && new_body.is_some_and(|body| !body.required)
            })
            .map(|(op, _, _)| {
                Change::builder()
                    .kind(ChangeKind::RequestBodyAdded)
                    .severity(Severity::Info)
                    .location(op.location())
                    .description(format!(
                        "Optional request body was added to {} {}",
                        op.method, op.path
                    ))
                    .new_value("optional")
                    .build()
            })
            .collect()
    }
}

pub struct RequestBodyRequired;

impl Rule for RequestBodyRequired {
    fn name(&self) -> &'static str {
        "request-body-required"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, old_body, new_body) in bodies(old, new) {
            if !new_body.is_some_and(|body| body.required) {
                continue;
            }
            let builder = Change::builder()
                .kind(ChangeKind::RequestBodyRequiredAdded)
                .location(op.location())
                .new_value("required")
                .breaking(true);
            match old_body {
                None => changes.push(
                    builder
                        .severity(Severity::Critical)
                        .description(format!(
                            "Required request body was added to {} {}",
                            op.method, op.path
                        ))
                        .build()?,
                ),
                Some(body) if !body.required => changes.push(
                    builder
                        .severity(Severity::Major)
                        .description(format!(
                            "Request body of {} {} changed from optional to required",
                            op.method, op.path
                        ))
                        .old_value("optional")
                        .build()?,
                ),
                Some(_) => {}
            }
        }
        Ok(changes)
    }
}

pub struct RequestContentTypeRemoved;

impl Rule for RequestContentTypeRemoved {
    fn name(&self) -> &'static str {
        "request-content-type-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, old_body, new_body) in shared_bodies(old, new) {
            for media_type in old_body.content.keys() {
                if new_body.content.contains_key(media_type) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::RequestContentTypeRemoved)
                        .severity(Severity::Critical)
                        .location(op.location())
                        .description(format!(
                            "Request content type '{media_type}' is no longer accepted"
                        ))
                        .old_value(media_type)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct RequestContentTypeAdded;

impl Rule for RequestContentTypeAdded {
    fn name(&self) -> &'static str {
        "request-content-type-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, old_body, new_body) in shared_bodies(old, new) {
            let accepted = old_body
                .content
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            for media_type in new_body.content.keys() {
                if old_body.content.contains_key(media_type) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::RequestContentTypeAdded)
                        .severity(Severity::Info)
                        .location(op.location())
                        .description(format!("Request content type '{media_type}' is now accepted"))
                        .old_value(accepted.as_str())
                        .new_value(media_type)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct RequestSchemaChanged;

impl Rule for RequestSchemaChanged {
    fn name(&self) -> &'static str {
        "request-schema-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, old_body, new_body) in shared_bodies(old, new) {
            for (media_type, old_media) in &old_body.content {
                let Some(new_media) = new_body.content.get(media_type) else {
                    continue;
                };
                let old_schema = media_identity(old_media);
                let new_schema = media_identity(new_media);
                if old_schema == new_schema {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::RequestSchemaChanged)
                        .severity(Severity::Major)
                        .location(op.location())
                        .description(format!(
                            "Request schema for '{media_type}' changed from {old_schema} to {new_schema}"
                        ))
                        .old_value(old_schema)
                        .new_value(new_schema)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests;
