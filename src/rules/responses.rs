use openapiv3::OpenAPI;

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Severity};
use crate::document::{
    OperationPair, ResponsePair, is_success, media_identity, resolve_header, shared_operations,
    shared_responses, status_codes, success_code,
};

fn response_pairs<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = (OperationPair<'a>, ResponsePair<'a>)> {
    shared_operations(old, new).flat_map(move |op| {
        shared_responses(old, new, &op)
            .into_iter()
            .map(move |response| (op, response))
    })
}

/// Old and new first 2xx codes when they differ.
fn changed_success_code(op: &OperationPair<'_>) -> Option<(String, String)> {
    let old_code = success_code(op.old)?;
    let new_code = success_code(op.new)?;
    (old_code != new_code).then_some((old_code, new_code))
}

pub struct ResponseCodeRemoved;

impl Rule for ResponseCodeRemoved {
    fn name(&self) -> &'static str {
        "response-code-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for op in shared_operations(old, new) {
            let new_codes = status_codes(op.new);
            for status in status_codes(op.old) {
                if new_codes.contains(&status) {
                    continue;
                }
                let success = is_success(&status);
                let severity = if success {
                    Severity::Critical
                } else {
                    Severity::Minor
                };
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ResponseCodeRemoved)
                        .severity(severity)
                        .location(op.response_location(&status))
                        .description(format!(
                            "Response code {status} was removed from {} {}",
                            op.method, op.path
                        ))
                        .old_value(status.as_str())
                        .breaking(success)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct ResponseCodeChanged;

impl Rule for ResponseCodeChanged {
    fn name(&self) -> &'static str {
        "response-code-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_operations(old, new)
            .filter_map(|op| {
                let (old_code, new_code) = changed_success_code(&op)?;
                Some(
                    Change::builder()
                        .kind(ChangeKind::ResponseCodeChanged)
                        .severity(Severity::Major)
                        .location(op.location())
                        .description(format!(
                            "Success response code changed from {old_code} to {new_code}"
                        ))
                        .old_value(old_code)
                        .new_value(new_code)
                        .breaking(true)
                        .build(),
                )
            })
            .collect()
    }
}

pub struct ResponseContentTypeRemoved;

impl Rule for ResponseContentTypeRemoved {
    fn name(&self) -> &'static str {
        "response-content-type-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            if !is_success(&response.status) {
                continue;
            }
            for media_type in response.old.content.keys() {
                if response.new.content.contains_key(media_type) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ResponseContentTypeRemoved)
                        .severity(Severity::Critical)
                        .location(op.response_location(&response.status))
                        .description(format!(
                            "Response content type '{media_type}' is no longer returned"
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

pub struct ResponseContentTypeAdded;

impl Rule for ResponseContentTypeAdded {
    fn name(&self) -> &'static str {
        "response-content-type-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            for media_type in response.new.content.keys() {
                if response.old.content.contains_key(media_type) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ResponseContentTypeAdded)
                        .severity(Severity::Info)
                        .location(op.response_location(&response.status))
                        .description(format!("Response content type '{media_type}' was added"))
                        .new_value(media_type)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct ResponseSchemaChanged;

impl Rule for ResponseSchemaChanged {
    fn name(&self) -> &'static str {
        "response-schema-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            for (media_type, old_media) in &response.old.content {
                let Some(new_media) = response.new.content.get(media_type) else {
                    continue;
                };
                let old_schema = media_identity(old_media);
                let new_schema = media_identity(new_media);
                if old_schema == new_schema {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ResponseSchemaChanged)
                        .severity(Severity::Major)
                        .location(op.response_location(&response.status))
                        .description(format!(
                            "Response schema for '{media_type}' changed from {old_schema} to {new_schema}"
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

pub struct ResponseHeaderRemoved;

impl Rule for ResponseHeaderRemoved {
    fn name(&self) -> &'static str {
        "response-header-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            for header in response.old.headers.keys() {
                if response.new.headers.contains_key(header) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ResponseHeaderRemoved)
                        .severity(Severity::Minor)
                        .location(op.response_location(&response.status))
                        .description(format!("Response header '{header}' was removed"))
                        .old_value(header)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct ResponseHeaderAdded;

impl Rule for ResponseHeaderAdded {
    fn name(&self) -> &'static str {
        "response-header-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            for header in response.new.headers.keys() {
                if response.old.headers.contains_key(header) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ResponseHeaderAdded)
                        .severity(Severity::Info)
                        .location(op.response_location(&response.status))
                        .description(format!("Response header '{header}' was added"))
                        .new_value(header)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct ResponseHeaderRequired;

impl Rule for ResponseHeaderRequired {
    fn name(&self) -> &'static str {
        "response-header-required"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            for (name, old_header) in &response.old.headers {
                let Some(new_header) = response.new.headers.get(name) else {
                    continue;
                };
                let (Some(old_header), Some(new_header)) = (
                    resolve_header(old, old_header),
                    resolve_header(new, new_header),
                ) else {
                    continue;
                };
                if old_header.required || !new_header.required {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::ResponseHeaderRequiredAdded)
                        .severity(Severity::Major)
                        .location(op.response_location(&response.status))
                        .description(format!(
                            "Response header '{name}' changed from optional to required"
                        ))
                        .old_value("optional")
                        .new_value("required")
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct LinkRemoved;

impl Rule for LinkRemoved {
    fn name(&self) -> &'static str {
        "link-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            for link in response.old.links.keys() {
                if response.new.links.contains_key(link) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::LinkRemoved)
                        .severity(Severity::Minor)
                        .location(op.response_location(&response.status))
                        .description(format!("Link '{link}' was removed"))
                        .old_value(link)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct LinkAdded;

impl Rule for LinkAdded {
    fn name(&self) -> &'static str {
        "link-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (op, response) in response_pairs(old, new) {
            for link in response.new.links.keys() {
                if response.old.links.contains_key(link) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::LinkAdded)
                        .severity(Severity::Info)
                        .location(op.response_location(&response.status))
                        .description(format!("Link '{link}' was added"))
                        .new_value(link)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests;
