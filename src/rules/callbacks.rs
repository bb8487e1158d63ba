use openapiv3::OpenAPI;

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Severity};
use crate::document::{CallbackUrls, shared_operations};

pub struct CallbackRemoved;

impl Rule for CallbackRemoved {
    fn name(&self) -> &'static str {
        "callback-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for op in shared_operations(old, new) {
            for name in op.old.callbacks.keys() {
                if op.new.callbacks.contains_key(name) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::CallbackRemoved)
                        .severity(Severity::Minor)
                        .location(op.location())
                        .description(format!("Callback '{name}' was removed"))
                        .old_value(name)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct CallbackAdded;

impl Rule for CallbackAdded {
    fn name(&self) -> &'static str {
        "callback-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for op in shared_operations(old, new) {
            for name in op.new.callbacks.keys() {
                if op.old.callbacks.contains_key(name) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::CallbackAdded)
                        .severity(Severity::Info)
                        .location(op.location())
                        .description(format!("Callback '{name}' was added"))
                        .new_value(name)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct CallbackUrlChanged;

impl Rule for CallbackUrlChanged {
    fn name(&self) -> &'static str {
        "callback-url-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for op in shared_operations(old, new) {
            for (name, old_callback) in &op.old.callbacks {
                let Some(new_callback) = op.new.callbacks.get(name) else {
                    continue;
                };
                let (Some(old_urls), Some(new_urls)) = (old_callback.urls(), new_callback.urls())
                else {
                    continue;
                };
                let old_urls = old_urls.join(", ");
                let new_urls = new_urls.join(", ");
                if old_urls == new_urls {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::CallbackUrlChanged)
                        .severity(Severity::Minor)
                        .location(op.location())
                        .description(format!("URL of callback '{name}' changed"))
                        .old_value(old_urls)
                        .new_value(new_urls)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}
