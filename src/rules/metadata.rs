use openapiv3::OpenAPI;

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Location, Severity};
use crate::version::{VersionBump, classify};

pub struct ApiVersionChanged;

impl Rule for ApiVersionChanged {
    fn name(&self) -> &'static str {
        "api-version-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let (from, to) = (&old.info.version, &new.info.version);
        if from == to {
            return Ok(Vec::new());
        }
        let (severity, breaking) = match classify(from, to) {
            VersionBump::Major | VersionBump::Unparsable => (Severity::Critical, true),
            VersionBump::Minor => (Severity::Minor, false),
            VersionBump::Other => (Severity::Info, false),
        };
        let change = Change::builder()
            .kind(ChangeKind::ApiVersionChanged)
            .severity(severity)
            .location(Location::Info)
            .description(format!("API version changed from {from} to {to}"))
            .old_value(from)
            .new_value(to)
            .breaking(breaking)
            .build()?;
        Ok(vec![change])
    }
}

/// A document without servers is served from `/`.
fn base_url(spec: &OpenAPI) -> &str {
    spec.servers.first().map_or("/", |server| server.url.as_str())
}

pub struct BasePathChanged;

impl Rule for BasePathChanged {
    fn name(&self) -> &'static str {
        "base-path-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let (from, to) = (base_url(old), base_url(new));
        if from == to {
            return Ok(Vec::new());
        }
        let change = Change::builder()
            .kind(ChangeKind::BasePathChanged)
            .severity(Severity::Critical)
            .location(Location::Server)
            .description(format!("Base URL changed from {from} to {to}"))
            .old_value(from)
            .new_value(to)
            .breaking(true)
            .build()?;
        Ok(vec![change])
    }
}
