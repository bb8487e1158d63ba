//! Fixtures shared by the rule tests.

use openapiv3::OpenAPI;

use super::Rule;
use crate::change::{Change, ChangeKind};

pub fn parse_spec(yaml: &str) -> OpenAPI {
    serde_yml::from_str(yaml).expect("test spec should parse")
}

/// A document with the given top-level sections (`paths`, `components`, ...).
pub fn spec(body: &str) -> OpenAPI {
    versioned_spec("1.0.0", body)
}

pub fn versioned_spec(version: &str, body: &str) -> OpenAPI {
    parse_spec(&format!(
        r#"
openapi: "3.0.3"
info:
  title: Test
  version: "{version}"
{body}
"#
    ))
}

/// A document holding only `components.schemas`, indented two spaces per level below it.
pub fn schemas(schemas_yaml: &str) -> OpenAPI {
    spec(&format!("paths: {{}}\ncomponents:\n  schemas:\n{schemas_yaml}"))
}

pub fn run(rule: &dyn Rule, old: &OpenAPI, new: &OpenAPI) -> Vec<Change> {
    rule.evaluate(old, new).expect("rule should evaluate")
}

pub fn kinds(changes: &[Change]) -> Vec<ChangeKind> {
    changes.iter().map(Change::kind).collect()
}
