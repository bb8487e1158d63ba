use super::*;
use crate::rules::testing::{run, spec};

fn with_body(body: &str) -> OpenAPI {
    spec(&format!(
        r#"
paths:
  /users:
    post:
{body}
      responses:
        "201":
          description: Created
components:
  schemas:
    User:
      type: object
    Account:
      type: object
"#
    ))
}

const NO_BODY: &str = "      summary: create";

const OPTIONAL_JSON: &str = r##"
      requestBody:
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/User"
"##;

const REQUIRED_JSON: &str = r##"
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/User"
"##;

#[test]
fn body_removed_is_critical() {
    let changes = run(&RequestBodyRemoved, &with_body(REQUIRED_JSON), &with_body(NO_BODY));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Critical);
    assert!(changes[0].is_breaking());
}

#[test]
fn optional_body_added_is_info() {
    let old = with_body(NO_BODY);
    let new = with_body(OPTIONAL_JSON);
    let changes = run(&RequestBodyAdded, &old, &new);
    assert_eq!(changes.len(), 1);
    assert!(!changes[0].is_breaking());
    assert!(run(&RequestBodyRequired, &old, &new).is_empty());
}

#[test]
fn required_body_added_is_critical() {
    let old = with_body(NO_BODY);
    let new = with_body(REQUIRED_JSON);
    let changes = run(&RequestBodyRequired, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Critical);
    assert!(run(&RequestBodyAdded, &old, &new).is_empty());
}

#[test]
fn body_made_required_is_major() {
    let changes = run(
        &RequestBodyRequired,
        &with_body(OPTIONAL_JSON),
        &with_body(REQUIRED_JSON),
    );
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Major);
    assert_eq!(changes[0].old_value(), Some("optional"));
}

#[test]
fn content_type_swap_reports_removal_and_addition() {
    let old = with_body(OPTIONAL_JSON);
    let new = with_body(
        r##"
      requestBody:
        content:
          application/xml:
            schema:
              $ref: "#/components/schemas/User"
"##,
    );
    let removed = run(&RequestContentTypeRemoved, &old, &new);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].old_value(), Some("application/json"));
    assert!(removed[0].is_breaking());

    let added = run(&RequestContentTypeAdded, &old, &new);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].old_value(), Some("application/json"));
    assert_eq!(added[0].new_value(), Some("application/xml"));
    assert!(!added[0].is_breaking());
}

#[test]
fn schema_reference_change_is_major() {
    let old = with_body(OPTIONAL_JSON);
    let new = with_body(
        r##"
      requestBody:
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/Account"
"##,
    );
    let changes = run(&RequestSchemaChanged, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("#/components/schemas/User"));
    assert_eq!(changes[0].new_value(), Some("#/components/schemas/Account"));
    assert!(run(&RequestSchemaChanged, &old, &old).is_empty());
}
