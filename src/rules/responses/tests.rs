use super::*;
use crate::rules::testing::{run, spec};

fn with_responses(responses: &str) -> OpenAPI {
    spec(&format!(
        r#"
paths:
  /users:
    get:
      responses:
{responses}
"#
    ))
}

const OK_JSON: &str = r#"
        "200":
          description: OK
          headers:
            X-Rate-Limit:
              schema:
                type: integer
          links:
            GetUser:
              operationId: getUser
          content:
            application/json:
              schema:
                type: array
        "404":
          description: Not found
"#;

#[test]
fn removed_error_code_is_minor_and_non_breaking() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "200":
          description: OK
"#,
    );
    let changes = run(&ResponseCodeRemoved, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Minor);
    assert!(!changes[0].is_breaking());
    assert_eq!(changes[0].location().to_string(), "/users [GET] Response: 404");
}

#[test]
fn removed_success_code_is_critical() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "404":
          description: Not found
"#,
    );
    let changes = run(&ResponseCodeRemoved, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Critical);
    assert!(changes[0].is_breaking());
    assert!(run(&ResponseCodeChanged, &old, &new).is_empty());
}

#[test]
fn replaced_success_code_is_removed_and_changed() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "201":
          description: Created
        "404":
          description: Not found
"#,
    );
    let changed = run(&ResponseCodeChanged, &old, &new);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].severity(), Severity::Major);
    assert_eq!(changed[0].old_value(), Some("200"));
    assert_eq!(changed[0].new_value(), Some("201"));

    let removed = run(&ResponseCodeRemoved, &old, &new);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].severity(), Severity::Critical);
    assert_eq!(removed[0].old_value(), Some("200"));
}

#[test]
fn new_first_success_code_is_a_change_even_if_old_remains() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "201":
          description: Created
        "200":
          description: OK
        "404":
          description: Not found
"#,
    );
    let changed = run(&ResponseCodeChanged, &old, &new);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].old_value(), Some("200"));
    assert_eq!(changed[0].new_value(), Some("201"));
    assert!(run(&ResponseCodeRemoved, &old, &new).is_empty());
}

#[test]
fn retained_first_success_code_is_not_a_change() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "200":
          description: OK
        "201":
          description: Created
        "404":
          description: Not found
"#,
    );
    assert!(run(&ResponseCodeChanged, &old, &new).is_empty());
    assert!(run(&ResponseCodeRemoved, &old, &new).is_empty());
}

#[test]
fn content_type_removal_only_checked_for_success_codes() {
    let old = with_responses(
        r#"
        "200":
          description: OK
          content:
            application/json: {}
        "400":
          description: Bad request
          content:
            application/json: {}
"#,
    );
    let new = with_responses(
        r#"
        "200":
          description: OK
          content:
            text/plain: {}
        "400":
          description: Bad request
          content:
            text/plain: {}
"#,
    );
    let removed = run(&ResponseContentTypeRemoved, &old, &new);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].location().to_string(), "/users [GET] Response: 200");

    let added = run(&ResponseContentTypeAdded, &old, &new);
    assert_eq!(added.len(), 2);
}

#[test]
fn response_schema_change_is_major() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "200":
          description: OK
          headers:
            X-Rate-Limit:
              schema:
                type: integer
          links:
            GetUser:
              operationId: getUser
          content:
            application/json:
              schema:
                type: object
        "404":
          description: Not found
"#,
    );
    let changes = run(&ResponseSchemaChanged, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("array"));
    assert_eq!(changes[0].new_value(), Some("object"));
}

#[test]
fn header_and_link_removal_are_minor_breaking() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "200":
          description: OK
          content:
            application/json:
              schema:
                type: array
        "404":
          description: Not found
"#,
    );
    let headers = run(&ResponseHeaderRemoved, &old, &new);
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].severity(), Severity::Minor);
    assert!(headers[0].is_breaking());

    let links = run(&LinkRemoved, &old, &new);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].old_value(), Some("GetUser"));
    assert!(links[0].is_breaking());

    assert_eq!(run(&ResponseHeaderAdded, &new, &old).len(), 1);
    assert_eq!(run(&LinkAdded, &new, &old).len(), 1);
}

#[test]
fn header_made_required_is_major() {
    let old = with_responses(OK_JSON);
    let new = with_responses(
        r#"
        "200":
          description: OK
          headers:
            X-Rate-Limit:
              required: true
              schema:
                type: integer
"#,
    );
    let changes = run(&ResponseHeaderRequired, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind(), ChangeKind::ResponseHeaderRequiredAdded);
    assert!(changes[0].is_breaking());
}
