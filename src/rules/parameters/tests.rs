use super::*;
use crate::rules::testing::{run, spec};

fn with_params(params: &str) -> OpenAPI {
    spec(&format!(
        r#"
paths:
  /users:
    get:
      parameters:
{params}
      responses:
        "200":
          description: OK
"#
    ))
}

const NONE: &str = "        []";

const OPTIONAL_LIMIT: &str = r#"
        - name: limit
          in: query
          schema:
            type: integer
"#;

const REQUIRED_LIMIT: &str = r#"
        - name: limit
          in: query
          required: true
          schema:
            type: integer
"#;

#[test]
fn new_required_parameter_is_critical() {
    let old = with_params(NONE);
    let new = with_params(REQUIRED_LIMIT);
    let changes = run(&RequiredParameterAdded, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind(), ChangeKind::ParameterRequiredAdded);
    assert_eq!(changes[0].severity(), Severity::Critical);
    assert!(changes[0].is_breaking());
    assert!(run(&ParameterAdded, &old, &new).is_empty());
}

#[test]
fn optional_parameter_made_required_is_major() {
    let old = with_params(OPTIONAL_LIMIT);
    let new = with_params(REQUIRED_LIMIT);
    let changes = run(&RequiredParameterAdded, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Major);
    assert_eq!(changes[0].old_value(), Some("optional"));
    assert_eq!(changes[0].new_value(), Some("required"));
}

#[test]
fn optional_parameter_added_is_info() {
    let old = with_params(NONE);
    let new = with_params(OPTIONAL_LIMIT);
    let changes = run(&ParameterAdded, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Info);
    assert!(!changes[0].is_breaking());
    assert!(run(&RequiredParameterAdded, &old, &new).is_empty());
}

#[test]
fn removed_required_parameter_is_breaking() {
    let old = with_params(REQUIRED_LIMIT);
    let new = with_params(NONE);
    let changes = run(&ParameterRemoved, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Major);
    assert!(changes[0].is_breaking());

    let changes = run(&ParameterRemoved, &with_params(OPTIONAL_LIMIT), &new);
    assert_eq!(changes.len(), 1);
    assert!(!changes[0].is_breaking());
}

#[test]
fn type_change_is_detected() {
    let old = with_params(OPTIONAL_LIMIT);
    let new = with_params(
        r#"
        - name: limit
          in: query
          schema:
            type: string
"#,
    );
    let changes = run(&ParameterTypeChanged, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("integer"));
    assert_eq!(changes[0].new_value(), Some("string"));
}

#[test]
fn format_is_part_of_parameter_type() {
    let old = with_params(OPTIONAL_LIMIT);
    let new = with_params(
        r#"
        - name: limit
          in: query
          schema:
            type: integer
            format: int64
"#,
    );
    let changes = run(&ParameterTypeChanged, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].new_value(), Some("integer(int64)"));
}

#[test]
fn relocation_is_reported_once() {
    let old = with_params(OPTIONAL_LIMIT);
    let new = with_params(
        r#"
        - name: limit
          in: header
          schema:
            type: integer
"#,
    );
    let changes = run(&ParameterLocationChanged, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Critical);
    assert_eq!(changes[0].old_value(), Some("query"));
    assert_eq!(changes[0].new_value(), Some("header"));

    assert!(run(&ParameterAdded, &old, &new).is_empty());
    assert!(run(&ParameterRemoved, &old, &new).is_empty());
    assert!(run(&RequiredParameterAdded, &old, &new).is_empty());
}

#[test]
fn style_change_is_major() {
    let old = with_params(OPTIONAL_LIMIT);
    let new = with_params(
        r#"
        - name: limit
          in: query
          style: pipeDelimited
          schema:
            type: integer
"#,
    );
    let changes = run(&ParameterStyleChanged, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("form"));
    assert_eq!(changes[0].new_value(), Some("pipeDelimited"));
}

#[test]
fn explicit_default_explode_is_not_a_change() {
    let old = with_params(OPTIONAL_LIMIT);
    let same = with_params(
        r#"
        - name: limit
          in: query
          explode: true
          schema:
            type: integer
"#,
    );
    assert!(run(&ParameterExplodeChanged, &old, &same).is_empty());

    let changed = with_params(
        r#"
        - name: limit
          in: query
          explode: false
          schema:
            type: integer
"#,
    );
    let changes = run(&ParameterExplodeChanged, &old, &changed);
    assert_eq!(changes.len(), 1);
    assert!(changes[0].is_breaking());
}

#[test]
fn deprecation_is_warning() {
    let old = with_params(OPTIONAL_LIMIT);
    let new = with_params(
        r#"
        - name: limit
          in: query
          deprecated: true
          schema:
            type: integer
"#,
    );
    let changes = run(&ParameterDeprecated, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Warning);
    assert!(!changes[0].is_breaking());
}

#[test]
fn path_level_parameters_are_inherited() {
    let old = spec(
        r#"
paths:
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: true
        schema:
          type: integer
    get:
      responses:
        "200":
          description: OK
"#,
    );
    let new = spec(
        r#"
paths:
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: true
        schema:
          type: string
    get:
      responses:
        "200":
          description: OK
"#,
    );
    let changes = run(&ParameterTypeChanged, &old, &new);
    assert_eq!(changes.len(), 1);
    assert!(run(&RequiredParameterAdded, &old, &new).is_empty());
}

#[test]
fn referenced_parameters_are_resolved() {
    let old = spec(
        r##"
paths:
  /users:
    get:
      parameters:
        - $ref: "#/components/parameters/Limit"
      responses:
        "200":
          description: OK
components:
  parameters:
    Limit:
      name: limit
      in: query
      schema:
        type: integer
"##,
    );
    let new = with_params(NONE);
    let changes = run(&ParameterRemoved, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("limit"));
}
