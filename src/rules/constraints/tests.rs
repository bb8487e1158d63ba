use super::*;
use crate::rules::testing::{run, schemas};

fn item(property: &str) -> OpenAPI {
    schemas(&format!(
        r#"
    Item:
      type: object
      properties:
        value:
{property}
"#
    ))
}

#[test]
fn maximum_decreased_fires_for_concrete_bounds() {
    let old = item(
        r#"
          type: integer
          maximum: 100
"#,
    );
    let new = item(
        r#"
          type: integer
          maximum: 50
"#,
    );
    let changes = run(&MaximumDecreased, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Major);
    assert!(changes[0].is_breaking());
    assert_eq!(changes[0].old_value(), Some("100"));
    assert_eq!(changes[0].new_value(), Some("50"));
}

#[test]
fn maximum_removed_does_not_fire() {
    let old = item(
        r#"
          type: number
          maximum: 100
"#,
    );
    let new = item(
        r#"
          type: number
"#,
    );
    assert!(run(&MaximumDecreased, &old, &new).is_empty());
}

#[test]
fn minimum_increased_needs_both_bounds() {
    let unbounded = item(
        r#"
          type: number
"#,
    );
    let bounded = item(
        r#"
          type: number
          minimum: 1.5
"#,
    );
    let raised = item(
        r#"
          type: number
          minimum: 2.5
"#,
    );
    assert!(run(&MinimumIncreased, &unbounded, &bounded).is_empty());
    let changes = run(&MinimumIncreased, &bounded, &raised);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("1.5"));
}

#[test]
fn min_length_absent_counts_as_zero() {
    let old = item(
        r#"
          type: string
"#,
    );
    let new = item(
        r#"
          type: string
          minLength: 3
"#,
    );
    let changes = run(&MinLengthIncreased, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("0"));
    assert!(run(&MinLengthIncreased, &new, &old).is_empty());
}

#[test]
fn max_length_decreased() {
    let old = item(
        r#"
          type: string
          maxLength: 64
"#,
    );
    let new = item(
        r#"
          type: string
          maxLength: 32
"#,
    );
    assert_eq!(run(&MaxLengthDecreased, &old, &new).len(), 1);
    assert!(run(&MaxLengthDecreased, &new, &old).is_empty());
}

#[test]
fn pattern_added_and_changed() {
    let plain = item(
        r#"
          type: string
"#,
    );
    let digits = item(
        r#"
          type: string
          pattern: "^[0-9]+$"
"#,
    );
    let hex = item(
        r#"
          type: string
          pattern: "^[0-9a-f]+$"
"#,
    );
    let added = run(&PatternAdded, &plain, &digits);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].new_value(), Some("^[0-9]+$"));
    assert!(run(&PatternChanged, &plain, &digits).is_empty());

    let changed = run(&PatternChanged, &digits, &hex);
    assert_eq!(changed.len(), 1);
    assert!(run(&PatternAdded, &digits, &hex).is_empty());
}

#[test]
fn array_constraints() {
    let old = item(
        r#"
          type: array
          items:
            type: string
          maxItems: 10
"#,
    );
    let new = item(
        r#"
          type: array
          items:
            type: string
          minItems: 1
          maxItems: 5
          uniqueItems: true
"#,
    );
    assert_eq!(run(&MinItemsIncreased, &old, &new).len(), 1);
    assert_eq!(run(&MaxItemsDecreased, &old, &new).len(), 1);
    assert_eq!(run(&UniqueItemsAdded, &old, &new).len(), 1);
    assert!(run(&UniqueItemsAdded, &new, &old).is_empty());
}

#[test]
fn additional_properties_forbidden() {
    let open = schemas(
        r#"
    Bag:
      type: object
"#,
    );
    let closed = schemas(
        r#"
    Bag:
      type: object
      additionalProperties: false
"#,
    );
    let changes = run(&AdditionalPropertiesForbidden, &open, &closed);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("true (default)"));
    assert_eq!(changes[0].location().to_string(), "Schema: Bag");
    assert!(run(&AdditionalPropertiesForbidden, &closed, &closed).is_empty());
    assert!(run(&AdditionalPropertiesForbidden, &closed, &open).is_empty());
}

#[test]
fn explicit_true_equals_absent() {
    let open = schemas(
        r#"
    Bag:
      type: object
"#,
    );
    let explicit = schemas(
        r#"
    Bag:
      type: object
      additionalProperties: true
"#,
    );
    assert!(run(&AdditionalPropertiesForbidden, &open, &explicit).is_empty());
    assert!(run(&AdditionalPropertiesTypeChanged, &open, &explicit).is_empty());
}

#[test]
fn additional_properties_type_changed() {
    let strings = schemas(
        r#"
    Bag:
      type: object
      additionalProperties:
        type: string
"#,
    );
    let integers = schemas(
        r#"
    Bag:
      type: object
      additionalProperties:
        type: integer
"#,
    );
    let changes = run(&AdditionalPropertiesTypeChanged, &strings, &integers);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_value(), Some("string"));
    assert_eq!(changes[0].new_value(), Some("integer"));
}

#[test]
fn bounds_inside_untyped_object_are_compared() {
    let untyped = |maximum: u32| {
        schemas(&format!(
            r#"
    User:
      properties:
        age:
          type: integer
          maximum: {maximum}
"#
        ))
    };
    let changes = run(&MaximumDecreased, &untyped(100), &untyped(50));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].location().to_string(), "Schema: User.age");
    assert_eq!(changes[0].old_value(), Some("100"));
    assert_eq!(changes[0].new_value(), Some("50"));
}

#[test]
fn string_with_mixed_keywords_keeps_length_checks() {
    let old = item(
        r#"
          type: string
          maxLength: 64
          minimum: 1
"#,
    );
    let new = item(
        r#"
          type: string
          maxLength: 32
          minimum: 1
"#,
    );
    assert_eq!(run(&MaxLengthDecreased, &old, &new).len(), 1);
}
