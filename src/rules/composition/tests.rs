use super::*;
use crate::rules::testing::{run, schemas};

const STATUS: &str = r#"
    Status:
      type: string
      enum: [active, suspended, closed]
    Account:
      type: object
      properties:
        tier:
          type: integer
          enum: [1, 2, 3]
"#;

#[test]
fn enum_value_removed_at_schema_and_property_level() {
    let old = schemas(STATUS);
    let new = schemas(
        r#"
    Status:
      type: string
      enum: [active, closed]
    Account:
      type: object
      properties:
        tier:
          type: integer
          enum: [1, 2]
"#,
    );
    let changes = run(&EnumValueRemoved, &old, &new);
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].location().to_string(), "Schema: Status");
    assert_eq!(changes[0].old_value(), Some("suspended"));
    assert_eq!(changes[1].location().to_string(), "Schema: Account.tier");
    assert_eq!(changes[1].old_value(), Some("3"));
    assert!(changes.iter().all(|c| c.is_breaking()));

    let added = run(&EnumValueAdded, &new, &old);
    assert_eq!(added.len(), 2);
    assert!(added.iter().all(|c| c.severity() == Severity::Info));
}

#[test]
fn enum_introduced_is_not_reported() {
    let old = schemas(
        r#"
    Status:
      type: string
"#,
    );
    let new = schemas(STATUS);
    assert!(run(&EnumValueAdded, &old, &new).is_empty());
    assert!(run(&EnumValueRemoved, &new, &old).is_empty());
}

const PET: &str = r##"
    Pet:
      oneOf:
        - $ref: "#/components/schemas/Cat"
        - $ref: "#/components/schemas/Dog"
      discriminator:
        propertyName: petType
    Cat:
      type: object
    Dog:
      type: object
"##;

#[test]
fn one_of_reference_removed_is_major() {
    let old = schemas(PET);
    let new = schemas(
        r##"
    Pet:
      oneOf:
        - $ref: "#/components/schemas/Cat"
      discriminator:
        propertyName: petType
    Cat:
      type: object
"##,
    );
    let changes = run(&OneOfOptionRemoved, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Major);
    assert_eq!(changes[0].old_value(), Some("#/components/schemas/Dog"));
}

#[test]
fn one_of_replaced_by_plain_schema_is_critical() {
    let old = schemas(PET);
    let new = schemas(
        r#"
    Pet:
      type: object
    Cat:
      type: object
    Dog:
      type: object
"#,
    );
    let changes = run(&OneOfOptionRemoved, &old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Critical);
}

#[test]
fn one_of_addition_is_not_a_removal() {
    let old = schemas(PET);
    let new = schemas(
        r##"
    Pet:
      oneOf:
        - $ref: "#/components/schemas/Cat"
        - $ref: "#/components/schemas/Dog"
        - $ref: "#/components/schemas/Bird"
      discriminator:
        propertyName: petType
    Cat:
      type: object
    Dog:
      type: object
    Bird:
      type: object
"##,
    );
    assert!(run(&OneOfOptionRemoved, &old, &new).is_empty());
}

#[test]
fn discriminator_changes() {
    let old = schemas(PET);
    let renamed = schemas(
        r##"
    Pet:
      oneOf:
        - $ref: "#/components/schemas/Cat"
        - $ref: "#/components/schemas/Dog"
      discriminator:
        propertyName: kind
    Cat:
      type: object
    Dog:
      type: object
"##,
    );
    let changes = run(&DiscriminatorChanged, &old, &renamed);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Critical);
    assert_eq!(changes[0].old_value(), Some("petType"));
    assert_eq!(changes[0].new_value(), Some("kind"));

    let dropped = schemas(
        r##"
    Pet:
      oneOf:
        - $ref: "#/components/schemas/Cat"
        - $ref: "#/components/schemas/Dog"
    Cat:
      type: object
    Dog:
      type: object
"##,
    );
    let changes = run(&DiscriminatorChanged, &old, &dropped);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].severity(), Severity::Major);
    assert_eq!(run(&DiscriminatorChanged, &dropped, &old).len(), 1);
}
