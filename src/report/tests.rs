use super::*;
use crate::change::{ChangeKind, Location, Severity};

fn sample() -> Diff {
    let removed = Change::builder()
        .kind(ChangeKind::EndpointRemoved)
        .severity(Severity::Critical)
        .location(Location::Path("/users".into()))
        .description("endpoint /users was removed")
        .breaking(true)
        .build()
        .unwrap();
    let bumped = Change::builder()
        .kind(ChangeKind::ApiVersionChanged)
        .severity(Severity::Minor)
        .location(Location::Info)
        .description("version changed")
        .old_value("1.0.0")
        .new_value("1.1.0")
        .build()
        .unwrap();
    Diff::new("1.0.0", "1.1.0", vec![bumped, removed])
}

#[test]
fn text_lists_breaking_changes_first() {
    let text = render_text(&sample());
    let breaking = text.find("BREAKING CHANGES (1):").unwrap();
    let other = text.find("OTHER CHANGES (1):").unwrap();
    assert!(breaking < other);
    assert!(text.contains("[CRITICAL] /users"));
    assert!(text.contains("[MINOR] Info"));
    assert!(text.contains("Old: 1.0.0 → New: 1.1.0"));
    assert!(text.contains("Result: BREAKING CHANGES DETECTED"));
}

#[test]
fn text_for_empty_diff() {
    let text = render_text(&Diff::new("1.0.0", "1.0.0", Vec::new()));
    assert!(text.contains("No changes detected."));
    assert!(!text.contains("BREAKING CHANGES ("));
}

#[test]
fn compact_is_summary() {
    assert_eq!(
        render_compact(&sample()),
        "1.0.0 → 1.1.0 | 2 changes | 1 breaking | 1 non-breaking"
    );
}

#[test]
fn json_is_pretty_and_tagged() {
    let json = render_json(&sample()).unwrap();
    assert!(json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["changes"][0]["changeType"], "API_VERSION_CHANGED");
    assert_eq!(value["changes"][1]["isBreaking"], true);
    assert_eq!(value["breakingChangesCount"], 1);
}
