use super::*;

fn endpoint_removed() -> ChangeBuilder {
    Change::builder()
        .kind(ChangeKind::EndpointRemoved)
        .severity(Severity::Critical)
        .location(Location::Path("/users".into()))
        .description("Endpoint '/users' was removed")
        .breaking(true)
}

#[test]
fn build_with_required_fields() {
    let change = endpoint_removed().old_value("/users").build().unwrap();
    assert_eq!(change.kind(), ChangeKind::EndpointRemoved);
    assert_eq!(change.severity(), Severity::Critical);
    assert_eq!(change.old_value(), Some("/users"));
    assert_eq!(change.new_value(), None);
    assert!(change.is_breaking());
}

#[test]
fn build_rejects_missing_kind() {
    let result = Change::builder()
        .severity(Severity::Info)
        .location(Location::Info)
        .build();
    assert_eq!(result.unwrap_err(), ChangeError::MissingField("kind"));
}

#[test]
fn build_rejects_missing_severity() {
    let result = Change::builder()
        .kind(ChangeKind::ApiVersionChanged)
        .location(Location::Info)
        .build();
    assert_eq!(result.unwrap_err(), ChangeError::MissingField("severity"));
}

#[test]
fn build_rejects_missing_location() {
    let result = Change::builder()
        .kind(ChangeKind::ApiVersionChanged)
        .severity(Severity::Info)
        .build();
    assert_eq!(result.unwrap_err(), ChangeError::MissingField("location"));
}

#[test]
fn severity_is_ordered() {
    assert!(Severity::Critical > Severity::Major);
    assert!(Severity::Major > Severity::Minor);
    assert!(Severity::Minor > Severity::Warning);
    assert!(Severity::Warning > Severity::Info);
}

#[test]
fn location_display() {
    assert_eq!(Location::Path("/a".into()).to_string(), "/a");
    assert_eq!(Location::operation("/a", "GET").to_string(), "/a [GET]");
    assert_eq!(
        Location::response("/a", "GET", "200").to_string(),
        "/a [GET] Response: 200"
    );
    assert_eq!(Location::schema("User").to_string(), "Schema: User");
    assert_eq!(
        Location::property("User", "name").to_string(),
        "Schema: User.name"
    );
    assert_eq!(
        Location::security_scheme("oauth", Some("implicit")).to_string(),
        "Security Scheme: oauth (implicit)"
    );
    assert_eq!(Location::Server.to_string(), "Server");
}

#[test]
fn change_serializes_tags() {
    let change = endpoint_removed().build().unwrap();
    let json = serde_json::to_value(&change).unwrap();
    assert_eq!(json["changeType"], "ENDPOINT_REMOVED");
    assert_eq!(json["severity"], "CRITICAL");
    assert_eq!(json["location"], "/users");
    assert_eq!(json["isBreaking"], true);
    assert!(json.get("oldValue").is_none());
}

#[test]
fn change_display() {
    let change = endpoint_removed().build().unwrap();
    assert_eq!(
        change.to_string(),
        "[CRITICAL] /users - Endpoint '/users' was removed"
    );
}
