use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// How severe a change is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Minor,
    Major,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the rule that produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    // Endpoints
    EndpointRemoved,
    EndpointAdded,
    MethodRemoved,
    MethodAdded,
    OperationDeprecatedAdded,

    // Parameters
    ParameterAdded,
    ParameterRemoved,
    ParameterRequiredAdded,
    ParameterTypeChanged,
    ParameterLocationChanged,
    ParameterStyleChanged,
    ParameterExplodeChanged,
    ParameterDeprecatedAdded,

    // Request body
    RequestBodyAdded,
    RequestBodyRemoved,
    RequestBodyRequiredAdded,
    RequestContentTypeAdded,
    RequestContentTypeRemoved,
    RequestSchemaChanged,

    // Responses
    ResponseCodeRemoved,
    ResponseCodeChanged,
    ResponseContentTypeAdded,
    ResponseContentTypeRemoved,
    ResponseSchemaChanged,
    ResponseHeaderAdded,
    ResponseHeaderRemoved,
    ResponseHeaderRequiredAdded,
    LinkAdded,
    LinkRemoved,

    // Callbacks
    CallbackAdded,
    CallbackRemoved,
    CallbackUrlChanged,

    // Schema properties
    PropertyAdded,
    PropertyRemoved,
    PropertyRequiredAdded,
    PropertyTypeChanged,
    PropertyFormatChanged,
    PropertyReadOnlyChanged,
    PropertyWriteOnlyChanged,
    DefaultValueChanged,
    DefaultValueRemoved,
    SchemaDeprecatedAdded,

    // Constraints
    PropertyMinLengthIncreased,
    PropertyMaxLengthDecreased,
    PropertyPatternAdded,
    PropertyPatternChanged,
    PropertyMinimumIncreased,
    PropertyMaximumDecreased,
    ArrayMinItemsIncreased,
    ArrayMaxItemsDecreased,
    ArrayUniqueItemsAdded,
    AdditionalPropertiesForbidden,
    AdditionalPropertiesTypeChanged,

    // Composition
    EnumValueAdded,
    EnumValueRemoved,
    OneOfOptionRemoved,
    DiscriminatorChanged,

    // Security
    SecurityRequirementAdded,
    SecurityRequirementRemoved,
    SecuritySchemeChanged,
    OauthFlowChanged,
    OauthScopeAdded,
    OauthScopeRemoved,

    // Metadata
    ApiVersionChanged,
    BasePathChanged,
}

impl ChangeKind {
    pub fn description(&self) -> &'static str {
        use ChangeKind::*;
        match self {
            EndpointRemoved => "Endpoint removed",
            EndpointAdded => "Endpoint added",
            MethodRemoved => "HTTP method removed",
            MethodAdded => "HTTP method added",
            OperationDeprecatedAdded => "Operation deprecated",
            ParameterAdded => "Optional parameter added",
            ParameterRemoved => "Parameter removed",
            ParameterRequiredAdded => "Required parameter added",
            ParameterTypeChanged => "Parameter type changed",
            ParameterLocationChanged => "Parameter location changed",
            ParameterStyleChanged => "Parameter style changed",
            ParameterExplodeChanged => "Parameter explode changed",
            ParameterDeprecatedAdded => "Parameter deprecated",
            RequestBodyAdded => "Optional request body added",
            RequestBodyRemoved => "Request body removed",
            RequestBodyRequiredAdded => "Request body became required",
            RequestContentTypeAdded => "Request content type added",
            RequestContentTypeRemoved => "Request content type removed",
            RequestSchemaChanged => "Request schema changed",
            ResponseCodeRemoved => "Response code removed",
            ResponseCodeChanged => "Success response code changed",
            ResponseContentTypeAdded => "Response content type added",
            ResponseContentTypeRemoved => "Response content type removed",
            ResponseSchemaChanged => "Response schema changed",
            ResponseHeaderAdded => "Response header added",
            ResponseHeaderRemoved => "Response header removed",
            ResponseHeaderRequiredAdded => "Response header became required",
            LinkAdded => "Response link added",
            LinkRemoved => "Response link removed",
            CallbackAdded => "Callback added",
            CallbackRemoved => "Callback removed",
            CallbackUrlChanged => "Callback URL changed",
            PropertyAdded => "Optional property added",
            PropertyRemoved => "Property removed",
            PropertyRequiredAdded => "Property became required",
            PropertyTypeChanged => "Property type changed",
            PropertyFormatChanged => "Property format changed",
            PropertyReadOnlyChanged => "Property readOnly changed",
            PropertyWriteOnlyChanged => "Property writeOnly changed",
            DefaultValueChanged => "Default value changed",
            DefaultValueRemoved => "Default value removed",
            SchemaDeprecatedAdded => "Schema deprecated",
            PropertyMinLengthIncreased => "Minimum length increased",
            PropertyMaxLengthDecreased => "Maximum length decreased",
            PropertyPatternAdded => "Pattern added",
            PropertyPatternChanged => "Pattern changed",
            PropertyMinimumIncreased => "Minimum value increased",
            PropertyMaximumDecreased => "Maximum value decreased",
            ArrayMinItemsIncreased => "Minimum array items increased",
            ArrayMaxItemsDecreased => "Maximum array items decreased",
            ArrayUniqueItemsAdded => "Array items must be unique",
            AdditionalPropertiesForbidden => "Additional properties forbidden",
            AdditionalPropertiesTypeChanged => "Additional properties type changed",
            EnumValueAdded => "Enum value added",
            EnumValueRemoved => "Enum value removed",
            OneOfOptionRemoved => "oneOf option removed",
            DiscriminatorChanged => "Discriminator changed",
            SecurityRequirementAdded => "Security requirement added",
            SecurityRequirementRemoved => "Security requirement removed",
            SecuritySchemeChanged => "Security scheme changed",
            OauthFlowChanged => "OAuth flow changed",
            OauthScopeAdded => "OAuth scope added",
            OauthScopeRemoved => "OAuth scope removed",
            ApiVersionChanged => "API version changed",
            BasePathChanged => "Base path changed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Where in the document a change was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Path(String),
    Operation {
        path: String,
        method: String,
    },
    Response {
        path: String,
        method: String,
        status: String,
    },
    Schema {
        name: String,
        property: Option<String>,
    },
    SecurityScheme {
        name: String,
        flow: Option<String>,
    },
    Info,
    Server,
}

impl Location {
    pub fn operation(path: &str, method: impl fmt::Display) -> Self {
        Location::Operation {
            path: path.to_string(),
            method: method.to_string(),
        }
    }

    pub fn response(path: &str, method: impl fmt::Display, status: &str) -> Self {
        Location::Response {
            path: path.to_string(),
            method: method.to_string(),
            status: status.to_string(),
        }
    }

    pub fn schema(name: &str) -> Self {
        Location::Schema {
            name: name.to_string(),
            property: None,
        }
    }

    pub fn property(name: &str, property: &str) -> Self {
        Location::Schema {
            name: name.to_string(),
            property: Some(property.to_string()),
        }
    }

    pub fn security_scheme(name: &str, flow: Option<&str>) -> Self {
        Location::SecurityScheme {
            name: name.to_string(),
            flow: flow.map(str::to_string),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(path) => write!(f, "{path}"),
            Location::Operation { path, method } => write!(f, "{path} [{method}]"),
            Location::Response {
                path,
                method,
                status,
            } => write!(f, "{path} [{method}] Response: {status}"),
            Location::Schema {
                name,
                property: None,
            } => write!(f, "Schema: {name}"),
            Location::Schema {
                name,
                property: Some(property),
            } => write!(f, "Schema: {name}.{property}"),
            Location::SecurityScheme { name, flow: None } => write!(f, "Security Scheme: {name}"),
            Location::SecurityScheme {
                name,
                flow: Some(flow),
            } => write!(f, "Security Scheme: {name} ({flow})"),
            Location::Info => f.write_str("Info"),
            Location::Server => f.write_str("Server"),
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeError {
    #[error("change record is missing required field `{0}`")]
    MissingField(&'static str),
}

/// A single detected difference between two documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename = "changeType")]
    kind: ChangeKind,
    severity: Severity,
    location: Location,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_value: Option<String>,
    #[serde(rename = "isBreaking")]
    breaking: bool,
}

impl Change {
    pub fn builder() -> ChangeBuilder {
        ChangeBuilder::default()
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn old_value(&self) -> Option<&str> {
        self.old_value.as_deref()
    }

    pub fn new_value(&self) -> Option<&str> {
        self.new_value.as_deref()
    }

    pub fn is_breaking(&self) -> bool {
        self.breaking
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {}",
            self.severity, self.location, self.description
        )
    }
}

/// Collects the fields of a [`Change`]. `kind`, `severity` and `location` are mandatory.
#[derive(Debug, Default)]
pub struct ChangeBuilder {
    kind: Option<ChangeKind>,
    severity: Option<Severity>,
    location: Option<Location>,
    description: String,
    old_value: Option<String>,
    new_value: Option<String>,
    breaking: bool,
}

impl ChangeBuilder {
    pub fn kind(mut self, kind: ChangeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn old_value(mut self, value: impl Into<String>) -> Self {
        self.old_value = Some(value.into());
        self
    }

    pub fn new_value(mut self, value: impl Into<String>) -> Self {
        self.new_value = Some(value.into());
        self
    }

    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    pub fn build(self) -> Result<Change, ChangeError> {
        Ok(Change {
            kind: self.kind.ok_or(ChangeError::MissingField("kind"))?,
            severity: self.severity.ok_or(ChangeError::MissingField("severity"))?,
            location: self.location.ok_or(ChangeError::MissingField("location"))?,
            description: self.description,
            old_value: self.old_value,
            new_value: self.new_value,
            breaking: self.breaking,
        })
    }
}

#[cfg(test)]
mod tests;
