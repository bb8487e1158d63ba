//! Read-only views over an [`OpenAPI`] document.
//!
//! Rules never walk the raw tree themselves. They pair up anchors that exist on
//! both sides (paths, operations, responses, schemas, properties) through the
//! helpers here, which also resolve `#/components/...` references for
//! parameters, request bodies, responses and headers. Schema references are
//! never followed; they are compared by their reference string.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use openapiv3::{
    AdditionalProperties, AnySchema, Components, Header, IntegerFormat, MediaType, NumberFormat,
    OpenAPI, Operation, Parameter, ParameterSchemaOrContent, PathItem, PathStyle, QueryStyle,
    ReferenceOr, RequestBody, Response, Schema, SchemaKind, SecurityRequirement, SecurityScheme,
    StatusCode, StringFormat, Type, VariantOrUnknownOrEmpty,
};
use serde_json::Value;

use crate::change::Location;

// ---------------------------------------------------------------------------
// Paths and operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn operations(item: &PathItem) -> [(Method, Option<&Operation>); 7] {
    [
        (Method::Get, item.get.as_ref()),
        (Method::Post, item.post.as_ref()),
        (Method::Put, item.put.as_ref()),
        (Method::Delete, item.delete.as_ref()),
        (Method::Patch, item.patch.as_ref()),
        (Method::Head, item.head.as_ref()),
        (Method::Options, item.options.as_ref()),
    ]
}

pub fn path_items(spec: &OpenAPI) -> impl Iterator<Item = (&str, &PathItem)> {
    spec.paths
        .paths
        .iter()
        .filter_map(|(path, item)| item.as_item().map(|item| (path.as_str(), item)))
}

#[derive(Debug, Clone, Copy)]
pub struct PathPair<'a> {
    pub path: &'a str,
    pub old: &'a PathItem,
    pub new: &'a PathItem,
}

/// Paths present in both documents, in old-document order.
pub fn shared_paths<'a>(old: &'a OpenAPI, new: &'a OpenAPI) -> impl Iterator<Item = PathPair<'a>> {
    path_items(old).filter_map(move |(path, old_item)| {
        new.paths
            .paths
            .get(path)
            .and_then(|r| r.as_item())
            .map(|new_item| PathPair {
                path,
                old: old_item,
                new: new_item,
            })
    })
}

#[derive(Debug, Clone, Copy)]
pub struct OperationPair<'a> {
    pub path: &'a str,
    pub method: Method,
    pub old_item: &'a PathItem,
    pub new_item: &'a PathItem,
    pub old: &'a Operation,
    pub new: &'a Operation,
}

impl OperationPair<'_> {
    pub fn location(&self) -> Location {
        Location::operation(self.path, self.method)
    }

    pub fn response_location(&self, status: &str) -> Location {
        Location::response(self.path, self.method, status)
    }
}

/// Operations whose path and method exist in both documents.
pub fn shared_operations<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = OperationPair<'a>> {
    shared_paths(old, new).flat_map(|pair| {
        operations(pair.old)
            .into_iter()
            .zip(operations(pair.new))
            .filter_map(move |((method, old_op), (_, new_op))| {
                Some(OperationPair {
                    path: pair.path,
                    method,
                    old_item: pair.old,
                    new_item: pair.new,
                    old: old_op?,
                    new: new_op?,
                })
            })
    })
}

// ---------------------------------------------------------------------------
// Component references
// ---------------------------------------------------------------------------

type Section<T> = fn(&Components) -> &IndexMap<String, ReferenceOr<T>>;

fn resolve<'a, T>(
    spec: &'a OpenAPI,
    r: &'a ReferenceOr<T>,
    prefix: &str,
    section: Section<T>,
) -> Option<&'a T> {
    match r {
        ReferenceOr::Item(item) => Some(item),
        ReferenceOr::Reference { reference } => {
            let name = reference.strip_prefix(prefix)?;
            spec.components
                .as_ref()
                .and_then(|c| section(c).get(name))
                .and_then(|r| r.as_item())
        }
    }
}

pub fn resolve_parameter<'a>(
    spec: &'a OpenAPI,
    r: &'a ReferenceOr<Parameter>,
) -> Option<&'a Parameter> {
    resolve(spec, r, "#/components/parameters/", |c| &c.parameters)
}

pub fn resolve_request_body<'a>(
    spec: &'a OpenAPI,
    r: &'a ReferenceOr<RequestBody>,
) -> Option<&'a RequestBody> {
    resolve(spec, r, "#/components/requestBodies/", |c| &c.request_bodies)
}

pub fn resolve_response<'a>(
    spec: &'a OpenAPI,
    r: &'a ReferenceOr<Response>,
) -> Option<&'a Response> {
    resolve(spec, r, "#/components/responses/", |c| &c.responses)
}

pub fn resolve_header<'a>(spec: &'a OpenAPI, r: &'a ReferenceOr<Header>) -> Option<&'a Header> {
    resolve(spec, r, "#/components/headers/", |c| &c.headers)
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

impl ParameterLocation {
    pub fn of(p: &Parameter) -> Self {
        match p {
            Parameter::Query { .. } => ParameterLocation::Query,
            Parameter::Header { .. } => ParameterLocation::Header,
            Parameter::Path { .. } => ParameterLocation::Path,
            Parameter::Cookie { .. } => ParameterLocation::Cookie,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Path => "path",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn parameter_name(p: &Parameter) -> &str {
    &p.parameter_data_ref().name
}

fn same_parameter(a: &Parameter, b: &Parameter) -> bool {
    parameter_name(a) == parameter_name(b) && ParameterLocation::of(a) == ParameterLocation::of(b)
}

/// Operation parameters followed by the path-level parameters they do not override.
pub fn effective_parameters<'a>(
    spec: &'a OpenAPI,
    item: &'a PathItem,
    op: &'a Operation,
) -> Vec<&'a Parameter> {
    let own: Vec<&Parameter> = op
        .parameters
        .iter()
        .filter_map(|r| resolve_parameter(spec, r))
        .collect();
    let inherited: Vec<&Parameter> = item
        .parameters
        .iter()
        .filter_map(|r| resolve_parameter(spec, r))
        .filter(|p| !own.iter().any(|o| same_parameter(o, p)))
        .collect();
    own.into_iter().chain(inherited).collect()
}

pub fn find_parameter<'a>(
    params: &[&'a Parameter],
    name: &str,
    location: ParameterLocation,
) -> Option<&'a Parameter> {
    params
        .iter()
        .copied()
        .find(|p| parameter_name(p) == name && ParameterLocation::of(p) == location)
}

/// True if a parameter with this name exists, but only at a different location.
pub fn is_relocated(params: &[&Parameter], name: &str, location: ParameterLocation) -> bool {
    find_parameter(params, name, location).is_none()
        && params
            .iter()
            .any(|p| parameter_name(p) == name && ParameterLocation::of(p) != location)
}

pub fn parameter_schema(p: &Parameter) -> Option<&ReferenceOr<Schema>> {
    match &p.parameter_data_ref().format {
        ParameterSchemaOrContent::Schema(schema) => Some(schema),
        ParameterSchemaOrContent::Content(_) => None,
    }
}

pub fn parameter_style(p: &Parameter) -> &'static str {
    match p {
        Parameter::Query { style, .. } => match style {
            QueryStyle::Form => "form",
            QueryStyle::SpaceDelimited => "spaceDelimited",
            QueryStyle::PipeDelimited => "pipeDelimited",
            QueryStyle::DeepObject => "deepObject",
        },
        Parameter::Path { style, .. } => match style {
            PathStyle::Matrix => "matrix",
            PathStyle::Label => "label",
            PathStyle::Simple => "simple",
        },
        Parameter::Header { .. } => "simple",
        Parameter::Cookie { .. } => "form",
    }
}

/// `explode` defaults to true for form style and false otherwise.
pub fn parameter_explode(p: &Parameter) -> bool {
    p.parameter_data_ref()
        .explode
        .unwrap_or(parameter_style(p) == "form")
}

// ---------------------------------------------------------------------------
// Request bodies and responses
// ---------------------------------------------------------------------------

pub fn request_body<'a>(spec: &'a OpenAPI, op: &'a Operation) -> Option<&'a RequestBody> {
    op.request_body
        .as_ref()
        .and_then(|r| resolve_request_body(spec, r))
}

pub fn status_label(code: &StatusCode) -> String {
    match code {
        StatusCode::Code(code) => code.to_string(),
        StatusCode::Range(range) => format!("{range}XX"),
    }
}

pub fn is_success(status: &str) -> bool {
    status
        .parse::<u16>()
        .is_ok_and(|code| (200..300).contains(&code))
}

/// Status keys of an operation in document order, `default` last.
pub fn status_codes(op: &Operation) -> Vec<String> {
    op.responses
        .responses
        .keys()
        .map(status_label)
        .chain(op.responses.default.as_ref().map(|_| "default".to_string()))
        .collect()
}

/// First explicit 2xx code of an operation.
pub fn success_code(op: &Operation) -> Option<String> {
    status_codes(op).into_iter().find(|s| is_success(s))
}

pub fn responses<'a>(spec: &'a OpenAPI, op: &'a Operation) -> Vec<(String, &'a Response)> {
    let default = op
        .responses
        .default
        .as_ref()
        .and_then(|r| resolve_response(spec, r))
        .map(|r| ("default".to_string(), r));

    op.responses
        .responses
        .iter()
        .filter_map(|(code, r)| resolve_response(spec, r).map(|resp| (status_label(code), resp)))
        .chain(default)
        .collect()
}

#[derive(Debug, Clone)]
pub struct ResponsePair<'a> {
    pub status: String,
    pub old: &'a Response,
    pub new: &'a Response,
}

/// Responses whose status key exists in both operations.
pub fn shared_responses<'a>(
    old_spec: &'a OpenAPI,
    new_spec: &'a OpenAPI,
    pair: &OperationPair<'a>,
) -> Vec<ResponsePair<'a>> {
    let new_responses = responses(new_spec, pair.new);
    responses(old_spec, pair.old)
        .into_iter()
        .filter_map(|(status, old)| {
            new_responses
                .iter()
                .find(|(s, _)| *s == status)
                .map(|(_, new)| ResponsePair {
                    status,
                    old,
                    new: *new,
                })
        })
        .collect()
}

pub fn media_identity(media: &MediaType) -> String {
    media
        .schema
        .as_ref()
        .map(identity)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

/// URL expressions of a callback. `None` for a callback given by reference.
pub trait CallbackUrls {
    fn urls(&self) -> Option<Vec<&str>>;
}

impl CallbackUrls for IndexMap<String, PathItem> {
    fn urls(&self) -> Option<Vec<&str>> {
        Some(self.keys().map(String::as_str).collect())
    }
}

impl<T: CallbackUrls> CallbackUrls for ReferenceOr<T> {
    fn urls(&self) -> Option<Vec<&str>> {
        self.as_item().and_then(|callback| callback.urls())
    }
}

// ---------------------------------------------------------------------------
// Security
// ---------------------------------------------------------------------------

/// Operation-level requirements, falling back to the document-level ones.
pub fn security_requirements<'a>(
    spec: &'a OpenAPI,
    op: &'a Operation,
) -> &'a [SecurityRequirement] {
    op.security
        .as_deref()
        .or(spec.security.as_deref())
        .unwrap_or(&[])
}

pub fn security_schemes(spec: &OpenAPI) -> impl Iterator<Item = (&str, &SecurityScheme)> {
    spec.components.iter().flat_map(|c| {
        c.security_schemes
            .iter()
            .filter_map(|(name, r)| r.as_item().map(|s| (name.as_str(), s)))
    })
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

pub const UNKNOWN: &str = "unknown";

pub fn component_schemas(spec: &OpenAPI) -> impl Iterator<Item = (&str, &Schema)> {
    spec.components.iter().flat_map(|c| {
        c.schemas
            .iter()
            .filter_map(|(name, r)| r.as_item().map(|s| (name.as_str(), s)))
    })
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaPair<'a> {
    pub name: &'a str,
    pub old: &'a Schema,
    pub new: &'a Schema,
}

/// Component schemas defined inline in both documents.
pub fn shared_schemas<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = SchemaPair<'a>> {
    component_schemas(old).filter_map(move |(name, old_schema)| {
        component_schemas(new)
            .find(|(n, _)| *n == name)
            .map(|(_, new_schema)| SchemaPair {
                name,
                old: old_schema,
                new: new_schema,
            })
    })
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyPair<'a> {
    pub schema: &'a str,
    pub property: &'a str,
    pub old: &'a Schema,
    pub new: &'a Schema,
}

impl PropertyPair<'_> {
    pub fn location(&self) -> Location {
        Location::property(self.schema, self.property)
    }
}

/// Inline properties present in both versions of a shared schema.
pub fn shared_properties<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = PropertyPair<'a>> {
    shared_schemas(old, new).flat_map(|pair| {
        let (Some(old_props), Some(new_props)) = (properties(pair.old), properties(pair.new))
        else {
            return Vec::new();
        };
        old_props
            .iter()
            .filter_map(|(name, old_prop)| {
                let old_prop = old_prop.as_item()?;
                let new_prop = new_props.get(name)?.as_item()?;
                Some(PropertyPair {
                    schema: pair.name,
                    property: name,
                    old: old_prop,
                    new: new_prop,
                })
            })
            .collect()
    })
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyRefPair<'a> {
    pub schema: &'a str,
    pub property: &'a str,
    pub old: &'a ReferenceOr<Box<Schema>>,
    pub new: &'a ReferenceOr<Box<Schema>>,
}

/// Like [`shared_properties`] but keeping properties given by reference.
pub fn shared_property_refs<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = PropertyRefPair<'a>> {
    shared_schemas(old, new).flat_map(|pair| {
        let (Some(old_props), Some(new_props)) = (properties(pair.old), properties(pair.new))
        else {
            return Vec::new();
        };
        old_props
            .iter()
            .filter_map(|(name, old_prop)| {
                new_props.get(name).map(|new_prop| PropertyRefPair {
                    schema: pair.name,
                    property: name,
                    old: old_prop,
                    new: new_prop,
                })
            })
            .collect()
    })
}

/// Reference identity: the `$ref` string, or the schema's type label.
pub fn identity<T: Borrow<Schema>>(r: &ReferenceOr<T>) -> String {
    match r {
        ReferenceOr::Reference { reference } => reference.clone(),
        ReferenceOr::Item(schema) => type_label(schema.borrow()),
    }
}

/// `type` or `type(format)`; composite and untyped schemas get a fixed label.
pub fn type_label(schema: &Schema) -> String {
    let label = kind_label(schema);
    match format_name(schema) {
        Some(format) => format!("{label}({format})"),
        None => label.to_string(),
    }
}

fn kind_label(schema: &Schema) -> &'static str {
    match &schema.schema_kind {
        SchemaKind::Type(_) => type_name(schema).unwrap_or(UNKNOWN),
        SchemaKind::OneOf { .. } => "oneOf",
        SchemaKind::AllOf { .. } => "allOf",
        SchemaKind::AnyOf { .. } => "anyOf",
        SchemaKind::Not { .. } => "not",
        SchemaKind::Any(any) => inferred_type(any)
            .or_else(|| composite_label(any))
            .unwrap_or(UNKNOWN),
    }
}

/// A schema mixing keywords of several kinds, or one without `type`, is parsed
/// as [`SchemaKind::Any`]. Its type is the declared one, or else inferred from
/// the keywords it carries.
fn inferred_type(any: &AnySchema) -> Option<&'static str> {
    const TYPES: [&str; 6] = ["string", "number", "integer", "object", "array", "boolean"];
    if let Some(typ) = &any.typ {
        return TYPES.into_iter().find(|t| *t == typ.as_str());
    }
    if !any.properties.is_empty()
        || !any.required.is_empty()
        || any.additional_properties.is_some()
        || any.min_properties.is_some()
        || any.max_properties.is_some()
    {
        Some("object")
    } else if any.items.is_some()
        || any.min_items.is_some()
        || any.max_items.is_some()
        || any.unique_items.is_some()
    {
        Some("array")
    } else if any.pattern.is_some() || any.min_length.is_some() || any.max_length.is_some() {
        Some("string")
    } else {
        None
    }
}

fn composite_label(any: &AnySchema) -> Option<&'static str> {
    if !any.one_of.is_empty() {
        Some("oneOf")
    } else if !any.all_of.is_empty() {
        Some("allOf")
    } else if !any.any_of.is_empty() {
        Some("anyOf")
    } else if any.not.is_some() {
        Some("not")
    } else {
        None
    }
}

pub fn type_name(schema: &Schema) -> Option<&'static str> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(_)) => Some("string"),
        SchemaKind::Type(Type::Number(_)) => Some("number"),
        SchemaKind::Type(Type::Integer(_)) => Some("integer"),
        SchemaKind::Type(Type::Object(_)) => Some("object"),
        SchemaKind::Type(Type::Array(_)) => Some("array"),
        SchemaKind::Type(Type::Boolean(_)) => Some("boolean"),
        SchemaKind::Any(any) => inferred_type(any),
        _ => None,
    }
}

fn format_of<T>(
    format: &VariantOrUnknownOrEmpty<T>,
    name: fn(&T) -> &'static str,
) -> Option<String> {
    match format {
        VariantOrUnknownOrEmpty::Item(item) => Some(name(item).to_string()),
        VariantOrUnknownOrEmpty::Unknown(other) => Some(other.clone()),
        VariantOrUnknownOrEmpty::Empty => None,
    }
}

pub fn format_name(schema: &Schema) -> Option<String> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(s)) => format_of(&s.format, |f| match f {
            StringFormat::Date => "date",
            StringFormat::DateTime => "date-time",
            StringFormat::Password => "password",
            StringFormat::Byte => "byte",
            StringFormat::Binary => "binary",
        }),
        SchemaKind::Type(Type::Number(n)) => format_of(&n.format, |f| match f {
            NumberFormat::Float => "float",
            NumberFormat::Double => "double",
        }),
        SchemaKind::Type(Type::Integer(i)) => format_of(&i.format, |f| match f {
            IntegerFormat::Int32 => "int32",
            IntegerFormat::Int64 => "int64",
        }),
        SchemaKind::Any(any) => any.format.clone(),
        _ => None,
    }
}

pub fn properties(schema: &Schema) -> Option<&IndexMap<String, ReferenceOr<Box<Schema>>>> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Object(obj)) => Some(&obj.properties),
        SchemaKind::Any(any) if inferred_type(any) == Some("object") => Some(&any.properties),
        _ => None,
    }
}

pub fn required(schema: &Schema) -> &[String] {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Object(obj)) => &obj.required,
        SchemaKind::Any(any) => &any.required,
        _ => &[],
    }
}

pub fn additional_properties(schema: &Schema) -> Option<&AdditionalProperties> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Object(obj)) => obj.additional_properties.as_ref(),
        SchemaKind::Any(any) => any.additional_properties.as_ref(),
        _ => None,
    }
}

/// Enum literals of a primitive schema; empty when the schema has no enum.
pub fn enum_values(schema: &Schema) -> Vec<Value> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(s)) => s
            .enumeration
            .iter()
            .map(|v| v.clone().map_or(Value::Null, Value::String))
            .collect(),
        SchemaKind::Type(Type::Number(n)) => n
            .enumeration
            .iter()
            .map(|v| {
                v.and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            })
            .collect(),
        SchemaKind::Type(Type::Integer(i)) => i
            .enumeration
            .iter()
            .map(|v| v.map_or(Value::Null, Value::from))
            .collect(),
        SchemaKind::Any(any) => any.enumeration.clone(),
        _ => Vec::new(),
    }
}

/// Renders a literal for display; strings lose their quotes.
pub fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn min_length(schema: &Schema) -> Option<usize> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(s)) => s.min_length,
        SchemaKind::Any(any) => any.min_length,
        _ => None,
    }
}

pub fn max_length(schema: &Schema) -> Option<usize> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(s)) => s.max_length,
        SchemaKind::Any(any) => any.max_length,
        _ => None,
    }
}

pub fn pattern(schema: &Schema) -> Option<&str> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(s)) => s.pattern.as_deref(),
        SchemaKind::Any(any) => any.pattern.as_deref(),
        _ => None,
    }
}

pub fn is_string(schema: &Schema) -> bool {
    type_name(schema) == Some("string")
}

pub fn minimum(schema: &Schema) -> Option<f64> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Number(n)) => n.minimum,
        SchemaKind::Type(Type::Integer(i)) => i.minimum.map(|v| v as f64),
        SchemaKind::Any(any) => any.minimum,
        _ => None,
    }
}

pub fn maximum(schema: &Schema) -> Option<f64> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Number(n)) => n.maximum,
        SchemaKind::Type(Type::Integer(i)) => i.maximum.map(|v| v as f64),
        SchemaKind::Any(any) => any.maximum,
        _ => None,
    }
}

pub fn is_array(schema: &Schema) -> bool {
    type_name(schema) == Some("array")
}

pub fn min_items(schema: &Schema) -> Option<usize> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Array(a)) => a.min_items,
        SchemaKind::Any(any) => any.min_items,
        _ => None,
    }
}

pub fn max_items(schema: &Schema) -> Option<usize> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Array(a)) => a.max_items,
        SchemaKind::Any(any) => any.max_items,
        _ => None,
    }
}

pub fn unique_items(schema: &Schema) -> bool {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Array(a)) => a.unique_items,
        SchemaKind::Any(any) => any.unique_items.unwrap_or(false),
        _ => false,
    }
}

pub fn one_of(schema: &Schema) -> &[ReferenceOr<Schema>] {
    match &schema.schema_kind {
        SchemaKind::OneOf { one_of } => one_of,
        SchemaKind::Any(any) => &any.one_of,
        _ => &[],
    }
}

/// Formats a bound without a trailing `.0` for whole numbers.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
