//! The rule catalogue.
//!
//! Each rule inspects one kind of difference between two documents and is
//! independent of every other rule. Rules only look at anchors present on both
//! sides (see [`crate::document`]); an anchor that vanished is reported once,
//! by the rule dedicated to its removal.

use openapiv3::OpenAPI;

use crate::change::{Change, ChangeError};

pub mod bodies;
pub mod callbacks;
pub mod composition;
pub mod constraints;
pub mod endpoints;
pub mod metadata;
pub mod parameters;
pub mod properties;
pub mod responses;
pub mod security;

#[cfg(test)]
pub(crate) mod testing;

pub trait Rule: Send + Sync {
    /// Stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Compares the two documents. Missing sections yield no changes, never an error.
    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError>;
}

/// Every registered rule, grouped by the area of the document it inspects.
pub fn all() -> Vec<Box<dyn Rule>> {
    vec![
        // endpoints
        Box::new(endpoints::EndpointRemoved),
        Box::new(endpoints::EndpointAdded),
        Box::new(endpoints::MethodRemoved),
        Box::new(endpoints::MethodAdded),
        Box::new(endpoints::OperationDeprecated),
        // parameters
        Box::new(parameters::RequiredParameterAdded),
        Box::new(parameters::ParameterAdded),
        Box::new(parameters::ParameterRemoved),
        Box::new(parameters::ParameterTypeChanged),
        Box::new(parameters::ParameterLocationChanged),
        Box::new(parameters::ParameterStyleChanged),
        Box::new(parameters::ParameterExplodeChanged),
        Box::new(parameters::ParameterDeprecated),
        // request bodies
        Box::new(bodies::RequestBodyRemoved),
        Box::new(bodies::RequestBodyAdded),
        Box::new(bodies::RequestBodyRequired),
        Box::new(bodies::RequestContentTypeRemoved),
        Box::new(bodies::RequestContentTypeAdded),
        Box::new(bodies::RequestSchemaChanged),
        // responses
        Box::new(responses::ResponseCodeRemoved),
        Box::new(responses::ResponseCodeChanged),
        Box::new(responses::ResponseContentTypeRemoved),
        Box::new(responses::ResponseContentTypeAdded),
        Box::new(responses::ResponseSchemaChanged),
        Box::new(responses::ResponseHeaderRemoved),
        Box::new(responses::ResponseHeaderAdded),
        Box::new(responses::ResponseHeaderRequired),
        Box::new(responses::LinkRemoved),
        Box::new(responses::LinkAdded),
        // callbacks
        Box::new(callbacks::CallbackRemoved),
        Box::new(callbacks::CallbackAdded),
        Box::new(callbacks::CallbackUrlChanged),
        // schema properties
        Box::new(properties::PropertyRemoved),
        Box::new(properties::PropertyAdded),
        Box::new(properties::PropertyRequired),
        Box::new(properties::PropertyTypeChanged),
        Box::new(properties::PropertyFormatChanged),
        Box::new(properties::ReadOnlyChanged),
        Box::new(properties::WriteOnlyChanged),
        Box::new(properties::DefaultValueChanged),
        Box::new(properties::DefaultValueRemoved),
        Box::new(properties::SchemaDeprecated),
        // constraints
        Box::new(constraints::MinLengthIncreased),
        Box::new(constraints::MaxLengthDecreased),
        Box::new(constraints::PatternAdded),
        Box::new(constraints::PatternChanged),
        Box::new(constraints::MinimumIncreased),
        Box::new(constraints::MaximumDecreased),
        Box::new(constraints::MinItemsIncreased),
        Box::new(constraints::MaxItemsDecreased),
        Box::new(constraints::UniqueItemsAdded),
        Box::new(constraints::AdditionalPropertiesForbidden),
        Box::new(constraints::AdditionalPropertiesTypeChanged),
        // composition
        Box::new(composition::EnumValueRemoved),
        Box::new(composition::EnumValueAdded),
        Box::new(composition::OneOfOptionRemoved),
        Box::new(composition::DiscriminatorChanged),
        // security
        Box::new(security::SecurityRequirementAdded),
        Box::new(security::SecurityRequirementRemoved),
        Box::new(security::SecuritySchemeChanged),
        Box::new(security::OAuthFlowChanged),
        Box::new(security::OAuthScopeRemoved),
        Box::new(security::OAuthScopeAdded),
        // metadata
        Box::new(metadata::ApiVersionChanged),
        Box::new(metadata::BasePathChanged),
    ]
}
