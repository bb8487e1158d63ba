use indexmap::IndexMap;
use openapiv3::{APIKeyLocation, OAuth2Flows, OpenAPI, SecurityRequirement, SecurityScheme};

use super::Rule;
use crate::change::{Change, ChangeError, ChangeKind, Location, Severity};
use crate::document::{security_requirements, security_schemes, shared_operations};

fn scheme_names(requirement: &SecurityRequirement) -> Vec<&str> {
    let mut names: Vec<&str> = requirement.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

fn describe(requirements: &[SecurityRequirement]) -> String {
    requirements
        .iter()
        .map(|r| scheme_names(r).join(" + "))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct SecurityRequirementAdded;

impl Rule for SecurityRequirementAdded {
    fn name(&self) -> &'static str {
        "security-requirement-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for op in shared_operations(old, new) {
            let old_reqs = security_requirements(old, op.old);
            let new_reqs = security_requirements(new, op.new);
            if new_reqs.is_empty() {
                continue;
            }
            if old_reqs.is_empty() {
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::SecurityRequirementAdded)
                        .severity(Severity::Critical)
                        .location(op.location())
                        .description(format!(
                            "{} {} now requires authentication",
                            op.method, op.path
                        ))
                        .old_value("none")
                        .new_value(describe(new_reqs))
                        .breaking(true)
                        .build()?,
                );
                continue;
            }
            let known: Vec<Vec<&str>> = old_reqs.iter().map(scheme_names).collect();
            for requirement in new_reqs {
                let names = scheme_names(requirement);
                if known.contains(&names) {
                    continue;
                }
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::SecurityRequirementAdded)
                        .severity(Severity::Major)
                        .location(op.location())
                        .description(format!(
                            "New security requirement '{}' was added",
                            names.join(" + ")
                        ))
                        .old_value(describe(old_reqs))
                        .new_value(names.join(" + "))
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

pub struct SecurityRequirementRemoved;

impl Rule for SecurityRequirementRemoved {
    fn name(&self) -> &'static str {
        "security-requirement-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        shared_operations(old, new)
            .filter_map(|op| {
                let old_reqs = security_requirements(old, op.old);
                let new_reqs = security_requirements(new, op.new);
                (!old_reqs.is_empty() && new_reqs.is_empty()).then(|| {
                    Change::builder()
                        .kind(ChangeKind::SecurityRequirementRemoved)
                        .severity(Severity::Info)
                        .location(op.location())
                        .description(format!(
                            "{} {} no longer requires authentication",
                            op.method, op.path
                        ))
                        .old_value(describe(old_reqs))
                        .new_value("none")
                        .build()
                })
            })
            .collect()
    }
}

fn scheme_type(scheme: &SecurityScheme) -> &'static str {
    match scheme {
        SecurityScheme::APIKey { .. } => "apiKey",
        SecurityScheme::HTTP { .. } => "http",
        SecurityScheme::OAuth2 { .. } => "oauth2",
        SecurityScheme::OpenIDConnect { .. } => "openIdConnect",
    }
}

fn key_location(location: &APIKeyLocation) -> &'static str {
    match location {
        APIKeyLocation::Query => "query",
        APIKeyLocation::Header => "header",
        APIKeyLocation::Cookie => "cookie",
    }
}

/// Security schemes defined in both documents.
fn shared_schemes<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = (&'a str, &'a SecurityScheme, &'a SecurityScheme)> {
    security_schemes(old).filter_map(move |(name, old_scheme)| {
        security_schemes(new)
            .find(|(n, _)| *n == name)
            .map(|(_, new_scheme)| (name, old_scheme, new_scheme))
    })
}

pub struct SecuritySchemeChanged;

impl Rule for SecuritySchemeChanged {
    fn name(&self) -> &'static str {
        "security-scheme-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (name, old_scheme, new_scheme) in shared_schemes(old, new) {
            let mut differences: Vec<(String, String, String)> = Vec::new();
            match (old_scheme, new_scheme) {
                (
                    SecurityScheme::APIKey {
                        location: old_in,
                        name: old_name,
                        ..
                    },
                    SecurityScheme::APIKey {
                        location: new_in,
                        name: new_name,
                        ..
                    },
                ) => {
                    let (from, to) = (key_location(old_in), key_location(new_in));
                    if from != to {
                        differences.push((
                            format!("API key moved from {from} to {to}"),
                            from.to_string(),
                            to.to_string(),
                        ));
                    }
                    if old_name != new_name {
                        differences.push((
                            format!("API key name changed from '{old_name}' to '{new_name}'"),
                            old_name.clone(),
                            new_name.clone(),
                        ));
                    }
                }
                (
                    SecurityScheme::HTTP {
                        scheme: old_http, ..
                    },
                    SecurityScheme::HTTP {
                        scheme: new_http, ..
                    },
                ) => {
                    if old_http != new_http {
                        differences.push((
                            format!("HTTP auth scheme changed from {old_http} to {new_http}"),
                            old_http.clone(),
                            new_http.clone(),
                        ));
                    }
                }
                _ => {
                    let (from, to) = (scheme_type(old_scheme), scheme_type(new_scheme));
                    if from != to {
                        differences.push((
                            format!("Scheme type changed from {from} to {to}"),
                            from.to_string(),
                            to.to_string(),
                        ));
                    }
                }
            }
            for (description, from, to) in differences {
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::SecuritySchemeChanged)
                        .severity(Severity::Critical)
                        .location(Location::security_scheme(name, None))
                        .description(description)
                        .old_value(from)
                        .new_value(to)
                        .breaking(true)
                        .build()?,
                );
            }
        }
        Ok(changes)
    }
}

struct Flow<'a> {
    name: &'static str,
    urls: Vec<(&'static str, &'a str)>,
    scopes: &'a IndexMap<String, String>,
}

fn flows(flows: &OAuth2Flows) -> Vec<Flow<'_>> {
    let mut out = Vec::new();
    if let Some(flow) = &flows.implicit {
        out.push(Flow {
            name: "implicit",
            urls: vec![("authorizationUrl", flow.authorization_url.as_str())],
            scopes: &flow.scopes,
        });
    }
    if let Some(flow) = &flows.password {
        out.push(Flow {
            name: "password",
            urls: vec![("tokenUrl", flow.token_url.as_str())],
            scopes: &flow.scopes,
        });
    }
    if let Some(flow) = &flows.client_credentials {
        out.push(Flow {
            name: "clientCredentials",
            urls: vec![("tokenUrl", flow.token_url.as_str())],
            scopes: &flow.scopes,
        });
    }
    if let Some(flow) = &flows.authorization_code {
        out.push(Flow {
            name: "authorizationCode",
            urls: vec![
                ("authorizationUrl", flow.authorization_url.as_str()),
                ("tokenUrl", flow.token_url.as_str()),
            ],
            scopes: &flow.scopes,
        });
    }
    out
}

/// OAuth2 schemes defined in both documents, with their flows.
fn oauth_schemes<'a>(
    old: &'a OpenAPI,
    new: &'a OpenAPI,
) -> impl Iterator<Item = (&'a str, Vec<Flow<'a>>, Vec<Flow<'a>>)> {
    shared_schemes(old, new).filter_map(|(name, old_scheme, new_scheme)| {
        match (old_scheme, new_scheme) {
            (
                SecurityScheme::OAuth2 {
                    flows: old_flows, ..
                },
                SecurityScheme::OAuth2 {
                    flows: new_flows, ..
                },
            ) => Some((name, flows(old_flows), flows(new_flows))),
            _ => None,
        }
    })
}

pub struct OAuthFlowChanged;

impl Rule for OAuthFlowChanged {
    fn name(&self) -> &'static str {
        "oauth-flow-changed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (name, old_flows, new_flows) in oauth_schemes(old, new) {
            let removed: Vec<&Flow> = old_flows
                .iter()
                .filter(|flow| !new_flows.iter().any(|f| f.name == flow.name))
                .collect();
            for flow in &removed {
                changes.push(
                    Change::builder()
                        .kind(ChangeKind::OauthFlowChanged)
                        .severity(Severity::Critical)
                        .location(Location::security_scheme(name, Some(flow.name)))
                        .description(format!("OAuth flow '{}' was removed", flow.name))
                        .old_value(flow.name)
                        .breaking(true)
                        .build()?,
                );
            }
            if !removed.is_empty() {
                continue;
            }
            for old_flow in &old_flows {
                let Some(new_flow) = new_flows.iter().find(|f| f.name == old_flow.name) else {
                    continue;
                };
                for ((field, from), (_, to)) in old_flow.urls.iter().zip(&new_flow.urls) {
                    if from == to {
                        continue;
                    }
                    changes.push(
                        Change::builder()
                            .kind(ChangeKind::OauthFlowChanged)
                            .severity(Severity::Critical)
                            .location(Location::security_scheme(name, Some(old_flow.name)))
                            .description(format!(
                                "{field} of OAuth flow '{}' changed",
                                old_flow.name
                            ))
                            .old_value(*from)
                            .new_value(*to)
                            .breaking(true)
                            .build()?,
                    );
                }
            }
        }
        Ok(changes)
    }
}

pub struct OAuthScopeRemoved;

impl Rule for OAuthScopeRemoved {
    fn name(&self) -> &'static str {
        "oauth-scope-removed"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for (name, old_flows, new_flows) in oauth_schemes(old, new) {
            for old_flow in &old_flows {
                let Some(new_flow) = new_flows.iter().find(|f| f.name == old_flow.name) else {
                    continue;
                };
                for scope in old_flow.scopes.keys() {
                    if new_flow.scopes.contains_key(scope) {
                        continue;
                    }
                    changes.push(
                        Change::builder()
                            .kind(ChangeKind::OauthScopeRemoved)
                            .severity(Severity::Critical)
                            .location(Location::security_scheme(name, Some(old_flow.name)))
                            .description(format!("OAuth scope '{scope}' was removed"))
                            .old_value(scope)
                            .breaking(true)
                            .build()?,
                    );
                }
            }
        }
        Ok(changes)
    }
}

pub struct OAuthScopeAdded;

impl Rule for OAuthScopeAdded {
    fn name(&self) -> &'static str {
        "oauth-scope-added"
    }

    fn evaluate(&self, old: &OpenAPI, new: &OpenAPI) -> Result<Vec<Change>, ChangeError> {
        let mut changes = Vec::new();
        for op in shared_operations(old, new) {
            let old_reqs = security_requirements(old, op.old);
            for requirement in security_requirements(new, op.new) {
                for (scheme, scopes) in requirement {
                    let Some(old_scopes) = old_reqs.iter().find_map(|r| r.get(scheme)) else {
                        continue;
                    };
                    for scope in scopes.iter().filter(|s| !old_scopes.contains(s)) {
                        changes.push(
                            Change::builder()
                                .kind(ChangeKind::OauthScopeAdded)
                                .severity(Severity::Major)
                                .location(op.location())
                                .description(format!(
                                    "Scope '{scope}' of '{scheme}' is now required"
                                ))
                                .old_value(old_scopes.join(", "))
                                .new_value(scope)
                                .breaking(true)
                                .build()?,
                        );
                    }
                }
            }
        }
        Ok(changes)
    }
}
