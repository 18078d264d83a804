//! Validation of the discovery document and base URL detection.

use std::collections::HashSet;

use axum::http::HeaderMap;
use serde::Serialize;
use url::Url;

use crate::chain;
use crate::types::{Action, Metadata, Param};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MetadataError {
    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },
    #[error("`{field}` is not an absolute http(s) URL: {value}")]
    BadUrl { field: &'static str, value: String },
    #[error("metadata declares no actions")]
    NoActions,
    #[error("action `{label}`: path `{path}` must start with `/`")]
    BadPath { label: String, path: String },
    #[error("action `{label}`: unsupported chain `{chain}`")]
    UnknownChain { label: String, chain: String },
    #[error("action `{label}`: invalid parameter name `{name}`")]
    BadParamName { label: String, name: String },
    #[error("action `{label}`: duplicate parameter `{name}`")]
    DuplicateParam { label: String, name: String },
}

/// A metadata document that passed [`validate`].
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ValidatedMetadata(Metadata);

impl AsRef<Metadata> for ValidatedMetadata {
    fn as_ref(&self) -> &Metadata {
        &self.0
    }
}

pub fn validate(metadata: Metadata) -> Result<ValidatedMetadata, MetadataError> {
    non_empty("title", &metadata.title)?;
    non_empty("description", &metadata.description)?;
    http_url("url", &metadata.url)?;
    http_url("icon", &metadata.icon)?;
    http_url("baseUrl", &metadata.base_url)?;

    if metadata.actions.is_empty() {
        return Err(MetadataError::NoActions);
    }
    for action in &metadata.actions {
        validate_action(action)?;
    }

    Ok(ValidatedMetadata(metadata))
}

fn validate_action(action: &Action) -> Result<(), MetadataError> {
    non_empty("label", &action.label)?;
    non_empty("description", &action.description)?;

    if !action.path.starts_with('/') {
        return Err(MetadataError::BadPath {
            label: action.label.clone(),
            path: action.path.clone(),
        });
    }

    if chain::by_key(&action.chains.source).is_none() {
        return Err(MetadataError::UnknownChain {
            label: action.label.clone(),
            chain: action.chains.source.clone(),
        });
    }

    let mut seen = HashSet::new();
    for Param { name, label, .. } in &action.params {
        non_empty("label", label)?;
        if !is_identifier(name) {
            return Err(MetadataError::BadParamName {
                label: action.label.clone(),
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(MetadataError::DuplicateParam {
                label: action.label.clone(),
                name: name.clone(),
            });
        }
    }

    Ok(())
}

fn non_empty(field: &'static str, value: &str) -> Result<(), MetadataError> {
    if value.trim().is_empty() {
        Err(MetadataError::Empty { field })
    } else {
        Ok(())
    }
}

fn http_url(field: &'static str, value: &str) -> Result<(), MetadataError> {
    match Url::parse(value) {
        Ok(u) if matches!(u.scheme(), "http" | "https") && u.has_host() => Ok(()),
        _ => Err(MetadataError::BadUrl {
            field,
            value: value.to_string(),
        }),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `<proto>://<host>` as seen by the client, falling back to the given defaults.
pub fn base_url(headers: &HeaderMap, default_protocol: &str, default_host: &str) -> String {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let host = header_str("host").unwrap_or(default_host);
    // Proxies may append: "https, http".
    let protocol = header_str("x-forwarded-proto")
        .and_then(|p| p.split(',').next())
        .map(str::trim)
        .unwrap_or(default_protocol);

    format!("{protocol}://{host}")
}
