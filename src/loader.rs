use std::path::Path;

use openapiv3::OpenAPI;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: '{0}'")]
    NotFound(String),
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse '{path}': {source}")]
    Parse { path: String, source: ParseError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn other(self) -> Self {
        match self {
            Format::Json => Format::Yaml,
            Format::Yaml => Format::Json,
        }
    }
}

fn detect_format(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Some(Format::Json),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            Some(Format::Yaml)
        }
        _ => None,
    }
}

/// A document starting with `{` is taken for JSON, anything else for YAML.
fn sniff_format(content: &str) -> Format {
    if content.trim_start().starts_with('{') {
        Format::Json
    } else {
        Format::Yaml
    }
}

fn parse_content(content: &str, format: Format) -> Result<OpenAPI, ParseError> {
    match format {
        Format::Json => Ok(serde_json::from_str(content)?),
        Format::Yaml => Ok(serde_yml::from_str(content)?),
    }
}

/// Tries the sniffed format first; if that fails the other one gets a chance,
/// and the first error is the one reported.
fn parse_unknown_content(content: &str) -> Result<OpenAPI, ParseError> {
    let guess = sniff_format(content);
    parse_content(content, guess).or_else(|err| {
        debug!(format = ?guess, %err, "sniffed format failed, retrying as {:?}", guess.other());
        parse_content(content, guess.other()).map_err(|_| err)
    })
}

/// Parses a document from memory, detecting JSON or YAML from its content.
pub fn load_str(content: &str) -> Result<OpenAPI, ParseError> {
    parse_unknown_content(content)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    let path_str = path.display().to_string();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path_str),
        _ => LoadError::Io {
            path: path_str,
            source,
        },
    })
}

pub fn load_file(path: &Path) -> Result<OpenAPI, LoadError> {
    let content = read_file(path)?;
    let format = detect_format(path);
    debug!(path = %path.display(), ?format, "read document");

    let spec = match format {
        Some(f) => parse_content(&content, f),
        None => {
            warn!(path = %path.display(), "unrecognised extension, detecting format from content");
            parse_unknown_content(&content)
        }
    }
    .map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        path = %path.display(),
        title = %spec.info.title,
        version = %spec.info.version,
        "loaded document"
    );
    Ok(spec)
}
