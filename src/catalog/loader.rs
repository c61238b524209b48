//! Reading catalog and key-code documents from disk or over HTTP.
//!
//! A source string starting with `http://` or `https://` is fetched with
//! `ureq`; anything else is a (tilde-expanded) file path. No retries.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, instrument};

use super::CatalogError;
use crate::shortcuts::{InputApp, KeyCodes};

/// Where a document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Url(source.to_string())
        } else {
            Self::Path(PathBuf::from(shellexpand::tilde(source).as_ref()))
        }
    }

    fn read(&self) -> Result<String, CatalogError> {
        match self {
            Self::Path(path) => fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            }),
            Self::Url(url) => {
                debug!(url = %url, "Fetching document");
                let response = ureq::get(url).call().map_err(|e| CatalogError::Fetch {
                    url: url.clone(),
                    message: e.to_string(),
                })?;
                response
                    .into_body()
                    .read_to_string()
                    .map_err(|e| CatalogError::Fetch {
                        url: url.clone(),
                        message: e.to_string(),
                    })
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// A catalog is published either as a bare array or wrapped in `{ "list": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<InputApp>),
    Wrapped { list: Vec<InputApp> },
}

/// Key codes may be published as strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyCodeValue {
    Text(String),
    Number(u64),
}

#[instrument(skip_all, fields(source = %source))]
pub fn load_records(source: &Source) -> Result<Vec<InputApp>, CatalogError> {
    parse_records(&source.read()?, &source.to_string())
}

#[instrument(skip_all, fields(source = %source))]
pub fn load_key_codes(source: &Source) -> Result<KeyCodes, CatalogError> {
    parse_key_codes(&source.read()?, &source.to_string())
}

/// Parse a catalog document. `origin` only labels errors.
pub fn parse_records(json: &str, origin: &str) -> Result<Vec<InputApp>, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(json).map_err(|source| CatalogError::Json {
            origin: origin.to_string(),
            source,
        })?;
    Ok(match document {
        CatalogDocument::Bare(apps) | CatalogDocument::Wrapped { list: apps } => apps,
    })
}

/// Parse a flat `{ "name": code }` document. Numeric codes become decimal strings.
pub fn parse_key_codes(json: &str, origin: &str) -> Result<KeyCodes, CatalogError> {
    let raw: HashMap<String, KeyCodeValue> =
        serde_json::from_str(json).map_err(|source| CatalogError::Json {
            origin: origin.to_string(),
            source,
        })?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let code = match value {
                KeyCodeValue::Text(text) => text,
                KeyCodeValue::Number(n) => n.to_string(),
            };
            (name, code)
        })
        .collect())
}
