//! One parsed catalog snapshot and its lookups.
//!
//! The catalog is rebuilt wholesale on every refresh; nothing here mutates
//! a loaded snapshot.

mod loader;

use thiserror::Error;
use tracing::warn;

use crate::error::KeyboardShortcutsError;
use crate::shortcuts::{
    parse, parse_app, validate_app, Application, InputApp, KeyCodes, SectionShortcut,
    ValidationError,
};

pub use loader::{load_key_codes, load_records, parse_key_codes, parse_records, Source};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{origin}': {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to fetch '{url}': {message}")]
    Fetch { url: String, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// An app dropped by a lenient load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedApp {
    pub slug: String,
    pub error: ValidationError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    apps: Vec<Application>,
}

impl Catalog {
    /// Validate every record, then parse. Any invalid shortcut rejects the catalog.
    pub fn load(key_codes: &KeyCodes, records: &[InputApp]) -> Result<Self, CatalogError> {
        crate::shortcuts::validate(key_codes, records)?;
        Ok(Self {
            apps: parse(records),
        })
    }

    /// Validate per app; apps with an invalid shortcut are left out entirely.
    pub fn load_lenient(key_codes: &KeyCodes, records: &[InputApp]) -> (Self, Vec<SkippedApp>) {
        let mut apps = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();

        for record in records {
            match validate_app(key_codes, record) {
                Ok(()) => apps.push(parse_app(record)),
                Err(error) => {
                    warn!(app = %record.slug, error = %error, "Skipping app with invalid shortcut");
                    skipped.push(SkippedApp {
                        slug: record.slug.clone(),
                        error,
                    });
                }
            }
        }

        (Self { apps }, skipped)
    }

    pub fn from_applications(apps: Vec<Application>) -> Self {
        Self { apps }
    }

    pub fn apps(&self) -> &[Application] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Application> {
        self.apps.iter().find(|a| a.slug == slug)
    }

    pub fn find_by_bundle_id(&self, bundle_id: &str) -> Option<&Application> {
        self.apps
            .iter()
            .find(|a| a.bundle_id.as_deref() == Some(bundle_id))
    }

    /// Case-insensitive; a leading `www.` on either side is ignored.
    pub fn find_by_hostname(&self, hostname: &str) -> Option<&Application> {
        let wanted = normalize_hostname(hostname);
        self.apps.iter().find(|a| {
            a.hostname
                .as_deref()
                .is_some_and(|h| normalize_hostname(h) == wanted)
        })
    }

    /// Resolve an app by slug and one of its shortcuts by title.
    pub fn shortcut(
        &self,
        slug: &str,
        title: &str,
    ) -> Result<(&Application, &SectionShortcut), KeyboardShortcutsError> {
        let app = self
            .find_by_slug(slug)
            .ok_or_else(|| KeyboardShortcutsError::AppNotFound(slug.to_string()))?;
        let shortcut =
            app.find_shortcut(title)
                .ok_or_else(|| KeyboardShortcutsError::ShortcutNotFound {
                    app: slug.to_string(),
                    title: title.to_string(),
                })?;
        Ok((app, shortcut))
    }
}

fn normalize_hostname(hostname: &str) -> String {
    let lower = hostname.trim().to_ascii_lowercase();
    match lower.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}
