//! Common message text for outcomes.
//!
//! The constants in [`message`] and [`format`] are plain strings: pass them to
//! [`Outcome::with_message`](crate::Outcome::with_message) like any other
//! template. A [`Catalog`] names every built-in entry and can be extended from
//! a TOML file so applications can keep their own phrases alongside these.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

use crate::helpers::closest_names;

/// Fixed phrases that take no arguments.
pub mod message {
    pub const INVALID_REQUEST: &str = "The requested action is invalid";
    pub const INSUFFICIENT_PERMISSIONS: &str =
        "You do not have sufficient permissions to perform this action";
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
}

/// Templates with a single `{0}` placeholder for the subject.
pub mod format {
    pub const CREATED: &str = "{0} has been created successfully";
    pub const UPDATED: &str = "{0} has been updated successfully";
    pub const DELETED: &str = "{0} has been deleted successfully";
    pub const NOT_FOUND: &str = "{0} not found";
    pub const ALREADY_EXISTS: &str = "{0} already exists";
    pub const VALIDATION_ERROR: &str = "Validation error: {0}";
}

/// Names for the built-in catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CatalogEntry {
    InvalidRequest,
    InsufficientPermissions,
    UnexpectedError,
    Created,
    Updated,
    Deleted,
    NotFound,
    AlreadyExists,
    ValidationError,
}

impl CatalogEntry {
    pub fn template(self) -> &'static str {
        match self {
            Self::InvalidRequest => message::INVALID_REQUEST,
            Self::InsufficientPermissions => message::INSUFFICIENT_PERMISSIONS,
            Self::UnexpectedError => message::UNEXPECTED_ERROR,
            Self::Created => format::CREATED,
            Self::Updated => format::UPDATED,
            Self::Deleted => format::DELETED,
            Self::NotFound => format::NOT_FOUND,
            Self::AlreadyExists => format::ALREADY_EXISTS,
            Self::ValidationError => format::VALIDATION_ERROR,
        }
    }
}

/// On-disk shape of a custom catalog file.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: BTreeMap<String, String>,
}

/// A named entry as listed by [`Catalog::entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedTemplate {
    pub name: String,
    pub template: String,
    pub builtin: bool,
}

/// Built-in entries plus any custom templates.
///
/// Custom templates with the same name as a built-in entry replace it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    custom: BTreeMap<String, String>,
}

impl Catalog {
    /// A catalog holding only the built-in entries.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load custom templates from a TOML file with a `[templates]` table:
    ///
    /// ```toml
    /// [templates]
    /// quota_exceeded = "{0} has used {1} of {2} requests"
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        debug!(
            path = %path.display(),
            templates = catalog.custom.len(),
            "loaded message catalog"
        );
        Ok(catalog)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self {
            custom: file.templates,
        })
    }

    /// Look up a template by name, custom entries first.
    ///
    /// An unknown name is an error that suggests the closest known names.
    pub fn get(&self, name: &str) -> Result<&str> {
        if let Some(template) = self.custom.get(name) {
            return Ok(template.as_str());
        }
        if let Ok(entry) = name.parse::<CatalogEntry>() {
            return Ok(entry.template());
        }

        let names = self.names();
        let candidates: Vec<&str> = names.iter().map(String::as_str).collect();
        let suggestions = closest_names(name, &candidates);
        if suggestions.is_empty() {
            Err(anyhow!("Template not found: {name}"))
        } else {
            Err(anyhow!(
                "Template not found: {name}\nDid you mean: {}",
                suggestions.join(", ")
            ))
        }
    }

    /// Every known name, sorted.
    pub fn names(&self) -> Vec<String> {
        self.entries().into_iter().map(|entry| entry.name).collect()
    }

    /// Every entry, sorted by name, with custom entries replacing built-ins.
    pub fn entries(&self) -> Vec<NamedTemplate> {
        let mut entries: BTreeMap<String, NamedTemplate> = CatalogEntry::iter()
            .map(|entry| {
                let name = entry.as_ref().to_string();
                let template = NamedTemplate {
                    name: name.clone(),
                    template: entry.template().to_string(),
                    builtin: true,
                };
                (name, template)
            })
            .collect();

        for (name, template) in &self.custom {
            entries.insert(
                name.clone(),
                NamedTemplate {
                    name: name.clone(),
                    template: template.clone(),
                    builtin: false,
                },
            );
        }

        entries.into_values().collect()
    }
}
