// File: src/config.rs
// Purpose: Form configuration parsing from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::LocationCatalog;
use crate::error::FormError;

/// Form configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSection,

    /// Replaces the built-in country/city table when non-empty
    #[serde(default)]
    pub locations: Vec<LocationEntry>,
}

/// Submit button captions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    /// Caption while the form is valid
    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    /// Caption while any field has an error
    #[serde(default = "default_incomplete_label")]
    pub incomplete_label: String,
}

/// One country and its cities, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub country: String,

    #[serde(default)]
    pub cities: Vec<String>,
}

fn default_submit_label() -> String {
    "Create Account".to_string()
}

fn default_incomplete_label() -> String {
    "Complete All Fields".to_string()
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            submit_label: default_submit_label(),
            incomplete_label: default_incomplete_label(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!("No form config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form config: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse form config: {:?}", path))?;

        tracing::debug!(
            "Loaded form config from {:?} ({} custom locations)",
            path,
            config.locations.len()
        );

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    /// Location catalog described by this config
    pub fn catalog(&self) -> Result<LocationCatalog, FormError> {
        if self.locations.is_empty() {
            return Ok(LocationCatalog::builtin());
        }

        LocationCatalog::from_entries(
            self.locations
                .iter()
                .map(|entry| (entry.country.clone(), entry.cities.clone())),
        )
    }
}
